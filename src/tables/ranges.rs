//! Shared lookup primitives over sorted, disjoint scalar-range tables.
//!
//! Every character-class table in this crate is a `&'static [(u32, u32)]`,
//! sorted by `lo` and non-overlapping (a single code point is `(cp, cp)`).
//! `in_table` and `map_lookup` both resolve membership in `O(log n)` via
//! binary search, per the lookup contract in the class-table component.

/// Binary search for `scalar` inside a sorted, disjoint range table.
pub fn in_table(scalar: u32, table: &[(u32, u32)]) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if scalar < lo {
                std::cmp::Ordering::Greater
            } else if scalar > hi {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// A mapping table entry: a single key scalar and its replacement sequence.
/// Unlike the forbid tables, mapping tables (B.1, B.2) key on individual
/// scalars rather than ranges, since replacements vary per entry.
pub type MapEntry = (u32, &'static [u32]);

/// Binary search a sorted `MapEntry` table for `scalar`'s replacement.
pub fn map_lookup(scalar: u32, table: &[MapEntry]) -> Option<&'static [u32]> {
    table
        .binary_search_by_key(&scalar, |&(key, _)| key)
        .ok()
        .map(|idx| table[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_table_finds_single_point_and_range() {
        let table: &[(u32, u32)] = &[(0x0041, 0x0041), (0x0100, 0x0200)];
        assert!(in_table(0x0041, table));
        assert!(in_table(0x0150, table));
        assert!(!in_table(0x0042, table));
        assert!(!in_table(0x0201, table));
    }

    #[test]
    fn map_lookup_finds_multi_scalar_replacement() {
        let table: &[MapEntry] = &[(0x00DF, &[0x0073, 0x0073])];
        assert_eq!(map_lookup(0x00DF, table), Some(&[0x0073, 0x0073][..]));
        assert_eq!(map_lookup(0x0041, table), None);
    }
}

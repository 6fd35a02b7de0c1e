//! RFC 3454 Table C.1.2 — non-ASCII space characters.
//!
//! Used both by `MAP_TO_SPACE` (C3 step 3, replace with U+0020) and by
//! `FORBID_NON_ASCII_SPACES` (C5).

pub const RANGES: &[(u32, u32)] = &[
    (0x00A0, 0x00A0),
    (0x1680, 0x1680),
    (0x2000, 0x200B),
    (0x202F, 0x202F),
    (0x205F, 0x205F),
    (0x3000, 0x3000),
];

pub fn is_member(scalar: u32) -> bool {
    crate::tables::ranges::in_table(scalar, RANGES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_ascii_spaces_are_members() {
        assert!(is_member(0x00A0));
        assert!(is_member(0x3000));
        assert!(is_member(0x2005));
    }

    #[test]
    fn ascii_space_is_not_a_member() {
        assert!(!is_member(0x0020));
    }
}

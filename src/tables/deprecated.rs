//! RFC 3454 Table C.8 — characters that change display properties or are
//! deprecated (combining marks used for Arabic justification, directional
//! formatting characters, and deprecated BiDi controls).

pub const RANGES: &[(u32, u32)] = &[
    (0x0340, 0x0341),
    (0x200E, 0x200F),
    (0x202A, 0x202E),
    (0x206A, 0x206F),
];

pub fn is_member(scalar: u32) -> bool {
    crate::tables::ranges::in_table(scalar, RANGES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directional_formatting_chars_are_members() {
        assert!(is_member(0x200E));
        assert!(is_member(0x202C));
        assert!(is_member(0x206F));
    }

    #[test]
    fn ordinary_scalar_is_not_a_member() {
        assert!(!is_member(0x0041));
    }
}

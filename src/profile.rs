//! The profile bitmask plus named, pre-combined constants for the
//! standard profiles callers reach for most. `ProfileMask` itself is an
//! implementation-opaque bit-disjoint value; the core `encode` function
//! never inspects which named profile produced it.

/// An immutable combination of mapping and prohibition flags.
///
/// Flags combine by bitwise OR via `|`. The bit layout is not part of the
/// crate's public contract and may change between versions; construct
/// values only from the `FLAG_*` constants and the provided named
/// profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileMask(u64);

impl ProfileMask {
    pub const NONE: ProfileMask = ProfileMask(0);

    pub const MAP_TO_NOTHING: ProfileMask = ProfileMask(1 << 0);
    pub const MAP_TO_SPACE: ProfileMask = ProfileMask(1 << 1);
    pub const MAP_SCRAM_LOGIN_CHARS: ProfileMask = ProfileMask(1 << 2);
    pub const NORMALIZE_KC: ProfileMask = ProfileMask(1 << 3);
    pub const FORBID_NON_ASCII_SPACES: ProfileMask = ProfileMask(1 << 4);
    pub const FORBID_ASCII_CONTROL: ProfileMask = ProfileMask(1 << 5);
    pub const FORBID_NON_ASCII_CONTROL: ProfileMask = ProfileMask(1 << 6);
    pub const FORBID_PRIVATE_USE: ProfileMask = ProfileMask(1 << 7);
    pub const FORBID_NON_CHARACTER: ProfileMask = ProfileMask(1 << 8);
    pub const FORBID_SURROGATE: ProfileMask = ProfileMask(1 << 9);
    pub const FORBID_INAPPROPRIATE_FOR_PLAIN_TEXT: ProfileMask = ProfileMask(1 << 10);
    pub const FORBID_INAPPROPRIATE_FOR_CANON_REP: ProfileMask = ProfileMask(1 << 11);
    pub const FORBID_CHANGE_DISPLAY_AND_DEPRECATED: ProfileMask = ProfileMask(1 << 12);
    pub const FORBID_TAGGING: ProfileMask = ProfileMask(1 << 13);
    pub const FORBID_UNASSIGNED: ProfileMask = ProfileMask(1 << 14);

    pub const fn contains(self, flag: ProfileMask) -> bool {
        self.0 & flag.0 == flag.0
    }

    pub const fn bits(self) -> u64 {
        self.0
    }
}

impl std::ops::BitOr for ProfileMask {
    type Output = ProfileMask;

    fn bitor(self, rhs: ProfileMask) -> ProfileMask {
        ProfileMask(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for ProfileMask {
    fn bitor_assign(&mut self, rhs: ProfileMask) {
        self.0 |= rhs.0;
    }
}

/// SASLprep (RFC 4013), as assembled from the flags RFC 4013 requires.
pub const SASLPREP: ProfileMask = ProfileMask(
    ProfileMask::MAP_TO_NOTHING.0
        | ProfileMask::MAP_TO_SPACE.0
        | ProfileMask::NORMALIZE_KC.0
        | ProfileMask::FORBID_ASCII_CONTROL.0
        | ProfileMask::FORBID_NON_ASCII_CONTROL.0
        | ProfileMask::FORBID_PRIVATE_USE.0
        | ProfileMask::FORBID_NON_CHARACTER.0
        | ProfileMask::FORBID_SURROGATE.0
        | ProfileMask::FORBID_INAPPROPRIATE_FOR_PLAIN_TEXT.0
        | ProfileMask::FORBID_INAPPROPRIATE_FOR_CANON_REP.0
        | ProfileMask::FORBID_CHANGE_DISPLAY_AND_DEPRECATED.0
        | ProfileMask::FORBID_TAGGING.0
        | ProfileMask::FORBID_UNASSIGNED.0,
);

/// SCRAM username extension (RFC 5802 §5.1): SASLprep plus login-char escaping.
pub const SCRAM_USERNAME: ProfileMask = ProfileMask(SASLPREP.0 | ProfileMask::MAP_SCRAM_LOGIN_CHARS.0);

/// Trace-prep-style minimal profile: map to nothing only, no prohibitions.
pub const TRACE: ProfileMask = ProfileMask::MAP_TO_NOTHING;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_combine_and_query_independently() {
        let p = ProfileMask::MAP_TO_NOTHING | ProfileMask::FORBID_SURROGATE;
        assert!(p.contains(ProfileMask::MAP_TO_NOTHING));
        assert!(p.contains(ProfileMask::FORBID_SURROGATE));
        assert!(!p.contains(ProfileMask::MAP_TO_SPACE));
    }

    #[test]
    fn saslprep_includes_map_to_space_and_normalize() {
        assert!(SASLPREP.contains(ProfileMask::MAP_TO_SPACE));
        assert!(SASLPREP.contains(ProfileMask::NORMALIZE_KC));
        assert!(!SASLPREP.contains(ProfileMask::MAP_SCRAM_LOGIN_CHARS));
    }

    #[test]
    fn scram_username_adds_login_char_escaping_to_saslprep() {
        assert!(SCRAM_USERNAME.contains(ProfileMask::MAP_SCRAM_LOGIN_CHARS));
        assert!(SCRAM_USERNAME.contains(ProfileMask::FORBID_UNASSIGNED));
    }
}

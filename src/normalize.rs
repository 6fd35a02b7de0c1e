//! Unicode Normalization Form KC.
//!
//! Delegates to `unicode-normalization`'s `nfkc()` iterator rather than
//! reimplementing decomposition and canonical ordering; only scalars that
//! survive as valid `char`s round-trip through it, matching the profile's
//! assumption that prohibition (C5) has not yet rejected anything that
//! would choke normalization.

use unicode_normalization::UnicodeNormalization;

use crate::profile::ProfileMask;

/// Apply NFKC to `scalars` when `NORMALIZE_KC` is set in `profile`;
/// otherwise return the input unchanged.
pub fn apply(scalars: &[u32], profile: ProfileMask) -> Vec<u32> {
    if !profile.contains(ProfileMask::NORMALIZE_KC) {
        return scalars.to_vec();
    }
    let text: String = scalars
        .iter()
        .filter_map(|&scalar| char::from_u32(scalar))
        .collect();
    let normalized: Vec<u32> = text.nfkc().map(|c| c as u32).collect();
    log::debug!(
        "normalized {} scalars to {} scalars under NFKC",
        scalars.len(),
        normalized.len()
    );
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cps(s: &str) -> Vec<u32> {
        s.chars().map(|c| c as u32).collect()
    }

    #[test]
    fn disabled_profile_is_a_no_op() {
        let input = cps("e\u{0301}");
        assert_eq!(apply(&input, ProfileMask::NONE), input);
    }

    #[test]
    fn composes_combining_accent() {
        let input = cps("e\u{0301}");
        let out = apply(&input, ProfileMask::NORMALIZE_KC);
        assert_eq!(out, cps("\u{00E9}"));
    }

    #[test]
    fn compatibility_decomposes_then_recomposes_ligature() {
        let input = cps("\u{FB01}");
        let out = apply(&input, ProfileMask::NORMALIZE_KC);
        assert_eq!(out, cps("fi"));
    }

    #[test]
    fn already_normalized_ascii_is_unchanged() {
        let input = cps("hello");
        assert_eq!(apply(&input, ProfileMask::NORMALIZE_KC), input);
    }
}

//! The per-scalar mapping stage.
//!
//! Applied in a fixed five-step order per scalar; steps 2-4 are
//! mutually exclusive per scalar given the tables' construction, and step
//! 1 (when it fires) subsumes step 5.

use crate::profile::ProfileMask;
use crate::tables::{b1, b2, spaces};

const COMMA: u32 = 0x002C;
const EQUALS: u32 = 0x003D;

/// Apply the mapping stage to a decoded scalar sequence, producing the
/// sequence that normalization (C4) will subsequently see.
pub fn apply(scalars: &[u32], profile: ProfileMask) -> Vec<u32> {
    let mut out = Vec::with_capacity(scalars.len());
    for &scalar in scalars {
        map_one(scalar, profile, &mut out);
    }
    out
}

fn map_one(scalar: u32, profile: ProfileMask, out: &mut Vec<u32>) {
    if profile.contains(ProfileMask::NORMALIZE_KC) {
        if let Some(replacement) = b2::lookup(scalar) {
            out.extend_from_slice(replacement);
            return;
        }
    }
    if profile.contains(ProfileMask::MAP_TO_NOTHING) && b1::is_member(scalar) {
        return;
    }
    if profile.contains(ProfileMask::MAP_TO_SPACE) && spaces::is_member(scalar) {
        out.push(0x0020);
        return;
    }
    if profile.contains(ProfileMask::MAP_SCRAM_LOGIN_CHARS) {
        match scalar {
            COMMA => {
                out.extend_from_slice(&[0x003D, 0x0032, 0x0043]);
                return;
            }
            EQUALS => {
                out.extend_from_slice(&[0x003D, 0x0033, 0x0044]);
                return;
            }
            _ => {}
        }
    }
    out.push(scalar);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cps(s: &str) -> Vec<u32> {
        s.chars().map(|c| c as u32).collect()
    }

    #[test]
    fn map_to_nothing_deletes_b1_members() {
        let input = cps("a\u{00AD}\u{200B}\u{FE0F}a");
        let out = apply(&input, ProfileMask::MAP_TO_NOTHING);
        assert_eq!(out, cps("aa"));
    }

    #[test]
    fn map_to_space_replaces_c1_2_members() {
        let input = cps("a\u{00A0}\u{3000}a");
        let out = apply(&input, ProfileMask::MAP_TO_SPACE);
        assert_eq!(out, cps("a  a"));
    }

    #[test]
    fn scram_escapes_comma_and_equals() {
        let input = cps("a,b=c");
        let out = apply(&input, ProfileMask::MAP_SCRAM_LOGIN_CHARS);
        assert_eq!(out, cps("a=2Cb=3Dc"));
    }

    #[test]
    fn empty_profile_passes_through_unchanged() {
        let input = cps("a\u{00A0}b");
        let out = apply(&input, ProfileMask::NONE);
        assert_eq!(out, input);
    }

    #[test]
    fn normalize_kc_applies_b2_fold_before_other_steps() {
        let input = cps("A");
        let out = apply(&input, ProfileMask::NORMALIZE_KC);
        assert_eq!(out, cps("a"));
    }
}

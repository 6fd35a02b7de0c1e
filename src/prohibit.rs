//! The prohibition checker.
//!
//! Scans the normalized scalar sequence once, checking each enabled
//! `FORBID_*` table in a fixed order and aborting at the first match.
//! `FORBID_UNASSIGNED` is checked against A.1's complement rather than a
//! membership table directly, since A.1 is expressed as `is_unassigned`.

use crate::error::{ProhibitedClass, StringPrepError};
use crate::profile::ProfileMask;
use crate::tables::{
    canonrep, control, deprecated, noncharacter, plaintext, private_use, spaces, surrogate,
    tagging, unassigned,
};

/// Check every scalar in `scalars` against the forbid flags set in `profile`.
///
/// Returns the index (within `scalars`) and class of the first prohibited
/// scalar found, as a [`StringPrepError::ProhibitedCharacter`].
pub fn check(scalars: &[u32], profile: ProfileMask) -> Result<(), StringPrepError> {
    for (position, &scalar) in scalars.iter().enumerate() {
        if let Some(class) = classify(scalar, profile) {
            log::warn!("scalar U+{scalar:04X} at position {position} is prohibited: {class}");
            return Err(StringPrepError::ProhibitedCharacter {
                scalar,
                position,
                class,
            });
        }
    }
    Ok(())
}

fn classify(scalar: u32, profile: ProfileMask) -> Option<ProhibitedClass> {
    if profile.contains(ProfileMask::FORBID_NON_ASCII_SPACES) && spaces::is_member(scalar) {
        return Some(ProhibitedClass::NonAsciiSpace);
    }
    if profile.contains(ProfileMask::FORBID_ASCII_CONTROL) && control::ascii::is_member(scalar) {
        return Some(ProhibitedClass::AsciiControl);
    }
    if profile.contains(ProfileMask::FORBID_NON_ASCII_CONTROL) && control::non_ascii::is_member(scalar)
    {
        return Some(ProhibitedClass::NonAsciiControl);
    }
    if profile.contains(ProfileMask::FORBID_PRIVATE_USE) && private_use::is_member(scalar) {
        return Some(ProhibitedClass::PrivateUse);
    }
    if profile.contains(ProfileMask::FORBID_NON_CHARACTER) && noncharacter::is_member(scalar) {
        return Some(ProhibitedClass::NonCharacter);
    }
    if profile.contains(ProfileMask::FORBID_SURROGATE) && surrogate::is_member(scalar) {
        return Some(ProhibitedClass::Surrogate);
    }
    if profile.contains(ProfileMask::FORBID_INAPPROPRIATE_FOR_PLAIN_TEXT)
        && plaintext::is_member(scalar)
    {
        return Some(ProhibitedClass::InappropriateForPlainText);
    }
    if profile.contains(ProfileMask::FORBID_INAPPROPRIATE_FOR_CANON_REP)
        && canonrep::is_member(scalar)
    {
        return Some(ProhibitedClass::InappropriateForCanonicalRepresentation);
    }
    if profile.contains(ProfileMask::FORBID_CHANGE_DISPLAY_AND_DEPRECATED)
        && deprecated::is_member(scalar)
    {
        return Some(ProhibitedClass::ChangeDisplayOrDeprecated);
    }
    if profile.contains(ProfileMask::FORBID_TAGGING) && tagging::is_member(scalar) {
        return Some(ProhibitedClass::Tagging);
    }
    if profile.contains(ProfileMask::FORBID_UNASSIGNED) && unassigned::is_unassigned(scalar) {
        return Some(ProhibitedClass::Unassigned);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_ascii_passes_every_flag() {
        let scalars: Vec<u32> = "hello".chars().map(|c| c as u32).collect();
        assert!(check(&scalars, crate::profile::SASLPREP).is_ok());
    }

    #[test]
    fn ascii_control_is_rejected_when_flagged() {
        let err = check(&[0x07], ProfileMask::FORBID_ASCII_CONTROL).unwrap_err();
        assert_eq!(
            err,
            StringPrepError::ProhibitedCharacter {
                scalar: 0x07,
                position: 0,
                class: ProhibitedClass::AsciiControl,
            }
        );
    }

    #[test]
    fn ascii_control_passes_when_flag_not_set() {
        assert!(check(&[0x07], ProfileMask::NONE).is_ok());
    }

    #[test]
    fn surrogate_is_rejected_when_flagged() {
        let err = check(&[0xD800], ProfileMask::FORBID_SURROGATE).unwrap_err();
        assert_eq!(
            err,
            StringPrepError::ProhibitedCharacter {
                scalar: 0xD800,
                position: 0,
                class: ProhibitedClass::Surrogate,
            }
        );
    }

    #[test]
    fn first_violation_wins_position() {
        let err = check(&[0x61, 0x07, 0x08], ProfileMask::FORBID_ASCII_CONTROL).unwrap_err();
        assert_eq!(
            err,
            StringPrepError::ProhibitedCharacter {
                scalar: 0x07,
                position: 1,
                class: ProhibitedClass::AsciiControl,
            }
        );
    }

    #[test]
    fn unassigned_scalar_is_rejected_when_flagged() {
        let err = check(&[0x1D300], ProfileMask::FORBID_UNASSIGNED).unwrap_err();
        assert_eq!(
            err,
            StringPrepError::ProhibitedCharacter {
                scalar: 0x1D300,
                position: 0,
                class: ProhibitedClass::Unassigned,
            }
        );
    }
}

//! The bidirectional text checker (RFC 3454 §6, rules R2 and R3).
//!
//! A forward scan classifies each scalar as RandALCat (D.1), LCat (D.2),
//! or neither. R2 depends on whether LCat and RandALCat both occur
//! anywhere in the sequence, irrespective of order, so that check can
//! only be finalized once the whole sequence has been seen.

use crate::error::{BidiViolationReason, StringPrepError};
use crate::tables::bidi_class::{d1, d2};

/// Check `scalars` against RFC 3454 §6: if any scalar is RandALCat, no
/// scalar may be LCat, and the first and last scalars must both be
/// RandALCat.
pub fn check(scalars: &[u32]) -> Result<(), StringPrepError> {
    let mut has_randal = false;
    let mut has_l = false;
    let mut first_is_randal = false;
    let mut last_is_randal = false;

    for (index, &scalar) in scalars.iter().enumerate() {
        if d1::is_member(scalar) {
            has_randal = true;
            if index == 0 {
                first_is_randal = true;
            }
            if index == scalars.len() - 1 {
                last_is_randal = true;
            }
        } else if d2::is_member(scalar) {
            has_l = true;
        }
    }

    if has_randal && has_l {
        log::warn!("bidi violation: sequence mixes RandALCat and LCat scalars");
        return Err(StringPrepError::BidiViolation {
            reason: BidiViolationReason::RandAlCatWithLCat,
        });
    }

    if has_randal && (!first_is_randal || !last_is_randal) {
        log::warn!("bidi violation: RandALCat sequence is not bounded by RandALCat at both ends");
        return Err(StringPrepError::BidiViolation {
            reason: BidiViolationReason::RandAlCatNotAtBothEnds,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_lcat_sequence_passes() {
        let scalars: Vec<u32> = "hello".chars().map(|c| c as u32).collect();
        assert!(check(&scalars).is_ok());
    }

    #[test]
    fn pure_randalcat_sequence_passes() {
        // Hebrew "shalom"-ish sequence, all RandALCat scalars.
        let scalars = vec![0x05E9, 0x05DC, 0x05D5, 0x05DD];
        assert!(check(&scalars).is_ok());
    }

    #[test]
    fn mixed_randalcat_and_lcat_fails_r2() {
        let scalars = vec![0x05D0, 0x0061, 0x05D1];
        let err = check(&scalars).unwrap_err();
        assert_eq!(
            err,
            StringPrepError::BidiViolation {
                reason: BidiViolationReason::RandAlCatWithLCat,
            }
        );
    }

    #[test]
    fn randalcat_not_at_start_fails_r3() {
        let scalars = vec![0x0031, 0x05D0];
        let err = check(&scalars).unwrap_err();
        assert_eq!(
            err,
            StringPrepError::BidiViolation {
                reason: BidiViolationReason::RandAlCatNotAtBothEnds,
            }
        );
    }

    #[test]
    fn randalcat_not_at_end_fails_r3() {
        let scalars = vec![0x05D0, 0x0031];
        let err = check(&scalars).unwrap_err();
        assert_eq!(
            err,
            StringPrepError::BidiViolation {
                reason: BidiViolationReason::RandAlCatNotAtBothEnds,
            }
        );
    }

    #[test]
    fn single_randalcat_scalar_is_both_ends() {
        assert!(check(&[0x05D0]).is_ok());
    }

    #[test]
    fn empty_sequence_passes() {
        assert!(check(&[]).is_ok());
    }
}

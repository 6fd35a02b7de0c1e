//! The codec's single fatal error taxonomy.
//!
//! Every variant is terminal: there is no retry path, and callers must
//! discard any bytes already appended to the output sink.

use thiserror::Error;

/// A fatal failure raised by [`crate::encode`].
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum StringPrepError {
    /// A high surrogate was not followed by a matching low surrogate, or a
    /// low surrogate appeared with no preceding high surrogate (C1).
    #[error("invalid surrogate pair at code unit {position}: U+{scalar:04X}")]
    InvalidSurrogatePair { scalar: u32, position: usize },

    /// A scalar in the mapped-and-normalized sequence matched an enabled
    /// forbid-flag's table (C5).
    #[error("prohibited character U+{scalar:04X} at position {position} ({class})")]
    ProhibitedCharacter {
        scalar: u32,
        position: usize,
        class: ProhibitedClass,
    },

    /// The post-normalization sequence violated RFC 3454 §6 R2 or R3 (C6).
    #[error("bidirectional text violation: {reason}")]
    BidiViolation { reason: BidiViolationReason },
}

/// Which forbid table a [`StringPrepError::ProhibitedCharacter`] matched.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ProhibitedClass {
    NonAsciiSpace,
    AsciiControl,
    NonAsciiControl,
    PrivateUse,
    NonCharacter,
    Surrogate,
    InappropriateForPlainText,
    InappropriateForCanonicalRepresentation,
    ChangeDisplayOrDeprecated,
    Tagging,
    Unassigned,
}

impl std::fmt::Display for ProhibitedClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProhibitedClass::NonAsciiSpace => "C.1.2 non-ASCII space",
            ProhibitedClass::AsciiControl => "C.2.1 ASCII control",
            ProhibitedClass::NonAsciiControl => "C.2.2 non-ASCII control",
            ProhibitedClass::PrivateUse => "C.3 private use",
            ProhibitedClass::NonCharacter => "C.4 non-character",
            ProhibitedClass::Surrogate => "C.5 surrogate",
            ProhibitedClass::InappropriateForPlainText => "C.6 inappropriate for plain text",
            ProhibitedClass::InappropriateForCanonicalRepresentation => {
                "C.7 inappropriate for canonical representation"
            }
            ProhibitedClass::ChangeDisplayOrDeprecated => {
                "C.8 changes display properties or deprecated"
            }
            ProhibitedClass::Tagging => "C.9 tagging character",
            ProhibitedClass::Unassigned => "A.1 unassigned",
        };
        f.write_str(name)
    }
}

/// Which RFC 3454 §6 rule a [`StringPrepError::BidiViolation`] broke.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BidiViolationReason {
    /// R2: a RandALCat-bearing sequence also contained an LCat character.
    RandAlCatWithLCat,
    /// R3: a RandALCat-bearing sequence did not start and end with RandALCat.
    RandAlCatNotAtBothEnds,
}

impl std::fmt::Display for BidiViolationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            BidiViolationReason::RandAlCatWithLCat => {
                "RandALCat sequence contains an LCat character"
            }
            BidiViolationReason::RandAlCatNotAtBothEnds => {
                "RandALCat sequence must start and end with a RandALCat character"
            }
        };
        f.write_str(msg)
    }
}

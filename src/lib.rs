//! An RFC 3454 StringPrep codec, with the SASLprep (RFC 4013) and SCRAM
//! username (RFC 5802 §5.1) profiles assembled from its mapping and
//! prohibition flags.
//!
//! The pipeline is fixed: decode UTF-16 input into scalar values (C1),
//! apply the per-scalar mapping stage (C3), normalize to NFKC (C4), check
//! prohibitions and bidirectional constraints (C5/C6), and emit UTF-8 to
//! the caller's sink (C7/C8). [`encode`] drives all six stages; the
//! individual stage modules are public so callers can run a subset (for
//! example, mapping without prohibition) when a profile calls for it.

pub mod bidi;
pub mod decode;
pub mod emit;
pub mod error;
pub mod mapping;
pub mod normalize;
pub mod profile;
pub mod prohibit;
pub mod sink;
pub mod tables;

pub use error::StringPrepError;
pub use profile::ProfileMask;
pub use sink::{ByteSink, VecSink};

/// Run the full StringPrep pipeline over `input`, writing the resulting
/// UTF-8 bytes to `output`.
///
/// `profile` selects which mapping and prohibition steps run; see
/// [`profile::SASLPREP`] and [`profile::SCRAM_USERNAME`] for the standard
/// combinations. On any prohibition or bidirectional violation, `output`
/// may already contain partial bytes from earlier scalars and must be
/// discarded by the caller.
pub fn encode<S: ByteSink + ?Sized>(
    input: &[u16],
    output: &mut S,
    profile: ProfileMask,
) -> Result<(), StringPrepError> {
    let decoded = decode::decode_utf16(input)?;
    let mapped = mapping::apply(&decoded, profile);
    let normalized = normalize::apply(&mapped, profile);
    prohibit::check(&normalized, profile)?;
    bidi::check(&normalized)?;
    emit::emit_all(&normalized, output);
    log::trace!(
        "encoded {} code units to {} scalars under profile {:#x}",
        input.len(),
        normalized.len(),
        profile.bits()
    );
    Ok(())
}

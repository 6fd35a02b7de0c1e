//! The UTF-8 emitter.
//!
//! Encodes a final scalar to the sink using the shortest UTF-8 form.
//! Deliberately does not validate the surrogate range — that's the
//! prohibition checker's job (C5) when `FORBID_SURROGATE` is set, and
//! tests rely on this raw path to construct lone-surrogate fixtures via
//! [`crate::sink::ByteSink::append_utf8_raw`].

use crate::sink::ByteSink;

pub fn write_utf8_raw<S: ByteSink + ?Sized>(scalar: u32, sink: &mut S) {
    match scalar {
        0..=0x7F => sink.append_byte(scalar as u8),
        0x80..=0x7FF => {
            sink.append_byte(0xC0 | (scalar >> 6) as u8);
            sink.append_byte(0x80 | (scalar & 0x3F) as u8);
        }
        0x800..=0xFFFF => {
            sink.append_byte(0xE0 | (scalar >> 12) as u8);
            sink.append_byte(0x80 | ((scalar >> 6) & 0x3F) as u8);
            sink.append_byte(0x80 | (scalar & 0x3F) as u8);
        }
        _ => {
            sink.append_byte(0xF0 | (scalar >> 18) as u8);
            sink.append_byte(0x80 | ((scalar >> 12) & 0x3F) as u8);
            sink.append_byte(0x80 | ((scalar >> 6) & 0x3F) as u8);
            sink.append_byte(0x80 | (scalar & 0x3F) as u8);
        }
    }
}

/// Encode every scalar in `scalars` to `sink` in order.
pub fn emit_all<S: ByteSink + ?Sized>(scalars: &[u32], sink: &mut S) {
    for &scalar in scalars {
        write_utf8_raw(scalar, sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::VecSink;

    #[test]
    fn single_byte_range() {
        let mut sink = VecSink::new();
        write_utf8_raw(0x61, &mut sink);
        assert_eq!(sink.to_array(), vec![0x61]);
    }

    #[test]
    fn two_byte_cyrillic() {
        let mut sink = VecSink::new();
        write_utf8_raw(0x0438, &mut sink);
        assert_eq!(sink.to_array(), vec![0xD0, 0xB8]);
    }

    #[test]
    fn three_byte_cjk() {
        let mut sink = VecSink::new();
        write_utf8_raw(0x4F60, &mut sink);
        assert_eq!(sink.to_array(), vec![0xE4, 0xBD, 0xA0]);
    }

    #[test]
    fn four_byte_supplementary() {
        let mut sink = VecSink::new();
        write_utf8_raw(0x1F0A1, &mut sink);
        assert_eq!(sink.to_array(), vec![0xF0, 0x9F, 0x82, 0xA1]);
    }

    #[test]
    fn raw_surrogate_matches_three_byte_template() {
        let mut sink = VecSink::new();
        write_utf8_raw(0xD800, &mut sink);
        assert_eq!(sink.to_array(), vec![0xED, 0xA0, 0x80]);
    }
}

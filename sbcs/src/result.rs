//! The decode-step contract shared across the decoder family.
//!
//! Every decoder in this family is driven the same way: the caller reads one
//! unit from a byte stream (a byte, or the end-of-stream sentinel) and hands
//! it to the decoder, which answers with one of the `DecodeResult` tags
//! below. The tag set is wider than any one decoder needs -- a single-byte
//! decoder never answers `Pending` or `CodePoints`, but multi-byte members
//! of the family do, and drivers are written against the whole contract.
//!
//! Unmappable input does not travel through `DecodeResult` at all. It goes
//! through `decoder_error`, which turns it into either a hard `DecodeError`
//! (fatal mode) or an ordinary `CodePoint` carrying U+FFFD (replacement
//! mode). `Finished` is a normal result value, never an error: running off
//! the end of the input is how every successful decode concludes.

use std::error;
use std::fmt;

/// The code point substituted for unmappable input when a decoder is not in
/// fatal mode.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';
const_assert_eq!(assert_replacement; REPLACEMENT_CHARACTER as u32, 0xFFFD);

/// A short run of code points produced by a single decode step.
///
/// The widest emission anywhere in the decoder family is two code points
/// for one input unit, so the buffer is fixed at two and `count` says how
/// many are live. Single code points ride `DecodeResult::CodePoint`
/// directly and never allocate a chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedChunk {
    pub code_points: [char; 2],
    pub count: usize,
}

impl DecodedChunk {
    pub fn new_pair(first: char, second: char) -> Self {
        Self {
            code_points: [first, second],
            count: 2,
        }
    }

    pub fn as_slice(self: &Self) -> &[char] {
        &self.code_points[0..self.count]
    }
}

/// What one decode step produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeResult {
    /// One decoded code point.
    CodePoint(char),

    /// Two code points for a single input unit. Never produced by the
    /// single-byte decoder; kept so drivers cover the whole family.
    CodePoints(DecodedChunk),

    /// Input was consumed but no code point is complete yet; feed the next
    /// byte. Never produced by the single-byte decoder.
    Pending,

    /// The end-of-stream sentinel was consumed. Terminal: the caller must
    /// stop invoking the decoder once it sees this.
    Finished,
}

/// The one failure this decoder family can report for single-byte input: a
/// byte in [0x80, 0xFF] whose index-table entry is unmapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    UnmappedByte(u8),
}

impl fmt::Display for DecodeError {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DecodeError::UnmappedByte(byte) => {
                write!(f, "byte 0x{:02X} has no mapping in the index table", byte)
            }
        }
    }
}

impl error::Error for DecodeError {}

/// The shared error policy, parameterized by the decoder's fatal flag.
///
/// In fatal mode the unmappable byte is a hard failure that the caller must
/// propagate; in replacement mode it resolves to U+FFFD and decoding
/// continues as if the byte had been mapped.
pub fn decoder_error(fatal: bool, byte: u8) -> Result<DecodeResult, DecodeError> {
    if fatal {
        trace!("decoder_error: fatal mode, raising for byte 0x{:x}", byte);
        Err(DecodeError::UnmappedByte(byte))
    } else {
        trace!("decoder_error: substituting U+FFFD for byte 0x{:x}", byte);
        Ok(DecodeResult::CodePoint(REPLACEMENT_CHARACTER))
    }
}

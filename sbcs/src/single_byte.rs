//! The decode step for single-byte encodings
//! ==========================================
//!
//! A single-byte encoding is as simple as character coding gets: one byte
//! in, one code point out, decided by at most one table lookup. The byte
//! space splits at 0x80.
//!
//!  1. Bytes in [0x00, 0x7F] are ASCII and decode to themselves. Every
//!     encoding in this family is ASCII-compatible by construction, so this
//!     path does no transformation at all and never consults the table.
//!
//!  2. Bytes in [0x80, 0xFF] are positions in the 128-entry index table:
//!     byte minus 0x80 gives a pointer in [0, 127], and the entry there is
//!     either the decoded code point or an unmapped hole. Holes are the
//!     only way a single-byte decode can fail, and what a hole means is
//!     decided by the shared error policy: a hard error in fatal mode, a
//!     U+FFFD substitution otherwise.
//!
//! The end-of-stream sentinel is checked before either range, because it is
//! not a byte and must never be treated as one; it decodes to `Finished`,
//! after which the caller stops calling.
//!
//! There is no state machine here. The decoder carries two values fixed at
//! construction -- which table, and whether holes are fatal -- and every
//! call is independent given those, so one decoder instance can serve any
//! number of threads as long as each brings its own stream.

use crate::index::{Index, INDEX_LEN};
use crate::result::{decoder_error, DecodeError, DecodeResult};
use crate::stream::ByteOrEof;

/// First byte value that is not ASCII: bytes below this limit decode to
/// themselves, bytes at or above it go through the index table.
pub const ASCII_LIMIT: u8 = 0x80;
const_assert_eq!(assert_ascii_top; ASCII_LIMIT - 1, 0x7F);
const_assert_eq!(assert_top_pointer; (0xFF - ASCII_LIMIT) as usize, INDEX_LEN - 1);

pub fn is_ascii_byte(byte: u8) -> bool {
    byte < ASCII_LIMIT
}

/// The decode step for one single-byte encoding, configured with an index
/// table and an error disposition. Holds no other state.
pub struct SingleByteDecoder<'a> {
    index: &'a Index,
    fatal: bool,
}

impl<'a> SingleByteDecoder<'a> {
    pub fn new(index: &'a Index, fatal: bool) -> SingleByteDecoder<'a> {
        SingleByteDecoder {
            index: index,
            fatal: fatal,
        }
    }

    /// Decode one unit read from the stream.
    pub fn handler(self: &Self, unit: ByteOrEof) -> Result<DecodeResult, DecodeError> {
        let byte = match unit {
            ByteOrEof::EndOfStream => {
                trace!("SingleByteDecoder: end of stream");
                return Ok(DecodeResult::Finished);
            }
            ByteOrEof::Byte(byte) => byte,
        };

        if is_ascii_byte(byte) {
            trace!("SingleByteDecoder: ASCII byte 0x{:x} is its own code point", byte);
            return Ok(DecodeResult::CodePoint(char::from(byte)));
        }

        let pointer = byte - ASCII_LIMIT;
        match self.index.code_point(pointer) {
            Some(code_point) => {
                trace!(
                    "SingleByteDecoder: byte 0x{:x} decodes to U+{:04X} \
                     at pointer {}",
                    byte,
                    code_point as u32,
                    pointer
                );
                Ok(DecodeResult::CodePoint(code_point))
            }
            None => {
                trace!(
                    "SingleByteDecoder: byte 0x{:x} has no entry at pointer {}",
                    byte,
                    pointer
                );
                decoder_error(self.fatal, byte)
            }
        }
    }
}

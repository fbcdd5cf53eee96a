//! Decoding legacy single-byte character sets
//! ==========================================
//!
//! Before Unicode settled the question, most text on disk and on the wire
//! was written in one of a family of single-byte character sets: ASCII in
//! the low half of the byte, one of many regional repertoires in the high
//! half. Latin-1, the windows-125x family, the ISO-8859 series and friends
//! all share this shape, and differ only in which characters they pack
//! into the 128 positions above 0x80.
//!
//! This crate decodes that family. It is organized around one shared
//! decode step and a table per character set:
//!
//!  - `index` holds the 128-entry table type that defines a character
//!    set's high half.
//!  - `single_byte` holds the decode step: end-of-stream handling, the
//!    ASCII fast path, the table lookup, and nothing else.
//!  - `result` holds the outcome and error types, and the shared policy
//!    for unmapped bytes: a hard error in fatal mode, U+FFFD otherwise.
//!  - `stream` holds the byte cursor the drivers read from.
//!  - `iter` holds the drivers: char iterators over byte slices, and a
//!    one-call decode to `String`.
//!
//! Index tables for concrete character sets live in the companion
//! `sbcs_tables` crate; this crate defines the machinery and stays
//! agnostic about repertoires.
//!
//! ```
//! use sbcs::{DecodeSingleByte, Index, INDEX_LEN};
//!
//! // A toy character set: every high byte maps to '?' except 0x80,
//! // which maps to the euro sign.
//! let mut entries = [Some('?'); INDEX_LEN];
//! entries[0] = Some('\u{20AC}');
//! let table = Index::new(entries);
//!
//! let decoded: String = b"price: \x80 5".decode_single_byte(&table).collect();
//! assert_eq!(decoded, "price: \u{20AC} 5");
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate static_assertions;

pub mod index;
pub mod iter;
pub mod result;
pub mod single_byte;
pub mod stream;

pub use crate::index::{Index, INDEX_LEN};
pub use crate::iter::{decode_to_string, DecodeIter, DecodeResultIter, DecodeSingleByte};
pub use crate::result::{
    decoder_error, DecodeError, DecodeResult, DecodedChunk, REPLACEMENT_CHARACTER,
};
pub use crate::single_byte::{is_ascii_byte, SingleByteDecoder, ASCII_LIMIT};
pub use crate::stream::{ByteOrEof, ByteStream};

#[cfg(test)]
mod tests;

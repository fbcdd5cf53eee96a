//! Index tables for concrete single-byte character sets
//! ====================================================
//!
//! The decoding machinery in the `sbcs` crate is parameterized by a
//! 128-entry index table; this crate is the box of tables. Each table
//! module holds one character set's high half, written out against the
//! published mapping for that set, and this module ties them together
//! with a small registry keyed by the labels the sets travel under in
//! the wild.
//!
//! ```
//! use sbcs_tables::for_label;
//!
//! let enc = for_label("Latin-1").unwrap();
//! assert_eq!(enc.name, "iso-8859-1");
//! assert_eq!(enc.decode(b"na\xefve", false), Ok(String::from("naïve")));
//! ```

#[macro_use]
extern crate log;

pub mod iso_8859_2;
pub mod iso_8859_5;
pub mod iso_8859_7;
pub mod latin_1;
pub mod windows_1252;
pub mod x_user_defined;

pub use crate::iso_8859_2::ISO_8859_2;
pub use crate::iso_8859_5::ISO_8859_5;
pub use crate::iso_8859_7::ISO_8859_7;
pub use crate::latin_1::LATIN_1;
pub use crate::windows_1252::WINDOWS_1252;
pub use crate::x_user_defined::X_USER_DEFINED;

use sbcs::{decode_to_string, DecodeError, Index};

/// One catalogued character set: a canonical name, the labels that
/// select it, and the index table behind them.
#[derive(Debug)]
pub struct Encoding {
    pub name: &'static str,
    pub labels: &'static [&'static str],
    pub index: &'static Index,
}

impl Encoding {
    /// Decode `bytes` under this character set, failing on the first
    /// unmapped byte when `fatal` is set and substituting U+FFFD for
    /// unmapped bytes otherwise.
    pub fn decode(self: &Self, bytes: &[u8], fatal: bool) -> Result<String, DecodeError> {
        decode_to_string(bytes, self.index, fatal)
    }
}

/// Every character set in the crate. Label lookup scans this list in
/// order, so earlier entries win if a label were ever ambiguous.
pub static ALL_ENCODINGS: [Encoding; 6] = [
    Encoding {
        name: "iso-8859-1",
        labels: &["iso-8859-1", "latin1", "l1", "cp819"],
        index: &LATIN_1,
    },
    Encoding {
        name: "windows-1252",
        labels: &["windows-1252", "cp1252", "x-cp1252"],
        index: &WINDOWS_1252,
    },
    Encoding {
        name: "iso-8859-2",
        labels: &["iso-8859-2", "latin2", "l2"],
        index: &ISO_8859_2,
    },
    Encoding {
        name: "iso-8859-5",
        labels: &["iso-8859-5", "cyrillic"],
        index: &ISO_8859_5,
    },
    Encoding {
        name: "iso-8859-7",
        labels: &["iso-8859-7", "greek", "greek8", "elot-928"],
        index: &ISO_8859_7,
    },
    Encoding {
        name: "x-user-defined",
        labels: &["x-user-defined"],
        index: &X_USER_DEFINED,
    },
];

pub fn all() -> &'static [Encoding] {
    &ALL_ENCODINGS
}

/// Find the character set a label names. Labels are matched the way
/// they appear in the wild: case-insensitively, ignoring spaces, hyphens
/// and underscores, so "Latin-1", "latin_1" and "LATIN1" all land on the
/// same table.
pub fn for_label(label: &str) -> Option<&'static Encoding> {
    fn squash(label: &str) -> String {
        label
            .trim()
            .to_ascii_lowercase()
            .replace(&[' ', '-', '_'][..], "")
    }
    let wanted = squash(label);
    for encoding in &ALL_ENCODINGS {
        for candidate in encoding.labels {
            if squash(candidate) == wanted {
                trace!("for_label: {:?} is {}", label, encoding.name);
                return Some(encoding);
            }
        }
    }
    trace!("for_label: {:?} names no known character set", label);
    None
}

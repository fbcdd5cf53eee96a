//! The index table: the configuration data that distinguishes one
//! single-byte encoding from another.
//!
//! A table is exactly 128 entries, one per byte in [0x80, 0xFF], addressed
//! positionally by `byte - 0x80`. An entry is either the Unicode scalar
//! value that byte decodes to, or `None` for bytes the encoding leaves
//! unmapped. The decode algorithm is the same for every encoding; only this
//! data differs, so one table instance is built per encoding and shared
//! read-only across any number of decoders and threads.

/// Number of entries in an index table: one per byte in [0x80, 0xFF].
pub const INDEX_LEN: usize = 128;
const_assert_eq!(assert_index_span; INDEX_LEN, 0xFF_usize - 0x80 + 1);

/// One encoding's mapping from high bytes to code points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Index {
    entries: [Option<char>; INDEX_LEN],
}

impl Index {
    pub const fn new(entries: [Option<char>; INDEX_LEN]) -> Index {
        Index { entries: entries }
    }

    /// Positional lookup. `pointer` is the `byte - 0x80` offset, already
    /// reduced to [0, 127] by the caller's range check.
    pub fn code_point(self: &Self, pointer: u8) -> Option<char> {
        assert!((pointer as usize) < INDEX_LEN, "pointer out of table range");
        self.entries[pointer as usize]
    }

    /// The raw entries, in pointer order.
    pub fn entries(self: &Self) -> &[Option<char>; INDEX_LEN] {
        &self.entries
    }
}

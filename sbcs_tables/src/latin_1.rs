//! ISO 8859-1, also known as Latin-1: the character set whose 256 byte
//! values are the bottom 256 code points of Unicode, verbatim. Unicode
//! was laid out that way on purpose, so the high half here is pure
//! identity, C1 control range included.

use sbcs::{Index, INDEX_LEN};

const fn c1_and_latin_supplement() -> [Option<char>; INDEX_LEN] {
    let mut entries = [None; INDEX_LEN];
    let mut i = 0;
    while i < INDEX_LEN {
        entries[i] = char::from_u32(0x80 + i as u32);
        i += 1;
    }
    entries
}

/// The Latin-1 index table. Byte 0x80 + n maps to U+0080 + n, so the
/// table is a formula rather than a repertoire and is computed instead
/// of written out.
pub static LATIN_1: Index = Index::new(c1_and_latin_supplement());

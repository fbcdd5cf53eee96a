//! x-user-defined: a character set with no repertoire of its own. High
//! bytes map into the private use area at U+F780, so arbitrary binary
//! survives a decode without colliding with any real character and can
//! be recovered from the decoded text byte for byte.

use sbcs::{Index, INDEX_LEN};

const fn private_use_high_half() -> [Option<char>; INDEX_LEN] {
    let mut entries = [None; INDEX_LEN];
    let mut i = 0;
    while i < INDEX_LEN {
        entries[i] = char::from_u32(0xF780 + i as u32);
        i += 1;
    }
    entries
}

/// The x-user-defined index table: byte 0x80 + n maps to U+F780 + n.
pub static X_USER_DEFINED: Index = Index::new(private_use_high_half());

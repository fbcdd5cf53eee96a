//! ISO 8859-7, Latin/Greek, in the 2003 revision that added the euro
//! and drachma signs. This is the only table in the crate with holes:
//! 0xAE, 0xD2 and 0xFF have never been assigned.

use sbcs::Index;

/// The ISO 8859-7 index table.
#[rustfmt::skip]
pub static ISO_8859_7: Index = Index::new([
    // 0x80-0x8F
    Some('\u{0080}'), Some('\u{0081}'), Some('\u{0082}'), Some('\u{0083}'),
    Some('\u{0084}'), Some('\u{0085}'), Some('\u{0086}'), Some('\u{0087}'),
    Some('\u{0088}'), Some('\u{0089}'), Some('\u{008A}'), Some('\u{008B}'),
    Some('\u{008C}'), Some('\u{008D}'), Some('\u{008E}'), Some('\u{008F}'),
    // 0x90-0x9F
    Some('\u{0090}'), Some('\u{0091}'), Some('\u{0092}'), Some('\u{0093}'),
    Some('\u{0094}'), Some('\u{0095}'), Some('\u{0096}'), Some('\u{0097}'),
    Some('\u{0098}'), Some('\u{0099}'), Some('\u{009A}'), Some('\u{009B}'),
    Some('\u{009C}'), Some('\u{009D}'), Some('\u{009E}'), Some('\u{009F}'),
    // 0xA0-0xAF
    Some('\u{00A0}'), Some('\u{2018}'), Some('\u{2019}'), Some('\u{00A3}'),
    Some('\u{20AC}'), Some('\u{20AF}'), Some('\u{00A6}'), Some('\u{00A7}'),
    Some('\u{00A8}'), Some('\u{00A9}'), Some('\u{037A}'), Some('\u{00AB}'),
    Some('\u{00AC}'), Some('\u{00AD}'), None,             Some('\u{2015}'),
    // 0xB0-0xBF
    Some('\u{00B0}'), Some('\u{00B1}'), Some('\u{00B2}'), Some('\u{00B3}'),
    Some('\u{0384}'), Some('\u{0385}'), Some('\u{0386}'), Some('\u{00B7}'),
    Some('\u{0388}'), Some('\u{0389}'), Some('\u{038A}'), Some('\u{00BB}'),
    Some('\u{038C}'), Some('\u{00BD}'), Some('\u{038E}'), Some('\u{038F}'),
    // 0xC0-0xCF
    Some('\u{0390}'), Some('\u{0391}'), Some('\u{0392}'), Some('\u{0393}'),
    Some('\u{0394}'), Some('\u{0395}'), Some('\u{0396}'), Some('\u{0397}'),
    Some('\u{0398}'), Some('\u{0399}'), Some('\u{039A}'), Some('\u{039B}'),
    Some('\u{039C}'), Some('\u{039D}'), Some('\u{039E}'), Some('\u{039F}'),
    // 0xD0-0xDF
    Some('\u{03A0}'), Some('\u{03A1}'), None,             Some('\u{03A3}'),
    Some('\u{03A4}'), Some('\u{03A5}'), Some('\u{03A6}'), Some('\u{03A7}'),
    Some('\u{03A8}'), Some('\u{03A9}'), Some('\u{03AA}'), Some('\u{03AB}'),
    Some('\u{03AC}'), Some('\u{03AD}'), Some('\u{03AE}'), Some('\u{03AF}'),
    // 0xE0-0xEF
    Some('\u{03B0}'), Some('\u{03B1}'), Some('\u{03B2}'), Some('\u{03B3}'),
    Some('\u{03B4}'), Some('\u{03B5}'), Some('\u{03B6}'), Some('\u{03B7}'),
    Some('\u{03B8}'), Some('\u{03B9}'), Some('\u{03BA}'), Some('\u{03BB}'),
    Some('\u{03BC}'), Some('\u{03BD}'), Some('\u{03BE}'), Some('\u{03BF}'),
    // 0xF0-0xFF
    Some('\u{03C0}'), Some('\u{03C1}'), Some('\u{03C2}'), Some('\u{03C3}'),
    Some('\u{03C4}'), Some('\u{03C5}'), Some('\u{03C6}'), Some('\u{03C7}'),
    Some('\u{03C8}'), Some('\u{03C9}'), Some('\u{03CA}'), Some('\u{03CB}'),
    Some('\u{03CC}'), Some('\u{03CD}'), Some('\u{03CE}'), None,
]);

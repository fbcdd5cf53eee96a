//! ISO 8859-2, also known as Latin-2: Central and Eastern European
//! languages written in the Latin alphabet. Polish, Czech, Slovak,
//! Hungarian, Croatian and Romanian all lived here before UTF-8.

use sbcs::Index;

/// The ISO 8859-2 index table.
#[rustfmt::skip]
pub static ISO_8859_2: Index = Index::new([
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
    Some('\u{00A0}'), Some('\u{0104}'), Some('\u{02D8}'), Some('\u{0141}'),
    Some('\u{00A4}'), Some('\u{013D}'), Some('\u{015A}'), Some('\u{00A7}'),
    Some('\u{00A8}'), Some('\u{0160}'), Some('\u{015E}'), Some('\u{0164}'),
    Some('\u{0179}'), Some('\u{00AD}'), Some('\u{017D}'), Some('\u{017B}'),
    // 0xB0-0xBF
    Some('\u{00B0}'), Some('\u{0105}'), Some('\u{02DB}'), Some('\u{0142}'),
    Some('\u{00B4}'), Some('\u{013E}'), Some('\u{015B}'), Some('\u{02C7}'),
    Some('\u{00B8}'), Some('\u{0161}'), Some('\u{015F}'), Some('\u{0165}'),
    Some('\u{017A}'), Some('\u{02DD}'), Some('\u{017E}'), Some('\u{017C}'),
    // 0xC0-0xCF
    Some('\u{0154}'), Some('\u{00C1}'), Some('\u{00C2}'), Some('\u{0102}'),
    Some('\u{00C4}'), Some('\u{0139}'), Some('\u{0106}'), Some('\u{00C7}'),
    Some('\u{010C}'), Some('\u{00C9}'), Some('\u{0118}'), Some('\u{00CB}'),
    Some('\u{011A}'), Some('\u{00CD}'), Some('\u{00CE}'), Some('\u{010E}'),
    // 0xD0-0xDF
    Some('\u{0110}'), Some('\u{0143}'), Some('\u{0147}'), Some('\u{00D3}'),
    Some('\u{00D4}'), Some('\u{0150}'), Some('\u{00D6}'), Some('\u{00D7}'),
    Some('\u{0158}'), Some('\u{016E}'), Some('\u{00DA}'), Some('\u{0170}'),
    Some('\u{00DC}'), Some('\u{00DD}'), Some('\u{0162}'), Some('\u{00DF}'),
    // 0xE0-0xEF
    Some('\u{0155}'), Some('\u{00E1}'), Some('\u{00E2}'), Some('\u{0103}'),
    Some('\u{00E4}'), Some('\u{013A}'), Some('\u{0107}'), Some('\u{00E7}'),
    Some('\u{010D}'), Some('\u{00E9}'), Some('\u{0119}'), Some('\u{00EB}'),
    Some('\u{011B}'), Some('\u{00ED}'), Some('\u{00EE}'), Some('\u{010F}'),
    // 0xF0-0xFF
    Some('\u{0111}'), Some('\u{0144}'), Some('\u{0148}'), Some('\u{00F3}'),
    Some('\u{00F4}'), Some('\u{0151}'), Some('\u{00F6}'), Some('\u{00F7}'),
    Some('\u{0159}'), Some('\u{016F}'), Some('\u{00FA}'), Some('\u{0171}'),
    Some('\u{00FC}'), Some('\u{00FD}'), Some('\u{0163}'), Some('\u{02D9}'),
]);

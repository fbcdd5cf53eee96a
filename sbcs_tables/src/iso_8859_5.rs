//! ISO 8859-5, Latin/Cyrillic. The basic Russian alphabet sits in two
//! contiguous runs, А..Я at 0xB0 and а..я at 0xD0, with the extension
//! letters for Ukrainian, Serbian and friends packed around them.

use sbcs::Index;

/// The ISO 8859-5 index table.
#[rustfmt::skip]
pub static ISO_8859_5: Index = Index::new([
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
    Some('\u{00A0}'), Some('\u{0401}'), Some('\u{0402}'), Some('\u{0403}'),
    Some('\u{0404}'), Some('\u{0405}'), Some('\u{0406}'), Some('\u{0407}'),
    Some('\u{0408}'), Some('\u{0409}'), Some('\u{040A}'), Some('\u{040B}'),
    Some('\u{040C}'), Some('\u{00AD}'), Some('\u{040E}'), Some('\u{040F}'),
    // 0xB0-0xBF
    Some('\u{0410}'), Some('\u{0411}'), Some('\u{0412}'), Some('\u{0413}'),
    Some('\u{0414}'), Some('\u{0415}'), Some('\u{0416}'), Some('\u{0417}'),
    Some('\u{0418}'), Some('\u{0419}'), Some('\u{041A}'), Some('\u{041B}'),
    Some('\u{041C}'), Some('\u{041D}'), Some('\u{041E}'), Some('\u{041F}'),
    // 0xC0-0xCF
    Some('\u{0420}'), Some('\u{0421}'), Some('\u{0422}'), Some('\u{0423}'),
    Some('\u{0424}'), Some('\u{0425}'), Some('\u{0426}'), Some('\u{0427}'),
    Some('\u{0428}'), Some('\u{0429}'), Some('\u{042A}'), Some('\u{042B}'),
    Some('\u{042C}'), Some('\u{042D}'), Some('\u{042E}'), Some('\u{042F}'),
    // 0xD0-0xDF
    Some('\u{0430}'), Some('\u{0431}'), Some('\u{0432}'), Some('\u{0433}'),
    Some('\u{0434}'), Some('\u{0435}'), Some('\u{0436}'), Some('\u{0437}'),
    Some('\u{0438}'), Some('\u{0439}'), Some('\u{043A}'), Some('\u{043B}'),
    Some('\u{043C}'), Some('\u{043D}'), Some('\u{043E}'), Some('\u{043F}'),
    // 0xE0-0xEF
    Some('\u{0440}'), Some('\u{0441}'), Some('\u{0442}'), Some('\u{0443}'),
    Some('\u{0444}'), Some('\u{0445}'), Some('\u{0446}'), Some('\u{0447}'),
    Some('\u{0448}'), Some('\u{0449}'), Some('\u{044A}'), Some('\u{044B}'),
    Some('\u{044C}'), Some('\u{044D}'), Some('\u{044E}'), Some('\u{044F}'),
    // 0xF0-0xFF
    Some('\u{2116}'), Some('\u{0451}'), Some('\u{0452}'), Some('\u{0453}'),
    Some('\u{0454}'), Some('\u{0455}'), Some('\u{0456}'), Some('\u{0457}'),
    Some('\u{0458}'), Some('\u{0459}'), Some('\u{045A}'), Some('\u{045B}'),
    Some('\u{045C}'), Some('\u{00A7}'), Some('\u{045E}'), Some('\u{045F}'),
]);

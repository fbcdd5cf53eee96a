use crate::index::{Index, INDEX_LEN};
use crate::iter::{decode_to_string, DecodeResultIter};
use crate::result::{
    decoder_error, DecodeError, DecodeResult, DecodedChunk, REPLACEMENT_CHARACTER,
};
use crate::single_byte::{is_ascii_byte, SingleByteDecoder, ASCII_LIMIT};
use crate::stream::{ByteOrEof, ByteStream};
use crate::DecodeSingleByte;
use std::vec::Vec;
extern crate env_logger;
extern crate quickcheck;

// A synthetic character set for exercising the machinery: the low 64
// pointers map into the Cyrillic block starting at U+0410, the high 64
// are holes.
fn half_mapped() -> Index {
    let mut entries = [None; INDEX_LEN];
    for (i, e) in entries.iter_mut().take(64).enumerate() {
        *e = ::std::char::from_u32(0x0410 + i as u32);
    }
    Index::new(entries)
}

// A character set with no holes at all: every pointer maps into the Latin
// Extended-A block starting at U+0100.
fn fully_mapped() -> Index {
    let mut entries = [None; INDEX_LEN];
    for (i, e) in entries.iter_mut().enumerate() {
        *e = ::std::char::from_u32(0x0100 + i as u32);
    }
    Index::new(entries)
}

fn check_decode(bytes: &[u8], index: &Index, expect: &str) {
    let _ = env_logger::try_init();
    let lossy: String = bytes.decode_single_byte(index).collect();
    assert_eq!(lossy, expect);
    let direct = decode_to_string(bytes, index, false);
    assert_eq!(direct, Ok(String::from(expect)));
}

#[test]
fn test_ascii_bytes_decode_to_themselves() {
    // Even a table with no entries at all must not touch the low half.
    let _ = env_logger::try_init();
    let idx = Index::new([None; INDEX_LEN]);
    let strict = SingleByteDecoder::new(&idx, true);
    let lossy = SingleByteDecoder::new(&idx, false);
    for b in 0..ASCII_LIMIT {
        assert!(is_ascii_byte(b));
        let want = Ok(DecodeResult::CodePoint(char::from(b)));
        assert_eq!(strict.handler(ByteOrEof::Byte(b)), want);
        assert_eq!(lossy.handler(ByteOrEof::Byte(b)), want);
    }
}

#[test]
fn test_first_and_last_table_pointers() {
    let _ = env_logger::try_init();
    let mut entries = [None; INDEX_LEN];
    entries[INDEX_LEN - 1] = Some('\u{20AC}');
    let idx = Index::new(entries);
    let dec = SingleByteDecoder::new(&idx, true);
    assert_eq!(
        dec.handler(ByteOrEof::Byte(0x7F)),
        Ok(DecodeResult::CodePoint('\u{7F}'))
    );
    assert_eq!(
        dec.handler(ByteOrEof::Byte(0x80)),
        Err(DecodeError::UnmappedByte(0x80))
    );
    assert_eq!(
        dec.handler(ByteOrEof::Byte(0xFF)),
        Ok(DecodeResult::CodePoint('\u{20AC}'))
    );
}

#[test]
fn test_identity_table_call_sequence() {
    let _ = env_logger::try_init();
    let mut entries = [None; INDEX_LEN];
    for (i, e) in entries.iter_mut().enumerate() {
        *e = ::std::char::from_u32(0x80 + i as u32);
    }
    let idx = Index::new(entries);
    let dec = SingleByteDecoder::new(&idx, false);
    assert_eq!(
        dec.handler(ByteOrEof::Byte(0x41)),
        Ok(DecodeResult::CodePoint('A'))
    );
    assert_eq!(
        dec.handler(ByteOrEof::Byte(0xE9)),
        Ok(DecodeResult::CodePoint('é'))
    );
    assert_eq!(dec.handler(ByteOrEof::EndOfStream), Ok(DecodeResult::Finished));
}

#[test]
fn test_end_of_stream_is_finished_every_time() {
    let _ = env_logger::try_init();
    let idx = half_mapped();
    let dec = SingleByteDecoder::new(&idx, true);
    for _ in 0..3 {
        let got = dec.handler(ByteOrEof::EndOfStream);
        assert_eq!(got, Ok(DecodeResult::Finished));
    }
}

#[test]
fn test_high_byte_goes_through_the_table() {
    let idx = half_mapped();
    check_decode(&[0x80], &idx, "А");
    check_decode(&[0xBF], &idx, "я");
    check_decode(b"\x80\xBF ok", &idx, "Ая ok");
}

#[test]
fn test_unmapped_byte_is_fatal_when_asked() {
    let _ = env_logger::try_init();
    let idx = half_mapped();
    assert_eq!(
        decode_to_string(&[0x41, 0xC0, 0x42], &idx, true),
        Err(DecodeError::UnmappedByte(0xC0))
    );
}

#[test]
fn test_unmapped_byte_substitutes_when_not() {
    let idx = half_mapped();
    check_decode(&[0x41, 0xC0, 0x42], &idx, "A\u{FFFD}B");
}

#[test]
fn test_lossy_iter_replaces_and_continues() {
    let _ = env_logger::try_init();
    let idx = half_mapped();
    let got: Vec<char> = [0xFF_u8, 0x80, 0xFF].decode_single_byte(&idx).collect();
    assert_eq!(got, vec![REPLACEMENT_CHARACTER, 'А', REPLACEMENT_CHARACTER]);
}

#[test]
fn test_result_iter_stops_after_an_error() {
    let _ = env_logger::try_init();
    let idx = half_mapped();
    let mut it = DecodeResultIter::new(&[0x61, 0xFF, 0x62], &idx, true);
    assert_eq!(it.next(), Some(Ok('a')));
    assert_eq!(it.next(), Some(Err(DecodeError::UnmappedByte(0xFF))));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
}

#[test]
fn test_empty_input() {
    let _ = env_logger::try_init();
    let idx = half_mapped();
    assert_eq!(decode_to_string(b"", &idx, true), Ok(String::new()));
    assert_eq!(b"".decode_single_byte(&idx).next(), None);
}

#[test]
fn test_stream_reads_in_order_then_eof_forever() {
    let mut s = ByteStream::new(&[1, 2]);
    assert_eq!(s.read(), ByteOrEof::Byte(1));
    assert_eq!(s.read(), ByteOrEof::Byte(2));
    assert_eq!(s.read(), ByteOrEof::EndOfStream);
    assert_eq!(s.read(), ByteOrEof::EndOfStream);
}

#[test]
fn test_stream_unread_steps_back() {
    let mut s = ByteStream::new(&[7, 8, 9]);
    assert_eq!(s.read(), ByteOrEof::Byte(7));
    s.unread();
    assert_eq!(s.read(), ByteOrEof::Byte(7));
    assert_eq!(s.remaining(), &[8, 9]);
}

#[test]
fn test_error_policy() {
    assert_eq!(
        decoder_error(true, 0x9D),
        Err(DecodeError::UnmappedByte(0x9D))
    );
    assert_eq!(
        decoder_error(false, 0x9D),
        Ok(DecodeResult::CodePoint(REPLACEMENT_CHARACTER))
    );
}

#[test]
fn test_error_display_names_the_byte() {
    let e = DecodeError::UnmappedByte(0xC0);
    assert_eq!(
        format!("{}", e),
        "byte 0xC0 has no mapping in the index table"
    );
}

#[test]
fn test_decoded_chunk_pair() {
    let chunk = DecodedChunk::new_pair('a', 'b');
    assert_eq!(chunk.as_slice(), &['a', 'b']);
}

// The input space is one byte wide, so there is no need to sample it:
// scan all 256 bytes against both dispositions and check every outcome.
#[test]
fn test_exhaustive_byte_scan() {
    let _ = env_logger::try_init();
    let idx = half_mapped();
    let strict = SingleByteDecoder::new(&idx, true);
    let lossy = SingleByteDecoder::new(&idx, false);
    for b in 0..=0xFF_u8 {
        let expect = if is_ascii_byte(b) {
            Some(char::from(b))
        } else {
            idx.code_point(b - ASCII_LIMIT)
        };
        match expect {
            Some(c) => {
                let want = Ok(DecodeResult::CodePoint(c));
                assert_eq!(strict.handler(ByteOrEof::Byte(b)), want);
                assert_eq!(lossy.handler(ByteOrEof::Byte(b)), want);
            }
            None => {
                assert_eq!(
                    strict.handler(ByteOrEof::Byte(b)),
                    Err(DecodeError::UnmappedByte(b))
                );
                assert_eq!(
                    lossy.handler(ByteOrEof::Byte(b)),
                    Ok(DecodeResult::CodePoint(REPLACEMENT_CHARACTER))
                );
            }
        }
    }
}

#[test]
fn test_100k_random_ascii_strings() {
    use self::quickcheck::*;
    fn check_one(s: String) -> bool {
        let _ = env_logger::try_init();
        let ascii: String = s.chars().filter(|c| c.is_ascii()).collect();
        let _ = debug!("quickcheck ascii: {:?}", ascii);
        let idx = half_mapped();
        let decoded: String = ascii.as_bytes().decode_single_byte(&idx).collect();
        decoded == ascii
    }
    QuickCheck::new()
        .tests(100_000)
        .max_tests(100_000)
        .quickcheck(check_one as fn(String) -> bool)
}

#[test]
fn test_50k_random_byte_slices_one_char_per_byte() {
    use self::quickcheck::*;
    fn check_one(bytes: Vec<u8>) -> bool {
        // Lossy decoding turns every byte into exactly one code point, the
        // replacement character included, so lengths must agree.
        let _ = env_logger::try_init();
        let _ = debug!("quickcheck bytes: {:?}", bytes);
        let idx = half_mapped();
        let n = bytes.as_slice().decode_single_byte(&idx).count();
        n == bytes.len()
    }
    QuickCheck::new()
        .tests(50_000)
        .max_tests(50_000)
        .quickcheck(check_one as fn(Vec<u8>) -> bool)
}

#[test]
fn test_50k_random_byte_slices_fatal_agrees_with_lossy() {
    use self::quickcheck::*;
    fn check_one(bytes: Vec<u8>) -> bool {
        // When the fatal decode succeeds the lossy one must produce the
        // same string; when it fails, the blamed byte must really be a
        // hole in the table.
        let _ = env_logger::try_init();
        let idx = half_mapped();
        match decode_to_string(&bytes, &idx, true) {
            Ok(s) => decode_to_string(&bytes, &idx, false) == Ok(s),
            Err(DecodeError::UnmappedByte(b)) => {
                !is_ascii_byte(b) && idx.code_point(b - ASCII_LIMIT).is_none()
            }
        }
    }
    QuickCheck::new()
        .tests(50_000)
        .max_tests(50_000)
        .quickcheck(check_one as fn(Vec<u8>) -> bool)
}

#[test]
fn test_50k_random_byte_slices_never_fail_without_holes() {
    use self::quickcheck::*;
    fn check_one(bytes: Vec<u8>) -> bool {
        let _ = env_logger::try_init();
        let idx = fully_mapped();
        decode_to_string(&bytes, &idx, true).is_ok()
    }
    QuickCheck::new()
        .tests(50_000)
        .max_tests(50_000)
        .quickcheck(check_one as fn(Vec<u8>) -> bool)
}

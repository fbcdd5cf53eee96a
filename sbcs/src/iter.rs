/*
* Iterators for driving the single-byte decoder over normal Rust types.
*
* This pile of code has nothing to do with any particular character set,
* it's just sequence adaptors managing the flow of bytes out of a slice,
* through the decode step in single_byte.rs, and back out as code points.
*/

#![allow(clippy::stutter)]

use crate::index::Index;
use crate::result::{DecodeError, DecodeResult, DecodedChunk};
use crate::single_byte::SingleByteDecoder;
use crate::stream::ByteStream;

// The most straightforward way to decode is just to call
// .decode_single_byte() on the encoded bytes and collect the resulting
// characters. It never fails: a byte with no entry in the index table
// comes out as U+FFFD. If you want hard errors instead, you need to use
// DecodeResultIter with the fatal flag set.

pub struct DecodeIter<'a> {
    inner: DecodeResultIter<'a>,
}

impl<'a> DecodeIter<'a> {
    pub fn new(bytes: &'a [u8], index: &'a Index) -> DecodeIter<'a> {
        DecodeIter {
            inner: DecodeResultIter::new(bytes, index, false),
        }
    }
}

impl<'a> Iterator for DecodeIter<'a> {
    type Item = char;
    fn next(self: &mut Self) -> Option<char> {
        match self.inner.next() {
            None | Some(Err(_)) => None,
            Some(Ok(c)) => Some(c),
        }
    }
}

pub trait DecodeSingleByte {
    fn decode_single_byte<'a>(self: &'a Self, index: &'a Index) -> DecodeIter<'a>;
}

impl DecodeSingleByte for [u8] {
    fn decode_single_byte<'a>(self: &'a Self, index: &'a Index) -> DecodeIter<'a> {
        DecodeIter::new(self, index)
    }
}

// The detailed view. Each turn of the crank reads one unit from the
// stream, hands it to the decoder, and routes the outcome: Pending loops
// for another unit, Finished ends the iteration, a code point is yielded,
// and an error is yielded once and then ends the iteration. A decoder in
// this interface may also hand back a pair of code points for a single
// byte; the pair is drained one code point at a time before the stream is
// read again.

pub struct DecodeResultIter<'a> {
    decoder: SingleByteDecoder<'a>,
    stream: ByteStream<'a>,
    drain: Option<DecodedChunk>,
    drained: usize,
    done: bool,
}

impl<'a> DecodeResultIter<'a> {
    pub fn new(bytes: &'a [u8], index: &'a Index, fatal: bool) -> DecodeResultIter<'a> {
        DecodeResultIter {
            decoder: SingleByteDecoder::new(index, fatal),
            stream: ByteStream::new(bytes),
            drain: None,
            drained: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for DecodeResultIter<'a> {
    type Item = Result<char, DecodeError>;
    fn next(self: &mut Self) -> Option<Result<char, DecodeError>> {
        if let Some(chunk) = &self.drain {
            assert!(self.drained < chunk.count);
            let ret = chunk.code_points[self.drained];
            let last = self.drained + 1 == chunk.count;
            self.drained += 1;
            if last {
                self.drain = None;
            }
            return Some(Ok(ret));
        }
        if self.done {
            return None;
        }
        loop {
            let unit = self.stream.read();
            match self.decoder.handler(unit) {
                Ok(DecodeResult::Pending) => continue,
                Ok(DecodeResult::Finished) => {
                    self.done = true;
                    return None;
                }
                Ok(DecodeResult::CodePoint(c)) => {
                    return Some(Ok(c));
                }
                Ok(DecodeResult::CodePoints(chunk)) => {
                    assert!(chunk.count > 0);
                    let first = chunk.code_points[0];
                    if chunk.count > 1 {
                        self.drain = Some(chunk);
                        self.drained = 1;
                    }
                    return Some(Ok(first));
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

// One-call decoding for callers that just want a String and a yes or no.

pub fn decode_to_string(bytes: &[u8], index: &Index, fatal: bool) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(bytes.len());
    for item in DecodeResultIter::new(bytes, index, fatal) {
        out.push(item?);
    }
    Ok(out)
}

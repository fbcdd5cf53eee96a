//! The byte source decoders are driven from: a cursor over a borrowed
//! buffer, plus the end-of-stream sentinel.
//!
//! The cursor is an explicit index into a slice rather than an iterator, so
//! stepping backwards is a plain index decrement. Decoders themselves never
//! touch the cursor; the driver that owns it reads one unit per decode call
//! and hands it over. Single-byte decoding never reads ahead, but the
//! multi-byte members of the family do, and they give back the byte they
//! over-read with `unread` -- one unit of pushback is part of the stream
//! contract.

/// One unit read from a byte stream: a real byte, or the sentinel that says
/// no further input exists.
///
/// The sentinel is a distinct variant rather than a reserved integer, so no
/// byte value can ever be mistaken for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrEof {
    Byte(u8),
    EndOfStream,
}

/// A cursor over a borrowed byte buffer.
pub struct ByteStream<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteStream<'a> {
    pub fn new(bytes: &'a [u8]) -> ByteStream<'a> {
        ByteStream {
            bytes: bytes,
            pos: 0,
        }
    }

    /// Yield the next byte and advance, or `EndOfStream` once the buffer is
    /// exhausted. Reading at the end is idempotent: every further call
    /// returns `EndOfStream` again.
    pub fn read(self: &mut Self) -> ByteOrEof {
        match self.bytes.get(self.pos) {
            None => ByteOrEof::EndOfStream,
            Some(byte) => {
                self.pos += 1;
                ByteOrEof::Byte(*byte)
            }
        }
    }

    /// Step the cursor back one byte, so the next `read` re-yields it.
    /// Callers get exactly one unit of pushback: the byte most recently
    /// read. Unreading before anything was read is a caller bug.
    pub fn unread(self: &mut Self) {
        assert!(self.pos > 0, "unread with nothing read");
        self.pos -= 1;
    }

    /// The unconsumed suffix of the buffer.
    pub fn remaining(self: &Self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

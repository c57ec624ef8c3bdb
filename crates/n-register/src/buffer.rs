//! Rope-backed document — the text source registers yank from.
//!
//! A `Buffer` wraps a [`ropey::Rope`] and exposes it by **byte** offset,
//! which is what registers copy. The editor proper addresses text by
//! (line, col); by the time a range reaches a register it has already been
//! converted to bytes.
//!
//! # Design choices
//!
//! - **Chunk streaming.** Range extraction walks the rope's leaf chunks
//!   directly instead of materializing a `String`, so yanking a large range
//!   into a register (or piping it to the clipboard helper) copies each byte
//!   exactly once.
//!
//! - **Byte offsets need not be char boundaries.** Registers hold raw
//!   bytes; a range that splits a UTF-8 sequence yields the raw bytes.

use std::fmt;
use std::io::{self, Write};

use ropey::Rope;

use crate::text::{ByteRange, TextSource};

/// A text document backed by a rope.
#[derive(Clone, Default)]
pub struct Buffer {
    rope: Rope,
}

impl Buffer {
    // -- Construction -------------------------------------------------------

    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a buffer from a string.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total byte count.
    #[inline]
    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    /// True when the buffer contains no text.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    // -- Chunk access -------------------------------------------------------

    /// Walk the chunk bytes of `range`, which must already be validated.
    fn for_each_chunk(
        &self,
        range: ByteRange,
        mut f: impl FnMut(&[u8]) -> io::Result<()>,
    ) -> io::Result<()> {
        if range.is_empty() {
            return Ok(());
        }
        let (chunks, chunk_start, _, _) = self.rope.chunks_at_byte(range.start);
        let mut skip = range.start - chunk_start;
        let mut remaining = range.end - range.start;
        for chunk in chunks {
            let bytes = &chunk.as_bytes()[skip..];
            skip = 0;
            let n = bytes.len().min(remaining);
            f(&bytes[..n])?;
            remaining -= n;
            if remaining == 0 {
                break;
            }
        }
        Ok(())
    }
}

impl TextSource for Buffer {
    fn range_size(&self, range: ByteRange) -> Option<usize> {
        if range.end > self.rope.len_bytes() {
            return None;
        }
        range.len()
    }

    fn bytes_get(&self, start: usize, buf: &mut [u8]) -> usize {
        let len = self.rope.len_bytes();
        if start >= len || buf.is_empty() {
            return 0;
        }
        let end = start + buf.len().min(len - start);
        let mut copied = 0;
        // The closure never fails; the io::Result only threads through.
        let _ = self.for_each_chunk(ByteRange::new(start, end), |bytes| {
            buf[copied..copied + bytes.len()].copy_from_slice(bytes);
            copied += bytes.len();
            Ok(())
        });
        copied
    }

    fn write_range(&self, range: ByteRange, out: &mut dyn Write) -> io::Result<()> {
        if self.range_size(range).is_none() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "range out of bounds",
            ));
        }
        self.for_each_chunk(range, |bytes| out.write_all(bytes))
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("len_bytes", &self.rope.len_bytes())
            .field("len_lines", &self.rope.len_lines())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

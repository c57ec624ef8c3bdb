//! Byte ranges and the text-source contract.
//!
//! Registers never look inside the document's data structure. They ask a
//! [`TextSource`] two questions: how many bytes a range covers, and to copy
//! those bytes out. Anything that can answer both (the rope-backed
//! [`Buffer`](crate::buffer::Buffer), a plain `str`) can feed a register.
//!
//! Offsets here are **byte** offsets, unlike the (line, col) positions the
//! cursor works in. Registers store raw bytes, so the conversion to char or
//! line coordinates happens before a range ever reaches this layer.

use std::fmt;
use std::io::{self, Write};

// ---------------------------------------------------------------------------
// ByteRange
// ---------------------------------------------------------------------------

/// A half-open byte range `[start, end)` in a document.
///
/// Unlike the cursor-level range type this one is **not** normalized on
/// construction: a reversed range is representable and simply has no size
/// (see [`len`](Self::len)). Range sizes are always computed through
/// [`TextSource::range_size`], which rejects ranges the document cannot
/// satisfy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    /// Create a range.
    #[inline]
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The empty range at offset 0.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Byte length, or `None` for a reversed range.
    #[inline]
    #[must_use]
    pub const fn len(self) -> Option<usize> {
        self.end.checked_sub(self.start)
    }

    /// True when the range covers no bytes (or is reversed).
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Debug for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<std::ops::Range<usize>> for ByteRange {
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

// ---------------------------------------------------------------------------
// TextSource
// ---------------------------------------------------------------------------

/// Read access to a document by byte range.
pub trait TextSource {
    /// Exact byte length of `range`, or `None` if the range is reversed or
    /// reaches past the end of the text.
    fn range_size(&self, range: ByteRange) -> Option<usize>;

    /// Copy up to `buf.len()` bytes starting at byte offset `start` into
    /// `buf`. Returns how many bytes were copied.
    fn bytes_get(&self, start: usize, buf: &mut [u8]) -> usize;

    /// Stream the bytes of `range` into `out`.
    ///
    /// The default goes through [`bytes_get`](Self::bytes_get) in fixed-size
    /// chunks; sources with cheaper chunk access should override it.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is invalid or `out` fails.
    fn write_range(&self, range: ByteRange, out: &mut dyn Write) -> io::Result<()> {
        let mut remaining = self
            .range_size(range)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "range out of bounds"))?;
        let mut chunk = [0u8; 4096];
        let mut pos = range.start;
        while remaining > 0 {
            let want = remaining.min(chunk.len());
            let got = self.bytes_get(pos, &mut chunk[..want]);
            if got == 0 {
                break;
            }
            out.write_all(&chunk[..got])?;
            pos += got;
            remaining -= got;
        }
        Ok(())
    }
}

impl TextSource for [u8] {
    fn range_size(&self, range: ByteRange) -> Option<usize> {
        if range.end > self.len() {
            return None;
        }
        range.len()
    }

    fn bytes_get(&self, start: usize, buf: &mut [u8]) -> usize {
        let Some(tail) = self.get(start..) else {
            return 0;
        };
        let n = tail.len().min(buf.len());
        buf[..n].copy_from_slice(&tail[..n]);
        n
    }

    fn write_range(&self, range: ByteRange, out: &mut dyn Write) -> io::Result<()> {
        match self.get(range.start..range.end) {
            Some(bytes) => out.write_all(bytes),
            None => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "range out of bounds",
            )),
        }
    }
}

impl TextSource for str {
    fn range_size(&self, range: ByteRange) -> Option<usize> {
        self.as_bytes().range_size(range)
    }

    fn bytes_get(&self, start: usize, buf: &mut [u8]) -> usize {
        self.as_bytes().bytes_get(start, buf)
    }

    fn write_range(&self, range: ByteRange, out: &mut dyn Write) -> io::Result<()> {
        self.as_bytes().write_range(range, out)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Cursor: an independent write position into a shared [`Buffer`].
//!
//! Several cursors typically cooperate on one buffer — one assembling the
//! visible text, another finishing it just in time for display, a third
//! splicing in a pre-built segment. A cursor stores nothing but its offset;
//! the buffer is passed to every operation and storage is re-derived from it
//! at call time. That is what makes the sharing safe: growth may move the
//! storage, and no cursor ever holds an address across a call that can grow.
//!
//! Overlapping writes are not detected or merged — the later write wins at
//! each byte position. Coordinating cursors is the caller's job.

use crate::buffer::Buffer;
use std::fmt;

/// An independently movable write position into a [`Buffer`].
///
/// Write operations grow the buffer on demand and truncate (never corrupt)
/// when growth fails. Operations that report where they wrote return the
/// start *offset* of the write rather than a reference, so nothing can
/// dangle across a later growth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Current write position. Invariant: `pos <= buf.size()` for the
    /// buffer this cursor is used with.
    pos: usize,
}

impl Cursor {
    /// Create a cursor at offset 0.
    #[inline]
    pub const fn new() -> Self {
        Self { pos: 0 }
    }

    /// Current offset.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.pos
    }

    /// Capacity remaining from this cursor's position to the end of the
    /// buffer's current storage.
    ///
    /// Computed live against the buffer's current size — it changes when
    /// the buffer grows, even if this cursor has not moved.
    #[inline]
    pub fn bytes_left(&self, buf: &Buffer) -> usize {
        buf.size().saturating_sub(self.pos)
    }

    /// Write one byte at the current offset and advance by 1.
    ///
    /// Grows the buffer if the cursor sits exactly at capacity. If growth
    /// fails, the byte is silently dropped and the offset does not move.
    pub fn put_char(&mut self, buf: &mut Buffer, c: u8) {
        if buf.ensure_capacity(self.pos + 1) <= self.pos {
            return;
        }
        buf.contents_mut()[self.pos] = c;
        self.pos += 1;
    }

    /// Write up to `max_len` bytes of `text` at the current offset,
    /// stopping early at the first NUL byte in `text`.
    ///
    /// Grows the buffer as needed; if growth fails, writes what fits.
    /// Advances the offset by the number of bytes written and returns the
    /// start offset of the write.
    pub fn copy_bounded(&mut self, buf: &mut Buffer, text: &str, max_len: usize) -> usize {
        let bytes = text.as_bytes();
        let stop = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        self.write_bytes(buf, &bytes[..stop.min(max_len)])
    }

    /// Write all of `text` plus a terminator at the current offset.
    ///
    /// The offset advances *past* the terminator, so a subsequent write
    /// through this cursor starts a new segment after it. Returns the start
    /// offset of the write.
    pub fn copy(&mut self, buf: &mut Buffer, text: &str) -> usize {
        let start = self.copy_bounded(buf, text, usize::MAX);
        self.put_char(buf, 0);
        start
    }

    /// Write whole grapheme clusters of `text` up to a display-width
    /// budget of `max_columns` terminal columns.
    ///
    /// Status-line sections are fitted to columns, not bytes: a CJK
    /// character spends two columns of the budget while occupying three
    /// bytes. A cluster that would overflow the budget is not written at
    /// all. Returns the start offset of the write.
    pub fn copy_fit(&mut self, buf: &mut Buffer, text: &str, max_columns: usize) -> usize {
        use unicode_segmentation::UnicodeSegmentation;
        use unicode_width::UnicodeWidthStr;

        let mut columns = 0;
        let mut end = 0;
        for (index, grapheme) in text.grapheme_indices(true) {
            let width = grapheme.width();
            if columns + width > max_columns {
                break;
            }
            columns += width;
            end = index + grapheme.len();
        }
        self.copy_bounded(buf, &text[..end], usize::MAX)
    }

    /// Format directly into the shared storage at the current offset.
    ///
    /// Grows the buffer as needed to fit the formatted output, advances
    /// the offset by the number of bytes produced, and returns that count.
    /// A growth failure mid-format surfaces as [`fmt::Error`]; bytes
    /// already produced stay in the buffer (truncation).
    ///
    /// Call with [`format_args!`]:
    ///
    /// ```rust
    /// # use statline::{Buffer, Cursor};
    /// let mut buf = Buffer::new();
    /// let mut cur = Cursor::new();
    /// let n = cur.format(&mut buf, format_args!("[{}] {}", 3, "vim")).unwrap();
    /// assert_eq!(n, 7);
    /// assert_eq!(cur.offset(), 7);
    /// ```
    pub fn format(&mut self, buf: &mut Buffer, args: fmt::Arguments<'_>) -> Result<usize, fmt::Error> {
        let start = self.pos;
        let mut sink = FormatSink {
            cursor: &mut *self,
            buf,
        };
        fmt::write(&mut sink, args)?;
        Ok(self.pos - start)
    }

    /// Move the offset forward to the first terminator at or after it.
    ///
    /// Skips past whatever has already been written so the next write
    /// appends instead of overwriting — the way a cursor resumes after
    /// another cursor finished a segment. If no terminator exists (the
    /// content runs to capacity), the offset lands at capacity.
    pub fn fast_forward_to_end(&mut self, buf: &Buffer) {
        let start = self.pos.min(buf.size());
        let tail = &buf.contents()[start..];
        self.pos = start + tail.iter().position(|&b| b == 0).unwrap_or(tail.len());
    }

    /// Reset the offset to 0, regardless of content.
    #[inline]
    pub fn fast_forward_to_start(&mut self) {
        self.pos = 0;
    }

    /// Splice another buffer's logical content in at the current offset.
    ///
    /// Copies `other`'s content (up to its terminator, exclusive) and its
    /// rendition log — entry offsets shifted by the splice position — into
    /// `buf`, growing as needed. Advances the offset past the merged
    /// content and returns the start offset of the merge.
    ///
    /// This is how a sub-computation that built its own standalone buffer
    /// (a formatted sub-component of a status line) lands in the larger,
    /// in-progress one.
    pub fn merge_buffer(&mut self, buf: &mut Buffer, other: &Buffer) -> usize {
        let start = self.write_bytes(buf, other.logical());
        for entry in other.renditions() {
            buf.record_rendition(entry.rendition, start + entry.offset);
        }
        start
    }

    /// Terminate the buffer at the current offset and return the full
    /// storage view, without moving the offset.
    ///
    /// Grows by one byte if the cursor sits exactly at capacity; if even
    /// that fails, the last byte of storage becomes the terminator so the
    /// result is still a valid (truncated) string. The terminator goes
    /// into shared storage: every cursor sees it, and a resumed write at
    /// or before it overwrites it like any other byte.
    pub fn finish<'b>(&self, buf: &'b mut Buffer) -> &'b [u8] {
        let end = if buf.ensure_capacity(self.pos + 1) > self.pos {
            self.pos
        } else {
            buf.size() - 1
        };
        buf.contents_mut()[end] = 0;
        buf.contents()
    }

    /// Write `src` at the current offset, truncating to what fits if the
    /// buffer cannot grow enough. Advances by the bytes written; returns
    /// the start offset.
    fn write_bytes(&mut self, buf: &mut Buffer, src: &[u8]) -> usize {
        let start = self.pos;
        let cap = buf.ensure_capacity(self.pos + src.len());
        let n = src.len().min(cap.saturating_sub(self.pos));
        buf.contents_mut()[start..start + n].copy_from_slice(&src[..n]);
        self.pos += n;
        start
    }
}

/// `fmt::Write` adapter that routes formatted output through a cursor into
/// its buffer, growing ahead of each chunk.
struct FormatSink<'a> {
    cursor: &'a mut Cursor,
    buf: &'a mut Buffer,
}

impl fmt::Write for FormatSink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let want = self.cursor.pos + s.len();
        if self.buf.ensure_capacity(want) < want {
            return Err(fmt::Error);
        }
        self.cursor.write_bytes(self.buf, s.as_bytes());
        Ok(())
    }
}

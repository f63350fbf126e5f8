//! Buffer: growable shared storage for a status line.
//!
//! The buffer is a pure storage object — it has no write position of its
//! own. Cursors (see [`crate::cursor`]) carry the positions and write into
//! this storage through it.

use super::rendition::{RendEntry, Rendition};

/// Capacity a freshly created buffer starts with, in bytes.
///
/// Sized so that typical status lines never grow at all.
pub const MIN_CAPACITY: usize = 256;

/// Growable byte storage plus the rendition side-channel.
///
/// # Storage Model
///
/// Storage is a contiguous byte region kept fully initialized (zero-filled
/// on creation and on growth), so a terminator byte always exists at or
/// after the logical end of content. `size()` is the allocated capacity;
/// the logical content runs up to the first NUL.
///
/// # Growth
///
/// [`ensure_capacity`](Self::ensure_capacity) grows geometrically on demand
/// and reports failure by returning the unchanged capacity — there is no
/// separate error channel, matching the write path's
/// truncate-don't-corrupt policy. A buffer built with
/// [`with_limit`](Self::with_limit) refuses to grow past its ceiling, which
/// both bounds status-line memory and gives tests a deterministic stand-in
/// for allocation pressure.
#[derive(Clone)]
pub struct Buffer {
    /// Contiguous storage; length is always the current capacity.
    storage: Vec<u8>,
    /// Hard capacity ceiling, if any.
    limit: Option<usize>,
    /// Rendition changes in insertion order.
    renditions: Vec<RendEntry>,
}

impl Buffer {
    /// Create an empty buffer with the default minimum capacity.
    ///
    /// The first byte is the terminator: logical content is empty.
    pub fn new() -> Self {
        Self {
            storage: vec![0; MIN_CAPACITY],
            limit: None,
            renditions: Vec::new(),
        }
    }

    /// Create an empty buffer that will never grow beyond `limit` bytes.
    ///
    /// Growth requests past the ceiling fail exactly like a failed
    /// allocation: capacity stays unchanged and writes truncate.
    ///
    /// # Panics
    /// Panics if `limit` is 0; a buffer always holds at least its
    /// terminator.
    pub fn with_limit(limit: usize) -> Self {
        assert!(limit > 0, "capacity limit must be non-zero");
        Self {
            storage: vec![0; MIN_CAPACITY.min(limit)],
            limit: Some(limit),
            renditions: Vec::new(),
        }
    }

    /// Current capacity in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Guarantee `size() >= want`, growing if necessary.
    ///
    /// Returns the resulting capacity. When `want <= size()` already
    /// (including `want == 0`) this performs no allocation and returns the
    /// unchanged capacity. When growth is needed but cannot be satisfied —
    /// the ceiling would be exceeded, or the allocator refuses — storage
    /// and capacity are left exactly as they were and the *original*
    /// capacity is returned. Callers detect failure by comparing the
    /// return value against `want`.
    ///
    /// Growth preserves content; new bytes are zero.
    pub fn ensure_capacity(&mut self, want: usize) -> usize {
        let cap = self.storage.len();
        if want <= cap {
            return cap;
        }
        if self.limit.is_some_and(|limit| want > limit) {
            return cap;
        }

        // Grow geometrically so repeated single-byte writes stay amortized
        // O(1), clamped to the ceiling.
        let mut target = want.max(cap.saturating_mul(2));
        if let Some(limit) = self.limit {
            target = target.min(limit);
        }

        if self.storage.try_reserve_exact(target - cap).is_err() {
            return cap;
        }
        self.storage.resize(target, 0);
        self.storage.len()
    }

    /// The full underlying storage.
    ///
    /// The view is transient: it borrows the buffer and cannot be held
    /// across any growth-capable call.
    #[inline]
    pub fn contents(&self) -> &[u8] {
        &self.storage
    }

    /// Mutable access to the full underlying storage.
    ///
    /// This is the shared region every cursor writes into. Writing past the
    /// logical end without terminating is fine; a terminator always exists
    /// somewhere at or after it because growth zero-fills.
    #[inline]
    pub fn contents_mut(&mut self) -> &mut [u8] {
        &mut self.storage
    }

    /// Logical content: storage up to (excluding) the first terminator.
    pub fn logical(&self) -> &[u8] {
        &self.storage[..self.logical_len()]
    }

    /// Logical content as UTF-8, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.logical()).ok()
    }

    /// Length of the logical content in bytes.
    #[inline]
    pub fn logical_len(&self) -> usize {
        self.storage
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.storage.len())
    }

    /// Reset to empty logical content, keeping the allocation.
    ///
    /// The first byte becomes the terminator and the rendition log is
    /// cleared; capacity is untouched so the buffer can be reused across
    /// render cycles without repaying allocation cost.
    pub fn reset(&mut self) {
        self.storage[0] = 0;
        self.renditions.clear();
    }

    /// Record a rendition change at `offset`.
    ///
    /// Pass-through annotation store: no bounds check against the current
    /// content, no ordering requirement.
    pub fn record_rendition(&mut self, rendition: Rendition, offset: usize) {
        self.renditions.push(RendEntry { offset, rendition });
    }

    /// The rendition log in insertion order.
    #[inline]
    pub fn renditions(&self) -> &[RendEntry] {
        &self.renditions
    }

    /// The rendition log sorted by offset (stable, insertion order within
    /// an offset).
    ///
    /// Render-time consumers apply entries positionally while emitting the
    /// literal bytes, so they want this order rather than insertion order.
    pub fn renditions_sorted(&self) -> Vec<RendEntry> {
        let mut entries = self.renditions.clone();
        entries.sort_by_key(|entry| entry.offset);
        entries
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("size", &self.size())
            .field("logical_len", &self.logical_len())
            .field("limit", &self.limit)
            .field("renditions", &self.renditions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_terminated() {
        let buf = Buffer::new();
        assert!(buf.size() > 0);
        assert_eq!(buf.contents()[0], 0);
        assert_eq!(buf.logical_len(), 0);
        assert!(buf.renditions().is_empty());
    }

    #[test]
    fn test_ensure_capacity_grows_to_at_least_want() {
        let mut buf = Buffer::new();
        let old = buf.size();
        let want = old + 3;
        assert!(buf.ensure_capacity(want) >= want);
        assert!(buf.size() >= want);
    }

    #[test]
    fn test_ensure_capacity_noop_for_non_increasing_targets() {
        let mut buf = Buffer::new();
        let want = buf.size() + 3;
        buf.ensure_capacity(want);

        let new = buf.size();
        let addr = buf.contents().as_ptr();
        assert_eq!(buf.ensure_capacity(want), new);
        assert_eq!(buf.ensure_capacity(want - 1), new);
        assert_eq!(buf.ensure_capacity(0), new);
        // No reallocation happened either.
        assert_eq!(buf.contents().as_ptr(), addr);
    }

    #[test]
    fn test_ensure_capacity_preserves_content() {
        let mut buf = Buffer::new();
        buf.contents_mut()[0] = b'a';
        buf.contents_mut()[1] = b'b';
        let want = buf.size() * 3;
        buf.ensure_capacity(want);
        assert_eq!(&buf.contents()[..2], b"ab");
        // New bytes are zero, so a terminator still exists.
        assert_eq!(buf.contents()[want - 1], 0);
    }

    #[test]
    fn test_ensure_capacity_failure_leaves_size_unchanged() {
        let mut buf = Buffer::with_limit(300);
        let old = buf.size();
        assert_eq!(buf.ensure_capacity(1000), old);
        assert_eq!(buf.size(), old);
        // A request within the ceiling still succeeds afterwards.
        assert_eq!(buf.ensure_capacity(300), 300);
    }

    #[test]
    fn test_with_limit_caps_initial_capacity() {
        let buf = Buffer::with_limit(8);
        assert_eq!(buf.size(), 8);
        assert_eq!(buf.contents()[0], 0);
    }

    #[test]
    #[should_panic(expected = "capacity limit must be non-zero")]
    fn test_with_limit_zero_panics() {
        Buffer::with_limit(0);
    }

    #[test]
    fn test_reset_keeps_capacity() {
        let mut buf = Buffer::new();
        buf.contents_mut()[0] = b'x';
        buf.record_rendition(Rendition::from_raw(1), 0);
        buf.ensure_capacity(buf.size() + 10);
        let size = buf.size();

        buf.reset();
        assert_eq!(buf.contents()[0], 0);
        assert_eq!(buf.logical_len(), 0);
        assert_eq!(buf.size(), size);
        assert!(buf.renditions().is_empty());
    }

    #[test]
    fn test_logical_and_as_str() {
        let mut buf = Buffer::new();
        buf.contents_mut()[..6].copy_from_slice(b"abc\0de");
        assert_eq!(buf.logical(), b"abc");
        assert_eq!(buf.as_str(), Some("abc"));
    }

    #[test]
    fn test_record_rendition_is_pass_through() {
        let mut buf = Buffer::new();
        // Out-of-bounds offsets are stored untouched.
        buf.record_rendition(Rendition::from_raw(7), 9999);
        buf.record_rendition(Rendition::from_raw(3), 2);
        assert_eq!(buf.renditions().len(), 2);
        assert_eq!(buf.renditions()[0].offset, 9999);
        assert_eq!(buf.renditions()[0].rendition.raw(), 7);
    }

    #[test]
    fn test_renditions_sorted_by_offset() {
        let mut buf = Buffer::new();
        buf.record_rendition(Rendition::from_raw(1), 10);
        buf.record_rendition(Rendition::from_raw(2), 0);
        buf.record_rendition(Rendition::from_raw(3), 10);

        let sorted = buf.renditions_sorted();
        assert_eq!(sorted[0].offset, 0);
        assert_eq!(sorted[1].offset, 10);
        // Stable: insertion order preserved within equal offsets.
        assert_eq!(sorted[1].rendition.raw(), 1);
        assert_eq!(sorted[2].rendition.raw(), 3);
    }
}

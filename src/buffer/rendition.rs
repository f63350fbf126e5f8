//! Rendition: opaque terminal attribute/color annotations.
//!
//! The buffer records *where* rendition changes apply, never *what* they
//! mean. The 64-bit encoding (attribute bits vs. color index packing) is the
//! renderer's contract; this module only stores and returns it.

/// An opaque 64-bit rendition value.
///
/// Statline treats the encoding as a black box: values pass through the
/// buffer untouched and are interpreted only by the terminal-rendering
/// collaborator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rendition(u64);

impl Rendition {
    /// Wrap a raw 64-bit rendition value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw 64-bit value back.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for Rendition {
    #[inline]
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Debug for Rendition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rendition({:#018x})", self.0)
    }
}

/// A rendition change recorded at a buffer offset.
///
/// Entries are stored in insertion order; offsets need not be monotonic
/// because independent cursors annotate wherever they happen to be writing.
/// Render-time consumers interpret entries by offset (see
/// [`Buffer::renditions_sorted`](super::Buffer::renditions_sorted)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendEntry {
    /// Byte offset into the buffer at which the change applies.
    pub offset: usize,
    /// The opaque rendition value.
    pub rendition: Rendition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendition_roundtrip() {
        let r = Rendition::from_raw(0xDEAD_BEEF_0000_0007);
        assert_eq!(r.raw(), 0xDEAD_BEEF_0000_0007);
    }

    #[test]
    fn test_rendition_from_u64() {
        let r: Rendition = 42u64.into();
        assert_eq!(r.raw(), 42);
    }

    #[test]
    fn test_rendition_debug_is_hex() {
        let r = Rendition::from_raw(0xFF);
        assert_eq!(format!("{r:?}"), "Rendition(0x00000000000000ff)");
    }
}

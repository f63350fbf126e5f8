//! Buffer module: shared storage for status-line composition.
//!
//! This module contains:
//! - [`Buffer`]: the growable byte storage plus capacity bookkeeping
//! - [`Rendition`]: an opaque 64-bit attribute/color value
//! - [`RendEntry`]: a rendition change recorded at a buffer offset

#[allow(clippy::module_inception)]
mod buffer;
mod rendition;

pub use buffer::Buffer;
pub use rendition::{RendEntry, Rendition};

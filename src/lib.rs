//! # Statline
//!
//! A growable text/rendition buffer for composing terminal status lines.
//!
//! Statline is the composition core a terminal multiplexer uses to assemble
//! window titles, hardstatus lines, and message banners: literal bytes mixed
//! with annotations marking where rendition (color/attribute) changes apply.
//! It does not render anything itself; it hands a finished, terminated string
//! plus the rendition log to whatever writes the terminal.
//!
//! ## Core Concepts
//!
//! - **Shared storage**: one [`Buffer`] holds the bytes; any number of
//!   [`Cursor`]s write into it at independent offsets
//! - **Grow on demand**: writes expand the buffer as needed, and a failed
//!   expansion truncates output instead of corrupting it
//! - **Rendition side-channel**: attribute changes are recorded as opaque
//!   (offset, value) pairs, never decoded here
//!
//! Cursors hold only an integer offset. Every operation takes the buffer as
//! an explicit argument and re-derives storage from it at call time, so a
//! view obtained before a growth can never be used after one — the borrow
//! checker rejects it.
//!
//! ## Example
//!
//! ```rust
//! use statline::{Buffer, Cursor};
//!
//! let mut buf = Buffer::new();
//! let mut title = Cursor::new();
//! let mut clock = Cursor::new();
//!
//! title.copy_bounded(&mut buf, "window 0 | vim", usize::MAX);
//! clock.fast_forward_to_end(&buf);
//! clock.format(&mut buf, format_args!(" | {:02}:{:02}", 12, 34)).unwrap();
//!
//! let line = clock.finish(&mut buf);
//! assert!(line.starts_with(b"window 0 | vim | 12:34\0"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod cursor;

// Re-exports for convenience
pub use buffer::{Buffer, RendEntry, Rendition};
pub use cursor::Cursor;

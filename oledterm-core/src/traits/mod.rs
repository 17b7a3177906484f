//! Resource traits
//!
//! These traits define what the driver needs from the outside world besides
//! the bus.

pub mod glyph;

pub use glyph::{GlyphBitmap, GlyphSource};

//! Text cursor and print modes
//!
//! The terminal is a fixed grid of [`TEXT_LINES`] × [`TEXT_COLUMNS`] cells of
//! 8×8 pixels, independent of the controller chip.

pub mod mapping;

mod engine;
mod mode;

pub use engine::{CharStep, CursorEngine, LineAdvance};
pub use mapping::{physical_page, pixel_column};
pub use mode::PrintMode;

/// Text lines on the panel (one per 8-pixel page)
pub const TEXT_LINES: u8 = 8;

/// Text columns per line
pub const TEXT_COLUMNS: u8 = 16;

/// Glyph cell width in pixels
pub const CHAR_WIDTH_PX: u8 = 8;

/// Glyph cell height in pixels (one page)
pub const CHAR_HEIGHT_PX: u8 = 8;

/// First printable character code (space)
pub const FIRST_PRINTABLE: u8 = 0x20;

/// Last printable character code (`~`)
pub const LAST_PRINTABLE: u8 = 0x7E;

/// Whether `code` has a glyph
pub const fn is_printable(code: u8) -> bool {
    code >= FIRST_PRINTABLE && code <= LAST_PRINTABLE
}

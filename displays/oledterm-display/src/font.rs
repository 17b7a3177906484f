//! Default 8×8 font
//!
//! Glyphs come from the `font8x8` crate, which stores each glyph as eight
//! pixel rows with the least significant bit leftmost. The controller wants
//! eight pixel columns with bit 0 at the top, so every glyph is transposed
//! on lookup.

use font8x8::legacy::BASIC_LEGACY;
use oledterm_core::traits::{GlyphBitmap, GlyphSource};

/// ASCII glyph source backed by `font8x8`
#[derive(Debug, Clone, Copy, Default)]
pub struct Font8x8;

impl GlyphSource for Font8x8 {
    fn glyph(&self, code: u8) -> GlyphBitmap {
        match BASIC_LEGACY.get(code as usize) {
            Some(rows) => rows_to_columns(rows),
            None => [0; 8],
        }
    }
}

/// Transpose a row-major glyph (LSB left) into column-major (LSB top)
pub const fn rows_to_columns(rows: &[u8; 8]) -> GlyphBitmap {
    let mut columns = [0u8; 8];
    let mut row = 0;
    while row < 8 {
        let mut column = 0;
        while column < 8 {
            if rows[row] & (1 << column) != 0 {
                columns[column] |= 1 << row;
            }
            column += 1;
        }
        row += 1;
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_is_blank() {
        assert_eq!(Font8x8.glyph(b' '), [0; 8]);
    }

    #[test]
    fn test_out_of_table_is_blank() {
        assert_eq!(Font8x8.glyph(0x80), [0; 8]);
        assert_eq!(Font8x8.glyph(0xFF), [0; 8]);
    }

    #[test]
    fn test_printable_glyphs_have_pixels() {
        for code in 0x21u8..=0x7E {
            assert_ne!(Font8x8.glyph(code), [0; 8], "glyph {:#x} is empty", code);
        }
    }

    #[test]
    fn test_transpose() {
        // Top row fully lit becomes bit 0 in every column
        let mut rows = [0u8; 8];
        rows[0] = 0xFF;
        assert_eq!(rows_to_columns(&rows), [0x01; 8]);

        // Leftmost pixel of every row becomes column 0 fully lit
        let rows = [0x01u8; 8];
        assert_eq!(rows_to_columns(&rows), [0xFF, 0, 0, 0, 0, 0, 0, 0]);

        // Single pixel at row 2, column 5
        let mut rows = [0u8; 8];
        rows[2] = 1 << 5;
        let columns = rows_to_columns(&rows);
        assert_eq!(columns[5], 1 << 2);
        assert_eq!(columns.iter().filter(|&&c| c != 0).count(), 1);
    }

    #[test]
    fn test_transpose_twice_is_identity() {
        for code in 0x20u8..=0x7E {
            let rows = BASIC_LEGACY[code as usize];
            assert_eq!(rows_to_columns(&rows_to_columns(&rows)), rows);
        }
    }
}

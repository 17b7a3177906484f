//! Glyph source trait

/// One 8×8 glyph, column-major
///
/// Byte `i` is pixel column `i`; bit 0 is the top pixel row. This is the
/// layout the controller expects in page addressing mode, so a bitmap is
/// streamed unchanged.
pub type GlyphBitmap = [u8; 8];

/// Maps character codes to glyph bitmaps
///
/// The driver only asks for printable codes (0x20..=0x7E). Implementations
/// should return a blank cell for anything they do not cover.
pub trait GlyphSource {
    /// Bitmap for `code`
    fn glyph(&self, code: u8) -> GlyphBitmap;
}

impl<T: GlyphSource + ?Sized> GlyphSource for &T {
    fn glyph(&self, code: u8) -> GlyphBitmap {
        (**self).glyph(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every glyph is a solid block whose first column encodes the code
    struct Blocks;

    impl GlyphSource for Blocks {
        fn glyph(&self, code: u8) -> GlyphBitmap {
            let mut bitmap = [0xFF; 8];
            bitmap[0] = code;
            bitmap
        }
    }

    fn first_column<G: GlyphSource>(glyphs: G, code: u8) -> u8 {
        glyphs.glyph(code)[0]
    }

    #[test]
    fn test_reference_forwards() {
        let blocks = Blocks;
        assert_eq!(first_column(&blocks, b'A'), b'A');
        assert_eq!(first_column(&&blocks, b'~'), b'~');
    }
}

//! Logical text grid to controller RAM addressing
//!
//! The hardware display offset register shifts which page is shown at the
//! top of the panel. Text lines are logical: line 0 is always the top line
//! the user sees, so every page address is derived through the current
//! scroll offset.

use super::{CHAR_HEIGHT_PX, CHAR_WIDTH_PX, TEXT_LINES};

/// Physical page holding logical `line` for a given scroll offset
pub const fn physical_page(line: u8, line_offset: u8) -> u8 {
    (line % TEXT_LINES + line_offset % TEXT_LINES) % TEXT_LINES
}

/// First pixel column of text `column`, shifted by the panel's column offset
pub const fn pixel_column(column: u8, column_offset: u8) -> u8 {
    column
        .saturating_mul(CHAR_WIDTH_PX)
        .saturating_add(column_offset)
}

/// Display offset register value (pixel rows) for a scroll offset in lines
pub const fn display_offset_rows(line_offset: u8) -> u8 {
    (line_offset % TEXT_LINES) * CHAR_HEIGHT_PX
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::TEXT_COLUMNS;
    use proptest::prelude::*;

    #[test]
    fn test_unscrolled_page_is_line() {
        for line in 0..TEXT_LINES {
            assert_eq!(physical_page(line, 0), line);
        }
    }

    #[test]
    fn test_scrolled_page_wraps() {
        assert_eq!(physical_page(7, 1), 0);
        assert_eq!(physical_page(3, 5), 0);
        assert_eq!(physical_page(0, 7), 7);
    }

    #[test]
    fn test_pixel_column() {
        assert_eq!(pixel_column(0, 0), 0);
        assert_eq!(pixel_column(0, 2), 2);
        assert_eq!(pixel_column(15, 2), 122);
        assert_eq!(pixel_column(15, 3), 123);
    }

    #[test]
    fn test_display_offset_rows() {
        assert_eq!(display_offset_rows(0), 0);
        assert_eq!(display_offset_rows(1), 8);
        assert_eq!(display_offset_rows(7), 56);
    }

    proptest! {
        #[test]
        fn page_always_in_range(line in 0u8..=255, offset in 0u8..=255) {
            prop_assert!(physical_page(line, offset) < TEXT_LINES);
        }

        #[test]
        fn scrolling_a_full_turn_is_identity(line in 0u8..TEXT_LINES, offset in 0u8..TEXT_LINES) {
            let page = physical_page(line, offset);
            prop_assert_eq!(physical_page(page, TEXT_LINES - offset), line);
        }

        #[test]
        fn grid_fits_in_sh1106_ram(column in 0u8..TEXT_COLUMNS, offset in 0u8..=3) {
            let start = pixel_column(column, offset);
            prop_assert!(start as usize + CHAR_WIDTH_PX as usize <= 132);
            prop_assert_eq!(start % CHAR_WIDTH_PX, offset);
        }
    }
}

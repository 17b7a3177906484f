//! Cursor state machine
//!
//! The engine owns the logical cursor, the print mode and the virtual scroll
//! offset. It never talks to the bus: every operation that needs the panel
//! to follow returns a plan describing what has to be sent.

use super::mapping::{display_offset_rows, physical_page, pixel_column};
use super::{is_printable, PrintMode, TEXT_COLUMNS, TEXT_LINES};

/// Result of moving to the start of another line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineAdvance {
    /// Logical line the cursor now sits on (column is always 0)
    pub line: u8,
    /// New display offset register value when the panel scrolled
    pub scroll_rows: Option<u8>,
    /// Whether the new line must be blanked before use
    pub clear_line: bool,
}

/// What printing one character code requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CharStep {
    /// Code has no glyph; nothing changes
    Ignored,
    /// Newline: move to the next line
    NewLine(LineAdvance),
    /// Render the glyph at the cursor, after committing `wrap` if the
    /// current line was already full
    Glyph {
        /// Line change forced by a full line
        wrap: Option<LineAdvance>,
    },
}

/// Logical cursor, print mode and scroll window
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorEngine {
    line: u8,
    /// 0..=16; 16 means the line is full and the next glyph wraps
    column: u8,
    line_offset: u8,
    print_mode: PrintMode,
}

impl Default for CursorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorEngine {
    /// Cursor at home, no scroll, [`PrintMode::ScrollLine`]
    pub const fn new() -> Self {
        Self {
            line: 0,
            column: 0,
            line_offset: 0,
            print_mode: PrintMode::ScrollLine,
        }
    }

    /// Back to the power-on state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Current logical line
    pub fn line(&self) -> u8 {
        self.line
    }

    /// Current column (16 when the line is full)
    pub fn column(&self) -> u8 {
        self.column
    }

    /// `(line, column)`
    pub fn position(&self) -> (u8, u8) {
        (self.line, self.column)
    }

    /// Scroll window origin in lines
    pub fn line_offset(&self) -> u8 {
        self.line_offset
    }

    /// Active print mode
    pub fn print_mode(&self) -> PrintMode {
        self.print_mode
    }

    /// Select the print mode; the cursor does not move
    pub fn set_print_mode(&mut self, mode: PrintMode) {
        self.print_mode = mode;
    }

    /// Move the cursor if `(line, column)` is on the grid
    ///
    /// Returns `false` and leaves the cursor unchanged otherwise.
    pub fn set_position(&mut self, line: u8, column: u8) -> bool {
        if line >= TEXT_LINES || column >= TEXT_COLUMNS {
            return false;
        }
        self.line = line;
        self.column = column;
        true
    }

    /// Drop the scroll window back to the top of display RAM
    pub fn reset_scroll(&mut self) {
        self.line_offset = 0;
    }

    /// Physical page of a logical line under the current scroll offset
    pub fn page_of(&self, line: u8) -> u8 {
        physical_page(line, self.line_offset)
    }

    /// `(page, pixel column)` of the cursor for a panel column offset
    pub fn placement(&self, column_offset: u8) -> (u8, u8) {
        (
            self.page_of(self.line),
            pixel_column(self.column, column_offset),
        )
    }

    /// Decide what printing `code` requires
    ///
    /// A pending wrap is applied to the cursor here. For
    /// [`CharStep::Glyph`] the caller commits the wrap, renders the glyph and
    /// then calls [`glyph_written`](Self::glyph_written).
    pub fn advance_for_char(&mut self, code: u8) -> CharStep {
        if code == b'\n' {
            return CharStep::NewLine(self.next_line(true));
        }
        if !is_printable(code) {
            return CharStep::Ignored;
        }

        let wrap = if self.column >= TEXT_COLUMNS {
            Some(self.next_line(false))
        } else {
            None
        };
        CharStep::Glyph { wrap }
    }

    /// One glyph has been streamed at the cursor
    pub fn glyph_written(&mut self) {
        if self.column < TEXT_COLUMNS {
            self.column += 1;
        }
    }

    /// Move to column 0 of the line the print mode selects
    ///
    /// `forced` is set for explicit newlines; a natural wrap in
    /// [`PrintMode::OverwriteSameLine`] stays on the current line.
    pub fn next_line(&mut self, forced: bool) -> LineAdvance {
        self.column = 0;

        let mut scroll_rows = None;
        match self.print_mode {
            PrintMode::ScrollLine => {
                if self.line == TEXT_LINES - 1 {
                    scroll_rows = Some(self.scroll_one_line());
                } else {
                    self.line += 1;
                }
            }
            PrintMode::OverwriteNextLine => self.line += 1,
            PrintMode::OverwriteSameLine => {
                if forced {
                    self.line += 1;
                }
            }
        }

        if self.line >= TEXT_LINES {
            self.line = 0;
        }

        LineAdvance {
            line: self.line,
            scroll_rows,
            clear_line: self.print_mode == PrintMode::ScrollLine,
        }
    }

    /// Advance the scroll window by one line; returns the register value
    fn scroll_one_line(&mut self) -> u8 {
        self.line_offset = (self.line_offset + 1) % TEXT_LINES;
        display_offset_rows(self.line_offset)
    }
}

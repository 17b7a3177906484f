//! Print modes

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What happens when a line is full or a newline is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PrintMode {
    /// A full line wraps back to column 0 of the same line; only a newline
    /// moves down
    OverwriteSameLine,
    /// A full line continues on the next line, wrapping from the last line
    /// to the first; nothing is cleared
    OverwriteNextLine,
    /// A full line continues on the next line; on the last line the whole
    /// panel scrolls up by one line and the new line is cleared
    #[default]
    ScrollLine,
}

impl PrintMode {
    /// Name as used in configuration files
    pub const fn name(self) -> &'static str {
        match self {
            PrintMode::OverwriteSameLine => "overwrite_same_line",
            PrintMode::OverwriteNextLine => "overwrite_next_line",
            PrintMode::ScrollLine => "scroll_line",
        }
    }

    /// Parse a print mode name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        [
            PrintMode::OverwriteSameLine,
            PrintMode::OverwriteNextLine,
            PrintMode::ScrollLine,
        ]
        .into_iter()
        .find(|mode| mode.name().eq_ignore_ascii_case(name))
    }

    /// Whether a natural wrap (not a newline) moves to another line
    pub const fn wraps_to_next_line(self) -> bool {
        !matches!(self, PrintMode::OverwriteSameLine)
    }
}

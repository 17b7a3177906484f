//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use oledterm_protocol::ChipKind;

use crate::cursor::PrintMode;

/// Default bus address of SH1106/SSD1306 modules (SA0 low)
pub const ADDRESS_PRIMARY: u8 = 0x3C;

/// Alternative bus address (SA0 high)
pub const ADDRESS_SECONDARY: u8 = 0x3D;

/// Probe [`ADDRESS_PRIMARY`] then [`ADDRESS_SECONDARY`] and use the first
/// that answers
pub const ADDRESS_AUTO: u8 = 0xFF;

/// Largest column offset any supported chip accepts
pub const MAX_COLUMN_OFFSET: u8 = 3;

/// Whether `address` is something `init` accepts
pub const fn is_valid_address(address: u8) -> bool {
    matches!(address, ADDRESS_PRIMARY | ADDRESS_SECONDARY | ADDRESS_AUTO)
}

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Controller chip
    pub chip: ChipKind,
    /// Bus address, or [`ADDRESS_AUTO`]
    pub address: u8,
    /// Print mode after init
    pub print_mode: PrintMode,
    /// Column offset in pixels; `None` keeps the chip default
    pub column_offset: Option<u8>,
    /// Hardware inverse mode (lit background)
    pub inverse: bool,
    /// Panel mounted upside down
    pub flip: bool,
    /// Software-inverted glyphs
    pub inverse_font: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            chip: ChipKind::Ssd1306,
            address: ADDRESS_AUTO,
            print_mode: PrintMode::ScrollLine,
            column_offset: None,
            inverse: false,
            flip: false,
            inverse_font: false,
        }
    }
}

impl DisplayConfig {
    /// Default configuration for a given chip
    pub fn for_chip(chip: ChipKind) -> Self {
        Self {
            chip,
            ..Self::default()
        }
    }

    /// Column offset the driver will end up using
    pub fn effective_column_offset(&self) -> u8 {
        let profile = self.chip.profile();
        match self.column_offset {
            Some(offset) if offset <= MAX_COLUMN_OFFSET => profile.clamp_column_offset(offset),
            _ => profile.default_column_offset,
        }
    }
}

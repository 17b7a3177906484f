//! Per-controller geometry and power-on sequences.
//!
//! SH1106 and SSD1306 share the page/column command set but differ in panel
//! RAM width and in how they must be brought up. The differences are data:
//! the driver selects one [`ChipProfile`] at init and never branches on the
//! chip type afterwards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::command::{opcode, param, Command};

/// Pixel columns covered by the 16 × 8-pixel text grid
pub const GRID_WIDTH_PX: u8 = 128;

/// Supported controller chips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChipKind {
    /// SH1106, 132 pixel columns of RAM
    Sh1106,
    /// SSD1306, 128 pixel columns of RAM
    #[default]
    Ssd1306,
}

impl ChipKind {
    /// The immutable profile for this chip
    pub fn profile(self) -> &'static ChipProfile {
        match self {
            ChipKind::Sh1106 => &SH1106,
            ChipKind::Ssd1306 => &SSD1306,
        }
    }

    /// Lowercase name as used in configuration files
    pub const fn name(self) -> &'static str {
        match self {
            ChipKind::Sh1106 => "sh1106",
            ChipKind::Ssd1306 => "ssd1306",
        }
    }

    /// Parse a chip name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("sh1106") {
            Some(ChipKind::Sh1106)
        } else if name.eq_ignore_ascii_case("ssd1306") {
            Some(ChipKind::Ssd1306)
        } else {
            None
        }
    }
}

/// Immutable per-chip constants
#[derive(Debug, PartialEq, Eq)]
pub struct ChipProfile {
    /// Which chip this profile describes
    pub kind: ChipKind,
    /// Physical pixel columns in display RAM
    pub width_px: u8,
    /// Column offset applied at init
    pub default_column_offset: u8,
    /// Largest column offset the panel leaves room for
    pub max_column_offset: u8,
    /// Number of data bursts needed to blank one page
    pub clear_bursts: u8,
    /// Zero bytes per clear burst
    pub clear_burst_len: u8,
    /// Chip-specific configuration, in send order
    pub power_on: &'static [Command],
}

impl ChipProfile {
    /// Full power-on sequence: chip configuration followed by [`ACTIVATE_SEQUENCE`]
    pub fn power_on_sequence(&self) -> impl Iterator<Item = Command> + '_ {
        self.power_on
            .iter()
            .copied()
            .chain(ACTIVATE_SEQUENCE.iter().copied())
    }

    /// Pixel columns blanked by one full clear sweep
    pub const fn clear_sweep_px(&self) -> usize {
        self.clear_bursts as usize * self.clear_burst_len as usize
    }

    /// Clamp a requested column offset to what this panel allows
    pub const fn clamp_column_offset(&self, offset: u8) -> u8 {
        if offset > self.max_column_offset {
            self.max_column_offset
        } else {
            offset
        }
    }
}

/// Sent after every chip's own configuration: home the RAM pointer, switch
/// the panel on and select the unrotated orientation.
pub const ACTIVATE_SEQUENCE: [Command; 6] = [
    Command::Single(opcode::PAGE_ADDRESS),
    Command::Single(opcode::COLUMN_ADDRESS_LOW),
    Command::Single(opcode::COLUMN_ADDRESS_HIGH),
    Command::Single(opcode::DISPLAY_ON),
    Command::Single(opcode::SEG_ROTATION_RIGHT),
    Command::Single(opcode::OUTPUT_SCAN_NORMAL),
];

const SH1106_POWER_ON: [Command; 14] = [
    Command::Single(opcode::DISPLAY_OFF),
    Command::Single(opcode::ENTIRE_DISPLAY_NORMAL),
    Command::WithParam(
        opcode::CLK_DIV_OSC_FREQ,
        param::OSC_FREQ_VARIATION_P_M_0 | param::CLOCK_DIV_RATIO_1,
    ),
    Command::WithParam(opcode::SET_MULTIPLEX_RATIO, param::MULTIPLEX_64),
    Command::WithParam(opcode::DISPLAY_LINE_OFFSET, 0),
    Command::Single(opcode::DISPLAY_START_LINE),
    Command::WithParam(opcode::CHARGE_PUMP_SETTING, param::CHARGE_PUMP_ON),
    Command::WithParam(opcode::DC_DC_CONTROL_MODE, param::DC_DC_ON),
    Command::WithParam(
        opcode::DIS_PRE_CHARGE_PERIOD,
        param::DIS_CHARGE_PERIOD_DCLK_2 | param::PRE_CHARGE_PERIOD_DCLK_2,
    ),
    Command::WithParam(opcode::SET_VCOM_DESELECT_LEVEL, 0x35),
    Command::Single(opcode::DC_DC_PUMP_VOLTAGE_8_0),
    Command::WithParam(opcode::SET_CONTRAST, 0xFF),
    Command::Single(opcode::MODE_NORMAL),
    Command::WithParam(opcode::SET_COM_PINS, param::COM_PINS_ALTERNATIVE),
];

const SSD1306_POWER_ON: [Command; 13] = [
    Command::Single(opcode::DISPLAY_OFF),
    Command::WithParam(
        opcode::CLK_DIV_OSC_FREQ,
        param::OSC_FREQ_VARIATION_P_15 | param::CLOCK_DIV_RATIO_1,
    ),
    Command::WithParam(opcode::SET_MULTIPLEX_RATIO, param::MULTIPLEX_64),
    Command::WithParam(opcode::DISPLAY_LINE_OFFSET, 0),
    Command::Single(opcode::DISPLAY_START_LINE),
    Command::WithParam(opcode::CHARGE_PUMP_SETTING, param::CHARGE_PUMP_ON),
    Command::WithParam(opcode::MEMORY_ADR_MODE, param::ADR_MODE_PAGE),
    Command::WithParam(opcode::SET_COM_PINS, param::COM_PINS_ALTERNATIVE),
    Command::WithParam(opcode::SET_CONTRAST, 0xCF),
    Command::WithParam(
        opcode::DIS_PRE_CHARGE_PERIOD,
        param::DIS_CHARGE_PERIOD_DCLK_15 | param::PRE_CHARGE_PERIOD_DCLK_1,
    ),
    Command::WithParam(opcode::SET_VCOM_DESELECT_LEVEL, 0x40),
    Command::Single(opcode::ENTIRE_DISPLAY_NORMAL),
    Command::Single(opcode::MODE_NORMAL),
];

/// SH1106: 132 columns, 4 pixels of slack; 6 × 22 bytes per clear sweep
pub static SH1106: ChipProfile = ChipProfile {
    kind: ChipKind::Sh1106,
    width_px: 132,
    default_column_offset: 2,
    max_column_offset: 3,
    clear_bursts: 6,
    clear_burst_len: 22,
    power_on: &SH1106_POWER_ON,
};

/// SSD1306: 128 columns, no slack; 8 × 16 bytes per clear sweep
pub static SSD1306: ChipProfile = ChipProfile {
    kind: ChipKind::Ssd1306,
    width_px: 128,
    default_column_offset: 0,
    max_column_offset: 0,
    clear_bursts: 8,
    clear_burst_len: 16,
    power_on: &SSD1306_POWER_ON,
};

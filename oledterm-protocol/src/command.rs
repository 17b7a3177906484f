//! Controller opcodes and logical commands.
//!
//! The opcode values are shared by SH1106 and SSD1306 unless noted. They are
//! hardware constants and must not change.

/// Control bytes that precede opcodes or data within a burst
pub mod prefix {
    /// Another command follows this one in the same burst
    pub const NEXT_COMMAND: u8 = 0x80;
    /// This is the last command of the burst
    pub const LAST_COMMAND: u8 = 0x00;
    /// The rest of the burst is display RAM data
    pub const DATA: u8 = 0x40;
}

/// Controller opcodes
pub mod opcode {
    /// Lower nibble of the column address (OR the nibble in)
    pub const COLUMN_ADDRESS_LOW: u8 = 0x00;
    /// Upper nibble of the column address (OR the nibble in)
    pub const COLUMN_ADDRESS_HIGH: u8 = 0x10;
    /// Display start line (OR the line in)
    pub const DISPLAY_START_LINE: u8 = 0x40;
    /// Contrast, followed by one parameter byte
    pub const SET_CONTRAST: u8 = 0x81;
    /// Segment remap: column 0 on SEG0
    pub const SEG_ROTATION_RIGHT: u8 = 0xA0;
    /// Segment remap: column 0 on the last SEG
    pub const SEG_ROTATION_LEFT: u8 = 0xA1;
    /// Show RAM content
    pub const ENTIRE_DISPLAY_NORMAL: u8 = 0xA4;
    /// Normal pixel polarity
    pub const MODE_NORMAL: u8 = 0xA6;
    /// Inverted pixel polarity
    pub const MODE_INVERSE: u8 = 0xA7;
    /// Multiplex ratio, followed by one parameter byte
    pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;
    /// Panel off (sleep)
    pub const DISPLAY_OFF: u8 = 0xAE;
    /// Panel on
    pub const DISPLAY_ON: u8 = 0xAF;
    /// Page address (OR the page in)
    pub const PAGE_ADDRESS: u8 = 0xB0;
    /// COM scan from COM0
    pub const OUTPUT_SCAN_NORMAL: u8 = 0xC0;
    /// COM scan towards COM0
    pub const OUTPUT_SCAN_INVERSE: u8 = 0xC8;
    /// Display offset (vertical shift in pixel rows), followed by one parameter byte
    pub const DISPLAY_LINE_OFFSET: u8 = 0xD3;
    /// Clock divide ratio / oscillator frequency, followed by one parameter byte
    pub const CLK_DIV_OSC_FREQ: u8 = 0xD5;
    /// Discharge / precharge period, followed by one parameter byte
    pub const DIS_PRE_CHARGE_PERIOD: u8 = 0xD9;
    /// COM pins hardware configuration, followed by one parameter byte
    pub const SET_COM_PINS: u8 = 0xDA;
    /// VCOM deselect level, followed by one parameter byte
    pub const SET_VCOM_DESELECT_LEVEL: u8 = 0xDB;

    // SH1106 only
    /// DC-DC pump voltage 8.0 V
    pub const DC_DC_PUMP_VOLTAGE_8_0: u8 = 0x32;
    /// DC-DC control mode, followed by one parameter byte
    pub const DC_DC_CONTROL_MODE: u8 = 0xAD;

    // SSD1306 only
    /// Memory addressing mode, followed by one parameter byte
    pub const MEMORY_ADR_MODE: u8 = 0x20;
    /// Charge pump setting, followed by one parameter byte
    pub const CHARGE_PUMP_SETTING: u8 = 0x8D;
}

/// Parameter values for the configuration opcodes
pub mod param {
    /// Clock divide ratio 1
    pub const CLOCK_DIV_RATIO_1: u8 = 0x00;
    /// Oscillator frequency, nominal
    pub const OSC_FREQ_VARIATION_P_M_0: u8 = 0x50;
    /// Oscillator frequency, +15 %
    pub const OSC_FREQ_VARIATION_P_15: u8 = 0x80;
    /// Multiplex ratio for 64 COM lines
    pub const MULTIPLEX_64: u8 = 0x3F;
    /// Enable the internal charge pump
    pub const CHARGE_PUMP_ON: u8 = 0x14;
    /// SH1106 DC-DC converter on
    pub const DC_DC_ON: u8 = 0x8B;
    /// Page addressing mode
    pub const ADR_MODE_PAGE: u8 = 0x02;
    /// Alternative COM pin configuration
    pub const COM_PINS_ALTERNATIVE: u8 = 0x12;
    /// Precharge period 1 DCLK
    pub const PRE_CHARGE_PERIOD_DCLK_1: u8 = 0x01;
    /// Precharge period 2 DCLK
    pub const PRE_CHARGE_PERIOD_DCLK_2: u8 = 0x02;
    /// Discharge period 2 DCLK
    pub const DIS_CHARGE_PERIOD_DCLK_2: u8 = 0x20;
    /// Discharge period 15 DCLK
    pub const DIS_CHARGE_PERIOD_DCLK_15: u8 = 0xF0;
}

/// Mask applied to the page number before it is ORed into [`opcode::PAGE_ADDRESS`]
pub const PAGE_MASK: u8 = 0x0F;

/// A logical controller command
///
/// Each command is sent as its own burst: `[LAST_COMMAND, op]` or
/// `[LAST_COMMAND, op, param]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Opcode without parameter
    Single(u8),
    /// Opcode followed by a parameter byte
    WithParam(u8, u8),
}

impl Command {
    /// Normal or inverted pixel polarity for the whole panel
    pub const fn inverse(inverse: bool) -> Self {
        if inverse {
            Command::Single(opcode::MODE_INVERSE)
        } else {
            Command::Single(opcode::MODE_NORMAL)
        }
    }

    /// Segment remap for a normal or 180° rotated panel
    pub const fn segment_remap(flipped: bool) -> Self {
        if flipped {
            Command::Single(opcode::SEG_ROTATION_LEFT)
        } else {
            Command::Single(opcode::SEG_ROTATION_RIGHT)
        }
    }

    /// COM scan direction for a normal or 180° rotated panel
    pub const fn scan_direction(flipped: bool) -> Self {
        if flipped {
            Command::Single(opcode::OUTPUT_SCAN_INVERSE)
        } else {
            Command::Single(opcode::OUTPUT_SCAN_NORMAL)
        }
    }

    /// Vertical display offset in pixel rows
    pub const fn display_offset(rows: u8) -> Self {
        Command::WithParam(opcode::DISPLAY_LINE_OFFSET, rows)
    }

    /// The opcode byte of this command
    pub const fn opcode(&self) -> u8 {
        match *self {
            Command::Single(op) | Command::WithParam(op, _) => op,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_commands() {
        assert_eq!(Command::inverse(true), Command::Single(0xA7));
        assert_eq!(Command::inverse(false), Command::Single(0xA6));
    }

    #[test]
    fn test_orientation_commands() {
        assert_eq!(Command::segment_remap(true).opcode(), 0xA1);
        assert_eq!(Command::segment_remap(false).opcode(), 0xA0);
        assert_eq!(Command::scan_direction(true).opcode(), 0xC8);
        assert_eq!(Command::scan_direction(false).opcode(), 0xC0);
    }

    #[test]
    fn test_display_offset_carries_parameter() {
        assert_eq!(Command::display_offset(24), Command::WithParam(0xD3, 24));
        assert_eq!(Command::display_offset(0).opcode(), 0xD3);
    }
}

//! Burst encoding for the controller's I2C framing.
//!
//! [`CommandEncoder`] owns one fixed-capacity buffer that is rebuilt for every
//! burst, so a driver instance never allocates and never shares buffers with
//! another instance. Each method returns the finished burst, ready to be
//! handed to the bus as a single write.

use heapless::Vec;

use crate::command::{opcode, prefix, Command, PAGE_MASK};

/// Maximum burst size in bytes (control bytes included)
///
/// Many I2C peripherals cap a single transfer around 32 bytes, which is why
/// the clear sweeps are split into several data bursts.
pub const MAX_BURST_LEN: usize = 32;

/// Width of one glyph in pixel columns (one data byte per column)
pub const GLYPH_WIDTH: usize = 8;

/// Errors that can occur while building a burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BurstError {
    /// Payload and control bytes do not fit into [`MAX_BURST_LEN`]
    PayloadTooLarge,
    /// A command burst needs at least one opcode
    Empty,
}

/// Split a pixel column into the (low, high) nibbles of the column address
pub const fn split_column(pixel_column: u8) -> (u8, u8) {
    (pixel_column & 0x0F, pixel_column >> 4)
}

/// Builds framed bursts in a reusable buffer
#[derive(Debug, Clone, Default)]
pub struct CommandEncoder {
    buffer: Vec<u8, MAX_BURST_LEN>,
}

impl CommandEncoder {
    /// Create an encoder with an empty buffer
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Encode a single command as `[LAST_COMMAND, op]` or `[LAST_COMMAND, op, param]`
    pub fn command(&mut self, command: Command) -> &[u8] {
        self.buffer.clear();
        // At most three bytes, cannot exceed the capacity
        let _ = self.buffer.push(prefix::LAST_COMMAND);
        match command {
            Command::Single(op) => {
                let _ = self.buffer.push(op);
            }
            Command::WithParam(op, param) => {
                let _ = self.buffer.push(op);
                let _ = self.buffer.push(param);
            }
        }
        &self.buffer
    }

    /// Encode several opcodes as one chained command burst
    ///
    /// Every opcode but the last is preceded by `NEXT_COMMAND`, the last one
    /// by `LAST_COMMAND`.
    pub fn chain(&mut self, opcodes: &[u8]) -> Result<&[u8], BurstError> {
        if opcodes.is_empty() {
            return Err(BurstError::Empty);
        }
        if opcodes.len() * 2 > MAX_BURST_LEN {
            return Err(BurstError::PayloadTooLarge);
        }

        self.buffer.clear();
        let last = opcodes.len() - 1;
        for (i, &op) in opcodes.iter().enumerate() {
            let control = if i == last {
                prefix::LAST_COMMAND
            } else {
                prefix::NEXT_COMMAND
            };
            // Length checked above
            let _ = self.buffer.push(control);
            let _ = self.buffer.push(op);
        }
        Ok(&self.buffer)
    }

    /// Encode the fixed 3-opcode cursor positioning burst
    ///
    /// `[0x80, PAGE|page, 0x80, COL_LOW|low, 0x00, COL_HIGH|high]`
    pub fn position(&mut self, page: u8, pixel_column: u8) -> &[u8] {
        let (low, high) = split_column(pixel_column);
        let opcodes = [
            opcode::PAGE_ADDRESS | (page & PAGE_MASK),
            opcode::COLUMN_ADDRESS_LOW | low,
            opcode::COLUMN_ADDRESS_HIGH | high,
        ];
        // Three opcodes always fit
        match self.chain(&opcodes) {
            Ok(burst) => burst,
            Err(_) => &[],
        }
    }

    /// Encode a data burst: `DATA` followed by the payload
    pub fn data(&mut self, payload: &[u8]) -> Result<&[u8], BurstError> {
        if payload.len() + 1 > MAX_BURST_LEN {
            return Err(BurstError::PayloadTooLarge);
        }

        self.buffer.clear();
        let _ = self.buffer.push(prefix::DATA);
        self.buffer
            .extend_from_slice(payload)
            .map_err(|_| BurstError::PayloadTooLarge)?;
        Ok(&self.buffer)
    }

    /// Encode a data burst of `len` copies of `byte`
    pub fn fill(&mut self, len: usize, byte: u8) -> Result<&[u8], BurstError> {
        if len + 1 > MAX_BURST_LEN {
            return Err(BurstError::PayloadTooLarge);
        }

        self.buffer.clear();
        let _ = self.buffer.push(prefix::DATA);
        for _ in 0..len {
            let _ = self.buffer.push(byte);
        }
        Ok(&self.buffer)
    }

    /// Encode one glyph's eight column bytes as a data burst
    ///
    /// With `inverse` every bit is flipped, drawing dark text on a lit cell.
    pub fn glyph(&mut self, bitmap: &[u8; GLYPH_WIDTH], inverse: bool) -> &[u8] {
        self.buffer.clear();
        let _ = self.buffer.push(prefix::DATA);
        for &column in bitmap {
            let _ = self.buffer.push(if inverse { !column } else { column });
        }
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_command() {
        let mut encoder = CommandEncoder::new();
        assert_eq!(encoder.command(Command::Single(0xAF)), &[0x00, 0xAF]);
    }

    #[test]
    fn test_command_with_parameter() {
        let mut encoder = CommandEncoder::new();
        assert_eq!(
            encoder.command(Command::WithParam(0xD3, 0x18)),
            &[0x00, 0xD3, 0x18]
        );
    }

    #[test]
    fn test_chain_prefixes() {
        let mut encoder = CommandEncoder::new();
        let burst = encoder.chain(&[0xAE, 0xA4, 0xAF]).unwrap();
        assert_eq!(burst, &[0x80, 0xAE, 0x80, 0xA4, 0x00, 0xAF]);

        let burst = encoder.chain(&[0xA6]).unwrap();
        assert_eq!(burst, &[0x00, 0xA6]);
    }

    #[test]
    fn test_chain_rejects_empty_and_oversized() {
        let mut encoder = CommandEncoder::new();
        assert_eq!(encoder.chain(&[]), Err(BurstError::Empty));
        assert_eq!(
            encoder.chain(&[0xE3; MAX_BURST_LEN / 2 + 1]),
            Err(BurstError::PayloadTooLarge)
        );
    }

    #[test]
    fn test_position_home() {
        let mut encoder = CommandEncoder::new();
        assert_eq!(
            encoder.position(0, 0),
            &[0x80, 0xB0, 0x80, 0x00, 0x00, 0x10]
        );
    }

    #[test]
    fn test_position_splits_column() {
        let mut encoder = CommandEncoder::new();
        // Text column 15 with a 2 pixel offset: 15 * 8 + 2 = 122 = 0x7A
        assert_eq!(
            encoder.position(7, 122),
            &[0x80, 0xB7, 0x80, 0x0A, 0x00, 0x17]
        );
    }

    #[test]
    fn test_position_masks_page() {
        let mut encoder = CommandEncoder::new();
        let burst = encoder.position(0x13, 0);
        assert_eq!(burst[1], 0xB3);
    }

    #[test]
    fn test_data_burst() {
        let mut encoder = CommandEncoder::new();
        assert_eq!(encoder.data(&[1, 2, 3]).unwrap(), &[0x40, 1, 2, 3]);
        assert_eq!(
            encoder.data(&[0u8; MAX_BURST_LEN]),
            Err(BurstError::PayloadTooLarge)
        );
    }

    #[test]
    fn test_fill_burst() {
        let mut encoder = CommandEncoder::new();
        let burst = encoder.fill(22, 0x00).unwrap();
        assert_eq!(burst.len(), 23);
        assert_eq!(burst[0], 0x40);
        assert!(burst[1..].iter().all(|&b| b == 0));

        assert_eq!(encoder.fill(MAX_BURST_LEN, 0), Err(BurstError::PayloadTooLarge));
    }

    #[test]
    fn test_glyph_burst_inverse() {
        let mut encoder = CommandEncoder::new();
        let bitmap = [0x00, 0x7E, 0x11, 0x11, 0x11, 0x7E, 0x00, 0x00];

        let normal = encoder.glyph(&bitmap, false);
        assert_eq!(normal, &[0x40, 0x00, 0x7E, 0x11, 0x11, 0x11, 0x7E, 0x00, 0x00]);

        let inverted = encoder.glyph(&bitmap, true);
        assert_eq!(inverted, &[0x40, 0xFF, 0x81, 0xEE, 0xEE, 0xEE, 0x81, 0xFF, 0xFF]);
    }

    #[test]
    fn test_buffer_reused_between_bursts() {
        let mut encoder = CommandEncoder::new();
        let _ = encoder.fill(16, 0xFF).unwrap();
        assert_eq!(encoder.command(Command::Single(0xA6)), &[0x00, 0xA6]);
    }

    proptest! {
        #[test]
        fn split_column_recombines(column in 0u8..=131) {
            let (low, high) = split_column(column);
            prop_assert!(low <= 0x0F);
            prop_assert_eq!((high << 4) | low, column);
        }

        #[test]
        fn position_is_always_six_bytes(page in 0u8..8, column in 0u8..=131) {
            let mut encoder = CommandEncoder::new();
            let burst = encoder.position(page, column);
            prop_assert_eq!(burst.len(), 6);
            prop_assert_eq!(burst[0], prefix::NEXT_COMMAND);
            prop_assert_eq!(burst[2], prefix::NEXT_COMMAND);
            prop_assert_eq!(burst[4], prefix::LAST_COMMAND);
            prop_assert_eq!(burst[1], opcode::PAGE_ADDRESS | page);
        }
    }
}

//! I2C bus abstractions
//!
//! Provides the write-only I2C master trait the display driver needs, plus an
//! adapter for any blocking `embedded-hal` I2C implementation.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

/// I2C bus master (write-only)
///
/// The display never reads back from the controller, so only a blocking
/// write is required. A zero-length write is used as a presence probe: the
/// transfer succeeds only if a device acknowledges its address.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write (may be empty for a presence probe)
    /// * `timeout_ms` - Upper bound for the whole transfer
    fn write(&mut self, address: u8, data: &[u8], timeout_ms: u32) -> Result<(), Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8], timeout_ms: u32) -> Result<(), Self::Error> {
        (**self).write(address, data, timeout_ms)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 400_000, // 400 kHz, what SH1106/SSD1306 modules are usually run at
        }
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };
}

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received (no device at the address, or data refused)
    Nack,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<ErrorKind> for I2cBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => I2cBusError::Bus,
            ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
            ErrorKind::NoAcknowledge(_) => I2cBusError::Nack,
            ErrorKind::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}

/// Adapter from a blocking `embedded-hal` I2C peripheral to [`I2cBus`]
///
/// `embedded-hal` has no per-transfer timeout; the peripheral's own
/// configured timeout applies and `timeout_ms` is ignored.
#[derive(Debug)]
pub struct BlockingI2c<I> {
    i2c: I,
}

impl<I> BlockingI2c<I> {
    /// Wrap an `embedded-hal` I2C peripheral
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Give the wrapped peripheral back
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> I2cBus for BlockingI2c<I> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8], _timeout_ms: u32) -> Result<(), Self::Error> {
        self.i2c
            .write(address, data)
            .map_err(|e| I2cBusError::from(e.kind()))
    }
}

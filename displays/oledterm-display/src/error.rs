//! Driver errors

/// Errors reported by [`OledDisplay`](crate::OledDisplay)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Requested address is not 0x3C, 0x3D or auto
    InvalidAddress,
    /// No device acknowledged the probe
    DeviceNotFound,
    /// A burst was not acknowledged after init
    Transport,
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayError::InvalidAddress => f.write_str("invalid display address"),
            DisplayError::DeviceNotFound => f.write_str("no display found on the bus"),
            DisplayError::Transport => f.write_str("display write failed"),
        }
    }
}

//! Bus-free core logic for the OLED text terminal
//!
//! This crate contains everything about the terminal that can be decided
//! without touching the I2C bus:
//!
//! - Cursor / print-mode state machine and the virtual scroll window
//! - Logical line to physical page mapping
//! - Glyph source trait
//! - Configuration types and the `display.toml` parser
//!
//! The driver in `oledterm-display` turns the plans produced here into
//! bursts on the wire.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod cursor;
pub mod traits;

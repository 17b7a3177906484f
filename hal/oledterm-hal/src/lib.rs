//! oledterm Hardware Abstraction Layer
//!
//! This crate defines the bus trait the display driver talks through, so the
//! same driver code runs on any platform that can issue a blocking I2C write.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  oledterm-display (OledDisplay facade)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  oledterm-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  BlockingI2c  │       │  board/test   │
//! │ (embedded-hal)│       │  bus impls    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - write-only I2C master operations

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;

// Re-export key items at crate root for convenience
pub use i2c::{BlockingI2c, I2cBus, I2cBusError, I2cConfig};

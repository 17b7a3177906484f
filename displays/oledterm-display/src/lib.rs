//! Text terminal for SH1106 / SSD1306 OLED panels
//!
//! Presents a 64×128 pixel panel as 8 lines of 16 characters and hides the
//! controller's page/column addressing and command framing.
//!
//! # Architecture
//!
//! ```text
//!   print("…")
//!       │
//!   ┌───▼──────────┐   plan    ┌────────────────┐
//!   │ CursorEngine ├──────────►│  OledDisplay   │
//!   └──────────────┘           │ (this crate)   │
//!   ┌──────────────┐  bitmap   │                │  bursts  ┌────────┐
//!   │ GlyphSource  ├──────────►│ CommandEncoder ├─────────►│ I2cBus │
//!   └──────────────┘           │ + ChipProfile  │          └────────┘
//!                              └────────────────┘
//! ```
//!
//! The bus is write-only and every call is blocking. Only
//! [`OledDisplay::init`] reports errors; see the driver docs.
//!
//! # Example
//!
//! ```ignore
//! use oledterm_display::{ChipKind, OledDisplay, ADDRESS_AUTO};
//!
//! let mut display = OledDisplay::new(bus, ChipKind::Sh1106);
//! display.init(ADDRESS_AUTO)?;
//! display.println("Hello");
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod driver;
pub mod error;
pub mod font;

// Re-export key types
pub use driver::{OledDisplay, WRITE_TIMEOUT_MS};
pub use error::DisplayError;
pub use font::Font8x8;

pub use oledterm_core::config::{
    parse_display_config, ConfigError, DisplayConfig, ADDRESS_AUTO, ADDRESS_PRIMARY,
    ADDRESS_SECONDARY,
};
pub use oledterm_core::cursor::{PrintMode, TEXT_COLUMNS, TEXT_LINES};
pub use oledterm_core::traits::{GlyphBitmap, GlyphSource};
pub use oledterm_hal::{BlockingI2c, I2cBus};
pub use oledterm_protocol::ChipKind;

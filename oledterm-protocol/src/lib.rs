//! SH1106 / SSD1306 I2C Wire Protocol
//!
//! This crate defines the byte-level protocol spoken to page/column addressed
//! OLED controllers over I2C, and the per-chip constants the text driver
//! needs. It knows nothing about cursors or text; it only frames bytes.
//!
//! # Protocol Overview
//!
//! Every I2C write (a *burst*) starts with control bytes telling the
//! controller how to interpret what follows:
//! ```text
//! command burst:  ┌──────┬────┬──────┬────┬─────┬──────┬────┐
//!                 │ 0x80 │ op │ 0x80 │ op │ ... │ 0x00 │ op │
//!                 └──────┴────┴──────┴────┴─────┴──────┴────┘
//! data burst:     ┌──────┬──────┬──────┬─────┐
//!                 │ 0x40 │ byte │ byte │ ... │
//!                 └──────┴──────┴──────┴─────┘
//! ```
//!
//! A configuration command that takes a parameter byte is sent as
//! `[0x00, op, param]`.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod encoder;
pub mod profile;

pub use command::{opcode, param, prefix, Command, PAGE_MASK};
pub use encoder::{split_column, BurstError, CommandEncoder, GLYPH_WIDTH, MAX_BURST_LEN};
pub use profile::{ChipKind, ChipProfile, ACTIVATE_SEQUENCE, GRID_WIDTH_PX, SH1106, SSD1306};

//! Text terminal driver
//!
//! Composes the cursor engine, the burst encoder and a chip profile over an
//! [`I2cBus`]. All bus traffic is fire-and-forget: only [`OledDisplay::init`]
//! reports a status. Every other operation is a no-op until `init` succeeds
//! and ignores write failures, apart from latching the first one for
//! [`OledDisplay::take_transport_error`].

use oledterm_core::config::{
    is_valid_address, DisplayConfig, ADDRESS_AUTO, ADDRESS_PRIMARY, ADDRESS_SECONDARY,
    MAX_COLUMN_OFFSET,
};
use oledterm_core::cursor::{
    CharStep, CursorEngine, LineAdvance, PrintMode, TEXT_COLUMNS, TEXT_LINES,
};
use oledterm_core::traits::GlyphSource;
use oledterm_hal::I2cBus;
use oledterm_protocol::{ChipKind, ChipProfile, Command, CommandEncoder};

use crate::error::DisplayError;
use crate::font::Font8x8;

/// Timeout passed with every bus write
pub const WRITE_TIMEOUT_MS: u32 = 50;

/// 8 × 16 character terminal on an SH1106 or SSD1306 panel
pub struct OledDisplay<B, G = Font8x8> {
    bus: B,
    glyphs: G,
    profile: &'static ChipProfile,
    /// Address in use; meaningful only while connected
    address: u8,
    connected: bool,
    cursor: CursorEngine,
    column_offset: u8,
    inverse_font: bool,
    inverse: bool,
    flipped: bool,
    encoder: CommandEncoder,
    transport_error: Option<DisplayError>,
}

impl<B: I2cBus> OledDisplay<B, Font8x8> {
    /// Create a disconnected display using the built-in font
    pub fn new(bus: B, chip: ChipKind) -> Self {
        Self::with_glyphs(bus, chip, Font8x8)
    }

    /// Create, initialise and configure a display in one go
    pub fn from_config(bus: B, config: &DisplayConfig) -> Result<Self, DisplayError> {
        let mut display = Self::new(bus, config.chip);
        display.apply_config(config)?;
        Ok(display)
    }
}

impl<B: I2cBus, G: GlyphSource> OledDisplay<B, G> {
    /// Create a disconnected display with a custom glyph source
    pub fn with_glyphs(bus: B, chip: ChipKind, glyphs: G) -> Self {
        Self {
            bus,
            glyphs,
            profile: chip.profile(),
            address: ADDRESS_PRIMARY,
            connected: false,
            cursor: CursorEngine::new(),
            column_offset: 0,
            inverse_font: false,
            inverse: false,
            flipped: false,
            encoder: CommandEncoder::new(),
            transport_error: None,
        }
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }

    /// Find the panel, power it up and clear it
    ///
    /// `address` is [`ADDRESS_PRIMARY`], [`ADDRESS_SECONDARY`] or
    /// [`ADDRESS_AUTO`] to probe both in that order. All state is reset
    /// first, so a failed call leaves the display disconnected.
    pub fn init(&mut self, address: u8) -> Result<(), DisplayError> {
        self.reset_state();

        if !is_valid_address(address) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Invalid display address {=u8:#x}", address);
            return Err(DisplayError::InvalidAddress);
        }

        let address = if address == ADDRESS_AUTO {
            self.detect().ok_or(DisplayError::DeviceNotFound)?
        } else {
            address
        };

        if !self.probe(address) {
            #[cfg(feature = "defmt")]
            defmt::warn!("No display at {=u8:#x}", address);
            return Err(DisplayError::DeviceNotFound);
        }

        self.address = address;
        self.connected = true;
        self.column_offset = self.profile.default_column_offset;

        let profile = self.profile;
        for command in profile.power_on_sequence() {
            self.send_command(command);
        }

        self.clear();

        #[cfg(feature = "defmt")]
        defmt::info!(
            "{} initialised at {=u8:#x}",
            self.profile.kind,
            self.address
        );
        Ok(())
    }

    /// Run [`init`](Self::init) and apply the rest of `config`
    pub fn apply_config(&mut self, config: &DisplayConfig) -> Result<(), DisplayError> {
        self.profile = config.chip.profile();
        self.init(config.address)?;

        if let Some(offset) = config.column_offset {
            self.set_display_column_offset(offset);
            self.home();
        }
        self.set_print_mode(config.print_mode);
        self.set_inverse_font(config.inverse_font);
        if config.inverse {
            self.set_inverse(true);
        }
        if config.flip {
            self.flip(true);
        }
        Ok(())
    }

    /// Print one character code
    ///
    /// `\n` moves to the next line; codes without a glyph are ignored.
    pub fn print_char(&mut self, code: u8) {
        if !self.connected {
            return;
        }

        match self.cursor.advance_for_char(code) {
            CharStep::Ignored => {}
            CharStep::NewLine(advance) => self.commit_line_advance(advance),
            CharStep::Glyph { wrap } => {
                if let Some(advance) = wrap {
                    self.commit_line_advance(advance);
                }
                let bitmap = self.glyphs.glyph(code);
                let burst = self.encoder.glyph(&bitmap, self.inverse_font);
                let result = self.bus.write(self.address, burst, WRITE_TIMEOUT_MS);
                self.note_write(result);
                self.cursor.glyph_written();
            }
        }
    }

    /// Print text at the cursor, byte by byte
    pub fn print(&mut self, text: &str) {
        if !self.connected {
            return;
        }
        for code in text.bytes() {
            self.print_char(code);
        }
    }

    /// Print text, then move to the next line
    pub fn println(&mut self, text: &str) {
        if !self.connected {
            return;
        }
        self.print(text);
        self.next_line(true);
    }

    /// Blank the whole panel, undo any scrolling and home the cursor
    pub fn clear(&mut self) {
        if !self.connected {
            return;
        }
        for row in 0..TEXT_LINES {
            self.clear_line(row);
        }
        self.cursor.reset_scroll();
        self.send_command(Command::display_offset(0));
        self.set_cursor(0, 0);
    }

    /// Blank one text line and leave the cursor at its start
    ///
    /// Rows outside the grid are ignored.
    pub fn clear_line(&mut self, row: u8) {
        if !self.connected || !self.cursor.set_position(row, 0) {
            return;
        }

        let page = self.cursor.page_of(row);
        self.send_position(page, 0);
        for _ in 0..self.profile.clear_bursts {
            self.send_zero_fill(self.profile.clear_burst_len);
        }
        self.send_position(page, self.column_offset);
    }

    /// Blank the line the cursor is on
    pub fn clear_current_line(&mut self) {
        self.clear_line(self.cursor.line());
    }

    /// Move the cursor; positions outside the grid are ignored
    pub fn set_cursor(&mut self, line: u8, column: u8) {
        if !self.connected || !self.cursor.set_position(line, column) {
            return;
        }
        let (page, pixel_column) = self.cursor.placement(self.column_offset);
        self.send_position(page, pixel_column);
    }

    /// Move the cursor to the top left cell
    pub fn home(&mut self) {
        self.set_cursor(0, 0);
    }

    /// Hardware inverse: lit background, dark text
    pub fn set_inverse(&mut self, inverse: bool) {
        if !self.connected {
            return;
        }
        self.inverse = inverse;
        self.send_command(Command::inverse(inverse));
    }

    /// Rotate the output by 180° and clear the panel
    pub fn flip(&mut self, flip: bool) {
        if !self.connected {
            return;
        }
        self.flipped = flip;
        self.send_command(Command::segment_remap(flip));
        self.send_command(Command::scan_direction(flip));
        self.clear();
    }

    /// Draw following glyphs bit-inverted; the panel is untouched
    pub fn set_inverse_font(&mut self, inverse: bool) {
        self.inverse_font = inverse;
    }

    /// Select the print mode; the panel is untouched
    pub fn set_print_mode(&mut self, mode: PrintMode) {
        self.cursor.set_print_mode(mode);
    }

    /// Shift the text grid right by up to 3 pixels
    ///
    /// Values above 3 are ignored. Panels without spare columns (SSD1306)
    /// always use 0. Takes effect at the next cursor positioning.
    pub fn set_display_column_offset(&mut self, offset: u8) {
        if offset > MAX_COLUMN_OFFSET {
            return;
        }
        self.column_offset = self.profile.clamp_column_offset(offset);
    }

    /// Text lines on the panel
    pub const fn max_text_lines() -> u8 {
        TEXT_LINES
    }

    /// Text columns per line
    pub const fn max_text_columns() -> u8 {
        TEXT_COLUMNS
    }

    /// `(line, column)` of the cursor
    pub fn cursor(&self) -> (u8, u8) {
        self.cursor.position()
    }

    /// Scroll window origin in lines
    pub fn line_offset(&self) -> u8 {
        self.cursor.line_offset()
    }

    /// Active print mode
    pub fn print_mode(&self) -> PrintMode {
        self.cursor.print_mode()
    }

    /// Whether `init` succeeded
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Bus address in use, once connected
    pub fn address(&self) -> Option<u8> {
        self.connected.then_some(self.address)
    }

    /// Controller chip
    pub fn chip(&self) -> ChipKind {
        self.profile.kind
    }

    /// Column offset in pixels
    pub fn column_offset(&self) -> u8 {
        self.column_offset
    }

    /// Whether glyphs are drawn inverted
    pub fn is_inverse_font(&self) -> bool {
        self.inverse_font
    }

    /// Whether hardware inverse mode is on
    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    /// Whether the panel is rotated by 180°
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// First write failure since init (or since the last call), if any
    pub fn take_transport_error(&mut self) -> Option<DisplayError> {
        self.transport_error.take()
    }

    fn reset_state(&mut self) {
        self.connected = false;
        self.cursor.reset();
        self.column_offset = 0;
        self.inverse_font = false;
        self.inverse = false;
        self.flipped = false;
        self.transport_error = None;
    }

    /// First of the two standard addresses that acknowledges
    fn detect(&mut self) -> Option<u8> {
        [ADDRESS_PRIMARY, ADDRESS_SECONDARY]
            .into_iter()
            .find(|&address| self.probe(address))
    }

    /// Zero-length write: succeeds only if the address is acknowledged
    fn probe(&mut self, address: u8) -> bool {
        self.bus.write(address, &[], WRITE_TIMEOUT_MS).is_ok()
    }

    fn next_line(&mut self, forced: bool) {
        let advance = self.cursor.next_line(forced);
        self.commit_line_advance(advance);
    }

    /// Make the panel follow a line change already applied to the cursor
    fn commit_line_advance(&mut self, advance: LineAdvance) {
        if let Some(rows) = advance.scroll_rows {
            #[cfg(feature = "defmt")]
            defmt::trace!("Scroll to offset {=u8}", self.cursor.line_offset());
            self.send_command(Command::display_offset(rows));
        }
        self.set_cursor(advance.line, 0);
        if advance.clear_line {
            self.clear_line(advance.line);
        }
    }

    fn send_command(&mut self, command: Command) {
        let burst = self.encoder.command(command);
        let result = self.bus.write(self.address, burst, WRITE_TIMEOUT_MS);
        self.note_write(result);
    }

    fn send_position(&mut self, page: u8, pixel_column: u8) {
        let burst = self.encoder.position(page, pixel_column);
        let result = self.bus.write(self.address, burst, WRITE_TIMEOUT_MS);
        self.note_write(result);
    }

    fn send_zero_fill(&mut self, len: u8) {
        // Clear bursts are sized by the chip profile to fit the buffer
        let Ok(burst) = self.encoder.fill(len as usize, 0x00) else {
            return;
        };
        let result = self.bus.write(self.address, burst, WRITE_TIMEOUT_MS);
        self.note_write(result);
    }

    fn note_write<E>(&mut self, result: Result<(), E>) {
        if result.is_err() && self.transport_error.is_none() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Display write to {=u8:#x} failed", self.address);
            self.transport_error = Some(DisplayError::Transport);
        }
    }
}

impl<B: I2cBus, G: GlyphSource> core::fmt::Write for OledDisplay<B, G> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.print(s);
        Ok(())
    }
}

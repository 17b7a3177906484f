//! Minimal TOML reader for `display.toml`
//!
//! Handles only the subset the display configuration uses. It does NOT
//! support the full TOML spec.
//!
//! Supported:
//! - a single `[display]` section
//! - `key = value` pairs with string, integer (decimal or `0x` hex) and
//!   boolean values
//! - comments (`# ...`), whole-line or trailing
//!
//! Unknown sections and keys are rejected rather than skipped, so a typo in
//! the file does not silently fall back to a default.

use oledterm_protocol::ChipKind;

use super::types::{is_valid_address, DisplayConfig, ADDRESS_AUTO, MAX_COLUMN_OFFSET};
use crate::cursor::PrintMode;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Section header other than `[display]`, or a key outside any section
    InvalidSection,
    /// Key not known in the `[display]` section
    UnknownKey,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Address other than 60, 61 or "auto"
    InvalidAddress,
}

/// Parse a `display.toml` document
///
/// Keys that are absent keep their [`DisplayConfig::default`] value. An empty
/// document yields the default configuration.
pub fn parse_display_config(input: &str) -> Result<DisplayConfig, ConfigError> {
    let mut config = DisplayConfig::default();
    let mut in_display = false;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            if line[1..line.len() - 1].trim() != "display" {
                return Err(ConfigError::InvalidSection);
            }
            in_display = true;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::InvalidValue)?;
        if !in_display {
            return Err(ConfigError::InvalidSection);
        }
        apply_value(&mut config, key, value)?;
    }

    Ok(config)
}

fn apply_value(config: &mut DisplayConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "chip" => {
            config.chip =
                ChipKind::from_name(parse_string(value)).ok_or(ConfigError::InvalidValue)?;
        }
        "address" => config.address = parse_address(value)?,
        "print_mode" => {
            config.print_mode =
                PrintMode::from_name(parse_string(value)).ok_or(ConfigError::InvalidValue)?;
        }
        "column_offset" => {
            let offset: u8 = parse_int(value)?;
            if offset > MAX_COLUMN_OFFSET {
                return Err(ConfigError::InvalidValue);
            }
            config.column_offset = Some(offset);
        }
        "inverse" => config.inverse = parse_bool(value)?,
        "flip" => config.flip = parse_bool(value)?,
        "inverse_font" => config.inverse_font = parse_bool(value)?,
        _ => return Err(ConfigError::UnknownKey),
    }
    Ok(())
}

/// Remove a trailing `#` comment that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse "key = value"
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Strip surrounding quotes; bare words are accepted as strings too
fn parse_string(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Parse a decimal or `0x` hexadecimal integer
fn parse_int<T>(value: &str) -> Result<T, ConfigError>
where
    T: TryFrom<u32>,
{
    let raw = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse::<u32>(),
    }
    .map_err(|_| ConfigError::InvalidValue)?;
    T::try_from(raw).map_err(|_| ConfigError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue),
    }
}

/// `"auto"` or one of the two controller addresses
fn parse_address(value: &str) -> Result<u8, ConfigError> {
    if parse_string(value).eq_ignore_ascii_case("auto") {
        return Ok(ADDRESS_AUTO);
    }
    let address: u8 = parse_int(value).map_err(|_| ConfigError::InvalidAddress)?;
    if !is_valid_address(address) {
        return Err(ConfigError::InvalidAddress);
    }
    Ok(address)
}

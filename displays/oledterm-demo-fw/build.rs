//! Build script for oledterm-demo-fw
//!
//! - Sets up linker search paths and scripts (memory.x, link.x, defmt.x)
//! - Validates display.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const CHIPS: [&str; 2] = ["ssd1306", "sh1106"];
const PRINT_MODES: [&str; 3] = ["scroll_line", "overwrite_next_line", "overwrite_same_line"];
const BOOL_KEYS: [&str; 3] = ["inverse", "flip", "inverse_font"];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read display.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in display.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let errors = check_display_section(&config);
    if !errors.is_empty() {
        fail("Invalid [display] configuration", &errors);
    }

    println!("cargo:warning=display.toml validated successfully");
}

/// Collect every problem in the configuration instead of stopping at the first
fn check_display_section(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let root = match config.as_table() {
        Some(root) => root,
        None => return vec!["document must be a table".to_string()],
    };
    for key in root.keys().filter(|key| key.as_str() != "display") {
        errors.push(format!("unknown section [{}]", key));
    }

    let display = match config.get("display") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => return vec!["[display] must be a table".to_string()],
        None => return errors,
    };

    for (key, value) in display {
        match key.as_str() {
            "chip" => match value.as_str() {
                Some(chip) if CHIPS.contains(&chip.to_ascii_lowercase().as_str()) => {}
                _ => errors.push("chip must be 'ssd1306' or 'sh1106'".to_string()),
            },
            "address" => match value {
                toml::Value::String(s) if s.eq_ignore_ascii_case("auto") => {}
                toml::Value::Integer(60) | toml::Value::Integer(61) | toml::Value::Integer(255) => {}
                _ => errors.push("address must be 60, 61 or \"auto\"".to_string()),
            },
            "print_mode" => match value.as_str() {
                Some(mode) if PRINT_MODES.contains(&mode.to_ascii_lowercase().as_str()) => {}
                _ => errors.push(format!("print_mode must be one of {}", PRINT_MODES.join(", "))),
            },
            "column_offset" => match value.as_integer() {
                Some(offset) if (0..=3).contains(&offset) => {}
                _ => errors.push("column_offset must be 0-3".to_string()),
            },
            key if BOOL_KEYS.contains(&key) => {
                if !value.is_bool() {
                    errors.push(format!("{} must be true or false", key));
                }
            }
            other => errors.push(format!("unknown key '{}'", other)),
        }
    }

    errors
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|line| {
                let truncated = if line.len() > 62 {
                    format!("{}...", &line[..59])
                } else {
                    line.clone()
                };
                format!("║  • {:<62} ║", truncated)
            })
            .collect::<Vec<_>>()
            .join("\n")
    );
}

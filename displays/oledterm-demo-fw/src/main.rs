//! oledterm demo firmware
//!
//! Runs the text terminal demos on an SH1106/SSD1306 OLED attached to I2C1
//! of an STM32F042K6 (SCL on PB6, SDA on PB7). The display is configured
//! from `display.toml`, which is validated by the build script and compiled
//! into the image.

#![no_std]
#![no_main]

mod demos;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::time::Hertz;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use oledterm_display::{parse_display_config, DisplayError, OledDisplay, WRITE_TIMEOUT_MS};
use oledterm_hal::{BlockingI2c, I2cConfig};

/// Embedded display configuration (compiled into firmware)
/// Edit display.toml and rebuild to customize
const DISPLAY_TOML: &str = include_str!("../display.toml");

/// Pause between two demo runs
const DEMO_PAUSE_MS: u64 = 2000;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("oledterm demo starting");

    let p = embassy_stm32::init(Default::default());

    // Give the panel's charge pump time to settle after power-up
    Timer::after_millis(100).await;

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = Hertz(I2cConfig::FAST.frequency);
    i2c_config.timeout = Duration::from_millis(WRITE_TIMEOUT_MS as u64);

    let i2c = I2c::new_blocking(p.I2C1, p.PB6, p.PB7, i2c_config);
    let bus = BlockingI2c::new(i2c);

    let config = unwrap!(parse_display_config(DISPLAY_TOML));
    info!(
        "display config: chip={}, address={=u8:#x}, mode={}",
        config.chip,
        config.address,
        config.print_mode.name()
    );

    let mut display = match OledDisplay::from_config(bus, &config) {
        Ok(display) => display,
        Err(e) => park(e).await,
    };

    info!(
        "display ready at {=u8:#x}",
        display.address().unwrap_or_default()
    );

    loop {
        demos::print_text(&mut display).await;
        Timer::after_millis(DEMO_PAUSE_MS).await;

        demos::print_modes(&mut display).await;
        Timer::after_millis(DEMO_PAUSE_MS).await;

        demos::flash_and_flip(&mut display).await;
        Timer::after_millis(DEMO_PAUSE_MS).await;

        if let Some(e) = display.take_transport_error() {
            warn!("display writes failed during demo: {}", e);
        }
    }
}

/// Log a setup failure and idle forever
async fn park(e: DisplayError) -> ! {
    match e {
        DisplayError::InvalidAddress => error!("ERROR: invalid address !!"),
        DisplayError::DeviceNotFound => error!("ERROR: display not found !!"),
        other => error!("ERROR: display init failed: {}", other),
    }
    loop {
        Timer::after_secs(60).await;
    }
}

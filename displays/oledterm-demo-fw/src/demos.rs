//! Demo sequences
//!
//! Each demo leaves the display cleared and the font back to normal so the
//! next one starts from a known state.

use core::fmt::Write;

use defmt::info;
use embassy_time::Timer;
use oledterm_display::{I2cBus, OledDisplay, PrintMode};

const PRINT_MODES_TITLE: &str = "PrintModes Demo";
const SCROLL_LINE: &str = " Scroll Line (default mode) ";
const OVERWRITE_NEXT_LINE: &str = " Overwrite Next Line ";
const OVERWRITE_SAME_LINE: &str = " Overwrite Same Line ";
const NEW_LINE_FOUND: &str = "\n New Line Character found ";

const BLANK: &str = "               ";

/// Cursor positioning, inverse font and clearing
pub async fn print_text<B: I2cBus>(display: &mut OledDisplay<B>) {
    info!("demo: print text");

    display.clear();
    display.print("Print Text Demo\n");
    Timer::after_millis(2000).await;

    display.set_cursor(2, 0);
    display.println("Normal Text");
    Timer::after_millis(1000).await;

    display.set_inverse_font(true);
    display.print("Inverse Font");
    Timer::after_millis(3000).await;

    display.set_cursor(6, 0);
    display.print("Clear this Line");
    display.set_inverse_font(false);
    Timer::after_millis(2000).await;

    display.clear_current_line();
    Timer::after_millis(1000).await;

    display.print("Clear Display\n");
    Timer::after_millis(2000).await;
    display.clear();
    Timer::after_millis(500).await;

    // Corner stars
    let last_line = OledDisplay::<B>::max_text_lines() - 1;
    let last_column = OledDisplay::<B>::max_text_columns() - 1;
    display.set_inverse_font(true);
    for (line, column) in [
        (0, 0),
        (0, last_column),
        (last_line, 0),
        (last_line, last_column),
    ] {
        display.set_cursor(line, column);
        display.print_char(b'*');
    }
    display.set_inverse_font(false);
    Timer::after_millis(500).await;

    for line in 0..OledDisplay::<B>::max_text_lines() {
        display.set_cursor(line, 4);
        let _ = write!(display, "Line {}", line);
        Timer::after_millis(250).await;
    }
    Timer::after_millis(2000).await;
    display.clear();
    Timer::after_millis(500).await;

    // Column ruler: tens on line 2, units on line 3
    display.set_cursor(4, 0);
    display.print("Column");
    display.set_cursor(3, 0);
    for column in 0..OledDisplay::<B>::max_text_columns() {
        if column > 9 {
            display.set_cursor(2, column);
            display.print("1");
            display.set_cursor(3, column);
        }
        let _ = write!(display, "{}", column % 10);
        Timer::after_millis(250).await;
    }
    Timer::after_millis(2000).await;
    display.clear();
}

/// Stream the same text repeatedly in each print mode
pub async fn print_modes<B: I2cBus>(display: &mut OledDisplay<B>) {
    let mut inverse_font = false;

    info!("demo: print mode scroll_line");
    show_mode_title(display).await;
    display.set_print_mode(PrintMode::ScrollLine);
    display.set_cursor(2, 0);
    display.println(SCROLL_LINE);
    for _ in 0..7 {
        inverse_font = !inverse_font;
        display.set_inverse_font(inverse_font);
        type_slowly(display, SCROLL_LINE).await;
    }
    display.set_inverse_font(false);
    inverse_font = false;
    Timer::after_millis(5000).await;

    info!("demo: print mode overwrite_next_line");
    show_mode_title(display).await;
    display.set_print_mode(PrintMode::OverwriteNextLine);
    display.set_cursor(2, 0);
    display.println(OVERWRITE_NEXT_LINE);
    for _ in 0..7 {
        inverse_font = !inverse_font;
        display.set_inverse_font(inverse_font);
        type_slowly(display, OVERWRITE_NEXT_LINE).await;
    }
    display.set_inverse_font(false);
    inverse_font = false;
    Timer::after_millis(5000).await;

    info!("demo: print mode overwrite_same_line");
    show_mode_title(display).await;
    display.set_cursor(2, 0);
    display.println(OVERWRITE_SAME_LINE);
    display.set_print_mode(PrintMode::OverwriteSameLine);
    for _ in 0..5 {
        inverse_font = !inverse_font;
        display.set_inverse_font(inverse_font);
        type_slowly(display, OVERWRITE_SAME_LINE).await;
    }

    // Only a newline leaves the current line in this mode
    for _ in 0..5 {
        inverse_font = !inverse_font;
        display.set_inverse_font(inverse_font);
        type_slowly(display, NEW_LINE_FOUND).await;
    }
    display.set_inverse_font(false);
    Timer::after_millis(5000).await;

    display.set_print_mode(PrintMode::default());
    display.clear();
}

/// Flash the whole panel, then rotate it by 180 degrees and back
pub async fn flash_and_flip<B: I2cBus>(display: &mut OledDisplay<B>) {
    info!("demo: flash and flip");

    display.set_cursor(2, 0);
    display.print("Flash-Flip-Demo");
    Timer::after_millis(2000).await;

    display.clear();
    display.set_inverse_font(true);
    display.set_cursor(1, 0);
    for text in [BLANK, " ! ATTENTION ! ", BLANK, " Flash display ", BLANK] {
        display.println(text);
    }
    display.set_inverse_font(false);
    Timer::after_millis(2000).await;

    let mut inverse = false;
    for _ in 0..10 {
        inverse = !inverse;
        display.set_inverse(inverse);
        Timer::after_millis(250).await;
    }
    Timer::after_millis(3000).await;

    display.clear();
    display.set_cursor(3, 0);
    display.print("Now flip display");
    Timer::after_millis(2000).await;

    display.flip(true);
    display.println("The text now");
    display.println("is turned by");
    display.println("180 degree.");
    Timer::after_millis(4000).await;
    display.print("\nand flip back");
    Timer::after_millis(2000).await;

    display.flip(false);
    display.println("The text is");
    display.println("back to normal");
    Timer::after_millis(5000).await;
    display.clear();
}

async fn show_mode_title<B: I2cBus>(display: &mut OledDisplay<B>) {
    display.clear();
    display.print(PRINT_MODES_TITLE);
    Timer::after_millis(2000).await;
}

/// Print one character at a time so wrapping is visible
async fn type_slowly<B: I2cBus>(display: &mut OledDisplay<B>, text: &str) {
    for code in text.bytes() {
        display.print_char(code);
        Timer::after_millis(100).await;
    }
}

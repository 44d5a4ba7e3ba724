//! OLED panels

mod ssd1306;

pub use ssd1306::{OledError, Ssd1306, SSD1306_ADDR};

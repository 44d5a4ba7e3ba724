//! Painting screens with `embedded-graphics`

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_9X15};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};

use crate::screen::{Screen, TextSize};

/// Panel width in pixels
pub const SCREEN_WIDTH: u32 = 128;

/// Panel height in pixels
pub const SCREEN_HEIGHT: u32 = 64;

impl TextSize {
    /// Font used for this size
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &FONT_6X10,
            TextSize::Medium => &FONT_9X15,
            TextSize::Large => &FONT_10X20,
        }
    }

    /// Glyph advance in pixels
    pub fn char_width(&self) -> u32 {
        let font = self.font();
        font.character_size.width + font.character_spacing
    }
}

/// Clear `target` and draw `screen` onto it
pub fn draw_screen<D>(screen: &Screen, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    if let Some(y) = screen.rule() {
        Line::new(Point::new(0, y), Point::new(SCREEN_WIDTH as i32 - 1, y))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(target)?;
    }

    for item in screen.items() {
        let style = MonoTextStyle::new(item.size.font(), BinaryColor::On);
        Text::with_baseline(&item.text, Point::new(item.x, item.y), style, Baseline::Top)
            .draw(target)?;
    }

    Ok(())
}

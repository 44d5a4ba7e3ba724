//! OLED display task

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;
use focuscube_display::{draw_screen, Renderer, Screen};
use focuscube_drivers::oled::Ssd1306;

use crate::channels::DISPLAY_SNAPSHOT;

/// Panel on I2C1
pub type Oled = Ssd1306<I2c<'static, I2C1, Async>>;

/// Draw `screen` into the panel buffer and send it
pub async fn show(oled: &mut Oled, screen: &Screen) {
    // Drawing into the frame buffer cannot fail
    draw_screen(screen, oled).unwrap_or_else(|never| match never {});
    if let Err(e) = oled.flush().await {
        warn!("OLED flush failed: {:?}", e);
    }
}

/// Display task - redraws on every snapshot
#[embassy_executor::task]
pub async fn display_task(mut oled: Oled) {
    info!("Display task started");

    let mut renderer = Renderer::new();

    loop {
        let snapshot = DISPLAY_SNAPSHOT.wait().await;
        let screen = renderer.render_snapshot(&snapshot);
        show(&mut oled, screen).await;
    }
}

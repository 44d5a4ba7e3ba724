//! Focus Cube - Orientation-Triggered Focus Timer Firmware
//!
//! Main firmware binary for RP2040-based cubes. Rest the cube on its top
//! face for work or its bottom face for personal time, then hold the button
//! to run the clock.
//!
//! Pin assignments:
//! - I2C0 (GPIO4 SDA, GPIO5 SCL): MPU-6500 accelerometer
//! - I2C1 (GPIO6 SDA, GPIO7 SCL): SSD1306 OLED
//! - GPIO15: push button to ground, internal pull-up
//! - UART0 TX (GPIO0): radio bridge

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C0, I2C1, UART0};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use focuscube_display::Renderer;
use focuscube_drivers::button::Button;
use focuscube_drivers::imu::Mpu6500;
use focuscube_drivers::oled::Ssd1306;

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// How long the splash stays up after the sensor is ready
const BOOT_SPLASH_SECS: u64 = 2;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 16]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Focus Cube firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // OLED first so boot and fault screens can be shown
    let oled_i2c = I2c::new_async(p.I2C1, p.PIN_7, p.PIN_6, Irqs, i2c::Config::default());
    let mut oled: tasks::Oled = Ssd1306::new(oled_i2c);
    if let Err(e) = oled.init().await {
        // Keep going; the timer and telemetry still work without a panel
        error!("OLED init failed: {:?}", e);
    }

    let mut renderer = Renderer::new();
    tasks::show(&mut oled, renderer.render_boot()).await;

    let imu_i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c::Config::default());
    let mut imu: tasks::Imu = Mpu6500::new(imu_i2c);
    if let Err(e) = imu.init().await {
        error!("IMU init failed: {:?}", e);
        let msg = match e {
            focuscube_drivers::imu::ImuError::WrongDevice(_) => "Wrong IMU part",
            _ => "IMU not responding",
        };
        tasks::show(&mut oled, renderer.render_fault(msg)).await;
        halt().await;
    }

    info!("Focus Cube Ready");
    Timer::after_secs(BOOT_SPLASH_SECS).await;

    let button = Button::new(Input::new(p.PIN_15, Pull::Up), config.button_debounce());

    spawner.spawn(tasks::button_task(button)).unwrap();
    spawner.spawn(tasks::tick_task(imu, config)).unwrap();
    spawner.spawn(tasks::display_task(oled)).unwrap();

    if config::TELEMETRY_ENABLED {
        let mut uart_config = UartConfig::default();
        uart_config.baudrate = config::TELEMETRY_BAUD_RATE;

        let tx_buf = TX_BUF.init([0u8; 256]);
        let rx_buf = RX_BUF.init([0u8; 16]);

        let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
        let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
        // The bridge never talks back
        let (tx, _rx) = uart.split();

        spawner.spawn(tasks::telemetry_task(tx)).unwrap();
        info!("Telemetry enabled at {} baud", config::TELEMETRY_BAUD_RATE);
    }

    info!("All tasks spawned, firmware running");
}

/// Park forever after a fatal startup error
async fn halt() -> ! {
    loop {
        Timer::after_secs(60).await;
        trace!("Halted");
    }
}

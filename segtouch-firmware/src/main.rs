//! Segtouch - touch sensor to segment display demo
//!
//! Two capacitive electrodes on the touch sensing controller are measured
//! in turn. Their counts are packed into one 16-bit value and shown in
//! hex on a four-digit SAA1064 display. The side LED lights when either
//! measurement ran into the max count.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use {defmt_rtt as _, panic_probe as _};

use segtouch_core::{I2cMaster, TouchDisplay, TouchSensor, TscConfig};
use segtouch_display::{encode_text, ControlByte, DisplayConfig, Saa1064};
use segtouch_hal::i2c::{I2cConfig, I2cTiming};
use segtouch_hal::poll::Spin;
use segtouch_hal_stm32l0::{clock, map, Mmio};

mod board;

/// Text shown once after reset
const SPLASH_TEXT: &str = "COOL";

/// How long the splash stays up, in core cycles
const SPLASH_CYCLES: u32 = clock::SYSCLK_HZ;

#[entry]
fn main() -> ! {
    info!("segtouch starting...");

    let _p = clock::init();
    debug!("sysclk {} Hz", clock::SYSCLK_HZ);

    // SAFETY: RCC and GPIO are only touched here, before any driver exists
    board::init(unsafe { Mmio::new() });

    // SAFETY: the sensor is the only user of the TSC block
    let mut sensor = TouchSensor::new(unsafe { Mmio::new() }, map::TSC_BASE, Spin);
    let tsc_config = TscConfig::default();
    sensor.init(&tsc_config);
    debug!("tsc ready: {}", tsc_config);

    let timing = I2cTiming::for_32mhz(I2cConfig::default()).unwrap_or(I2cTiming::STANDARD_32MHZ);
    // SAFETY: the master is the only user of the I2C1 block
    let mut i2c = I2cMaster::new(unsafe { Mmio::new() }, map::I2C1_BASE, Spin);
    i2c.init(timing);
    debug!("i2c1 ready: {} Hz", timing.scl_hz(clock::SYSCLK_HZ));

    let mut display = Saa1064::new(
        i2c,
        DisplayConfig {
            control: ControlByte::SPLASH,
            ..DisplayConfig::default()
        },
    );
    if let Some(frame) = encode_text(SPLASH_TEXT) {
        match display.set_digits(&frame) {
            Ok(()) => cortex_m::asm::delay(SPLASH_CYCLES),
            Err(e) => warn!("splash failed: {}", Debug2Format(&e)),
        }
    }
    display.set_control(ControlByte::TOUCH_DEMO);

    info!("entering control loop");
    let mut app = TouchDisplay::new(sensor, display);
    loop {
        match app.cycle() {
            Ok(report) => trace!(
                "composite {=u16:#x} indicator {}",
                report.composite,
                report.indicator
            ),
            Err(e) => {
                error!("control loop stopped: {}", Debug2Format(&e));
                break;
            }
        }
    }

    loop {
        cortex_m::asm::wfi();
    }
}

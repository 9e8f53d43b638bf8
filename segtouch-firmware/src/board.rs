//! Board wiring
//!
//! ```text
//! PA0  TSC_G1_IO1  touch electrode 1
//! PA1  TSC_G1_IO2  touch electrode 2
//! PA3  TSC_G1_IO4  sampling capacitor
//! PB6  I2C1_SCL    SAA1064
//! PB7  I2C1_SDA    SAA1064
//! ```

use defmt::debug;
use segtouch_hal::gpio::{OutputType, PinConfig, PinId, Port, Speed};
use segtouch_hal::register::RegisterPort;
use segtouch_hal::{ClockControl, PinConfigurator};
use segtouch_hal_stm32l0::{Gpio, Peripheral, Rcc};

/// Alternate function of the touch sensing controller on port A
const AF_TSC: u8 = 3;
/// Alternate function of I2C1 on PB6/PB7
const AF_I2C1: u8 = 1;

/// Peripheral clocks, in enable order
pub const CLOCKS: [Peripheral; 4] = [
    Peripheral::GpioA,
    Peripheral::GpioB,
    Peripheral::Tsc,
    Peripheral::I2c1,
];

pub const PINS: [(PinId, PinConfig); 5] = [
    (
        PinId::new(Port::A, 0),
        PinConfig::alternate(AF_TSC, OutputType::PushPull, Speed::High),
    ),
    (
        PinId::new(Port::A, 1),
        PinConfig::alternate(AF_TSC, OutputType::PushPull, Speed::High),
    ),
    // Sampling capacitor I/O must be open drain
    (
        PinId::new(Port::A, 3),
        PinConfig::alternate(AF_TSC, OutputType::OpenDrain, Speed::Low),
    ),
    (
        PinId::new(Port::B, 6),
        PinConfig::alternate(AF_I2C1, OutputType::OpenDrain, Speed::High),
    ),
    (
        PinId::new(Port::B, 7),
        PinConfig::alternate(AF_I2C1, OutputType::OpenDrain, Speed::High),
    ),
];

/// Enable peripheral clocks and route the pins
pub fn init<P: RegisterPort>(mut port: P) {
    let mut rcc = Rcc::new(&mut port);
    for peripheral in CLOCKS {
        debug!("clock on: {}", peripheral);
        rcc.enable_clock(peripheral);
    }

    let mut gpio = Gpio::new(&mut port);
    for (pin, config) in PINS {
        gpio.configure_pin(pin, config);
    }
    debug!("{} pins configured", PINS.len());
}

//! Peripheral clock gating

use segtouch_hal::gpio::ClockControl;
use segtouch_hal::register::{Field, RegisterBlock, RegisterPort};

use crate::map::RCC_BASE;

/// RCC register offsets and enable bits (RM0367 §7.3)
mod regs {
    use super::Field;

    pub const IOPENR: u32 = 0x2C;
    pub const AHBENR: u32 = 0x30;
    pub const APB1ENR: u32 = 0x38;

    pub const IOPAEN: Field = Field::bit(IOPENR, 0);
    pub const IOPBEN: Field = Field::bit(IOPENR, 1);
    pub const IOPCEN: Field = Field::bit(IOPENR, 2);
    pub const TSCEN: Field = Field::bit(AHBENR, 16);
    pub const I2C1EN: Field = Field::bit(APB1ENR, 21);
    pub const I2C2EN: Field = Field::bit(APB1ENR, 22);
}

/// Peripherals whose clock the firmware enables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Peripheral {
    GpioA,
    GpioB,
    GpioC,
    Tsc,
    I2c1,
    I2c2,
}

impl Peripheral {
    fn enable_bit(self) -> Field {
        match self {
            Peripheral::GpioA => regs::IOPAEN,
            Peripheral::GpioB => regs::IOPBEN,
            Peripheral::GpioC => regs::IOPCEN,
            Peripheral::Tsc => regs::TSCEN,
            Peripheral::I2c1 => regs::I2C1EN,
            Peripheral::I2c2 => regs::I2C2EN,
        }
    }
}

/// Reset and clock control block
pub struct Rcc<P> {
    regs: RegisterBlock<P>,
}

impl<P: RegisterPort> Rcc<P> {
    pub fn new(port: P) -> Self {
        Self {
            regs: RegisterBlock::new(port, RCC_BASE),
        }
    }

    pub fn is_enabled(&mut self, peripheral: Peripheral) -> bool {
        self.regs.is_set(peripheral.enable_bit())
    }

    pub fn free(self) -> P {
        self.regs.release()
    }
}

impl<P: RegisterPort> ClockControl for Rcc<P> {
    type Peripheral = Peripheral;

    fn enable_clock(&mut self, peripheral: Peripheral) {
        self.regs.set(peripheral.enable_bit());
    }
}

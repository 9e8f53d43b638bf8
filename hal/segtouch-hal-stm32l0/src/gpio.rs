//! GPIO pin configuration for STM32L0
//!
//! Drives MODER/OTYPER/OSPEEDR/AFRx directly. Each field is written with
//! its own read-modify-write so neighbouring pins keep their settings.

use segtouch_hal::gpio::{OutputType, PinConfig, PinConfigurator, PinId, PinMode, Port, Speed};
use segtouch_hal::register::{Field, Register, RegisterPort};

use crate::map;

/// GPIO register offsets (RM0367 §9.4)
mod regs {
    pub const MODER: u32 = 0x00;
    pub const OTYPER: u32 = 0x04;
    pub const OSPEEDR: u32 = 0x08;
    pub const AFRL: u32 = 0x20;
    pub const AFRH: u32 = 0x24;
}

fn port_base(port: Port) -> u32 {
    match port {
        Port::A => map::GPIOA_BASE,
        Port::B => map::GPIOB_BASE,
        Port::C => map::GPIOC_BASE,
        Port::D => map::GPIOD_BASE,
        Port::E => map::GPIOE_BASE,
        Port::H => map::GPIOH_BASE,
    }
}

fn mode_bits(mode: PinMode) -> u32 {
    match mode {
        PinMode::Input => 0b00,
        PinMode::Output => 0b01,
        PinMode::Alternate => 0b10,
        PinMode::Analog => 0b11,
    }
}

fn speed_bits(speed: Speed) -> u32 {
    match speed {
        Speed::Low => 0b00,
        Speed::Medium => 0b01,
        Speed::High => 0b10,
        Speed::VeryHigh => 0b11,
    }
}

/// Fields controlling one pin
struct PinFields {
    mode: Field,
    otype: Field,
    speed: Field,
    af: Field,
}

impl PinFields {
    fn of(index: u8) -> Self {
        let i = index & 0x0f;
        let (afr, slot) = if i < 8 {
            (regs::AFRL, i)
        } else {
            (regs::AFRH, i - 8)
        };
        Self {
            mode: Field::new(regs::MODER, i * 2, 2),
            otype: Field::bit(regs::OTYPER, i),
            speed: Field::new(regs::OSPEEDR, i * 2, 2),
            af: Field::new(afr, slot * 4, 4),
        }
    }
}

/// GPIO ports A-H
pub struct Gpio<P> {
    port: P,
}

impl<P: RegisterPort> Gpio<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    fn set_field(&mut self, base: u32, field: Field, value: u32) {
        self.port
            .modify(Register::at(base, field.offset), |w| field.insert(w, value));
    }

    pub fn free(self) -> P {
        self.port
    }
}

impl<P: RegisterPort> PinConfigurator for Gpio<P> {
    fn configure_pin(&mut self, pin: PinId, config: PinConfig) {
        let base = port_base(pin.port);
        let fields = PinFields::of(pin.index);

        // Select the alternate function before switching the mode so the
        // pin never drives the wrong peripheral
        if config.mode == PinMode::Alternate {
            self.set_field(base, fields.af, config.alternate as u32);
        }
        let otype = match config.output_type {
            OutputType::PushPull => 0,
            OutputType::OpenDrain => 1,
        };
        self.set_field(base, fields.otype, otype);
        self.set_field(base, fields.speed, speed_bits(config.speed));
        self.set_field(base, fields.mode, mode_bits(config.mode));
    }
}

//! SAA1064 four-digit LED driver
//!
//! The controller is written in one I2C transaction: the instruction
//! sub-address (0x00, control register), the control byte, then the four
//! digit registers. The sub-address auto-increments, and digit 1 of the
//! controller is the right-most digit of the display, so the frame goes
//! out right to left.

use segtouch_hal::i2c::I2cBus;

use crate::backend::{DisplayError, SegmentDisplay};
use crate::segment::DisplayFrame;

/// Bus address of the controller, as loaded into the I2C address field
///
/// This is the 8-bit write form (ADR pin to VEE); the 7-bit address is
/// 0x38.
pub const SAA1064_ADDRESS: u8 = 0x70;

/// Instruction byte selecting the control register
pub const CONTROL_SUBADDRESS: u8 = 0x00;

/// Sub-address, control byte and four digits
pub const PAYLOAD_LEN: usize = 6;

/// SAA1064 control register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlByte(u8);

impl ControlByte {
    const DYNAMIC: u8 = 0x01;
    const DIGITS_1_3: u8 = 0x02;
    const DIGITS_2_4: u8 = 0x04;
    const SEGMENT_TEST: u8 = 0x08;
    const CURRENT_SHIFT: u8 = 4;
    const CURRENT_MASK: u8 = 0x70;

    /// Dynamic mode, all digits on, 6 mA segment current
    pub const TOUCH_DEMO: Self = Self(0x27);

    /// Dynamic mode, all digits on, 18 mA segment current
    ///
    /// Bit 7 is not used by the controller; it is kept set to match the
    /// byte the boards were brought up with.
    pub const SPLASH: Self = Self(0xe7);

    /// Static mode, all digits blanked, no current
    pub const fn off() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    const fn with_flag(self, flag: u8, on: bool) -> Self {
        if on {
            Self(self.0 | flag)
        } else {
            Self(self.0 & !flag)
        }
    }

    /// Multiplex digit pairs 1+3 and 2+4
    pub const fn dynamic(self, on: bool) -> Self {
        self.with_flag(Self::DYNAMIC, on)
    }

    /// Show digits 1 and 3
    pub const fn digits_1_3(self, on: bool) -> Self {
        self.with_flag(Self::DIGITS_1_3, on)
    }

    /// Show digits 2 and 4
    pub const fn digits_2_4(self, on: bool) -> Self {
        self.with_flag(Self::DIGITS_2_4, on)
    }

    /// Light every segment regardless of the digit registers
    pub const fn segment_test(self, on: bool) -> Self {
        self.with_flag(Self::SEGMENT_TEST, on)
    }

    /// Segment output current, rounded down to a 3 mA step (max 21 mA)
    pub const fn current_ma(self, ma: u8) -> Self {
        let steps = if ma / 3 > 7 { 7 } else { ma / 3 };
        Self((self.0 & !Self::CURRENT_MASK) | (steps << Self::CURRENT_SHIFT))
    }

    /// Configured segment current in mA
    pub const fn current(self) -> u8 {
        ((self.0 & Self::CURRENT_MASK) >> Self::CURRENT_SHIFT) * 3
    }
}

impl Default for ControlByte {
    fn default() -> Self {
        Self::TOUCH_DEMO
    }
}

/// Build the I2C payload for a frame
pub fn payload(control: ControlByte, frame: &DisplayFrame) -> [u8; PAYLOAD_LEN] {
    let [d3, d2, d1, d0] = frame.right_to_left();
    [CONTROL_SUBADDRESS, control.bits(), d3, d2, d1, d0]
}

/// Display controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Bus address
    pub address: u8,
    /// Control byte sent with every frame
    pub control: ControlByte,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: SAA1064_ADDRESS,
            control: ControlByte::TOUCH_DEMO,
        }
    }
}

/// SAA1064 driver
pub struct Saa1064<B> {
    bus: B,
    config: DisplayConfig,
}

impl<B: I2cBus> Saa1064<B> {
    pub fn new(bus: B, config: DisplayConfig) -> Self {
        Self { bus, config }
    }

    /// Send a frame as-is
    pub fn set_digits(&mut self, frame: &DisplayFrame) -> Result<(), DisplayError<B::Error>> {
        let data = payload(self.config.control, frame);
        self.bus
            .write(self.config.address, &data)
            .map_err(DisplayError::Bus)
    }

    /// Change the control byte used for subsequent frames
    pub fn set_control(&mut self, control: ControlByte) {
        self.config.control = control;
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn free(self) -> B {
        self.bus
    }
}

impl<B: I2cBus> SegmentDisplay for Saa1064<B> {
    type Error = DisplayError<B::Error>;

    fn show(&mut self, frame: &DisplayFrame) -> Result<(), Self::Error> {
        self.set_digits(frame)
    }
}

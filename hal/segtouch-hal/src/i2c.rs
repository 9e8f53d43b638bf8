//! I2C bus abstractions
//!
//! Provides the write-only master trait the display drivers use, and the
//! timing configuration for I2C peripherals with a TIMINGR-style register.

/// I2C bus master
///
/// Only the write direction is needed by the display drivers; a transfer
/// returns once every byte has been handed to the hardware.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - Target address, as loaded into the peripheral's
    ///   address field
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<B: I2cBus + ?Sized> I2cBus for &mut B {
    type Error = B::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy)]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 100_000, // 100kHz standard mode
        }
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self {
        frequency: 1_000_000,
    };
}

/// Raw SCL timing parameters
///
/// All values are loaded into the peripheral as-is; the periods they
/// produce depend on the peripheral clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cTiming {
    /// Timing prescaler (4 bits)
    pub presc: u8,
    /// SCL low period in prescaled clocks, minus one
    pub scll: u8,
    /// SCL high period in prescaled clocks, minus one
    pub sclh: u8,
    /// Data hold time (4 bits)
    pub sdadel: u8,
    /// Data setup time (4 bits)
    pub scldel: u8,
}

impl I2cTiming {
    /// 100 kHz SCL from a 32 MHz peripheral clock
    pub const STANDARD_32MHZ: Self = Self {
        presc: 0x07,
        scll: 0x13,
        sclh: 0x0f,
        sdadel: 0x02,
        scldel: 0x04,
    };

    /// 400 kHz SCL from a 32 MHz peripheral clock
    pub const FAST_32MHZ: Self = Self {
        presc: 0x03,
        scll: 0x09,
        sclh: 0x03,
        sdadel: 0x02,
        scldel: 0x03,
    };

    /// Preset for a bus configuration at 32 MHz PCLK
    ///
    /// Returns `None` for speeds without a preset.
    pub fn for_32mhz(config: I2cConfig) -> Option<Self> {
        match config.frequency {
            100_000 => Some(Self::STANDARD_32MHZ),
            400_000 => Some(Self::FAST_32MHZ),
            _ => None,
        }
    }

    /// Nominal SCL frequency in Hz for a given peripheral clock
    ///
    /// Ignores rise/fall times and synchronization delays.
    pub fn scl_hz(&self, pclk_hz: u32) -> u32 {
        let tick = pclk_hz / (self.presc as u32 + 1);
        let period = self.scll as u32 + 1 + self.sclh as u32 + 1;
        tick / period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_timing_is_100khz() {
        // 32 MHz / 8 = 4 MHz tick, 20 + 16 ticks per period
        assert_eq!(I2cTiming::STANDARD_32MHZ.scl_hz(32_000_000), 111_111);
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(
            I2cTiming::for_32mhz(I2cConfig::STANDARD),
            Some(I2cTiming::STANDARD_32MHZ)
        );
        assert_eq!(
            I2cTiming::for_32mhz(I2cConfig::FAST),
            Some(I2cTiming::FAST_32MHZ)
        );
        assert_eq!(I2cTiming::for_32mhz(I2cConfig::FAST_PLUS), None);
    }

    #[test]
    fn test_default_is_standard_mode() {
        assert_eq!(I2cConfig::default().frequency, I2cConfig::STANDARD.frequency);
    }
}

//! Clock and pin configuration
//!
//! Board bring-up needs exactly two things from a chip: turn on the clock
//! of a peripheral, and put a pin into a given mode. These traits are the
//! seam; the chip crate implements them against its RCC and GPIO blocks.

/// GPIO port letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    H,
}

/// A single GPIO pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId {
    pub port: Port,
    /// Pin number within the port (0-15)
    pub index: u8,
}

impl PinId {
    pub const fn new(port: Port, index: u8) -> Self {
        Self { port, index }
    }
}

/// Pin mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    Input,
    Output,
    /// Routed to a peripheral through the alternate function mux
    Alternate,
    Analog,
}

/// Output driver type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputType {
    PushPull,
    OpenDrain,
}

/// Output slew rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Complete configuration for one pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    pub mode: PinMode,
    pub output_type: OutputType,
    pub speed: Speed,
    /// Alternate function number, only meaningful in [`PinMode::Alternate`]
    pub alternate: u8,
}

impl PinConfig {
    /// Alternate function pin
    pub const fn alternate(af: u8, output_type: OutputType, speed: Speed) -> Self {
        Self {
            mode: PinMode::Alternate,
            output_type,
            speed,
            alternate: af,
        }
    }
}

/// Puts pins into a mode
pub trait PinConfigurator {
    fn configure_pin(&mut self, pin: PinId, config: PinConfig);
}

/// Gates peripheral clocks
pub trait ClockControl {
    /// Chip-specific peripheral identifier
    type Peripheral;

    fn enable_clock(&mut self, peripheral: Self::Peripheral);
}

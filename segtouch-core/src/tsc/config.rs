//! Touch sensing controller configuration types

use segtouch_hal::register::Field;

use super::regs;

/// One analog I/O of the touch sensing controller
///
/// I/Os are organised in groups of four. Within a group only one I/O can
/// be sampled at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel {
    group: u8,
    io: u8,
}

impl Channel {
    pub const G1_IO1: Self = Self { group: 1, io: 1 };
    pub const G1_IO2: Self = Self { group: 1, io: 2 };
    pub const G1_IO3: Self = Self { group: 1, io: 3 };
    pub const G1_IO4: Self = Self { group: 1, io: 4 };

    /// Group 1-8, I/O 1-4
    pub const fn new(group: u8, io: u8) -> Option<Self> {
        if group >= 1 && group <= 8 && io >= 1 && io <= 4 {
            Some(Self { group, io })
        } else {
            None
        }
    }

    pub const fn group(self) -> u8 {
        self.group
    }

    pub const fn io(self) -> u8 {
        self.io
    }

    /// Bit position in the IOHCR/IOSCR/IOCCR registers
    pub const fn bit(self) -> u8 {
        (self.group - 1) * 4 + (self.io - 1)
    }

    /// The channel's bit in one of the per-I/O registers
    pub(crate) const fn io_field(self, offset: u32) -> Field {
        Field::bit(offset, self.bit())
    }

    /// The group's acquisition counter
    pub(crate) const fn count_field(self) -> Field {
        Field::new(
            regs::IOG1CR + 4 * (self.group as u32 - 1),
            0,
            regs::CNT_WIDTH,
        )
    }
}

/// A set of I/Os, one bit per I/O as laid out in the IOxCR registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IoSet(u32);

impl IoSet {
    pub const EMPTY: Self = Self(0);

    pub const fn with(self, channel: Channel) -> Self {
        Self(self.0 | 1 << channel.bit())
    }

    pub const fn contains(self, channel: Channel) -> bool {
        self.0 & (1 << channel.bit()) != 0
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Bitmask of the groups touched by this set (bit 0 = group 1)
    pub const fn groups(self) -> u8 {
        let mut groups = 0u8;
        let mut g = 0;
        while g < 8 {
            if self.0 & (0xf << (g * 4)) != 0 {
                groups |= 1 << g;
            }
            g += 1;
        }
        groups
    }
}

/// Counter value at which an acquisition is abandoned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MaxCount {
    C255 = 0,
    C511 = 1,
    C1023 = 2,
    C2047 = 3,
    C4095 = 4,
    C8191 = 5,
    C16383 = 6,
}

impl MaxCount {
    /// Field value for CR.MCV
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Largest count the controller can report
    pub const fn limit(self) -> u16 {
        (1u16 << (self as u8 + 8)) - 1
    }
}

/// Touch sensing controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TscConfig {
    /// Pulse generator clock = AHB / 2^`pulse_prescaler` (0-7)
    pub pulse_prescaler: u8,
    /// Charge transfer high time in pulse generator cycles (1-16)
    pub charge_high_cycles: u8,
    /// Charge transfer low time in pulse generator cycles (1-16)
    pub charge_low_cycles: u8,
    pub max_count: MaxCount,
    /// I/Os wired to the sampling capacitors; their groups get enabled
    pub sampling: IoSet,
    /// I/Os whose Schmitt trigger hysteresis is disabled
    pub no_hysteresis: IoSet,
}

impl TscConfig {
    /// Sensors on G1_IO1 (PA0) and G1_IO2 (PA1), sampling cap on G1_IO4
    /// (PA3). At 32 MHz AHB: 4 MHz pulse clock, 1 µs charge transfer
    /// phases.
    pub const GROUP1_PA0_PA1: Self = Self {
        pulse_prescaler: 3,
        charge_high_cycles: 4,
        charge_low_cycles: 4,
        max_count: MaxCount::C16383,
        sampling: IoSet::EMPTY.with(Channel::G1_IO4),
        no_hysteresis: IoSet::EMPTY
            .with(Channel::G1_IO1)
            .with(Channel::G1_IO2)
            .with(Channel::G1_IO4),
    };

    /// CR.PGPSC value
    pub(crate) fn pgpsc(&self) -> u32 {
        self.pulse_prescaler.min(7) as u32
    }

    /// CR.CTPH value
    pub(crate) fn ctph(&self) -> u32 {
        self.charge_high_cycles.clamp(1, 16) as u32 - 1
    }

    /// CR.CTPL value
    pub(crate) fn ctpl(&self) -> u32 {
        self.charge_low_cycles.clamp(1, 16) as u32 - 1
    }
}

impl Default for TscConfig {
    fn default() -> Self {
        Self::GROUP1_PA0_PA1
    }
}

/// Which outputs to collect for one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelSpec {
    pub channel: Channel,
    /// Read the acquisition counter
    pub read_count: bool,
    /// Report the max-count error flag
    pub read_error: bool,
}

impl ChannelSpec {
    /// Collect both count and error flag
    pub const fn new(channel: Channel) -> Self {
        Self {
            channel,
            read_count: true,
            read_error: true,
        }
    }

    pub const fn count_only(channel: Channel) -> Self {
        Self {
            channel,
            read_count: true,
            read_error: false,
        }
    }

    pub const fn error_only(channel: Channel) -> Self {
        Self {
            channel,
            read_count: false,
            read_error: true,
        }
    }
}

/// Outcome of one channel's acquisition
///
/// Fields are `None` when the corresponding output was not requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AcquisitionResult {
    /// Charge transfer count (0-16383)
    pub count: Option<u16>,
    /// Counter hit the max count before the sampling cap was charged
    pub error: Option<bool>,
}

impl AcquisitionResult {
    pub fn count_or_zero(&self) -> u16 {
        self.count.unwrap_or(0)
    }

    pub fn is_error(&self) -> bool {
        self.error.unwrap_or(false)
    }
}

//! STM32L0 peripheral memory map
//!
//! Base addresses from RM0367 §2.2.2. Only blocks the firmware touches
//! are listed.

/// Reset and clock control
pub const RCC_BASE: u32 = 0x4002_1000;
/// Touch sensing controller
pub const TSC_BASE: u32 = 0x4002_4000;
/// I2C1
pub const I2C1_BASE: u32 = 0x4000_5400;
/// I2C2
pub const I2C2_BASE: u32 = 0x4000_5800;

/// GPIO port A
pub const GPIOA_BASE: u32 = 0x5000_0000;
/// GPIO port B
pub const GPIOB_BASE: u32 = 0x5000_0400;
/// GPIO port C
pub const GPIOC_BASE: u32 = 0x5000_0800;
/// GPIO port D
pub const GPIOD_BASE: u32 = 0x5000_0C00;
/// GPIO port E
pub const GPIOE_BASE: u32 = 0x5000_1000;
/// GPIO port H
pub const GPIOH_BASE: u32 = 0x5000_1C00;

//! STM32L0-specific HAL for the segtouch firmware
//!
//! This crate provides STM32L0 implementations of the `segtouch-hal`
//! traits. It supports chips with the touch sensing controller and an
//! I2C v2 peripheral, including:
//!
//! - STM32L053R8
//! - STM32L073RZ
//!
//! # Features
//!
//! - `stm32l053r8`, `stm32l073rz` - Select the chip; pulls in embassy-stm32
//!   for the clock tree
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! Peripherals are driven through [`mmio::Mmio`], a raw register port.
//! [`rcc::Rcc`] and [`gpio::Gpio`] implement the clock and pin traits on
//! top of any register port, so board bring-up can be checked against a
//! simulated register file on the host.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[cfg(any(feature = "stm32l053r8", feature = "stm32l073rz"))]
pub mod clock;
pub mod gpio;
pub mod map;
pub mod mmio;
pub mod rcc;

pub use gpio::Gpio;
pub use mmio::Mmio;
pub use rcc::{Peripheral, Rcc};

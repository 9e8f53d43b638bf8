//! Segtouch Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits that the peripheral
//! drivers in `segtouch-core` are written against. Chip-specific crates
//! (currently STM32L0) implement them on top of real memory-mapped I/O,
//! and the test suites implement them on top of simulated register files.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  segtouch-firmware (board + main loop)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segtouch-core / segtouch-display       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segtouch-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ segtouch-hal-     │
//!           │    stm32l0        │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`register::RegisterPort`] - Raw word access to memory-mapped registers
//! - [`poll::PollPolicy`] - How a busy-wait on a status flag behaves
//! - [`i2c::I2cBus`] - Write-only I2C master transfers
//! - [`gpio::PinConfigurator`], [`gpio::ClockControl`] - Board bring-up

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod poll;
pub mod register;

// Re-export key traits at crate root for convenience
pub use gpio::{ClockControl, PinConfigurator};
pub use i2c::I2cBus;
pub use poll::{Bounded, PollPolicy, PollTimeout, Spin};
pub use register::{Field, Register, RegisterBlock, RegisterPort};

//! Board-agnostic core logic for the segtouch firmware
//!
//! This crate contains everything that does not depend on a specific
//! chip, only on the peripheral IP blocks and the `segtouch-hal` traits:
//!
//! - [`tsc`]: touch sensing controller, one acquisition per channel
//! - [`i2c`]: register-level I2C master with busy-polled transmit
//! - [`app`]: the acquire → combine → encode → send control loop
//!
//! Drivers own their register port and polling policy, so tests drive
//! them against simulated register files.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod app;
pub mod i2c;
pub mod tsc;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{combine_counts, CycleError, CycleReport, TouchDisplay};
pub use i2c::{I2cError, I2cMaster, TransferState};
pub use tsc::{AcquisitionResult, Channel, ChannelSpec, TouchSensor, TscConfig, TscError};

//! Seven-segment display support for segtouch
//!
//! This crate provides:
//! - [`segment`]: the pure codec from numbers/text to per-digit segment
//!   bitmaps ([`DisplayFrame`])
//! - [`saa1064`]: the driver for the four-digit SAA1064 LED controller,
//!   which turns a frame into a six-byte I2C write
//! - [`SegmentDisplay`]: the trait the main loop renders through
//!
//! # Digit wiring
//!
//! ```text
//! .-04-.
//! 80  01
//! :-40-:
//! 10  08
//! '-20-'
//! ```
//!
//! Bit `0x02` is not part of the digit: on the second digit it lights the
//! centre dot, on the third digit the red LED at the side of the display.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod saa1064;
pub mod segment;

// Re-export key types
pub use backend::{DisplayError, SegmentDisplay};
pub use saa1064::{ControlByte, DisplayConfig, Saa1064};
pub use segment::{encode, encode_text, DisplayFrame, HEX_DIGITS};

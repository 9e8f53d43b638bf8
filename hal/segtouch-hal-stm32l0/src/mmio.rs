//! Memory-mapped register port

#![allow(unsafe_code)]

use core::ptr::{read_volatile, write_volatile};

use segtouch_hal::register::{Register, RegisterPort};

/// Volatile word access to the real peripheral bus
///
/// Zero-sized; each driver gets its own handle. Exclusivity is the
/// caller's promise made in [`Mmio::new`].
#[derive(Debug)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Create a register port
    ///
    /// # Safety
    ///
    /// Must only run on the target chip. The caller guarantees that no
    /// two live handles (or other drivers) access the same peripheral
    /// block.
    pub unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterPort for Mmio {
    #[inline]
    fn read(&mut self, reg: Register) -> u32 {
        // SAFETY: `Mmio::new` contract, address comes from the chip map
        unsafe { read_volatile(reg.addr() as usize as *const u32) }
    }

    #[inline]
    fn write(&mut self, reg: Register, value: u32) {
        // SAFETY: as above
        unsafe { write_volatile(reg.addr() as usize as *mut u32, value) }
    }
}

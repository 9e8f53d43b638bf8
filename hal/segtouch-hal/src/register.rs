//! Memory-mapped register access
//!
//! [`RegisterPort`] is the only thing a chip (or a test double) has to
//! provide: whole-word reads and writes at an absolute address. Everything
//! above it goes through [`Field`] descriptors so that adjacent bit fields
//! are never touched by hand-written shift/mask arithmetic.

/// Absolute address of a 32-bit peripheral register
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Register(u32);

impl Register {
    /// Register at `offset` bytes from a peripheral base address
    pub const fn at(base: u32, offset: u32) -> Self {
        Self(base + offset)
    }

    /// The absolute bus address
    pub const fn addr(self) -> u32 {
        self.0
    }
}

/// Word-level access to hardware registers
///
/// Implementations own (or have exclusive use of) the registers they
/// touch. Reads may have side effects on real hardware, so callers must
/// not assume two reads of the same register return the same value.
pub trait RegisterPort {
    /// Read the current value of a register
    fn read(&mut self, reg: Register) -> u32;

    /// Write a whole word to a register
    fn write(&mut self, reg: Register, value: u32);

    /// Read-modify-write a register
    fn modify<F>(&mut self, reg: Register, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(reg);
        self.write(reg, f(value));
    }
}

impl<P: RegisterPort + ?Sized> RegisterPort for &mut P {
    fn read(&mut self, reg: Register) -> u32 {
        (**self).read(reg)
    }

    fn write(&mut self, reg: Register, value: u32) {
        (**self).write(reg, value)
    }
}

/// A bit field inside a peripheral register
///
/// The offset is relative to the peripheral base so the same field table
/// serves every instance of a peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    /// Register offset from the peripheral base
    pub offset: u32,
    /// Position of the least significant bit
    pub lsb: u8,
    /// Width in bits (1-32)
    pub width: u8,
}

impl Field {
    /// Multi-bit field
    pub const fn new(offset: u32, lsb: u8, width: u8) -> Self {
        Self { offset, lsb, width }
    }

    /// Single-bit field
    pub const fn bit(offset: u32, bit: u8) -> Self {
        Self::new(offset, bit, 1)
    }

    /// Mask of the field's bits in register position
    pub const fn mask(self) -> u32 {
        let ones = if self.width >= 32 {
            u32::MAX
        } else {
            (1u32 << self.width) - 1
        };
        ones << self.lsb
    }

    /// Extract this field's value from a raw register word
    pub const fn extract(self, word: u32) -> u32 {
        (word & self.mask()) >> self.lsb
    }

    /// Replace this field inside `word`, leaving the other bits untouched
    ///
    /// Bits of `value` that do not fit the field are discarded.
    pub const fn insert(self, word: u32, value: u32) -> u32 {
        (word & !self.mask()) | ((value << self.lsb) & self.mask())
    }
}

/// A register port bound to one peripheral instance
pub struct RegisterBlock<P> {
    port: P,
    base: u32,
}

impl<P: RegisterPort> RegisterBlock<P> {
    /// Bind `port` to the peripheral at `base`
    pub fn new(port: P, base: u32) -> Self {
        Self { port, base }
    }

    /// Peripheral base address
    pub fn base(&self) -> u32 {
        self.base
    }

    fn reg(&self, offset: u32) -> Register {
        Register::at(self.base, offset)
    }

    /// Read a whole register
    pub fn read(&mut self, offset: u32) -> u32 {
        let reg = self.reg(offset);
        self.port.read(reg)
    }

    /// Write a whole register
    pub fn write(&mut self, offset: u32, value: u32) {
        let reg = self.reg(offset);
        self.port.write(reg, value);
    }

    /// Read-modify-write a whole register
    pub fn modify<F>(&mut self, offset: u32, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let reg = self.reg(offset);
        self.port.modify(reg, f);
    }

    /// Read a field
    pub fn get(&mut self, field: Field) -> u32 {
        field.extract(self.read(field.offset))
    }

    /// Check a single-bit field
    pub fn is_set(&mut self, field: Field) -> bool {
        self.get(field) != 0
    }

    /// Read-modify-write one field
    pub fn set_field(&mut self, field: Field, value: u32) {
        self.modify(field.offset, |w| field.insert(w, value));
    }

    /// Set every bit of a field
    pub fn set(&mut self, field: Field) {
        self.modify(field.offset, |w| w | field.mask());
    }

    /// Clear every bit of a field
    pub fn clear(&mut self, field: Field) {
        self.modify(field.offset, |w| w & !field.mask());
    }

    /// Borrow the underlying port
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Give the port back
    pub fn release(self) -> P {
        self.port
    }
}

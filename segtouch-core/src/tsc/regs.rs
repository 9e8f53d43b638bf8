//! Touch sensing controller register layout (RM0367 §21.6)

use segtouch_hal::register::Field;

pub const CR: u32 = 0x00;
pub const ICR: u32 = 0x08;
pub const ISR: u32 = 0x0C;
pub const IOHCR: u32 = 0x10;
pub const IOSCR: u32 = 0x20;
pub const IOCCR: u32 = 0x28;
pub const IOGCSR: u32 = 0x30;
/// Counter register of group 1; group N is at `IOG1CR + 4 * (N - 1)`
pub const IOG1CR: u32 = 0x34;

// CR
pub const CR_TSCE: Field = Field::bit(CR, 0);
pub const CR_START: Field = Field::bit(CR, 1);
pub const CR_MCV: Field = Field::new(CR, 5, 3);
pub const CR_PGPSC: Field = Field::new(CR, 12, 3);
pub const CR_CTPL: Field = Field::new(CR, 24, 4);
pub const CR_CTPH: Field = Field::new(CR, 28, 4);

// ICR
pub const ICR_EOAIC: Field = Field::bit(ICR, 0);
pub const ICR_MCEIC: Field = Field::bit(ICR, 1);

// ISR
pub const ISR_EOAF: Field = Field::bit(ISR, 0);
pub const ISR_MCEF: Field = Field::bit(ISR, 1);

/// Counter value field width
pub const CNT_WIDTH: u8 = 14;

//! I2C v2 register layout (RM0367 §27.7)

use segtouch_hal::register::Field;

pub const CR1: u32 = 0x00;
pub const CR2: u32 = 0x04;
pub const TIMINGR: u32 = 0x10;
pub const ISR: u32 = 0x18;
pub const TXDR: u32 = 0x28;

// CR1
pub const CR1_PE: Field = Field::bit(CR1, 0);

// CR2
pub const CR2_SADD: Field = Field::new(CR2, 0, 10);
pub const CR2_RD_WRN: Field = Field::bit(CR2, 10);
pub const CR2_START: Field = Field::bit(CR2, 13);
pub const CR2_NBYTES: Field = Field::new(CR2, 16, 8);
pub const CR2_AUTOEND: Field = Field::bit(CR2, 25);

// TIMINGR
pub const TIMINGR_SCLL: Field = Field::new(TIMINGR, 0, 8);
pub const TIMINGR_SCLH: Field = Field::new(TIMINGR, 8, 8);
pub const TIMINGR_SDADEL: Field = Field::new(TIMINGR, 16, 4);
pub const TIMINGR_SCLDEL: Field = Field::new(TIMINGR, 20, 4);
pub const TIMINGR_PRESC: Field = Field::new(TIMINGR, 28, 4);

// ISR
pub const ISR_TXE: Field = Field::bit(ISR, 0);

// TXDR
pub const TXDR_TXDATA: Field = Field::new(TXDR, 0, 8);

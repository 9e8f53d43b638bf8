//! Register-level I2C master
//!
//! Write-only, busy-polled transfers on an I2C v2 peripheral. The
//! hardware is told the byte count up front and generates the STOP
//! condition itself (AUTOEND), so a transfer is:
//!
//! ```text
//! Idle ──START──▶ Addressed ──▶ WaitEmpty(0) ──TXE──▶ ByteWritten(0)
//!                                   ▲                      │
//!                                   └──────── next ────────┘
//!                                                          │ last
//!                                                          ▼
//!                                                      AutoStop
//! ```

pub(crate) mod regs;

use segtouch_hal::i2c::{I2cBus, I2cTiming};
use segtouch_hal::poll::PollPolicy;
use segtouch_hal::register::{RegisterBlock, RegisterPort};

/// Largest transfer the NBYTES field can describe without reload
pub const MAX_TRANSFER: usize = 255;

/// I2C master errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cError<E> {
    /// The polling policy gave up waiting for the transmit register
    Poll(E),
    /// More bytes than a single transfer can carry
    PayloadTooLong { len: usize },
}

/// Where the current (or last) transfer is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferState {
    /// No transfer issued yet
    Idle,
    /// Address, byte count and START are programmed
    Addressed,
    /// Waiting for the transmit register to empty before byte `index`
    WaitEmpty { index: usize },
    /// Byte `index` handed to the transmit register
    ByteWritten { index: usize },
    /// All bytes handed over; the peripheral finishes with STOP on its own
    AutoStop,
}

/// I2C master on an I2C v2 peripheral
pub struct I2cMaster<P, Q> {
    regs: RegisterBlock<P>,
    poll: Q,
    state: TransferState,
}

impl<P: RegisterPort, Q: PollPolicy> I2cMaster<P, Q> {
    /// Bind the driver to the peripheral at `base`
    pub fn new(port: P, base: u32, poll: Q) -> Self {
        Self {
            regs: RegisterBlock::new(port, base),
            poll,
            state: TransferState::Idle,
        }
    }

    /// Load SCL timing and enable the peripheral
    ///
    /// TIMINGR is only writable while the peripheral is disabled.
    pub fn init(&mut self, timing: I2cTiming) {
        self.regs.clear(regs::CR1_PE);
        self.regs.set_field(regs::TIMINGR_PRESC, timing.presc as u32);
        self.regs.set_field(regs::TIMINGR_SCLL, timing.scll as u32);
        self.regs.set_field(regs::TIMINGR_SCLH, timing.sclh as u32);
        self.regs.set_field(regs::TIMINGR_SDADEL, timing.sdadel as u32);
        self.regs.set_field(regs::TIMINGR_SCLDEL, timing.scldel as u32);
        self.regs.set(regs::CR1_PE);
    }

    /// Write `data` to the device at `address`
    ///
    /// Returns once the last byte is in the transmit register. The STOP
    /// condition follows from hardware and is not waited for.
    pub fn transmit(&mut self, address: u8, data: &[u8]) -> Result<(), I2cError<Q::Error>> {
        if data.len() > MAX_TRANSFER {
            return Err(I2cError::PayloadTooLong { len: data.len() });
        }

        self.regs.set(regs::CR2_AUTOEND);
        self.regs.set_field(regs::CR2_SADD, address as u32);
        self.regs.clear(regs::CR2_RD_WRN);
        self.regs.set_field(regs::CR2_NBYTES, data.len() as u32);
        self.regs.set(regs::CR2_START);
        self.state = TransferState::Addressed;

        for (index, &byte) in data.iter().enumerate() {
            self.state = TransferState::WaitEmpty { index };
            let block = &mut self.regs;
            self.poll
                .wait(|| block.is_set(regs::ISR_TXE))
                .map_err(I2cError::Poll)?;
            self.regs
                .write(regs::TXDR, regs::TXDR_TXDATA.insert(0, byte as u32));
            self.state = TransferState::ByteWritten { index };
        }

        self.state = TransferState::AutoStop;
        Ok(())
    }

    pub fn state(&self) -> TransferState {
        self.state
    }

    pub fn free(self) -> (P, Q) {
        (self.regs.release(), self.poll)
    }
}

impl<P: RegisterPort, Q: PollPolicy> I2cBus for I2cMaster<P, Q> {
    type Error = I2cError<Q::Error>;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.transmit(address, data)
    }
}

//! Simulated peripherals for host tests
//!
//! Both fakes implement [`RegisterPort`] and model just enough of the
//! hardware state machine to catch ordering mistakes: a flag is only set
//! after the driver has polled for it, and every externally visible step
//! is recorded as an event.

use std::collections::{BTreeMap, VecDeque};
use std::vec::Vec;

use segtouch_hal::register::{Register, RegisterPort};

use crate::i2c::regs as i2c_regs;
use crate::tsc::regs as tsc_regs;

pub const TSC_BASE: u32 = 0x4002_4000;
pub const I2C_BASE: u32 = 0x4000_5400;

/// Something the touch controller observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TscEvent {
    /// START written to CR
    Start,
    /// ISR read, with the value returned
    IsrRead(u32),
    /// A group counter register was read
    CountRead(u16),
    /// ICR written
    FlagsCleared,
    /// IOCCR written, with the new value
    LineWrite(u32),
}

/// Scripted result of one acquisition
#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    count: u16,
    polls: u32,
    max_count: bool,
}

impl Outcome {
    /// End of acquisition after `polls` unflagged ISR reads
    pub fn done(count: u16, polls: u32) -> Self {
        Self {
            count,
            polls,
            max_count: false,
        }
    }

    /// Max count error after `polls` unflagged ISR reads
    pub fn max_count(count: u16, polls: u32) -> Self {
        Self {
            count,
            polls,
            max_count: true,
        }
    }
}

/// Touch sensing controller register file
///
/// Each START consumes the next scripted [`Outcome`]. With nothing left
/// in the script the acquisition never ends.
#[derive(Default)]
pub struct SimTsc {
    words: BTreeMap<u32, u32>,
    script: VecDeque<Outcome>,
    running: Option<Outcome>,
    hanging: bool,
    events: Vec<TscEvent>,
    max_active: u32,
    started_while_busy: bool,
}

impl SimTsc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register's initial value
    pub fn preset(&mut self, offset: u32, value: u32) {
        self.words.insert(offset, value);
    }

    pub fn script(&mut self, outcome: Outcome) {
        self.script.push_back(outcome);
    }

    /// Current value of a register, without side effects
    pub fn word(&self, offset: u32) -> u32 {
        self.words.get(&offset).copied().unwrap_or(0)
    }

    pub fn events(&self) -> &[TscEvent] {
        &self.events
    }

    /// Most channel I/Os enabled at any START
    pub fn max_active_at_start(&self) -> u32 {
        self.max_active
    }

    /// A START arrived before the previous acquisition had finished
    pub fn started_while_busy(&self) -> bool {
        self.started_while_busy
    }

    fn busy(&self) -> bool {
        self.running.is_some() || self.hanging
    }

    fn start(&mut self) {
        if self.busy() {
            self.started_while_busy = true;
        }
        let active = self.word(tsc_regs::IOCCR).count_ones();
        self.max_active = self.max_active.max(active);
        self.running = self.script.pop_front();
        self.hanging = self.running.is_none();
        self.events.push(TscEvent::Start);
    }

    fn tick(&mut self) {
        let Some(outcome) = self.running.as_mut() else {
            return;
        };
        if outcome.polls > 0 {
            outcome.polls -= 1;
            return;
        }

        let outcome = *outcome;
        self.running = None;

        let mut flags = tsc_regs::ISR_EOAF.mask();
        if outcome.max_count {
            flags |= tsc_regs::ISR_MCEF.mask();
        }
        let isr = self.word(tsc_regs::ISR) | flags;
        self.words.insert(tsc_regs::ISR, isr);

        let lines = self.word(tsc_regs::IOCCR);
        if lines != 0 {
            let group = lines.trailing_zeros() / 4;
            self.words
                .insert(tsc_regs::IOG1CR + 4 * group, outcome.count as u32);
        }

        let cr = self.word(tsc_regs::CR) & !tsc_regs::CR_START.mask();
        self.words.insert(tsc_regs::CR, cr);
    }

    fn is_counter(offset: u32) -> bool {
        (tsc_regs::IOG1CR..tsc_regs::IOG1CR + 4 * 8).contains(&offset)
    }
}

impl RegisterPort for SimTsc {
    fn read(&mut self, reg: Register) -> u32 {
        let offset = reg.addr() - TSC_BASE;
        if offset == tsc_regs::ISR {
            self.tick();
            let isr = self.word(offset);
            self.events.push(TscEvent::IsrRead(isr));
            return isr;
        }

        let value = self.word(offset);
        if Self::is_counter(offset) {
            self.events.push(TscEvent::CountRead(value as u16));
        }
        value
    }

    fn write(&mut self, reg: Register, value: u32) {
        let offset = reg.addr() - TSC_BASE;
        match offset {
            tsc_regs::ICR => {
                let isr = self.word(tsc_regs::ISR) & !(value & 0b11);
                self.words.insert(tsc_regs::ISR, isr);
                self.events.push(TscEvent::FlagsCleared);
            }
            tsc_regs::IOCCR => {
                self.words.insert(offset, value);
                self.events.push(TscEvent::LineWrite(value));
            }
            tsc_regs::CR => {
                self.words.insert(offset, value);
                if tsc_regs::CR_START.extract(value) != 0 {
                    self.start();
                }
            }
            _ => {
                self.words.insert(offset, value);
            }
        }
    }
}

/// Something the I2C peripheral observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I2cEvent {
    /// START requested through CR2
    Start {
        address: u16,
        nbytes: u8,
        autoend: bool,
        read: bool,
    },
    /// ISR read, with the TXE flag returned
    TxeRead(bool),
    /// A byte was written to TXDR
    Byte(u8),
}

/// I2C v2 register file with a slow transmit shift register
pub struct SimI2c {
    words: BTreeMap<u32, u32>,
    txe: bool,
    delay: u32,
    pending: u32,
    remaining: u8,
    autoend: bool,
    responsive: bool,
    events: Vec<I2cEvent>,
    sent: Vec<u8>,
    stops: u32,
    overrun: bool,
}

impl SimI2c {
    /// TXE stays low for `delay` ISR reads after each byte
    pub fn new(delay: u32) -> Self {
        Self {
            words: BTreeMap::new(),
            txe: true,
            delay,
            pending: 0,
            remaining: 0,
            autoend: false,
            responsive: true,
            events: Vec::new(),
            sent: Vec::new(),
            stops: 0,
            overrun: false,
        }
    }

    /// A bus that holds the transmit register full forever
    pub fn unresponsive() -> Self {
        Self {
            txe: false,
            responsive: false,
            ..Self::new(0)
        }
    }

    pub fn word(&self, offset: u32) -> u32 {
        if offset == i2c_regs::ISR {
            return self.txe as u32;
        }
        self.words.get(&offset).copied().unwrap_or(0)
    }

    pub fn events(&self) -> &[I2cEvent] {
        &self.events
    }

    /// Every byte written to TXDR, across transfers
    pub fn sent(&self) -> &[u8] {
        &self.sent
    }

    /// STOP conditions generated by AUTOEND
    pub fn stops(&self) -> u32 {
        self.stops
    }

    /// TXDR was written while TXE was low
    pub fn overrun(&self) -> bool {
        self.overrun
    }

    fn start(&mut self, cr2: u32) {
        let nbytes = i2c_regs::CR2_NBYTES.extract(cr2) as u8;
        let autoend = i2c_regs::CR2_AUTOEND.extract(cr2) != 0;
        self.events.push(I2cEvent::Start {
            address: i2c_regs::CR2_SADD.extract(cr2) as u16,
            nbytes,
            autoend,
            read: i2c_regs::CR2_RD_WRN.extract(cr2) != 0,
        });
        self.remaining = nbytes;
        self.autoend = autoend;
        // Hardware clears START once the address is out
        let cr2 = cr2 & !i2c_regs::CR2_START.mask();
        self.words.insert(i2c_regs::CR2, cr2);
    }

    fn transmit(&mut self, value: u32) {
        if !self.txe {
            self.overrun = true;
        }
        let byte = value as u8;
        self.events.push(I2cEvent::Byte(byte));
        self.sent.push(byte);
        self.txe = false;
        self.pending = self.delay;

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 && self.autoend {
            self.stops += 1;
            self.autoend = false;
        }
    }
}

impl RegisterPort for SimI2c {
    fn read(&mut self, reg: Register) -> u32 {
        let offset = reg.addr() - I2C_BASE;
        if offset == i2c_regs::ISR {
            if !self.txe && self.responsive {
                if self.pending == 0 {
                    self.txe = true;
                } else {
                    self.pending -= 1;
                }
            }
            self.events.push(I2cEvent::TxeRead(self.txe));
        }
        self.word(offset)
    }

    fn write(&mut self, reg: Register, value: u32) {
        let offset = reg.addr() - I2C_BASE;
        match offset {
            i2c_regs::TXDR => self.transmit(value),
            i2c_regs::CR2 if i2c_regs::CR2_START.extract(value) != 0 => self.start(value),
            i2c_regs::ISR => {}
            _ => {
                self.words.insert(offset, value);
            }
        }
    }
}

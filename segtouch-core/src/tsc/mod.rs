//! Touch sensing controller driver
//!
//! The controller measures one I/O per analog group by transferring
//! charge from the electrode into a sampling capacitor and counting the
//! transfers. [`TouchSensor::acquire`] runs one such measurement per
//! requested channel, strictly one after another:
//!
//! 1. enable the channel I/O
//! 2. start the acquisition
//! 3. wait for end-of-acquisition or max-count-error
//! 4. latch the error flag and, if requested, the counter
//! 5. acknowledge both flags
//! 6. disable the channel I/O
//!
//! Only one channel I/O is ever enabled, so the next call always starts
//! from the same hardware state.

mod config;
pub(crate) mod regs;

pub use config::{AcquisitionResult, Channel, ChannelSpec, IoSet, MaxCount, TscConfig};

use heapless::Vec;
use segtouch_hal::poll::PollPolicy;
use segtouch_hal::register::{RegisterBlock, RegisterPort};

/// Most channels a single [`TouchSensor::acquire`] call accepts
pub const MAX_CHANNELS: usize = 8;

/// Touch acquisition errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TscError<E> {
    /// The polling policy gave up waiting for the acquisition to finish
    Poll(E),
    /// More than [`MAX_CHANNELS`] channels requested
    TooManyChannels,
}

/// Touch sensing controller
pub struct TouchSensor<P, Q> {
    regs: RegisterBlock<P>,
    poll: Q,
}

impl<P: RegisterPort, Q: PollPolicy> TouchSensor<P, Q> {
    /// Bind the driver to the controller at `base`
    pub fn new(port: P, base: u32, poll: Q) -> Self {
        Self {
            regs: RegisterBlock::new(port, base),
            poll,
        }
    }

    /// Program timing, I/O roles and enable the controller
    ///
    /// The peripheral clock and the pin alternate functions must already
    /// be set up.
    pub fn init(&mut self, config: &TscConfig) {
        let cr = [
            (regs::CR_PGPSC, config.pgpsc()),
            (regs::CR_CTPH, config.ctph()),
            (regs::CR_CTPL, config.ctpl()),
            (regs::CR_MCV, config.max_count.bits()),
        ]
        .iter()
        .fold(self.regs.read(regs::CR), |w, (field, value)| {
            field.insert(w, *value)
        });
        self.regs.write(regs::CR, regs::CR_TSCE.insert(cr, 1));

        let no_hysteresis = config.no_hysteresis.bits();
        self.regs.modify(regs::IOHCR, |w| w & !no_hysteresis);

        let sampling = config.sampling.bits();
        self.regs.modify(regs::IOSCR, |w| w | sampling);

        let groups = config.sampling.groups() as u32;
        self.regs.modify(regs::IOGCSR, |w| w | groups);
    }

    /// Measure each channel in order
    ///
    /// The result has one entry per requested channel, in order. Channels
    /// are never measured concurrently.
    pub fn acquire(
        &mut self,
        channels: &[ChannelSpec],
    ) -> Result<Vec<AcquisitionResult, MAX_CHANNELS>, TscError<Q::Error>> {
        if channels.len() > MAX_CHANNELS {
            return Err(TscError::TooManyChannels);
        }

        let mut results = Vec::new();
        for spec in channels {
            let result = self.acquire_one(spec)?;
            // Capacity checked above
            let _ = results.push(result);
        }
        Ok(results)
    }

    fn acquire_one(
        &mut self,
        spec: &ChannelSpec,
    ) -> Result<AcquisitionResult, TscError<Q::Error>> {
        let line = spec.channel.io_field(regs::IOCCR);

        self.regs.set(line);
        self.regs.set(regs::CR_START);

        let mut isr = 0;
        let block = &mut self.regs;
        let done = regs::ISR_EOAF.mask() | regs::ISR_MCEF.mask();
        let waited = self.poll.wait(|| {
            isr = block.read(regs::ISR);
            isr & done != 0
        });

        let outcome = match waited {
            Ok(()) => {
                let error = spec
                    .read_error
                    .then(|| regs::ISR_MCEF.extract(isr) != 0);
                let count = if spec.read_count {
                    Some(self.regs.get(spec.channel.count_field()) as u16)
                } else {
                    None
                };
                Ok(AcquisitionResult { count, error })
            }
            Err(e) => Err(TscError::Poll(e)),
        };

        // Leave the controller idle even when the wait was abandoned
        self.regs.write(
            regs::ICR,
            regs::ICR_EOAIC.mask() | regs::ICR_MCEIC.mask(),
        );
        self.regs.clear(line);

        outcome
    }

    /// Bitmask of channel I/Os currently enabled
    pub fn active_channels(&mut self) -> u32 {
        self.regs.read(regs::IOCCR)
    }

    pub fn free(self) -> (P, Q) {
        (self.regs.release(), self.poll)
    }
}

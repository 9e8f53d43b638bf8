//! Touch-to-display control loop
//!
//! Each cycle measures both touch channels, packs the two counts into one
//! 16-bit value, renders it as four hex digits and pushes the frame to the
//! display. The centre dot is always lit; the side LED shows that either
//! channel hit its max count.

use segtouch_display::{encode, DisplayFrame, SegmentDisplay};
use segtouch_hal::poll::PollPolicy;
use segtouch_hal::register::RegisterPort;

use crate::tsc::{Channel, ChannelSpec, TouchSensor, TscError};

/// The two sensed electrodes, in display order
pub const CHANNELS: [ChannelSpec; 2] = [
    ChannelSpec::new(Channel::G1_IO1),
    ChannelSpec::new(Channel::G1_IO2),
];

/// Pack two 12-bit counts into one display value
///
/// Bits [11:4] of `count1` become the high byte, bits [11:4] of `count2`
/// the low byte. Bits above 11 are dropped.
pub const fn combine_counts(count1: u16, count2: u16) -> u16 {
    ((count1 & 0xff0) << 4) | ((count2 & 0xff0) >> 4)
}

/// What one cycle measured and showed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    pub composite: u16,
    /// Either channel reported a max count error
    pub indicator: bool,
    pub frame: DisplayFrame,
}

/// Control loop errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleError<A, D> {
    Acquire(A),
    Display(D),
}

/// Touch sensor wired to a segment display
pub struct TouchDisplay<P, Q, D> {
    sensor: TouchSensor<P, Q>,
    display: D,
}

impl<P, Q, D> TouchDisplay<P, Q, D>
where
    P: RegisterPort,
    Q: PollPolicy,
    D: SegmentDisplay,
{
    /// Both peripherals must already be initialised
    pub fn new(sensor: TouchSensor<P, Q>, display: D) -> Self {
        Self { sensor, display }
    }

    /// Run one acquire, combine, encode, send pass
    pub fn cycle(&mut self) -> Result<CycleReport, CycleError<TscError<Q::Error>, D::Error>> {
        let results = self.sensor.acquire(&CHANNELS).map_err(CycleError::Acquire)?;

        let mut counts = [0u16; 2];
        let mut indicator = false;
        for (slot, result) in counts.iter_mut().zip(results.iter()) {
            *slot = result.count_or_zero();
            indicator |= result.is_error();
        }

        let composite = combine_counts(counts[0], counts[1]);
        let frame = encode(composite, true, indicator);
        self.display.show(&frame).map_err(CycleError::Display)?;

        Ok(CycleReport {
            composite,
            indicator,
            frame,
        })
    }

    /// Cycle forever
    ///
    /// With non-failing poll and display types this never returns.
    pub fn run(&mut self) -> CycleError<TscError<Q::Error>, D::Error> {
        loop {
            if let Err(e) = self.cycle() {
                return e;
            }
        }
    }

    pub fn sensor_mut(&mut self) -> &mut TouchSensor<P, Q> {
        &mut self.sensor
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn free(self) -> (TouchSensor<P, Q>, D) {
        (self.sensor, self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i2c::I2cMaster;
    use crate::testing::{Outcome, SimI2c, SimTsc, I2C_BASE, TSC_BASE};
    use crate::tsc::TscConfig;
    use proptest::prelude::*;
    use segtouch_display::{DisplayConfig, Saa1064, HEX_DIGITS};
    use segtouch_hal::i2c::I2cTiming;
    use segtouch_hal::poll::{Bounded, PollTimeout, Spin};

    /// Keeps every frame; fails once `limit` frames were shown
    struct FrameLog {
        frames: Vec<DisplayFrame>,
        limit: usize,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Full;

    impl FrameLog {
        fn new(limit: usize) -> Self {
            Self {
                frames: Vec::new(),
                limit,
            }
        }
    }

    impl SegmentDisplay for FrameLog {
        type Error = Full;

        fn show(&mut self, frame: &DisplayFrame) -> Result<(), Self::Error> {
            if self.frames.len() >= self.limit {
                return Err(Full);
            }
            self.frames.push(*frame);
            Ok(())
        }
    }

    fn sensor(script: &[Outcome]) -> TouchSensor<SimTsc, Spin> {
        let mut sim = SimTsc::new();
        for outcome in script {
            sim.script(*outcome);
        }
        let mut tsc = TouchSensor::new(sim, TSC_BASE, Spin);
        tsc.init(&TscConfig::GROUP1_PA0_PA1);
        tsc
    }

    #[test]
    fn test_combine_counts_examples() {
        assert_eq!(combine_counts(0x0AB0, 0x0CD0), 0xABCD);
        assert_eq!(combine_counts(0x000F, 0x000F), 0x0000);
        assert_eq!(combine_counts(0x3FFF, 0x3FFF), 0xFFFF);
    }

    proptest! {
        #[test]
        fn prop_combine_uses_middle_bytes(c1 in 0u16..=0x3FFF, c2 in 0u16..=0x3FFF) {
            let v = combine_counts(c1, c2);
            prop_assert_eq!(v >> 8, (c1 >> 4) & 0xff);
            prop_assert_eq!(v & 0xff, (c2 >> 4) & 0xff);
        }

        #[test]
        fn prop_combine_ignores_low_nibbles(c1 in 0u16..=0x3FFF, c2 in 0u16..=0x3FFF, n in 0u16..16) {
            prop_assert_eq!(
                combine_counts(c1, c2),
                combine_counts((c1 & !0xf) | n, (c2 & !0xf) | n)
            );
        }
    }

    #[test]
    fn test_cycle_shows_composite() {
        let tsc = sensor(&[Outcome::done(0x0120, 2), Outcome::done(0x0340, 2)]);
        let mut app = TouchDisplay::new(tsc, FrameLog::new(8));

        let report = app.cycle().unwrap();
        assert_eq!(report.composite, 0x1234);
        assert!(!report.indicator);
        assert_eq!(report.frame, encode(0x1234, true, false));

        let (_, log) = app.free();
        assert_eq!(log.frames, vec![encode(0x1234, true, false)]);
    }

    #[test]
    fn test_max_count_lights_indicator() {
        let tsc = sensor(&[Outcome::done(0x0100, 1), Outcome::max_count(0x3FFF, 1)]);
        let mut app = TouchDisplay::new(tsc, FrameLog::new(8));

        let report = app.cycle().unwrap();
        assert!(report.indicator);
        assert_eq!(report.composite, 0x10FF);
        assert_eq!(report.frame.digits[2] & 0x02, 0x02);
        assert_eq!(report.frame.digits[1] & 0x02, 0x02);
    }

    #[test]
    fn test_run_stops_on_display_error() {
        let script: Vec<Outcome> = (0..8).map(|n| Outcome::done(n * 0x10, 1)).collect();
        let mut app = TouchDisplay::new(sensor(&script), FrameLog::new(3));

        assert_eq!(app.run(), CycleError::Display(Full));
        assert_eq!(app.display_mut().frames.len(), 3);
        assert_eq!(app.sensor_mut().active_channels(), 0);
    }

    #[test]
    fn test_run_reports_acquisition_timeout() {
        let mut sim = SimTsc::new();
        sim.script(Outcome::done(0x100, 1));
        sim.script(Outcome::done(0x200, 1));
        // Third acquisition never finishes
        let tsc = TouchSensor::new(sim, TSC_BASE, Bounded::new(10));
        let mut app = TouchDisplay::new(tsc, FrameLog::new(8));

        assert_eq!(
            app.run(),
            CycleError::Acquire(TscError::Poll(PollTimeout { polls: 10 }))
        );
        assert_eq!(app.display_mut().frames.len(), 1);
    }

    #[test]
    fn test_full_stack_payload() {
        let tsc = sensor(&[Outcome::done(0x0AB0, 3), Outcome::max_count(0x0CD0, 1)]);

        let mut i2c = I2cMaster::new(SimI2c::new(2), I2C_BASE, Spin);
        i2c.init(I2cTiming::STANDARD_32MHZ);
        let display = Saa1064::new(i2c, DisplayConfig::default());

        let mut app = TouchDisplay::new(tsc, display);
        let report = app.cycle().unwrap();
        assert_eq!(report.composite, 0xABCD);

        let (_, display) = app.free();
        let (sim, _) = display.free().free();
        assert!(!sim.overrun());
        assert_eq!(sim.stops(), 1);
        assert_eq!(
            sim.sent(),
            &[
                0x00,
                0x27,
                HEX_DIGITS[0xD],
                HEX_DIGITS[0xC] | 0x02,
                HEX_DIGITS[0xB] | 0x02,
                HEX_DIGITS[0xA],
            ]
        );
    }
}

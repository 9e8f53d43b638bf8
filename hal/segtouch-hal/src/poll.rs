//! Busy-wait polling policies
//!
//! Every blocking operation in the drivers is a loop on a status flag.
//! The loop itself lives in a [`PollPolicy`] so the caller decides what
//! "forever" means: [`Spin`] keeps the hardware contract (no timeout, the
//! call may never return), [`Bounded`] gives up after a fixed number of
//! polls.

use core::convert::Infallible;

/// Strategy for waiting on a hardware condition
pub trait PollPolicy {
    /// Error returned when the policy stops waiting
    type Error;

    /// Call `ready` until it returns `true`
    ///
    /// `ready` is always called at least once.
    fn wait<F>(&mut self, ready: F) -> Result<(), Self::Error>
    where
        F: FnMut() -> bool;
}

impl<T: PollPolicy + ?Sized> PollPolicy for &mut T {
    type Error = T::Error;

    fn wait<F>(&mut self, ready: F) -> Result<(), Self::Error>
    where
        F: FnMut() -> bool,
    {
        (**self).wait(ready)
    }
}

/// Spin on the condition with no upper bound
///
/// If the peripheral never raises the flag this never returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spin;

impl PollPolicy for Spin {
    type Error = Infallible;

    fn wait<F>(&mut self, mut ready: F) -> Result<(), Self::Error>
    where
        F: FnMut() -> bool,
    {
        while !ready() {
            core::hint::spin_loop();
        }
        Ok(())
    }
}

/// A wait ran out of polls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollTimeout {
    /// Number of times the condition was checked
    pub polls: u32,
}

/// Give up after a fixed number of polls
///
/// The budget applies to each call to [`PollPolicy::wait`] separately.
#[derive(Debug, Clone, Copy)]
pub struct Bounded {
    max_polls: u32,
}

impl Bounded {
    /// Allow at most `max_polls` checks per wait (at least one)
    pub const fn new(max_polls: u32) -> Self {
        Self {
            max_polls: if max_polls == 0 { 1 } else { max_polls },
        }
    }

    /// The per-wait budget
    pub const fn max_polls(&self) -> u32 {
        self.max_polls
    }
}

impl PollPolicy for Bounded {
    type Error = PollTimeout;

    fn wait<F>(&mut self, mut ready: F) -> Result<(), Self::Error>
    where
        F: FnMut() -> bool,
    {
        for _ in 0..self.max_polls {
            if ready() {
                return Ok(());
            }
            core::hint::spin_loop();
        }
        Err(PollTimeout {
            polls: self.max_polls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_returns_once_ready() {
        let mut calls = 0;
        let result = Spin.wait(|| {
            calls += 1;
            calls == 5
        });
        assert!(result.is_ok());
        assert_eq!(calls, 5);
    }

    #[test]
    fn test_spin_checks_at_least_once() {
        let mut calls = 0;
        Spin.wait(|| {
            calls += 1;
            true
        })
        .ok();
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_bounded_times_out() {
        let mut policy = Bounded::new(3);
        let mut calls = 0;
        let result = policy.wait(|| {
            calls += 1;
            false
        });
        assert_eq!(result, Err(PollTimeout { polls: 3 }));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_bounded_budget_is_per_wait() {
        let mut policy = Bounded::new(2);
        assert!(policy.wait(|| true).is_ok());
        let mut calls = 0;
        let result = policy.wait(|| {
            calls += 1;
            calls == 2
        });
        assert!(result.is_ok());
    }

    #[test]
    fn test_bounded_zero_means_one() {
        assert_eq!(Bounded::new(0).max_polls(), 1);
    }
}

//! Display backend trait
//!
//! Defines the interface the main loop renders through.

use crate::segment::DisplayFrame;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError<E> {
    /// Communication error with the display controller
    Bus(E),
}

/// A four-digit segment display
pub trait SegmentDisplay {
    /// Error type for display updates
    type Error;

    /// Show a frame
    ///
    /// Returns once the controller has accepted the whole frame.
    fn show(&mut self, frame: &DisplayFrame) -> Result<(), Self::Error>;
}

impl<D: SegmentDisplay + ?Sized> SegmentDisplay for &mut D {
    type Error = D::Error;

    fn show(&mut self, frame: &DisplayFrame) -> Result<(), Self::Error> {
        (**self).show(frame)
    }
}

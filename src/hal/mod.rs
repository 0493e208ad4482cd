//! Platform seams the player is built against.
//!
//! Output lines are anything implementing the embedded-hal digital traits;
//! owning such a value means the line is already configured for output.
//! Time comes from a [`Clock`] reporting a wrapping millisecond counter.

pub mod sim;

pub use embedded_hal::digital::{OutputPin, PinState, StatefulOutputPin};

pub use sim::{ManualClock, SimPin, SystemClock};

/// Millisecond timestamp, fixed width. Wraps roughly every 49.7 days.
pub type Millis = u32;

pub trait Clock {
    fn now_ms(&self) -> Millis;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }
}

pub fn elapsed(now: Millis, since: Millis) -> Millis {
    now.wrapping_sub(since)
}

//! Host-side stand-ins for the output line and the millisecond counter.

use std::{
    cell::{Cell, RefCell},
    convert::Infallible,
    rc::Rc,
    time::Instant,
};

use embedded_hal::digital::{ErrorType, OutputPin, PinState, StatefulOutputPin};
use log::info;

use super::{Clock, Millis};

#[derive(Debug)]
struct Line {
    level: PinState,
    /// every level driven onto the line, in order
    writes: Vec<PinState>,
}

/// Simulated output line.
///
/// Clones share the same line, so a test can keep one handle while the
/// player owns another.
#[derive(Clone, Debug)]
pub struct SimPin {
    name: &'static str,
    line: Rc<RefCell<Line>>,
}

impl SimPin {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            line: Rc::new(RefCell::new(Line {
                level: PinState::Low,
                writes: Vec::new(),
            })),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn level(&self) -> PinState {
        self.line.borrow().level
    }

    pub fn is_high(&self) -> bool {
        self.level() == PinState::High
    }

    // another driver moving the line, not recorded
    pub fn force(&self, level: PinState) {
        self.line.borrow_mut().level = level;
    }

    pub fn write_count(&self) -> usize {
        self.line.borrow().writes.len()
    }

    pub fn writes(&self) -> Vec<PinState> {
        self.line.borrow().writes.clone()
    }

    pub fn clear_writes(&self) {
        self.line.borrow_mut().writes.clear();
    }

    fn drive(&self, level: PinState) {
        let mut line = self.line.borrow_mut();

        if line.level != level {
            info!("{}: {:?} -> {:?}", self.name, line.level, level);
        }

        line.level = level;
        line.writes.push(level);
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(PinState::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(PinState::High);
        Ok(())
    }
}

impl StatefulOutputPin for SimPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.is_high())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.is_high())
    }
}

#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, now: Millis) {
        self.now.set(now);
    }

    pub fn advance(&self, ms: Millis) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}

#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> Millis {
        // truncation is the wraparound
        self.origin.elapsed().as_millis() as Millis
    }
}

//! Non-blocking blink pattern playback on a single output line.
//!
//! The owner calls [`PatternPlayer::update`] from its main loop. Each call
//! makes at most one transition, so a slow loop stretches the pattern
//! rather than skipping symbols.

use embedded_hal::digital::{OutputPin, PinState, StatefulOutputPin};
use log::{debug, trace};

use crate::{
    error::{Error, Result},
    hal::{elapsed, Clock, Millis},
};

pub use symbol::{symbol_at, Symbol};

pub mod symbol;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    PrePulse,
    // symbol driven, waiting out its hold
    Hold,
}

pub struct PatternPlayer<'p, P, C> {
    /// owned output line
    pin: P,
    clock: C,
    /// borrowed pattern text, never copied
    pattern: &'p [u8],
    /// length of a dot
    unit: Millis,
    active: bool,
    /// cursor into `pattern`
    index: usize,
    phase: Phase,
    /// time of the last phase transition
    last_change: Millis,
    /// line level sampled by the latest `start`
    previous: PinState,
    /// reapply `previous` on stop instead of driving low
    restore: bool,
}

impl<'p, P, C> PatternPlayer<'p, P, C>
where
    P: StatefulOutputPin,
    C: Clock,
{
    /// Takes ownership of an output line and drives it low. Nothing plays
    /// until [`start`](Self::start).
    pub fn new(mut pin: P, clock: C) -> Result<Self, P::Error> {
        pin.set_low().map_err(Error::Pin)?;

        Ok(Self {
            pin,
            clock,
            pattern: &[],
            unit: 0,
            active: false,
            index: 0,
            phase: Phase::PrePulse,
            last_change: 0,
            previous: PinState::Low,
            restore: false,
        })
    }

    /// Begin playing `pattern` from its first symbol, abandoning anything
    /// already in flight.
    ///
    /// `unit` is the dot length in milliseconds and must be non-zero. With
    /// `restore` set, the level the line has right now is put back when
    /// playback ends; otherwise the line is left low.
    ///
    /// If the line cannot be read nothing changes. If the initial low write
    /// fails the pattern is still armed and the error is returned.
    pub fn start<T>(&mut self, pattern: &'p T, unit: Millis, restore: bool) -> Result<(), P::Error>
    where
        T: AsRef<[u8]> + ?Sized,
    {
        let previous = PinState::from(self.pin.is_set_high().map_err(Error::Pin)?);

        self.pattern = pattern.as_ref();
        self.unit = unit;
        self.restore = restore;
        self.previous = previous;
        self.index = 0;
        self.phase = Phase::PrePulse;
        self.last_change = self.clock.now_ms();
        self.active = true;

        debug!(
            "start: {} symbols, unit {}ms, restore {:?}",
            self.remaining(),
            unit,
            restore.then_some(previous)
        );

        let written = self.pin.set_low();

        // nothing to play, run the stop sequence now
        if self.at_end() {
            self.stop()?;
        }

        written.map_err(Error::Pin)
    }

    /// Advance playback by at most one transition.
    pub fn update(&mut self) -> Result<(), P::Error> {
        if !self.active {
            return Ok(());
        }

        let Some(symbol) = symbol_at(self.pattern, self.index) else {
            return Ok(());
        };

        let now = self.clock.now_ms();

        match self.phase {
            Phase::PrePulse => {
                self.phase = Phase::Hold;
                self.last_change = now;

                trace!("{} {:?} at {}ms", self.index, symbol, now);
                self.pin.set_state(symbol.level()).map_err(Error::Pin)
            }
            Phase::Hold => {
                if elapsed(now, self.last_change) < symbol.hold_ms(self.unit) {
                    return Ok(());
                }

                self.phase = Phase::PrePulse;
                self.last_change = now;
                self.index += 1;

                let written = self.pin.set_low();

                if self.at_end() {
                    debug!("pattern finished at {}ms", now);
                    self.stop()?;
                }

                written.map_err(Error::Pin)
            }
        }
    }

    /// End playback and leave the line low, or at its pre-start level if
    /// restoring was asked for. Safe to call while idle.
    pub fn stop(&mut self) -> Result<(), P::Error> {
        if self.active {
            debug!("stop at symbol {}", self.index);
        }

        self.active = false;

        let level = if self.restore {
            self.previous
        } else {
            PinState::Low
        };

        self.pin.set_state(level).map_err(Error::Pin)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn unit_ms(&self) -> Millis {
        self.unit
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    pub fn release(self) -> P {
        self.pin
    }

    fn at_end(&self) -> bool {
        symbol_at(self.pattern, self.index).is_none()
    }

    fn remaining(&self) -> usize {
        (self.index..)
            .take_while(|&i| symbol_at(self.pattern, i).is_some())
            .count()
    }
}

use embedded_hal::digital::PinState;

use crate::hal::Millis;

mod glyph {
    pub const DOT: u8 = b'.';
    pub const DASH: u8 = b'_';
    /// end of text, same as the end of the slice
    pub const END: u8 = 0;
}

mod units {
    pub const DOT: u32 = 1;
    /// dashes and gaps
    pub const DASH: u32 = 3;
}

/// One character of a blink pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    /// short pulse
    Dot,
    /// long pulse
    Dash,
    /// any other character: the line stays low for a long slot
    Gap,
}

impl From<u8> for Symbol {
    fn from(value: u8) -> Self {
        match value {
            glyph::DOT => Symbol::Dot,
            glyph::DASH => Symbol::Dash,
            _ => Symbol::Gap,
        }
    }
}

impl Symbol {
    pub fn level(self) -> PinState {
        match self {
            Symbol::Dot | Symbol::Dash => PinState::High,
            Symbol::Gap => PinState::Low,
        }
    }

    // in multiples of the unit time
    pub fn units(self) -> u32 {
        match self {
            Symbol::Dot => units::DOT,
            Symbol::Dash | Symbol::Gap => units::DASH,
        }
    }

    pub fn hold_ms(self, unit: Millis) -> Millis {
        unit.saturating_mul(self.units())
    }
}

/// Symbol at `index`, or `None` once the pattern has run out.
pub fn symbol_at(pattern: &[u8], index: usize) -> Option<Symbol> {
    match pattern.get(index) {
        None | Some(&glyph::END) => None,
        Some(&byte) => Some(Symbol::from(byte)),
    }
}

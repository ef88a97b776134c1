//! Recording stand-in for the nine grid pins, for host tests.

use core::cell::{Cell, RefCell};
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use zone::ZONE_COUNT;

use crate::{LedMask, Polarity};

/// Electrical state of a breadboard of nine LEDs. Pins start low, the way a
/// GPIO port comes out of reset.
pub struct MockBoard {
    polarity: Polarity,
    levels: RefCell<[bool; ZONE_COUNT]>,
    peak_lit: Cell<u32>,
    writes: Cell<usize>,
}

impl MockBoard {
    pub const fn new(polarity: Polarity) -> Self {
        Self {
            polarity,
            levels: RefCell::new([false; ZONE_COUNT]),
            peak_lit: Cell::new(0),
            writes: Cell::new(0),
        }
    }

    pub fn pins(&self) -> [MockPin<'_>; ZONE_COUNT] {
        core::array::from_fn(|index| MockPin { index, board: self })
    }

    pub fn lit(&self) -> LedMask {
        let on_level = self.polarity == Polarity::ActiveHigh;

        let bits = self
            .levels
            .borrow()
            .iter()
            .enumerate()
            .filter(|&(_, &level)| level == on_level)
            .fold(0, |bits, (index, _)| bits | (1 << index));

        LedMask(bits)
    }

    /// Pin levels, `true` is high.
    pub fn levels(&self) -> [bool; ZONE_COUNT] {
        *self.levels.borrow()
    }

    /// Most LEDs lit at once since the last [`MockBoard::reset_peak`].
    pub fn peak_lit(&self) -> u32 {
        self.peak_lit.get()
    }

    pub fn reset_peak(&self) {
        self.peak_lit.set(self.lit().count());
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    fn drive(&self, index: usize, high: bool) {
        self.levels.borrow_mut()[index] = high;
        self.writes.set(self.writes.get() + 1);

        let lit = self.lit().count();
        if lit > self.peak_lit.get() {
            self.peak_lit.set(lit);
        }
    }
}

pub struct MockPin<'a> {
    index: usize,
    board: &'a MockBoard,
}

impl ErrorType for MockPin<'_> {
    type Error = Infallible;
}

impl OutputPin for MockPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.board.drive(self.index, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.board.drive(self.index, true);
        Ok(())
    }
}

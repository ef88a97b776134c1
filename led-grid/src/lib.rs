#![cfg_attr(not(test), no_std)]

use defmt::Format;
use embedded_hal::digital::OutputPin;
use zone::{ZONE_COUNT, Zone};

#[cfg(any(test, feature = "mock"))]
pub mod mock;

/// Pin level that turns an LED on.
#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    ActiveHigh,
    /// The LED cathode is wired to the pin, so driving it low sinks current.
    ActiveLow,
}

/// Set of lit grid LEDs, bit `n` is LED `n` in row-major order.
#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedMask(u16);

impl LedMask {
    pub const NONE: LedMask = LedMask(0);

    pub const fn for_zone(zone: Zone) -> Self {
        LedMask(1 << zone.led_index())
    }

    pub const fn is_lit(self, index: usize) -> bool {
        self.0 & (1 << index) != 0
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    const fn with(self, index: usize, on: bool) -> Self {
        if on {
            LedMask(self.0 | (1 << index))
        } else {
            LedMask(self.0 & !(1 << index))
        }
    }
}

pub struct LedGrid<P: OutputPin> {
    leds: [P; ZONE_COUNT],
    polarity: Polarity,
    lit: LedMask,
}

impl<P: OutputPin> LedGrid<P> {
    /// Takes the nine grid pins in row-major order and turns them all off.
    pub fn new(leds: [P; ZONE_COUNT], polarity: Polarity) -> Self {
        let mut grid = Self {
            leds,
            polarity,
            lit: LedMask::NONE,
        };
        grid.clear_all();
        grid
    }

    /// Drives a single LED. Pin errors are dropped; every pin this is
    /// used with is infallible.
    ///
    /// # Panics
    ///
    /// If `index` is not below `ZONE_COUNT`.
    pub fn set_led(&mut self, index: usize, on: bool) {
        let led = &mut self.leds[index];

        match (self.polarity, on) {
            (Polarity::ActiveHigh, true) | (Polarity::ActiveLow, false) => led.set_high().ok(),
            (Polarity::ActiveHigh, false) | (Polarity::ActiveLow, true) => led.set_low().ok(),
        };

        self.lit = self.lit.with(index, on);
    }

    pub fn clear_all(&mut self) {
        for index in 0..ZONE_COUNT {
            self.set_led(index, false);
        }
    }

    /// Lights the LED for `zone` and turns the other eight off.
    pub fn render(&mut self, zone: Zone) {
        let mask = LedMask::for_zone(zone);

        // Others first so two LEDs are never lit at once.
        for index in (0..ZONE_COUNT).filter(|&index| !mask.is_lit(index)) {
            self.set_led(index, false);
        }
        self.set_led(zone.led_index(), true);
    }

    pub fn lit(&self) -> LedMask {
        self.lit
    }

    pub fn release(self) -> [P; ZONE_COUNT] {
        self.leds
    }
}

#[cfg(test)]
mod test;

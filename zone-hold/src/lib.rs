#![cfg_attr(not(test), no_std)]

use defmt::Format;
use embedded_hal::digital::OutputPin;
use led_grid::LedGrid;

pub use zone::{RawSample, Zone};

/// Source of joystick readings.
#[allow(async_fn_in_trait)]
pub trait Sampler {
    type Error;

    /// Converts both axes and returns them in logical `(x, y)` order,
    /// suspending the caller until the conversion has completed.
    async fn sample(&mut self) -> Result<RawSample, Self::Error>;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    type Error = S::Error;

    async fn sample(&mut self) -> Result<RawSample, Self::Error> {
        (**self).sample().await
    }
}

/// One exit from the hold phase and the re-render that followed it.
#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Zone,
    pub to: Zone,
    /// The first reading outside `from`'s region
    pub exit_sample: RawSample,
    /// Readings taken inside `from`'s region before the exit
    pub held_samples: u32,
}

/// Keeps the grid LED of the joystick's zone lit, re-rendering only when
/// the joystick leaves that zone's region.
pub struct ZoneHold<S: Sampler, P: OutputPin> {
    sampler: S,
    grid: LedGrid<P>,
    current: Zone,
}

impl<S: Sampler, P: OutputPin> ZoneHold<S, P> {
    /// Takes the initial reading and renders its zone.
    pub async fn start(mut sampler: S, grid: LedGrid<P>) -> Result<Self, S::Error> {
        let sample = sampler.sample().await?;

        let mut zone_hold = Self {
            sampler,
            grid,
            current: sample.zone(),
        };
        zone_hold.render();

        Ok(zone_hold)
    }

    pub fn current(&self) -> Zone {
        self.current
    }

    pub fn grid(&self) -> &LedGrid<P> {
        &self.grid
    }

    fn render(&mut self) {
        self.grid.clear_all();
        self.grid.render(self.current);
    }

    async fn hold(&mut self) -> Result<(RawSample, u32), S::Error> {
        let mut held_samples: u32 = 0;

        loop {
            let sample = self.sampler.sample().await?;

            if !self.current.region_contains(sample) {
                return Ok((sample, held_samples));
            }

            held_samples = held_samples.saturating_add(1);
        }
    }

    /// Samples until the joystick leaves the current zone's region, then
    /// classifies the exit reading and renders the new zone.
    pub async fn step(&mut self) -> Result<Transition, S::Error> {
        let (exit_sample, held_samples) = self.hold().await?;

        let from = self.current;
        self.current = exit_sample.zone();
        self.render();

        Ok(Transition {
            from,
            to: self.current,
            exit_sample,
            held_samples,
        })
    }

    /// Steps forever, reporting each transition. Only returns if the
    /// sampler fails.
    pub async fn run(&mut self, mut on_transition: impl FnMut(&Transition)) -> S::Error {
        loop {
            match self.step().await {
                Ok(transition) => on_transition(&transition),
                Err(err) => return err,
            }
        }
    }

    pub fn into_parts(self) -> (S, LedGrid<P>) {
        (self.sampler, self.grid)
    }
}

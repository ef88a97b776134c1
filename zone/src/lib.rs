#![cfg_attr(not(test), no_std)]

use defmt::Format;

/// Full scale of the 10-bit converter
pub const ADC_RANGE: u16 = 1024;

/// Readings at or below this are "low"
pub const LOW_BOUND: u16 = ADC_RANGE / 3;

/// Readings at or above this are "high"
pub const HIGH_BOUND: u16 = 2 * (ADC_RANGE / 3);

pub const GRID_SIZE: usize = 3;
pub const ZONE_COUNT: usize = GRID_SIZE * GRID_SIZE;

#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSample {
    pub x: u16,
    pub y: u16,
}

impl RawSample {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Builds a sample from the two readings in the order the converter
    /// produces them: y's channel first, x's second.
    pub const fn from_conversion_order(readings: [u16; 2]) -> Self {
        let [y, x] = readings;
        Self { x, y }
    }

    pub const fn zone(self) -> Zone {
        classify(self.x, self.y)
    }
}

#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisLevel {
    Low,
    Center,
    High,
}

impl AxisLevel {
    pub const fn of(value: u16) -> Self {
        if value <= LOW_BOUND {
            AxisLevel::Low
        } else if value >= HIGH_BOUND {
            AxisLevel::High
        } else {
            AxisLevel::Center
        }
    }
}

#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    Center,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

const fn low(value: u16) -> bool {
    value <= LOW_BOUND
}

const fn high(value: u16) -> bool {
    value >= HIGH_BOUND
}

// Inclusive on both ends, so it overlaps `low` and `high` at the bounds.
const fn mid(value: u16) -> bool {
    value >= LOW_BOUND && value <= HIGH_BOUND
}

impl Zone {
    /// Every zone in classification priority order. `Center` is the
    /// fallback and comes last.
    pub const PRIORITY: [Zone; ZONE_COUNT] = [
        Zone::TopLeft,
        Zone::TopCenter,
        Zone::TopRight,
        Zone::MiddleLeft,
        Zone::MiddleRight,
        Zone::BottomLeft,
        Zone::BottomCenter,
        Zone::BottomRight,
        Zone::Center,
    ];

    /// Whether `sample` lies in the region that selects this zone.
    ///
    /// Regions of neighbouring zones share their boundary lines, so a sample
    /// on `LOW_BOUND` or `HIGH_BOUND` can be contained by up to four zones.
    /// The controller keeps a zone for as long as this holds.
    pub const fn region_contains(self, sample: RawSample) -> bool {
        let RawSample { x, y } = sample;

        match self {
            Zone::TopLeft => low(x) && high(y),
            Zone::TopCenter => mid(x) && high(y),
            Zone::TopRight => high(x) && high(y),
            Zone::MiddleLeft => low(x) && mid(y),
            Zone::Center => mid(x) && mid(y),
            Zone::MiddleRight => high(x) && mid(y),
            Zone::BottomLeft => low(x) && low(y),
            Zone::BottomCenter => mid(x) && low(y),
            Zone::BottomRight => high(x) && low(y),
        }
    }

    pub const fn row(self) -> usize {
        match self {
            Zone::TopLeft | Zone::TopCenter | Zone::TopRight => 0,
            Zone::MiddleLeft | Zone::Center | Zone::MiddleRight => 1,
            Zone::BottomLeft | Zone::BottomCenter | Zone::BottomRight => 2,
        }
    }

    pub const fn column(self) -> usize {
        match self {
            Zone::TopLeft | Zone::MiddleLeft | Zone::BottomLeft => 0,
            Zone::TopCenter | Zone::Center | Zone::BottomCenter => 1,
            Zone::TopRight | Zone::MiddleRight | Zone::BottomRight => 2,
        }
    }

    /// Index of the grid LED for this zone, row-major from the top left.
    pub const fn led_index(self) -> usize {
        self.row() * GRID_SIZE + self.column()
    }

    /// The zone whose grid cell matches a pair of axis levels. High y is the
    /// top row.
    ///
    /// Diagnostic only: on the boundary lines it can disagree with
    /// [`classify`], which is what drives the grid.
    pub const fn from_levels(x: AxisLevel, y: AxisLevel) -> Self {
        match (y, x) {
            (AxisLevel::High, AxisLevel::Low) => Zone::TopLeft,
            (AxisLevel::High, AxisLevel::Center) => Zone::TopCenter,
            (AxisLevel::High, AxisLevel::High) => Zone::TopRight,
            (AxisLevel::Center, AxisLevel::Low) => Zone::MiddleLeft,
            (AxisLevel::Center, AxisLevel::Center) => Zone::Center,
            (AxisLevel::Center, AxisLevel::High) => Zone::MiddleRight,
            (AxisLevel::Low, AxisLevel::Low) => Zone::BottomLeft,
            (AxisLevel::Low, AxisLevel::Center) => Zone::BottomCenter,
            (AxisLevel::Low, AxisLevel::High) => Zone::BottomRight,
        }
    }
}

/// Maps a reading to its zone: the first entry of [`Zone::PRIORITY`] whose
/// region contains it.
///
/// This is not the same as `Zone::from_levels(AxisLevel::of(x),
/// AxisLevel::of(y))` on the boundary lines. `(341, 341)` is `MiddleLeft`
/// here because that row is tested before `BottomLeft`.
pub const fn classify(x: u16, y: u16) -> Zone {
    let sample = RawSample::new(x, y);

    let mut i = 0;
    while i < Zone::PRIORITY.len() - 1 {
        let zone = Zone::PRIORITY[i];
        if zone.region_contains(sample) {
            return zone;
        }
        i += 1;
    }

    Zone::Center
}

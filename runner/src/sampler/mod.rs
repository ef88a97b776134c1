use defmt::Format;
use embassy_stm32::adc::{Resolution, SampleTime};

#[cfg(feature = "sampler-dma")]
pub mod adc_dma;
#[cfg(feature = "sampler-dma")]
pub use adc_dma::{AdcDmaSampler as JoystickSampler, JoystickHardware};

#[cfg(feature = "sampler-blocking")]
pub mod adc_blocking;
#[cfg(feature = "sampler-blocking")]
pub use adc_blocking::{AdcBlockingSampler as JoystickSampler, JoystickHardware};

#[cfg(all(feature = "sampler-dma", feature = "sampler-blocking"))]
compile_error!(
    "feature \"sampler-dma\" and feature \"sampler-blocking\" cannot be enabled at the same time"
);

#[cfg(not(any(feature = "sampler-dma", feature = "sampler-blocking")))]
compile_error!("one of feature \"sampler-dma\" or feature \"sampler-blocking\" must be enabled");

pub const RESOLUTION: Resolution = Resolution::BITS10;
pub const SAMPLE_TIME: SampleTime = SampleTime::CYCLES16_5;

#[cfg_attr(feature = "sampler-blocking", allow(dead_code))]
#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// The conversion did not complete within the conversion timeout
    Timeout,
}

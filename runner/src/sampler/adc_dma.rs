use embassy_stm32::Peri;
use embassy_stm32::adc::{Adc, AnyAdcChannel};
use embassy_stm32::peripherals::{ADC1, DMA1_CH0};
use embassy_time::{Duration, with_timeout};
use zone_hold::{RawSample, Sampler};

use super::{SAMPLE_TIME, SampleError};

pub const CONVERSION_TIMEOUT: Duration = Duration::from_millis(10);

pub struct JoystickHardware<'a> {
    pub adc: Adc<'a, ADC1>,
    pub dma: Peri<'a, DMA1_CH0>,
    pub x_axis: AnyAdcChannel<ADC1>,
    pub y_axis: AnyAdcChannel<ADC1>,
}

#[macro_export]
macro_rules! get_joystick_hardware {
    ($peripherals:ident) => {{
        use embassy_stm32::adc::AdcChannel as _;

        let mut adc = embassy_stm32::adc::Adc::new($peripherals.ADC1);
        adc.set_resolution($crate::sampler::RESOLUTION);

        $crate::sampler::adc_dma::JoystickHardware {
            adc,
            dma: $peripherals.DMA1_CH0,
            x_axis: $peripherals.PA3.degrade_adc(),
            y_axis: $peripherals.PC0.degrade_adc(),
        }
    }};
}

/// Converts both axes as one DMA sequence. The task sleeps until the
/// transfer-complete interrupt wakes the executor.
pub struct AdcDmaSampler<'a> {
    hardware: JoystickHardware<'a>,
    readings: [u16; 2],
}

impl<'a> AdcDmaSampler<'a> {
    pub fn new(hardware: JoystickHardware<'a>) -> Self {
        Self {
            hardware,
            readings: [0; 2],
        }
    }
}

impl Sampler for AdcDmaSampler<'_> {
    type Error = SampleError;

    async fn sample(&mut self) -> Result<RawSample, SampleError> {
        let JoystickHardware {
            adc,
            dma,
            x_axis,
            y_axis,
        } = &mut self.hardware;

        // y is converted first, so the readings land as [y, x].
        let sequence = [(y_axis, SAMPLE_TIME), (x_axis, SAMPLE_TIME)];

        with_timeout(
            CONVERSION_TIMEOUT,
            adc.read(dma.reborrow(), sequence.into_iter(), &mut self.readings),
        )
        .await
        .map_err(|_| SampleError::Timeout)?;

        Ok(RawSample::from_conversion_order(self.readings))
    }
}

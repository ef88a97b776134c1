use embassy_stm32::adc::{Adc, AnyAdcChannel};
use embassy_stm32::peripherals::ADC1;
use zone_hold::{RawSample, Sampler};

use super::SampleError;

pub struct JoystickHardware<'a> {
    pub adc: Adc<'a, ADC1>,
    pub x_axis: AnyAdcChannel<ADC1>,
    pub y_axis: AnyAdcChannel<ADC1>,
}

#[macro_export]
macro_rules! get_joystick_hardware {
    ($peripherals:ident) => {{
        use embassy_stm32::adc::AdcChannel as _;

        let mut adc = embassy_stm32::adc::Adc::new($peripherals.ADC1);
        adc.set_resolution($crate::sampler::RESOLUTION);
        adc.set_sample_time($crate::sampler::SAMPLE_TIME);

        $crate::sampler::adc_blocking::JoystickHardware {
            adc,
            x_axis: $peripherals.PA3.degrade_adc(),
            y_axis: $peripherals.PC0.degrade_adc(),
        }
    }};
}

/// Converts one axis at a time, spinning on end-of-conversion. Cannot time
/// out: a stuck converter stalls the task for good.
pub struct AdcBlockingSampler<'a> {
    hardware: JoystickHardware<'a>,
}

impl<'a> AdcBlockingSampler<'a> {
    pub fn new(hardware: JoystickHardware<'a>) -> Self {
        Self { hardware }
    }
}

impl Sampler for AdcBlockingSampler<'_> {
    type Error = SampleError;

    async fn sample(&mut self) -> Result<RawSample, SampleError> {
        let JoystickHardware {
            adc,
            x_axis,
            y_axis,
        } = &mut self.hardware;

        // Same order as the DMA sequence: y, then x.
        let readings = [adc.blocking_read(y_axis), adc.blocking_read(x_axis)];

        Ok(RawSample::from_conversion_order(readings))
    }
}

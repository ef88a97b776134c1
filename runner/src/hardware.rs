use defmt::info;
use embassy_stm32::gpio::{Level, Output, Speed};
use led_grid::Polarity;
use zone::ZONE_COUNT;

use crate::sampler::JoystickHardware;

#[cfg(all(feature = "leds-active-high", feature = "leds-active-low"))]
compile_error!(
    "feature \"leds-active-high\" and feature \"leds-active-low\" cannot be enabled at the same time"
);

#[cfg(feature = "leds-active-low")]
pub const LED_POLARITY: Polarity = Polarity::ActiveLow;
#[cfg(not(feature = "leds-active-low"))]
pub const LED_POLARITY: Polarity = Polarity::ActiveHigh;

const LED_OFF: Level = match LED_POLARITY {
    Polarity::ActiveHigh => Level::Low,
    Polarity::ActiveLow => Level::High,
};

pub struct Hardware<'a> {
    /// Grid LEDs, row-major from the top left
    pub leds: [Output<'a>; ZONE_COUNT],
    pub joystick: JoystickHardware<'a>,
}

impl<'a> Hardware<'a> {
    pub fn get() -> Hardware<'a> {
        info!("Initializing");

        let mut config = embassy_stm32::Config::default();
        // The ADC kernel clock defaults to PLL2, which is left off.
        config.rcc.mux.adcsel = embassy_stm32::rcc::mux::Adcsel::PER;
        let peripherals = embassy_stm32::init(config);

        let joystick = crate::get_joystick_hardware!(peripherals);

        let leds = [
            Output::new(peripherals.PE2, LED_OFF, Speed::Low),
            Output::new(peripherals.PE3, LED_OFF, Speed::Low),
            Output::new(peripherals.PE4, LED_OFF, Speed::Low),
            Output::new(peripherals.PE5, LED_OFF, Speed::Low),
            Output::new(peripherals.PE6, LED_OFF, Speed::Low),
            Output::new(peripherals.PE7, LED_OFF, Speed::Low),
            Output::new(peripherals.PE8, LED_OFF, Speed::Low),
            Output::new(peripherals.PE9, LED_OFF, Speed::Low),
            Output::new(peripherals.PE10, LED_OFF, Speed::Low),
        ];

        Hardware { leds, joystick }
    }
}

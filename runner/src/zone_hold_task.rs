use defmt::{debug, error, info};
use embassy_executor::SpawnToken;
use embassy_stm32::gpio::Output;
use led_grid::LedGrid;
use static_cell::StaticCell;
use zone::{AxisLevel, ZONE_COUNT, Zone};
use zone_hold::ZoneHold;

use crate::hardware::{Hardware, LED_POLARITY};
use crate::sampler::{JoystickSampler, SampleError};

pub struct ZoneHoldTaskState<'a> {
    sampler: JoystickSampler<'a>,
    leds: [Output<'a>; ZONE_COUNT],
}

impl<'a> ZoneHoldTaskState<'a> {
    pub fn new(sampler: JoystickSampler<'a>, leds: [Output<'a>; ZONE_COUNT]) -> Self {
        Self { sampler, leds }
    }
}

pub static ZONE_HOLD_TASK_STATE: StaticCell<ZoneHoldTaskState> = StaticCell::new();

pub fn create_task(hardware: Hardware<'static>) -> SpawnToken<impl Sized> {
    let sampler = JoystickSampler::new(hardware.joystick);

    zone_hold_task(ZONE_HOLD_TASK_STATE.init(ZoneHoldTaskState::new(sampler, hardware.leds)))
}

fn stop(err: SampleError) -> ! {
    error!("Joystick sampling failed: {}", err);
    panic!("zone hold stopped");
}

#[embassy_executor::task]
pub async fn zone_hold_task(state: &'static mut ZoneHoldTaskState<'static>) {
    info!("Zone hold task started (LED polarity: {})", LED_POLARITY);

    let grid = LedGrid::new(state.leds.each_mut(), LED_POLARITY);

    let mut zone_hold = match ZoneHold::start(&mut state.sampler, grid).await {
        Ok(zone_hold) => zone_hold,
        Err(err) => stop(err),
    };

    info!("Initial zone: {}", zone_hold.current());

    let err = zone_hold
        .run(|transition| {
            info!(
                "Zone {} -> {} after {} samples",
                transition.from, transition.to, transition.held_samples
            );
            let x_level = AxisLevel::of(transition.exit_sample.x);
            let y_level = AxisLevel::of(transition.exit_sample.y);
            debug!(
                "Exit sample {} (x {}, y {}, cell {})",
                transition.exit_sample,
                x_level,
                y_level,
                Zone::from_levels(x_level, y_level)
            );
        })
        .await;

    stop(err)
}

#![no_std]
#![no_main]

mod hardware;
mod sampler;
mod zone_hold_task;

use defmt::info;
use defmt_rtt as _;
use panic_probe as _;

use embassy_executor::Executor;
use static_cell::StaticCell;

use crate::hardware::Hardware;

static EXECUTOR: StaticCell<Executor> = StaticCell::new();

#[cortex_m_rt::entry]
fn main() -> ! {
    info!("Setting up hardware");
    let hardware = Hardware::get();

    info!("Setting up executor");
    let executor = EXECUTOR.init(Executor::new());

    executor.run(|spawner| {
        info!("Spawning zone hold task");
        spawner.spawn(zone_hold_task::create_task(hardware)).unwrap();
    })
}

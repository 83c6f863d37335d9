#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_sync::pubsub::PubSubChannel;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use organ_board::pins::KeyEventPubSub;
use organ_board::{create_coms_task, create_organ_task};

static KEY_EVENTS: KeyEventPubSub = PubSubChannel::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    info!("serial organ boot");

    let mut ready_led = Output::new(p.PB1, Level::Low, Speed::Low);

    create_organ_task!(spawner, p, KEY_EVENTS);
    create_coms_task!(spawner, p, KEY_EVENTS);

    ready_led.set_high();

    loop {
        // everything interesting happens in the tasks
        Timer::after_millis(1000).await;
    }
}

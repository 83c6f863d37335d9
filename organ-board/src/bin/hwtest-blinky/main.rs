#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    info!("Hello World!");

    let mut ready_led = Output::new(p.PB1, Level::Low, Speed::Low);
    let mut error_led = Output::new(p.PB0, Level::Low, Speed::Low);

    loop {
        info!("high");
        ready_led.set_high();
        error_led.set_low();
        Timer::after_millis(500).await;

        info!("low");
        ready_led.set_low();
        error_led.set_high();
        Timer::after_millis(500).await;
    }
}

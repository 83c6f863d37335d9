#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use organ_lib_stm32::audio::keymap::KEYMAP;
use organ_lib_stm32::audio::note::NoteLength;
use organ_lib_stm32::audio::tone_engine::ToneEngine;
use organ_lib_stm32::drivers::audio::speaker::GpioSpeaker;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    info!("scale test: every key, bottom to top");

    let speaker_output = Output::new(p.PC6, Level::Low, Speed::Low);
    let mut speaker = ToneEngine::new(GpioSpeaker::new(speaker_output));
    let mut ready_led = Output::new(p.PB1, Level::Low, Speed::Low);

    loop {
        for mapping in KEYMAP.iter() {
            info!(
                "key {}: half period {} us",
                mapping.trigger, mapping.period_us
            );
            speaker.play(mapping.period_us, NoteLength::Short.duration_us());
            speaker.rest(NoteLength::Short.duration_us() / 4);
        }

        ready_led.toggle();
        Timer::after_millis(1000).await;
    }
}

use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_sync::pubsub::WaitResult;

use organ_lib_stm32::audio::interpreter::{Action, CommandInterpreter};
use organ_lib_stm32::audio::tone_engine::ToneEngine;
use organ_lib_stm32::drivers::audio::speaker::GpioSpeaker;

use crate::pins::*;

#[macro_export]
macro_rules! create_organ_task {
    ($spawner:ident, $p:ident, $key_events:ident) => {
        organ_board::tasks::organ_task::start_organ_task(&$spawner, &$key_events, $p.PC6);
    };
}

#[embassy_executor::task]
async fn organ_task_entry(
    mut key_events: KeyEventSubscriber,
    mut speaker: ToneEngine<GpioSpeaker<'static, SpeakerPin>>,
) {
    let mut interpreter = CommandInterpreter::new();

    loop {
        let trigger = match key_events.next_message().await {
            WaitResult::Message(trigger) => trigger,
            WaitResult::Lagged(missed) => {
                defmt::warn!("dropped {} queued keystrokes", missed);
                continue;
            }
        };

        // play/rest busy-wait the whole executor; keystrokes arriving
        // mid-note queue in the channel until the action completes
        match interpreter.handle(trigger) {
            Action::PlayNote {
                period_us,
                duration_us,
            } => {
                defmt::trace!("note: half period {} us for {} us", period_us, duration_us);
                speaker.play(period_us, duration_us);
            }
            Action::SetNoteLength(note_length) => {
                defmt::debug!("note length now {}", note_length);
            }
            Action::Rest { duration_us } => {
                speaker.rest(duration_us);
            }
        }
    }
}

pub fn start_organ_task(
    spawner: &Spawner,
    key_events: &'static KeyEventPubSub,
    speaker_pin: SpeakerPin,
) {
    // speaker rests low until the first note
    let speaker_output = Output::new(speaker_pin, Level::Low, Speed::Low);
    let speaker = ToneEngine::new(GpioSpeaker::new(speaker_output));
    let key_subscriber = key_events.subscriber().unwrap();

    spawner
        .spawn(organ_task_entry(key_subscriber, speaker))
        .expect("failed to spawn organ task");
}

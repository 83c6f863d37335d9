#![no_std]
#![no_main]

use cortex_m as _;
use defmt_rtt as _;
use panic_probe as _;

#[defmt_test::tests]
mod tests {
    use organ_lib_stm32::audio::interpreter::{Action, CommandInterpreter};
    use organ_lib_stm32::audio::keymap::KEYMAP;
    use organ_lib_stm32::audio::note::{NoteLength, NOTE_DURATION_US};
    use organ_lib_stm32::audio::pitches;

    #[test]
    fn keymap_triggers_are_distinct() {
        for (i, a) in KEYMAP.iter().enumerate() {
            for b in KEYMAP.iter().skip(i + 1) {
                defmt::assert_ne!(a.trigger, b.trigger);
            }
        }
    }

    #[test]
    fn every_trigger_plays_its_period() {
        for length in [NoteLength::Long, NoteLength::Short] {
            for mapping in KEYMAP.iter() {
                let mut interpreter = CommandInterpreter::new();
                if length == NoteLength::Short {
                    interpreter.handle(b'[');
                }

                defmt::assert_eq!(
                    interpreter.handle(mapping.trigger),
                    Action::PlayNote {
                        period_us: mapping.period_us,
                        duration_us: length.duration_us(),
                    }
                );
            }
        }
    }

    #[test]
    fn unmapped_bytes_rest_and_keep_the_length() {
        let mut interpreter = CommandInterpreter::new();

        for trigger in [b' ', b'z', b'1', b'\n', 0x00, 0xFF] {
            defmt::assert_eq!(
                interpreter.handle(trigger),
                Action::Rest {
                    duration_us: NOTE_DURATION_US,
                }
            );
            defmt::assert_eq!(interpreter.note_length(), NoteLength::Long);
        }
    }

    #[test]
    fn space_rests_for_the_long_duration() {
        let mut interpreter = CommandInterpreter::new();
        defmt::assert_eq!(
            interpreter.handle(b' '),
            Action::Rest {
                duration_us: NOTE_DURATION_US,
            }
        );
    }

    #[test]
    fn length_keys_set_and_hold_the_length() {
        let mut interpreter = CommandInterpreter::new();
        defmt::assert_eq!(interpreter.note_length(), NoteLength::Long);

        for _ in 0..3 {
            defmt::assert_eq!(
                interpreter.handle(b'['),
                Action::SetNoteLength(NoteLength::Short)
            );
            defmt::assert_eq!(interpreter.note_length(), NoteLength::Short);
        }

        for _ in 0..3 {
            defmt::assert_eq!(
                interpreter.handle(b']'),
                Action::SetNoteLength(NoteLength::Long)
            );
            defmt::assert_eq!(interpreter.note_length(), NoteLength::Long);
        }
    }

    #[test]
    fn length_keys_apply_to_following_notes() {
        let mut interpreter = CommandInterpreter::new();

        defmt::assert_eq!(
            interpreter.handle(b'a'),
            Action::PlayNote {
                period_us: pitches::C6,
                duration_us: NOTE_DURATION_US,
            }
        );
        defmt::assert_eq!(
            interpreter.handle(b'['),
            Action::SetNoteLength(NoteLength::Short)
        );
        defmt::assert_eq!(
            interpreter.handle(b'a'),
            Action::PlayNote {
                period_us: pitches::C6,
                duration_us: NOTE_DURATION_US / 2,
            }
        );
        defmt::assert_eq!(
            interpreter.handle(b']'),
            Action::SetNoteLength(NoteLength::Long)
        );
        defmt::assert_eq!(
            interpreter.handle(b'a'),
            Action::PlayNote {
                period_us: pitches::C6,
                duration_us: NOTE_DURATION_US,
            }
        );
    }
}

use defmt::Format;

/// Base length of every note and rest, in microseconds.
pub const NOTE_DURATION_US: u32 = 62_206;

/// The two playback lengths selectable from the keyboard.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Format)]
pub enum NoteLength {
    Short,
    Long,
}

impl NoteLength {
    pub const fn duration_us(self) -> u32 {
        match self {
            NoteLength::Short => NOTE_DURATION_US / 2,
            NoteLength::Long => NOTE_DURATION_US,
        }
    }
}

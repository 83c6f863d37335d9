use embassy_time::{block_for, Duration};

use crate::drivers::audio::ToneOutput;

/// Square-wave generator over a single digital output.
///
/// Timing is busy-wait on purpose: playback must not yield, so a note
/// is never perturbed by whatever else the executor has queued.
pub struct ToneEngine<O: ToneOutput> {
    output: O,
}

impl<O: ToneOutput> ToneEngine<O> {
    pub fn new(output: O) -> Self {
        ToneEngine { output }
    }

    /// Sound a note: toggle the output every `period_us` until at least
    /// `duration_us` has elapsed. Elapsed time accumulates in whole
    /// periods, so the note runs long by up to one period rather than
    /// cutting the final half cycle short. The output is left in
    /// whatever state the last toggle produced.
    ///
    /// `period_us` must be nonzero; every keymap period is.
    pub fn play(&mut self, period_us: u16, duration_us: u32) {
        let half_period = Duration::from_micros(period_us as u64);

        let mut elapsed_us: u32 = 0;
        while elapsed_us < duration_us {
            block_for(half_period);
            self.output.toggle();
            elapsed_us += period_us as u32;
        }
    }

    /// Hold silence for `duration_us`. No output activity.
    pub fn rest(&mut self, duration_us: u32) {
        block_for(Duration::from_micros(duration_us as u64));
    }
}

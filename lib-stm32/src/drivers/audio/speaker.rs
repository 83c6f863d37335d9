use embassy_stm32::gpio::{Output, Pin};

use super::ToneOutput;

/// A speaker (or piezo) wired straight to a push-pull GPIO.
pub struct GpioSpeaker<'d, T: Pin> {
    pin: Output<'d, T>,
}

impl<'d, T: Pin> GpioSpeaker<'d, T> {
    pub fn new(pin: Output<'d, T>) -> Self {
        GpioSpeaker { pin }
    }
}

impl<'d, T: Pin> ToneOutput for GpioSpeaker<'d, T> {
    fn toggle(&mut self) {
        self.pin.toggle();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}

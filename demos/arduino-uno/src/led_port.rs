use arduino_hal::port::mode::Output;
use arduino_hal::port::{Pin, PinOps};
use reaction_game::OutputPort;
use reaction_game::indicator::{GREEN_BIT, RED_BIT};

/// The two PORTD bits that carry the bicolor LED (PD6 red, PD7 green)
///
/// Only these two pins are owned here; the other PORTD bits belong to the
/// LCD and the serial port and are left alone.
pub struct LedPort<R, G> {
    red: Pin<Output, R>,
    green: Pin<Output, G>,
}

impl<R: PinOps, G: PinOps> LedPort<R, G> {
    pub fn new(red: Pin<Output, R>, green: Pin<Output, G>) -> Self {
        Self { red, green }
    }
}

impl<R: PinOps, G: PinOps> OutputPort for LedPort<R, G> {
    fn write(&mut self, bits: u8) {
        if bits & RED_BIT != 0 {
            self.red.set_high();
        } else {
            self.red.set_low();
        }

        if bits & GREEN_BIT != 0 {
            self.green.set_high();
        } else {
            self.green.set_low();
        }
    }
}

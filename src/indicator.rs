//! State indicator LED.
//!
//! Each [`GameState`] has a fixed color. Boards with a real RGB LED implement
//! [`RgbLed`] directly; the reference board has a red/green bicolor LED on two
//! pins of one output port, driven through [`PortLed`].

use palette::Srgb;

use crate::types::GameState;

/// Trait for abstracting RGB LED hardware.
///
/// Color components are in the range 0.0-1.0. Implementations convert them
/// to their hardware's native format and handle any hardware errors
/// internally - this method cannot fail.
pub trait RgbLed {
    /// Sets the LED to the specified RGB color.
    fn set_color(&mut self, color: Srgb);
}

/// Shows `state` on `led`.
pub fn show<L: RgbLed>(led: &mut L, state: GameState) {
    led.set_color(state.color());
}

/// Trait for abstracting an 8-bit parallel output port.
pub trait OutputPort {
    /// Writes the whole port at once.
    fn write(&mut self, bits: u8);
}

impl<T: OutputPort + ?Sized> OutputPort for &mut T {
    fn write(&mut self, bits: u8) {
        T::write(self, bits)
    }
}

/// Port bit driving the red die.
pub const RED_BIT: u8 = 1 << 6;

/// Port bit driving the green die.
pub const GREEN_BIT: u8 = 1 << 7;

/// Port pattern while waiting (red).
pub const WAITING_PATTERN: u8 = RED_BIT;

/// Port pattern while timing the reaction (red + green = yellow).
pub const GO_PATTERN: u8 = RED_BIT | GREEN_BIT;

/// Port pattern while showing the result (green).
pub const RESULT_PATTERN: u8 = GREEN_BIT;

/// Returns the port pattern for `state`.
pub const fn pattern(state: GameState) -> u8 {
    match state {
        GameState::Waiting => WAITING_PATTERN,
        GameState::Go => GO_PATTERN,
        GameState::Result => RESULT_PATTERN,
    }
}

/// Bicolor LED on two bits of an output port.
///
/// A channel above half brightness lights its die. Blue has no die and is
/// ignored. The whole port is rewritten on every update, so the remaining
/// bits are driven low.
pub struct PortLed<P: OutputPort> {
    port: P,
}

impl<P: OutputPort> PortLed<P> {
    /// Wraps `port`.
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Converts a color to the port pattern.
    pub fn color_to_bits(color: Srgb) -> u8 {
        let mut bits = 0;
        if color.red > 0.5 {
            bits |= RED_BIT;
        }
        if color.green > 0.5 {
            bits |= GREEN_BIT;
        }
        bits
    }

    /// Borrows the port.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Gives the port back.
    pub fn release(self) -> P {
        self.port
    }
}

impl<P: OutputPort> RgbLed for PortLed<P> {
    fn set_color(&mut self, color: Srgb) {
        self.port.write(Self::color_to_bits(color));
    }
}

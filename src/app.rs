//! Polling-loop bodies for both operating modes.
//!
//! Board code calls `poll()` once, sleeps for [`TICK_PERIOD`](crate::config::TICK_PERIOD)
//! and repeats. All I/O happens outside the critical section: the game is
//! only locked for the duration of [`SharedGame::tick`].

use rand::RngCore;

use crate::diagnostic::{AnalogSource, Voltmeter};
use crate::display::{CharDisplay, render};
use crate::indicator::{RgbLed, show};
use crate::shared::SharedGame;
use crate::types::{Frame, Text};

/// Main loop of the reaction game.
///
/// # Type Parameters
/// * `'g` - Lifetime of the shared game, usually `'static`
/// * `R` - Random source of the game
/// * `D` - Display implementation
/// * `L` - Indicator LED implementation
pub struct ReactionApp<'g, R: RngCore, D: CharDisplay, L: RgbLed> {
    game: &'g SharedGame<R>,
    display: D,
    led: L,
}

impl<'g, R: RngCore, D: CharDisplay, L: RgbLed> ReactionApp<'g, R, D, L> {
    /// Creates the app around an already installed game.
    pub fn new(game: &'g SharedGame<R>, display: D, led: L) -> Self {
        Self { game, display, led }
    }

    /// Runs one polling cycle: advance the game, redraw, update the LED.
    ///
    /// Returns `None` while no game is installed.
    pub fn poll(&mut self) -> Option<Frame> {
        let frame = self.game.tick()?;

        if let Some(prompt) = frame.prompt {
            render(&mut self.display, &prompt.text());
        }
        show(&mut self.led, frame.state);

        Some(frame)
    }

    /// Borrows the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Borrows the LED.
    pub fn led(&self) -> &L {
        &self.led
    }
}

/// Main loop of the voltmeter.
pub struct DiagnosticApp<A: AnalogSource, D: CharDisplay> {
    meter: Voltmeter<A>,
    display: D,
}

impl<A: AnalogSource, D: CharDisplay> DiagnosticApp<A, D> {
    /// Creates the app.
    pub fn new(meter: Voltmeter<A>, display: D) -> Self {
        Self { meter, display }
    }

    /// Samples, shows and returns the voltage text.
    pub fn poll(&mut self) -> Text {
        let text = self.meter.read_text();
        render(&mut self.display, &text);
        text
    }

    /// Borrows the display.
    pub fn display(&self) -> &D {
        &self.display
    }
}

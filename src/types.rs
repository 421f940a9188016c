//! Core types shared between the game loop, the interrupt handler and the renderers.

use core::fmt::Write;

use heapless::String;
use palette::Srgb;

use crate::config::MAX_TEXT_LEN;

/// Indicator color while waiting for the countdown.
pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);

/// Indicator color while the reaction is being timed.
pub const YELLOW: Srgb = Srgb::new(1.0, 1.0, 0.0);

/// Indicator color while the result is shown.
pub const GREEN: Srgb = Srgb::new(0.0, 1.0, 0.0);

/// Phase of the game. Only ever advances around the ring
/// `Waiting -> Go -> Result -> Waiting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Countdown running; the player waits.
    Waiting,
    /// Button enabled; every polling cycle adds a round.
    Go,
    /// Round count frozen and displayed until the next press.
    Result,
}

impl GameState {
    /// Returns the successor on the state ring.
    pub const fn next(&self) -> Self {
        match self {
            GameState::Waiting => GameState::Go,
            GameState::Go => GameState::Result,
            GameState::Result => GameState::Waiting,
        }
    }

    /// Returns the indicator color for this state.
    pub const fn color(&self) -> Srgb {
        match self {
            GameState::Waiting => RED,
            GameState::Go => YELLOW,
            GameState::Result => GREEN,
        }
    }
}

/// Display buffer. Larger than the display on purpose so that over-long
/// text survives formatting and is caught by the renderer.
pub type Text = String<24>;

/// What the polling loop asks the display to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Prompt {
    /// Countdown in progress.
    Waiting,
    /// Press now.
    Go,
    /// Final round count.
    Result(u32),
}

impl Prompt {
    /// Prompt shown during the countdown.
    pub const WAITING_TEXT: &'static str = "Wait for it...";

    /// Prompt shown while the button is armed.
    pub const GO_TEXT: &'static str = "GO GO GO!";

    /// Formats the prompt as display text.
    pub fn text(&self) -> Text {
        let mut text = Text::new();
        match self {
            Prompt::Waiting => {
                let _ = text.push_str(Self::WAITING_TEXT);
            }
            Prompt::Go => {
                let _ = text.push_str(Self::GO_TEXT);
            }
            Prompt::Result(rounds) => {
                if write!(text, "{} rounds", rounds).is_err() {
                    // Keep it over-long so it renders as the error literal.
                    text.clear();
                    for _ in 0..=MAX_TEXT_LEN {
                        let _ = text.push('#');
                    }
                }
            }
        }
        text
    }
}

/// Snapshot taken by one polling cycle.
///
/// Captured inside the critical section so the state and the prompt always
/// belong to the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// State after the cycle ran.
    pub state: GameState,
    /// Text to draw, or `None` to leave the display untouched.
    pub prompt: Option<Prompt>,
}

/// What a button edge did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressOutcome {
    /// Inside the debounce window. Nothing changed, timestamp kept.
    Bounced,
    /// Accepted by the debouncer but the countdown has not expired yet.
    Ignored,
    /// The game moved to the given state.
    Advanced(GameState),
}

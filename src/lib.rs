#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Game`**: The three-state reaction game (`Waiting -> Go -> Result`)
//! - **`SharedGame`**: Critical-section guarded slot shared by the main loop and the button interrupt
//! - **`Debouncer`**: Minimum-interval filter for button edges
//! - **`GameConfig`**: Validated compiled-in game parameters
//! - **`CharDisplay`**: Trait to implement for your character display
//! - **`RgbLed`** / **`OutputPort`**: Traits to implement for your indicator LED
//! - **`AnalogSource`**: Trait to implement for the diagnostic ADC channel
//! - **`TimeSource`**: Trait to implement for your millisecond clock
//! - **`ReactionApp`** / **`DiagnosticApp`**: One polling cycle of each operating mode
//!
//! The game never returns errors at runtime. Text too long for the display
//! shows as "Error"; edges arriving too soon are dropped.

pub use palette::Srgb;

pub mod app;
pub mod config;
pub mod debounce;
pub mod diagnostic;
pub mod display;
pub mod game;
pub mod indicator;
pub mod shared;
pub mod time;
pub mod types;

pub use app::{DiagnosticApp, ReactionApp};
pub use config::{ConfigBuilder, ConfigError, GameConfig, OperatingMode};
pub use debounce::Debouncer;
pub use diagnostic::{AnalogSource, Voltmeter};
pub use display::{CharDisplay, Layout};
pub use game::Game;
pub use indicator::{OutputPort, PortLed, RgbLed};
pub use shared::SharedGame;
pub use time::{Duration, Instant, MillisClock, TimeSource};
pub use types::{Frame, GameState, PressOutcome, Prompt};

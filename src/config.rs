//! Compiled-in configuration.
//!
//! Everything the firmware can be tuned with is a constant here. [`GameConfig`]
//! bundles the game-loop parameters and validates them once at build time of
//! the config value, so the state machine itself never has to check them.

use crate::time::Duration;

/// Minimum time between two accepted button edges.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// Shortest possible countdown, in polling cycles.
pub const COUNTDOWN_MIN_TICKS: u32 = 60;

/// Number of distinct countdown values drawn on reset.
pub const COUNTDOWN_SPAN_TICKS: u32 = 300;

/// Polling cycles in GO before the round is forced to RESULT.
pub const DEFAULT_ROUND_CAP: Option<u32> = Some(1_500);

/// Display columns per row.
pub const LCD_COLS: usize = 8;

/// Display rows.
pub const LCD_ROWS: usize = 2;

/// Longest text the display can hold.
pub const MAX_TEXT_LEN: usize = LCD_COLS * LCD_ROWS;

/// Literal shown in place of text that does not fit.
pub const ERROR_TEXT: &str = "Error";

/// Full-scale reading of the 10-bit ADC.
pub const ADC_MAX: u16 = 1023;

/// ADC reference voltage.
pub const REFERENCE_VOLTS: f32 = 5.0;

/// Build-time operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Reaction game.
    Game,
    /// Voltmeter on the diagnostic ADC channel.
    Diagnostic,
}

/// Mode this firmware was built for.
#[cfg(not(feature = "diagnostic"))]
pub const OPERATING_MODE: OperatingMode = OperatingMode::Game;

/// Mode this firmware was built for.
#[cfg(feature = "diagnostic")]
pub const OPERATING_MODE: OperatingMode = OperatingMode::Diagnostic;

/// Polling loop period.
#[cfg(not(feature = "diagnostic"))]
pub const TICK_PERIOD: Duration = Duration::from_millis(20);

/// Polling loop period.
#[cfg(feature = "diagnostic")]
pub const TICK_PERIOD: Duration = Duration::from_millis(200);

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Countdown span of zero leaves nothing to draw from.
    EmptyCountdownRange,

    /// `countdown_min + countdown_span` does not fit in a `u32`.
    CountdownOverflow,

    /// A round cap of zero would end every round before it starts.
    ZeroRoundCap,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyCountdownRange => {
                write!(f, "countdown span must be at least one tick")
            }
            ConfigError::CountdownOverflow => {
                write!(f, "countdown range exceeds u32")
            }
            ConfigError::ZeroRoundCap => {
                write!(f, "round cap must be non-zero (use None for no cap)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Validated game-loop parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    debounce_window: Duration,
    countdown_min: u32,
    countdown_span: u32,
    round_cap: Option<u32>,
}

impl GameConfig {
    /// Configuration the firmware ships with.
    pub const DEFAULT: Self = Self {
        debounce_window: DEBOUNCE_WINDOW,
        countdown_min: COUNTDOWN_MIN_TICKS,
        countdown_span: COUNTDOWN_SPAN_TICKS,
        round_cap: DEFAULT_ROUND_CAP,
    };

    /// Creates a builder seeded with [`GameConfig::DEFAULT`].
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Minimum time between accepted button edges.
    pub fn debounce_window(&self) -> Duration {
        self.debounce_window
    }

    /// Countdown draw range, end exclusive.
    pub fn countdown_range(&self) -> core::ops::Range<u32> {
        self.countdown_min..self.countdown_min + self.countdown_span
    }

    /// Maximum rounds before GO is forced to RESULT.
    pub fn round_cap(&self) -> Option<u32> {
        self.round_cap
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builder for [`GameConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: GameConfig,
}

impl ConfigBuilder {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: GameConfig::DEFAULT,
        }
    }

    /// Sets the debounce window.
    pub fn debounce_window(mut self, window: Duration) -> Self {
        self.config.debounce_window = window;
        self
    }

    /// Sets the countdown as `min` plus a uniform draw from `0..span`.
    pub fn countdown(mut self, min: u32, span: u32) -> Self {
        self.config.countdown_min = min;
        self.config.countdown_span = span;
        self
    }

    /// Sets the round cap. `None` lets GO run until the button is pressed.
    pub fn round_cap(mut self, cap: Option<u32>) -> Self {
        self.config.round_cap = cap;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `EmptyCountdownRange` - span is zero
    /// * `CountdownOverflow` - `min + span` overflows
    /// * `ZeroRoundCap` - cap is `Some(0)`
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        let config = self.config;

        if config.countdown_span == 0 {
            return Err(ConfigError::EmptyCountdownRange);
        }

        if config.countdown_min.checked_add(config.countdown_span).is_none() {
            return Err(ConfigError::CountdownOverflow);
        }

        if config.round_cap == Some(0) {
            return Err(ConfigError::ZeroRoundCap);
        }

        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

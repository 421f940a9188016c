//! The three-state reaction game.
//!
//! [`Game`] owns every piece of game state: the phase, the countdown, the
//! round counter, the debounce timestamp and the random source. It is driven
//! from two directions:
//!
//! - [`Game::tick`] once per polling cycle from the main loop
//! - [`Game::press`] from the button interrupt
//!
//! `Game` itself is not synchronised. Put it in a [`SharedGame`](crate::SharedGame)
//! when the two callers run in different execution contexts.

use rand::{Rng, RngCore};

use crate::config::GameConfig;
use crate::debounce::Debouncer;
use crate::time::Instant;
use crate::types::{Frame, GameState, PressOutcome, Prompt};

/// Reaction game state machine.
///
/// # Type Parameters
/// * `R` - Random source used to draw countdowns
pub struct Game<R: RngCore> {
    config: GameConfig,
    state: GameState,
    countdown: u32,
    rounds: u32,
    debouncer: Debouncer,
    rng: R,
}

impl<R: RngCore> Game<R> {
    /// Creates a game in `Waiting` with a freshly drawn countdown.
    pub fn new(config: GameConfig, rng: R) -> Self {
        let mut game = Self {
            config,
            state: GameState::Waiting,
            countdown: 0,
            rounds: 0,
            debouncer: Debouncer::new(config.debounce_window()),
            rng,
        };
        game.reset();
        game
    }

    /// Runs one polling cycle.
    ///
    /// - `Waiting`: an expired countdown moves to `Go` without a prompt,
    ///   otherwise shows the waiting prompt and counts down one tick.
    /// - `Go`: shows the go prompt and adds one round. Reaching the round cap
    ///   forces `Result` and shows the round count on the same tick.
    /// - `Result`: shows the round count.
    ///
    /// Never fails; safe to call forever at a fixed cadence.
    pub fn tick(&mut self) -> Frame {
        let prompt = match self.state {
            GameState::Waiting => {
                if self.countdown == 0 {
                    self.transition(GameState::Go);
                    None
                } else {
                    self.countdown -= 1;
                    Some(Prompt::Waiting)
                }
            }
            GameState::Go => {
                self.rounds = self.rounds.saturating_add(1);
                if self.config.round_cap().is_some_and(|cap| self.rounds >= cap) {
                    self.transition(GameState::Result);
                    Some(Prompt::Result(self.rounds))
                } else {
                    Some(Prompt::Go)
                }
            }
            GameState::Result => Some(Prompt::Result(self.rounds)),
        };

        Frame {
            state: self.state,
            prompt,
        }
    }

    /// Handles a button edge observed at `now`.
    ///
    /// Edges inside the debounce window are dropped. An accepted edge records
    /// its timestamp and then advances the game one step:
    ///
    /// - `Waiting` with an expired countdown goes to `Go`
    /// - `Go` goes to `Result`, freezing the round count
    /// - `Result` resets and goes back to `Waiting`
    ///
    /// A press in `Waiting` while the countdown is still running is ignored.
    /// The player has to sit out the whole countdown; there is no penalty.
    pub fn press(&mut self, now: Instant) -> PressOutcome {
        if !self.debouncer.accept(now) {
            #[cfg(feature = "defmt")]
            defmt::trace!("edge bounced at {} ms", now.as_millis());
            return PressOutcome::Bounced;
        }

        match self.state {
            GameState::Waiting if self.countdown == 0 => {
                self.transition(GameState::Go);
            }
            GameState::Waiting => return PressOutcome::Ignored,
            GameState::Go => {
                self.transition(GameState::Result);
            }
            GameState::Result => {
                self.reset();
                self.transition(GameState::Waiting);
            }
        }

        PressOutcome::Advanced(self.state)
    }

    /// Draws a new countdown and clears the round counter.
    ///
    /// Does not change the state.
    pub fn reset(&mut self) {
        self.countdown = self.rng.gen_range(self.config.countdown_range());
        self.rounds = 0;
    }

    fn transition(&mut self, to: GameState) {
        debug_assert_eq!(self.state.next(), to);
        #[cfg(feature = "defmt")]
        defmt::debug!("{} -> {} after {} rounds", self.state, to, self.rounds);
        self.state = to;
    }

    /// Returns the current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Polling cycles left before the button is armed.
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Polling cycles spent in `Go`.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Instant of the last accepted button edge.
    pub fn last_event(&self) -> Instant {
        self.debouncer.last_event()
    }

    /// Active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Overrides the countdown. Lets board bring-up code skip the wait.
    pub fn set_countdown(&mut self, ticks: u32) {
        self.countdown = ticks;
    }
}

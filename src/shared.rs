//! Interrupt-safe home for the game.
//!
//! The button interrupt can preempt the polling loop at any instruction. Every
//! access to the game therefore happens inside a critical section, which makes
//! the multi-field updates in [`Game::tick`] and [`Game::press`] atomic with
//! respect to each other.

use core::cell::RefCell;

use critical_section::Mutex;
use rand::RngCore;

use crate::game::Game;
use crate::time::Instant;
use crate::types::{Frame, GameState, PressOutcome};

/// A [`Game`] that both the main loop and an interrupt handler can drive.
///
/// Designed to be placed in a `static`:
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use reaction_game::{Game, GameConfig, Instant, SharedGame};
///
/// static GAME: SharedGame<SmallRng> = SharedGame::new();
///
/// GAME.install(Game::new(GameConfig::DEFAULT, SmallRng::seed_from_u64(1)));
///
/// // main loop
/// let frame = GAME.tick();
/// assert!(frame.is_some());
///
/// // pin-change interrupt
/// GAME.on_edge(Instant::from_millis(10_000));
/// ```
pub struct SharedGame<R: RngCore> {
    game: Mutex<RefCell<Option<Game<R>>>>,
}

impl<R: RngCore> SharedGame<R> {
    /// Creates an empty slot. Nothing happens until [`install`](Self::install).
    pub const fn new() -> Self {
        Self {
            game: Mutex::new(RefCell::new(None)),
        }
    }

    /// Puts a game in the slot, replacing any previous one.
    pub fn install(&self, game: Game<R>) {
        critical_section::with(|cs| {
            self.game.borrow_ref_mut(cs).replace(game);
        });
    }

    /// Runs `f` on the game with interrupts masked.
    ///
    /// Returns `None` if no game has been installed.
    pub fn with<T>(&self, f: impl FnOnce(&mut Game<R>) -> T) -> Option<T> {
        critical_section::with(|cs| self.game.borrow_ref_mut(cs).as_mut().map(f))
    }

    /// One polling cycle. See [`Game::tick`].
    pub fn tick(&self) -> Option<Frame> {
        self.with(Game::tick)
    }

    /// Button interrupt entry point. See [`Game::press`].
    ///
    /// Edges arriving before a game is installed are ignored.
    pub fn on_edge(&self, now: Instant) -> PressOutcome {
        self.with(|game| game.press(now))
            .unwrap_or(PressOutcome::Ignored)
    }

    /// Reads the state as one consistent snapshot.
    pub fn state(&self) -> Option<GameState> {
        self.with(|game| game.state())
    }

    /// Reads `(state, countdown, rounds)` as one consistent snapshot.
    pub fn snapshot(&self) -> Option<(GameState, u32, u32)> {
        self.with(|game| (game.state(), game.countdown(), game.rounds()))
    }
}

impl<R: RngCore> Default for SharedGame<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn empty_slot_is_inert() {
        let shared: SharedGame<SmallRng> = SharedGame::new();

        assert_eq!(shared.tick(), None);
        assert_eq!(shared.on_edge(Instant::from_millis(5_000)), PressOutcome::Ignored);
        assert_eq!(shared.state(), None);
    }

    #[test]
    fn installed_game_is_driven_through_the_slot() {
        let shared = SharedGame::new();
        shared.install(Game::new(GameConfig::DEFAULT, SmallRng::seed_from_u64(3)));
        shared.with(|game| game.set_countdown(0));

        let frame = shared.tick().unwrap();
        assert_eq!(frame.state, GameState::Go);

        assert_eq!(
            shared.on_edge(Instant::from_millis(1_000)),
            PressOutcome::Advanced(GameState::Result)
        );
        assert_eq!(shared.state(), Some(GameState::Result));
    }
}

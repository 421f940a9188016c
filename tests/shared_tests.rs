//! Integration tests for the interrupt-shared game

mod common;
use common::*;

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use rand::rngs::SmallRng;
use reaction_game::{GameState, Instant, MillisClock, PressOutcome, SharedGame, TimeSource};

static GAME: SharedGame<SmallRng> = SharedGame::new();

#[test]
fn static_slot_serves_loop_and_handler() {
    GAME.install(armed_game(1));

    let frame = GAME.tick().unwrap();
    assert_eq!(frame.state, GameState::Go);

    assert_eq!(
        GAME.on_edge(Instant::from_millis(800)),
        PressOutcome::Advanced(GameState::Result)
    );
    assert_eq!(GAME.snapshot(), Some((GameState::Result, 0, 0)));
}

#[test]
fn install_replaces_running_game() {
    let shared = SharedGame::new();
    shared.install(armed_game(2));
    shared.tick();
    assert_eq!(shared.state(), Some(GameState::Go));

    shared.install(new_game(3));
    assert_eq!(shared.state(), Some(GameState::Waiting));
}

// A second thread stands in for the button interrupt and hammers the game
// while the main thread polls. Every snapshot must satisfy the per-state
// invariants, which only holds if each update is atomic.
#[test]
fn concurrent_edges_never_expose_half_updates() {
    let shared = SharedGame::new();
    shared.install(armed_game(4));
    let clock = MillisClock::new();
    clock.set(Instant::from_millis(1_000));
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        s.spawn(|| {
            while !done.load(Ordering::Relaxed) {
                clock.advance(7);
                shared.on_edge(clock.now());
                thread::yield_now();
            }
        });

        for _ in 0..20_000 {
            let frame = shared.tick().unwrap();
            let (state, countdown, rounds) = shared.snapshot().unwrap();
            match state {
                GameState::Waiting => {
                    assert_eq!(rounds, 0);
                    assert!(countdown <= 359);
                }
                GameState::Go | GameState::Result => assert!(rounds <= 1_500),
            }
            if frame.state == GameState::Waiting {
                assert!(frame.prompt.is_some());
            }
        }
        done.store(true, Ordering::Relaxed);
    });
}

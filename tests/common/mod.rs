//! Shared test infrastructure for reaction-game integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use reaction_game::{
    AnalogSource, CharDisplay, Game, GameConfig, Instant, OutputPort, TimeSource,
};

// ============================================================================
// Mock Display
// ============================================================================

/// A single call made on the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOp {
    Clear,
    Cursor(u8, u8),
    Print(Vec<u8>),
}

/// Mock display that records every call and keeps an 8x2 screen image
pub struct MockDisplay {
    pub ops: Vec<DisplayOp>,
    screen: [[u8; 8]; 2],
    col: usize,
    row: usize,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            screen: [[b' '; 8]; 2],
            col: 0,
            row: 0,
        }
    }

    /// Row contents with trailing blanks removed
    pub fn line(&self, row: usize) -> String {
        String::from_utf8_lossy(&self.screen[row])
            .trim_end()
            .to_string()
    }

    /// Calls since the last clear, inclusive
    pub fn last_frame(&self) -> &[DisplayOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == DisplayOp::Clear)
            .unwrap_or(0);
        &self.ops[start..]
    }

    pub fn clear_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == DisplayOp::Clear).count()
    }
}

impl CharDisplay for MockDisplay {
    fn clear(&mut self) {
        self.ops.push(DisplayOp::Clear);
        self.screen = [[b' '; 8]; 2];
        self.col = 0;
        self.row = 0;
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.ops.push(DisplayOp::Cursor(col, row));
        self.col = col as usize;
        self.row = row as usize;
    }

    fn print(&mut self, bytes: &[u8]) {
        self.ops.push(DisplayOp::Print(bytes.to_vec()));
        for &b in bytes {
            if self.col < 8 {
                self.screen[self.row][self.col] = b;
            }
            self.col += 1;
        }
    }
}

// ============================================================================
// Mock Output Port
// ============================================================================

/// Mock port that records every write
pub struct MockPort {
    pub writes: Vec<u8>,
}

impl MockPort {
    pub fn new() -> Self {
        Self { writes: Vec::new() }
    }

    pub fn last(&self) -> Option<u8> {
        self.writes.last().copied()
    }
}

impl OutputPort for MockPort {
    fn write(&mut self, bits: u8) {
        self.writes.push(bits);
    }
}

// ============================================================================
// Mock ADC
// ============================================================================

/// Mock ADC returning a fixed reading
pub struct MockAdc {
    pub value: u16,
    pub samples: usize,
}

impl MockAdc {
    pub fn new(value: u16) -> Self {
        Self { value, samples: 0 }
    }
}

impl AnalogSource for MockAdc {
    fn sample(&mut self) -> u16 {
        self.samples += 1;
        self.value
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<u32>,
}

impl MockTimeSource {
    pub fn new(start_millis: u32) -> Self {
        Self {
            current_time: Cell::new(start_millis),
        }
    }

    /// Advance time by the given number of milliseconds, wrapping at 2^32
    pub fn advance(&self, millis: u32) {
        self.current_time
            .set(self.current_time.get().wrapping_add(millis));
    }
}

impl TimeSource for MockTimeSource {
    fn now(&self) -> Instant {
        Instant::from_millis(self.current_time.get())
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Game with the default configuration
pub fn new_game(seed: u64) -> Game<SmallRng> {
    Game::new(GameConfig::DEFAULT, rng(seed))
}

/// Game whose countdown has already run out
pub fn armed_game(seed: u64) -> Game<SmallRng> {
    let mut game = new_game(seed);
    game.set_countdown(0);
    game
}

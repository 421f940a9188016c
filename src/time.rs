//! Millisecond time base shared by the debouncer and the board glue.

use core::cell::Cell;
use critical_section::Mutex;

/// A span of time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duration(u32);

impl Duration {
    /// Zero duration constant.
    pub const ZERO: Self = Duration(0);

    /// Creates a duration from milliseconds.
    #[inline]
    pub const fn from_millis(millis: u32) -> Self {
        Duration(millis)
    }

    /// Converts duration to milliseconds.
    #[inline]
    pub const fn as_millis(&self) -> u32 {
        self.0
    }
}

/// A reading of the free-running millisecond clock since boot.
///
/// The counter wraps after 2^32 ms (~49.7 days). Comparisons between instants
/// only make sense through [`Instant::duration_since`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(u32);

impl Instant {
    /// The boot instant.
    pub const BOOT: Self = Instant(0);

    /// Creates an instant from a raw millisecond count.
    #[inline]
    pub const fn from_millis(millis: u32) -> Self {
        Instant(millis)
    }

    /// Returns the instant as milliseconds since startup (modulo 2^32).
    #[inline]
    pub const fn as_millis(&self) -> u32 {
        self.0
    }

    /// Calculates duration since an earlier instant.
    ///
    /// Uses wrapping subtraction so a counter rollover between the two
    /// readings still yields the true elapsed time. If `earlier` is in fact
    /// later, the result is close to 2^32 ms.
    #[inline]
    pub const fn duration_since(&self, earlier: Self) -> Duration {
        Duration(self.0.wrapping_sub(earlier.0))
    }

    /// Calculates duration since `earlier`, or zero if `earlier` is later.
    ///
    /// The wrapped difference is read as signed, so rollover is still
    /// handled, but only for gaps below 2^31 ms (~24.8 days). Longer gaps
    /// read as negative and clamp to zero.
    #[inline]
    pub const fn saturating_duration_since(&self, earlier: Self) -> Duration {
        let diff = self.0.wrapping_sub(earlier.0) as i32;
        if diff < 0 {
            Duration::ZERO
        } else {
            Duration(diff as u32)
        }
    }

    /// Returns the instant `duration` later, wrapping at 2^32.
    #[inline]
    pub const fn wrapping_add(self, duration: Duration) -> Self {
        Instant(self.0.wrapping_add(duration.0))
    }
}

/// Trait for abstracting time sources.
///
/// Reading the clock must have no side effects.
pub trait TimeSource {
    /// Returns the current time instant.
    fn now(&self) -> Instant;
}

/// Millisecond counter advanced from a periodic timer interrupt.
///
/// Meant to live in a `static` so that both the interrupt handler and the
/// main loop can reach it:
///
/// ```
/// use reaction_game::time::{MillisClock, TimeSource};
///
/// static CLOCK: MillisClock = MillisClock::new();
///
/// // inside the 1 kHz timer interrupt
/// CLOCK.advance(1);
/// assert_eq!(CLOCK.now().as_millis(), 1);
/// ```
pub struct MillisClock {
    millis: Mutex<Cell<u32>>,
}

impl MillisClock {
    /// Creates a clock reading zero.
    pub const fn new() -> Self {
        Self {
            millis: Mutex::new(Cell::new(0)),
        }
    }

    /// Adds `millis` to the counter, wrapping at 2^32.
    pub fn advance(&self, millis: u32) {
        critical_section::with(|cs| {
            let counter = self.millis.borrow(cs);
            counter.set(counter.get().wrapping_add(millis));
        });
    }

    /// Overwrites the counter.
    pub fn set(&self, instant: Instant) {
        critical_section::with(|cs| self.millis.borrow(cs).set(instant.as_millis()));
    }
}

impl Default for MillisClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MillisClock {
    fn now(&self) -> Instant {
        critical_section::with(|cs| Instant(self.millis.borrow(cs).get()))
    }
}

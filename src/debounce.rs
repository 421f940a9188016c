//! Minimum-interval button debouncing.

use crate::time::{Duration, Instant};

/// Accepts an edge only if at least `window` has passed since the last
/// accepted one.
///
/// Rejected edges leave the timestamp untouched, so a burst of contact bounce
/// can never extend the window. An edge stamped before the last accepted one
/// counts as zero elapsed time and is rejected.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    last_event: Instant,
    window: Duration,
}

impl Debouncer {
    /// Creates a debouncer whose last accepted edge is at boot.
    pub const fn new(window: Duration) -> Self {
        Self {
            last_event: Instant::BOOT,
            window,
        }
    }

    /// Time since the last accepted edge, zero if `now` is older.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_event)
    }

    /// Returns `true` and records `now` if the edge is outside the window.
    pub fn accept(&mut self, now: Instant) -> bool {
        if self.elapsed(now) < self.window {
            return false;
        }

        self.last_event = now;
        true
    }

    /// Instant of the last accepted edge.
    pub fn last_event(&self) -> Instant {
        self.last_event
    }

    /// Configured window.
    pub fn window(&self) -> Duration {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(500);

    #[test]
    fn edge_inside_window_is_rejected_without_touching_timestamp() {
        let mut debouncer = Debouncer::new(WINDOW);
        assert!(debouncer.accept(Instant::from_millis(1_000)));

        assert!(!debouncer.accept(Instant::from_millis(1_499)));
        assert_eq!(debouncer.last_event(), Instant::from_millis(1_000));
    }

    #[test]
    fn edge_exactly_at_window_is_accepted() {
        let mut debouncer = Debouncer::new(WINDOW);
        assert!(debouncer.accept(Instant::from_millis(1_000)));

        let at_window = Instant::from_millis(1_000).wrapping_add(debouncer.window());
        assert!(debouncer.accept(at_window));
        assert_eq!(debouncer.last_event(), Instant::from_millis(1_500));
    }

    #[test]
    fn bounce_burst_does_not_extend_window() {
        let mut debouncer = Debouncer::new(WINDOW);
        assert!(debouncer.accept(Instant::from_millis(1_000)));

        for t in (1_010..1_500).step_by(10) {
            assert!(!debouncer.accept(Instant::from_millis(t)));
        }
        assert!(debouncer.accept(Instant::from_millis(1_500)));
    }

    #[test]
    fn edges_right_after_boot_are_rejected() {
        let mut debouncer = Debouncer::new(WINDOW);
        assert!(!debouncer.accept(Instant::from_millis(499)));
        assert!(debouncer.accept(Instant::from_millis(500)));
    }

    #[test]
    fn edge_stamped_before_last_event_is_bounced() {
        let mut debouncer = Debouncer::new(WINDOW);
        assert!(debouncer.accept(Instant::from_millis(10_000)));

        assert_eq!(debouncer.elapsed(Instant::from_millis(9_900)), Duration::ZERO);
        assert!(!debouncer.accept(Instant::from_millis(9_900)));
        assert_eq!(debouncer.last_event(), Instant::from_millis(10_000));
    }

    #[test]
    fn window_spans_clock_rollover() {
        let mut debouncer = Debouncer::new(WINDOW);
        let late = Instant::from_millis(u32::MAX - 199);
        // gaps must stay below 2^31 ms, so step there through the midpoint
        assert!(debouncer.accept(Instant::from_millis(u32::MAX / 2)));
        assert!(debouncer.accept(late));

        // 300 ms later, counter has wrapped
        assert!(!debouncer.accept(late.wrapping_add(Duration::from_millis(300))));
        assert!(debouncer.accept(late.wrapping_add(WINDOW)));
        assert_eq!(debouncer.last_event(), Instant::from_millis(300));
    }

    #[test]
    fn idle_longer_than_half_wrap_is_rejected() {
        let mut debouncer = Debouncer::new(WINDOW);
        assert!(!debouncer.accept(Instant::from_millis(1 << 31)));
        assert_eq!(debouncer.last_event(), Instant::BOOT);
    }
}

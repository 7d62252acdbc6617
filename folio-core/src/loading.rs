//! One-shot loading gate shown at page mount

use std::time::{Duration, Instant};

pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(1500);

/// Flips from loading to ready once, after a fixed delay.
///
/// There is no way to cancel or re-arm a gate; create a new one instead.
#[derive(Debug, Clone, Copy)]
pub struct LoadingGate {
    opens_at: Instant,
}

impl LoadingGate {
    pub fn new(delay: Duration) -> Self {
        Self::starting_at(Instant::now(), delay)
    }

    pub fn starting_at(start: Instant, delay: Duration) -> Self {
        Self {
            opens_at: start + delay,
        }
    }

    /// A gate that is already open
    pub fn open() -> Self {
        Self {
            opens_at: Instant::now(),
        }
    }

    pub fn is_loading_at(&self, now: Instant) -> bool {
        now < self.opens_at
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading_at(Instant::now())
    }

    /// Time left before the gate opens
    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.opens_at.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_once_after_delay() {
        let start = Instant::now();
        let gate = LoadingGate::starting_at(start, Duration::from_millis(500));

        assert!(gate.is_loading_at(start));
        assert!(gate.is_loading_at(start + Duration::from_millis(499)));
        assert!(!gate.is_loading_at(start + Duration::from_millis(500)));
        assert!(!gate.is_loading_at(start + Duration::from_secs(60)));
        assert_eq!(
            gate.remaining_at(start + Duration::from_millis(200)),
            Duration::from_millis(300)
        );
        assert_eq!(gate.remaining_at(start + Duration::from_secs(1)), Duration::ZERO);
    }

    #[test]
    fn zero_delay_is_open() {
        let start = Instant::now();
        let gate = LoadingGate::starting_at(start, Duration::ZERO);
        assert!(!gate.is_loading_at(start));
    }
}

use std::thread;
use std::time::{Duration, Instant};

/// Fixed-period frame clock anchored to a single start instant.
///
/// Every frame's deadline is computed from the same baseline
/// (`start + index * period`), never from the previous frame, so
/// render and I/O cost cannot accumulate into drift. The baseline is
/// captured once, immediately after the audio trigger, and the two
/// streams are never resynchronized afterwards.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use gc_core::clock::PlaybackClock;
/// let clock = PlaybackClock::start(Duration::from_millis(33));
/// clock.wait_for(0); // deadline already passed, returns immediately
/// ```
pub struct PlaybackClock {
    start: Instant,
    period: Duration,
}

impl PlaybackClock {
    /// Capture `now()` as the schedule baseline.
    #[must_use]
    pub fn start(period: Duration) -> Self {
        Self {
            start: Instant::now(),
            period,
        }
    }

    /// Absolute deadline of frame `index`: `start + index * period`.
    #[inline]
    #[must_use]
    pub fn deadline(&self, index: usize) -> Instant {
        self.start + self.period * index as u32
    }

    /// Block until frame `index`'s deadline.
    ///
    /// No-op when the deadline has already passed: under overload the
    /// loop degrades to as-fast-as-possible instead of sleeping backward.
    pub fn wait_for(&self, index: usize) {
        let deadline = self.deadline(index);
        let now = Instant::now();
        if let Some(remaining) = deadline.checked_duration_since(now) {
            thread::sleep(remaining);
        }
    }

    /// Wall time elapsed since the baseline capture.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadlines_are_fixed_multiples_of_period() {
        let clock = PlaybackClock::start(Duration::from_millis(33));
        let d0 = clock.deadline(0);
        let d5 = clock.deadline(5);
        assert_eq!(d5 - d0, Duration::from_millis(165));
    }

    #[test]
    fn wait_for_never_returns_early() {
        let clock = PlaybackClock::start(Duration::from_millis(5));
        clock.wait_for(3);
        assert!(clock.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn past_deadline_does_not_block() {
        let clock = PlaybackClock::start(Duration::from_millis(5));
        thread::sleep(Duration::from_millis(12));
        let before = Instant::now();
        clock.wait_for(1);
        assert!(before.elapsed() < Duration::from_millis(5));
    }
}

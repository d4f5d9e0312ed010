//! Rotation pacing for marquee-style animations
//!
//! Provides portable pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping between ticks.

use embassy_time::{Duration, Instant};

use crate::{Transport, strip::ZipStrip};

/// Default delay between two rotation steps.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(100);

/// Result of a scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the strip was rotated and transmitted during this tick.
    pub rotated: bool,
    /// The deadline for the next step.
    pub next_deadline: Instant,
    /// How long to wait until the next step (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Rotates a strip by a fixed offset at a fixed interval.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = RotationScheduler::new(1);
/// strip.show_rainbow();
///
/// loop {
///     let result = scheduler.tick(&mut strip, Instant::now());
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RotationScheduler {
    offset: isize,
    interval: Duration,
    next_step: Option<Instant>,
}

impl RotationScheduler {
    /// Create a scheduler rotating by `offset` every `DEFAULT_STEP_INTERVAL`.
    pub const fn new(offset: isize) -> Self {
        Self::with_interval(offset, DEFAULT_STEP_INTERVAL)
    }

    pub const fn with_interval(offset: isize, interval: Duration) -> Self {
        Self {
            offset,
            interval,
            next_step: None,
        }
    }

    /// Restart pacing; the next tick rotates immediately.
    pub const fn reset(&mut self) {
        self.next_step = None;
    }

    /// Rotate the strip if a step is due and return timing information.
    ///
    /// The first tick always rotates. When the caller falls more than two
    /// intervals behind, the backlog is dropped instead of replayed.
    pub fn tick<T: Transport, const N: usize>(
        &mut self,
        strip: &mut ZipStrip<T, N>,
        now: Instant,
    ) -> StepResult {
        let mut next = self.next_step.unwrap_or(now);

        let max_drift = Duration::from_millis(self.interval.as_millis() * 2);
        if now.as_millis() > next.as_millis() + max_drift.as_millis() {
            next = now;
        }

        let rotated = now >= next;
        if rotated {
            strip.rotate(self.offset);
            next += self.interval;
        }
        self.next_step = Some(next);

        let sleep_duration = if next > now {
            next - now
        } else {
            Duration::from_millis(0)
        };

        StepResult {
            rotated,
            next_deadline: next,
            sleep_duration,
        }
    }
}

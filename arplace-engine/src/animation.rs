//! Scale-in entry animation

use std::time::Duration;

/// Fixed length of the entry animation
pub const SCALE_IN_DURATION: Duration = Duration::from_millis(600);

/// Cubic ease-out: fast start, slow finish
///
/// `x` is expected in `[0, 1]`; returns exactly `1.0` at `x = 1.0`.
pub fn ease_out_cubic(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(3)
}

/// One-shot animation growing the object scale from 0 to 1 after placement
///
/// A pure function of elapsed time: the session samples it from whatever
/// per-frame scheduling the host offers and drops it once it reports
/// completion. There is no explicit cancel; the session aborts a leftover
/// animation when the placement phase has changed under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleInAnimation {
    started_at: Duration,
}

impl ScaleInAnimation {
    /// Start the animation at the given monotonic timestamp
    pub fn starting_at(now: Duration) -> Self {
        Self { started_at: now }
    }

    /// Sample the eased scale for the given timestamp
    ///
    /// Returns `(scale, finished)`; `finished` is true from the first sample
    /// at or past the full duration, where the scale is exactly `1.0`.
    pub fn sample(&self, now: Duration) -> (f32, bool) {
        let elapsed = now.saturating_sub(self.started_at);
        let progress =
            (elapsed.as_secs_f32() / SCALE_IN_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        (ease_out_cubic(progress), progress >= 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn easing_endpoints() {
        assert_relative_eq!(ease_out_cubic(0.0), 0.0);
        assert_relative_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn easing_is_fast_start_slow_finish() {
        // Halfway through, a cubic ease-out is already past 0.875.
        assert_relative_eq!(ease_out_cubic(0.5), 0.875);
        assert!(ease_out_cubic(0.25) > 0.25);
        assert!(ease_out_cubic(0.75) > 0.75);
    }

    #[test]
    fn converges_to_one_at_full_duration() {
        let start = Duration::from_millis(1_000);
        let anim = ScaleInAnimation::starting_at(start);

        let (scale, finished) = anim.sample(start + Duration::from_millis(300));
        assert!(!finished);
        assert!(scale > 0.0 && scale < 1.0);

        let (scale, finished) = anim.sample(start + SCALE_IN_DURATION);
        assert!(finished);
        assert_relative_eq!(scale, 1.0);

        // Past the end the sample stays pinned at 1.0.
        let (scale, finished) = anim.sample(start + Duration::from_secs(5));
        assert!(finished);
        assert_relative_eq!(scale, 1.0);
    }

    #[test]
    fn sample_before_start_is_zero() {
        let anim = ScaleInAnimation::starting_at(Duration::from_millis(500));
        let (scale, finished) = anim.sample(Duration::from_millis(100));
        assert_relative_eq!(scale, 0.0);
        assert!(!finished);
    }
}

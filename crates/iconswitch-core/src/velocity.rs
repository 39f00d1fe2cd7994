//! Pointer velocity estimation over a sliding time window.

use crate::geometry::Point;

/// Samples older than this (relative to the newest sample) are ignored.
pub const VELOCITY_HORIZON_MS: u64 = 100;

/// Accumulates pointer samples for one gesture and estimates velocity.
///
/// Timestamps come from the events themselves, so estimates are
/// deterministic for a given event stream.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    samples: Vec<(Point, u64)>,
}

impl VelocityTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer sample.
    pub fn add_sample(&mut self, position: Point, timestamp_ms: u64) {
        // Out-of-order timestamps restart the window.
        if self
            .samples
            .last()
            .is_some_and(|&(_, last)| timestamp_ms < last)
        {
            self.samples.clear();
        }
        self.samples.push((position, timestamp_ms));
        self.samples
            .retain(|&(_, t)| timestamp_ms - t <= VELOCITY_HORIZON_MS);
    }

    #[cfg(test)]
    fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Velocity in pixels per `units_ms` milliseconds.
    ///
    /// Returns zero with fewer than two samples or a zero time span.
    #[must_use]
    pub fn velocity(&self, units_ms: f32) -> Point {
        let (Some(&(first_pos, first_t)), Some(&(last_pos, last_t))) =
            (self.samples.first(), self.samples.last())
        else {
            return Point::ORIGIN;
        };

        if last_t <= first_t {
            return Point::ORIGIN;
        }

        let dt = (last_t - first_t) as f32;
        Point::new(
            (last_pos.x - first_pos.x) * units_ms / dt,
            (last_pos.y - first_pos.y) * units_ms / dt,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tracker_has_zero_velocity() {
        let tracker = VelocityTracker::new();
        assert_eq!(tracker.velocity(1000.0), Point::ORIGIN);
    }

    #[test]
    fn test_single_sample_has_zero_velocity() {
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(Point::new(10.0, 0.0), 0);
        assert_eq!(tracker.velocity(1000.0), Point::ORIGIN);
    }

    #[test]
    fn test_velocity_in_requested_units() {
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(Point::new(0.0, 0.0), 0);
        tracker.add_sample(Point::new(10.0, -5.0), 50);
        let v = tracker.velocity(1000.0);
        assert!((v.x - 200.0).abs() < 0.001);
        assert!((v.y + 100.0).abs() < 0.001);
    }

    #[test]
    fn test_old_samples_leave_the_window() {
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(Point::new(0.0, 0.0), 0);
        tracker.add_sample(Point::new(100.0, 0.0), 10);
        // Pointer rests for a long time, then releases in place
        tracker.add_sample(Point::new(100.0, 0.0), 500);
        tracker.add_sample(Point::new(100.0, 0.0), 520);
        assert_eq!(tracker.sample_count(), 2);
        assert_eq!(tracker.velocity(1000.0).x, 0.0);
    }

    #[test]
    fn test_same_timestamp_yields_zero() {
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(Point::new(0.0, 0.0), 7);
        tracker.add_sample(Point::new(50.0, 0.0), 7);
        assert_eq!(tracker.velocity(1000.0), Point::ORIGIN);
    }

    #[test]
    fn test_backwards_timestamp_restarts_window() {
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(Point::new(0.0, 0.0), 100);
        tracker.add_sample(Point::new(10.0, 0.0), 50);
        assert_eq!(tracker.sample_count(), 1);
    }
}

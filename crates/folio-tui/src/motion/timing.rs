//! L4 Atomic Layer: Time calculation utilities
//!
//! Everything here is driven by explicit elapsed durations instead of wall
//! clock reads, so animations are reproducible in tests.

use std::time::Duration;

use super::easing::{EasingType, EasingTypeExt};

/// Calculate animation progress (0.0 to 1.0) from elapsed time and duration
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation for u16 values (scroll positions)
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    lerp(from as f64, to as f64, t).round() as u16
}

/// Looping `[-amplitude, amplitude, -amplitude]` keyframes over `period`,
/// eased in and out, starting after `delay`
pub fn ping_pong(elapsed: Duration, period: Duration, delay: Duration, amplitude: f64) -> f64 {
    if period.is_zero() || elapsed < delay {
        return -amplitude;
    }
    let cycle = (elapsed - delay).as_secs_f64() % period.as_secs_f64();
    let half = period.as_secs_f64() / 2.0;
    let t = if cycle < half {
        cycle / half
    } else {
        1.0 - (cycle - half) / half
    };
    lerp(-amplitude, amplitude, EasingType::EaseInOut.apply(t))
}

/// A single pending one-shot timer
///
/// Arming replaces any pending deadline, so at most one is ever outstanding.
#[derive(Debug, Clone, Default)]
pub struct Timeout {
    remaining: Option<Duration>,
}

impl Timeout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, after: Duration) {
        self.remaining = Some(after);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance by `dt`. Returns the time left over after firing, or `None`
    /// if the timer did not fire.
    pub fn advance(&mut self, dt: Duration) -> Option<Duration> {
        let remaining = self.remaining?;
        if dt >= remaining {
            self.remaining = None;
            Some(dt - remaining)
        } else {
            self.remaining = Some(remaining - dt);
            None
        }
    }
}

/// Fixed-period repeating timer
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    accumulated: Duration,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            accumulated: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Advance by `dt` and return how many whole periods elapsed
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.accumulated += dt;
        let mut fired = 0;
        while self.accumulated >= self.period {
            self.accumulated -= self.period;
            fired += 1;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_lerp_u16() {
        assert_eq!(lerp_u16(0, 100, 0.0), 0);
        assert_eq!(lerp_u16(0, 100, 0.5), 50);
        assert_eq!(lerp_u16(0, 100, 1.0), 100);
    }

    #[test]
    fn test_progress() {
        assert!((progress(Duration::ZERO, Duration::ZERO) - 1.0).abs() < 0.001);
        assert!((progress(Duration::from_millis(50), Duration::from_millis(100)) - 0.5).abs() < 0.001);
        assert!((progress(Duration::from_secs(5), Duration::from_millis(100)) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_timeout_fires_once_with_leftover() {
        let mut timeout = Timeout::new();
        timeout.arm(Duration::from_millis(100));
        assert_eq!(timeout.advance(Duration::from_millis(60)), None);
        assert_eq!(
            timeout.advance(Duration::from_millis(60)),
            Some(Duration::from_millis(20))
        );
        assert!(!timeout.is_pending());
        assert_eq!(timeout.advance(Duration::from_secs(1)), None);
    }

    #[test]
    fn test_timeout_cancel() {
        let mut timeout = Timeout::new();
        timeout.arm(Duration::from_millis(10));
        timeout.cancel();
        assert_eq!(timeout.advance(Duration::from_secs(1)), None);
    }

    #[test]
    fn test_interval_counts_periods() {
        let mut interval = Interval::new(Duration::from_millis(50));
        assert_eq!(interval.advance(Duration::from_millis(40)), 0);
        assert_eq!(interval.advance(Duration::from_millis(20)), 1);
        assert_eq!(interval.advance(Duration::from_millis(140)), 3);
    }

    #[test]
    fn test_ping_pong_endpoints() {
        let period = Duration::from_secs(6);
        assert!((ping_pong(Duration::ZERO, period, Duration::ZERO, 20.0) + 20.0).abs() < 0.001);
        assert!((ping_pong(Duration::from_secs(3), period, Duration::ZERO, 20.0) - 20.0).abs() < 0.001);
        // held at the start value during the delay
        assert!((ping_pong(Duration::from_secs(1), period, Duration::from_secs(2), 20.0) + 20.0).abs() < 0.001);
    }
}

//! Entrance animations timed from a visibility latch

use std::time::Duration;

use super::easing::{EasingType, EasingTypeExt};
use super::timing;

#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: EasingType,
}

impl Reveal {
    pub fn new(duration: Duration) -> Self {
        Self {
            delay: Duration::ZERO,
            duration,
            easing: EasingType::EaseOut,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_easing(mut self, easing: EasingType) -> Self {
        self.easing = easing;
        self
    }

    /// Eased progress in [0, 1]; zero until the element has entered and the
    /// delay has passed
    pub fn progress(&self, since_entered: Option<Duration>) -> f64 {
        match since_entered {
            Some(t) if t >= self.delay => {
                self.easing.apply(timing::progress(t - self.delay, self.duration))
            }
            _ => 0.0,
        }
    }

    pub fn is_done(&self, since_entered: Option<Duration>) -> bool {
        since_entered.is_some_and(|t| t >= self.delay + self.duration)
    }
}

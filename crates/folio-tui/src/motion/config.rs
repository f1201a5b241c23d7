//! L4 Atomic Layer: Duration views over the motion settings

use std::time::Duration;

pub use folio_core::config::ScrollConfig;
pub use folio_core::MotionConfig;

pub trait ScrollConfigExt {
    fn animation_duration(&self) -> Duration;

    /// Frame interval while a scroll animation is running
    fn animation_tick_duration(&self) -> Duration;

    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}

pub trait MotionConfigExt {
    fn typer_speed(&self) -> Duration;
    fn typer_hold(&self) -> Duration;
    fn reveal_duration(&self) -> Duration;
    fn contact_reset(&self) -> Duration;
    fn notification_lifetime(&self) -> Duration;
}

impl MotionConfigExt for MotionConfig {
    fn typer_speed(&self) -> Duration {
        Duration::from_millis(self.typer_speed_ms)
    }

    fn typer_hold(&self) -> Duration {
        Duration::from_millis(self.typer_hold_ms)
    }

    fn reveal_duration(&self) -> Duration {
        Duration::from_millis(self.reveal_duration_ms)
    }

    fn contact_reset(&self) -> Duration {
        Duration::from_millis(self.contact_reset_ms)
    }

    fn notification_lifetime(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.animation_duration_ms = 0;
        assert!(!config.is_smooth());
    }

    #[test]
    fn test_tick_duration_fallback() {
        let config = ScrollConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_motion_durations() {
        let motion = MotionConfig::default();
        assert_eq!(motion.typer_speed(), Duration::from_millis(80));
        assert_eq!(motion.contact_reset(), Duration::from_secs(3));
        assert_eq!(motion.notification_lifetime(), Duration::from_secs(4));
    }
}

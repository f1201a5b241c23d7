//! L3 Molecular Layer: Page scroll animation controller
//!
//! Eases the page offset toward a target. Deltas from rapid key presses or
//! wheel ticks are batched and applied once per frame.

use std::time::Duration;

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{lerp_u16, progress};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    elapsed: Duration,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

/// Scroll animation controller
///
/// Call `scroll_by()` / `scroll_to()` on input, then `update()` every frame
/// with the frame's elapsed time.
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current_scroll: u16,
    /// Pending scroll delta for batching multiple scroll events
    pending_delta: i32,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Animation or batched delta outstanding; the loop should run at the
    /// animation frame rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Final position after the running animation
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.current_scroll
    }

    /// Set scroll position immediately (no animation)
    pub fn set_scroll(&mut self, scroll: u16) {
        self.animation = None;
        self.current_scroll = scroll;
        self.pending_delta = 0;
    }

    pub fn scroll_to(&mut self, target: u16, max_scroll: u16) {
        let target = target.min(max_scroll);
        self.pending_delta = 0;

        if !self.config.is_smooth() {
            self.current_scroll = target;
            self.animation = None;
            return;
        }

        if self.current_scroll == target {
            self.animation = None;
            return;
        }

        self.start(target);
    }

    /// Scroll by a delta (positive = down). Batched until the next `update()`.
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.config.is_smooth() {
            self.current_scroll =
                (self.current_scroll as i32 + delta).clamp(0, max_scroll as i32) as u16;
            self.animation = None;
            return;
        }
        self.pending_delta += delta;
    }

    pub fn scroll_down(&mut self, max_scroll: u16) {
        self.scroll_by(self.config.scroll_lines.max(1) as i32, max_scroll);
    }

    pub fn scroll_up(&mut self, max_scroll: u16) {
        self.scroll_by(-(self.config.scroll_lines.max(1) as i32), max_scroll);
    }

    pub fn scroll_half_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(half_page, max_scroll);
    }

    pub fn scroll_half_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(-half_page, max_scroll);
    }

    pub fn scroll_full_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(viewport_height as i32, max_scroll);
    }

    pub fn scroll_full_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-(viewport_height as i32), max_scroll);
    }

    /// Advance by `dt` and return the current scroll position
    pub fn update(&mut self, dt: Duration, max_scroll: u16) -> u16 {
        if self.pending_delta != 0 {
            let new_target = (self.target_scroll() as i32 + self.pending_delta)
                .clamp(0, max_scroll as i32) as u16;
            self.pending_delta = 0;
            if new_target != self.current_scroll {
                self.start(new_target);
            } else {
                self.animation = None;
            }
            // a fresh animation starts this frame at its origin
            return self.current_scroll.min(max_scroll);
        }

        if let Some(anim) = self.animation.as_mut() {
            anim.elapsed += dt;
            if anim.elapsed >= anim.duration {
                self.current_scroll = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = anim.easing.apply(progress(anim.elapsed, anim.duration));
                self.current_scroll = lerp_u16(anim.from, anim.to, t).min(max_scroll);
            }
        } else {
            self.current_scroll = self.current_scroll.min(max_scroll);
        }

        self.current_scroll
    }

    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0;
    }

    fn start(&mut self, to: u16) {
        self.animation = Some(ActiveAnimation {
            elapsed: Duration::ZERO,
            from: self.current_scroll,
            to,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn smooth(duration_ms: u64) -> ScrollAnimator {
        ScrollAnimator::new(ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: duration_ms,
            ..Default::default()
        })
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(config);

        animator.scroll_to(100, 200);
        assert_eq!(animator.current_scroll(), 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut animator = smooth(100);
        animator.scroll_to(100, 200);
        assert!(animator.is_animating());
        assert_eq!(animator.target_scroll(), 100);

        let mid = animator.update(50 * MS, 200);
        assert!(mid > 0 && mid < 100);
        assert_eq!(animator.update(50 * MS, 200), 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_scroll_by_batching() {
        let mut animator = smooth(100);

        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);

        animator.update(16 * MS, 200);
        assert_eq!(animator.target_scroll(), 30);
    }

    #[test]
    fn test_scroll_clamp_max() {
        let mut animator = ScrollAnimator::default();
        animator.set_scroll(50);
        animator.scroll_to(300, 100);
        animator.update(16 * MS, 100);
        assert!(animator.target_scroll() <= 100);

        animator.scroll_by(-500, 100);
        animator.update(16 * MS, 100);
        assert_eq!(animator.target_scroll(), 0);
    }

    #[test]
    fn test_shrinking_page_clamps_position() {
        let mut animator = ScrollAnimator::default();
        animator.set_scroll(80);
        assert_eq!(animator.update(16 * MS, 40), 40);
    }
}

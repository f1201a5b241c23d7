//! L3 Molecular Layer: Page scroll progress
//!
//! Tracks how far through the scrollable extent the page is, as a ratio in
//! [0, 1], and maps it onto arbitrary output ranges.

use super::signals::{SignalHub, Subscription, Topic, UiSignal};
use super::timing::lerp;

/// `offset / (document - viewport)`, clamped. A page that cannot scroll
/// reports 0.
pub fn compute_ratio(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let extent = document_height - viewport_height;
    if extent <= 0.0 || !extent.is_finite() {
        return 0.0;
    }
    (offset / extent).clamp(0.0, 1.0)
}

#[derive(Debug, Default)]
pub struct ScrollProgress {
    offset: u16,
    document_height: u16,
    viewport_height: u16,
    ratio: f64,
    dirty: bool,
    subscription: Option<Subscription>,
}

impl ScrollProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, hub: &SignalHub) {
        self.subscription = Some(hub.subscribe(&[Topic::Scroll, Topic::Resize]));
    }

    pub fn detach(&mut self) {
        self.subscription = None;
    }

    pub fn set_document_height(&mut self, rows: u16) {
        if self.document_height != rows {
            self.document_height = rows;
            self.dirty = true;
        }
    }

    /// Apply queued signals and recompute once
    pub fn on_frame(&mut self) {
        if let Some(sub) = &self.subscription {
            for signal in sub.drain() {
                match signal {
                    UiSignal::Scroll { offset } => self.offset = offset,
                    UiSignal::Resize { height, .. } => self.viewport_height = height,
                    UiSignal::Pointer { .. } => continue,
                }
                self.dirty = true;
            }
        }
        if self.dirty {
            self.ratio = compute_ratio(
                self.offset as f64,
                self.document_height as f64,
                self.viewport_height as f64,
            );
            self.dirty = false;
        }
    }

    #[inline]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Map the current ratio linearly onto `[from, to]`
    pub fn interpolate(&self, from: f64, to: f64) -> f64 {
        lerp(from, to, self.ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_basic() {
        assert_eq!(compute_ratio(0.0, 200.0, 50.0), 0.0);
        assert!((compute_ratio(75.0, 200.0, 50.0) - 0.5).abs() < 1e-9);
        assert_eq!(compute_ratio(150.0, 200.0, 50.0), 1.0);
    }

    #[test]
    fn test_ratio_clamped_on_overshoot() {
        assert_eq!(compute_ratio(-30.0, 200.0, 50.0), 0.0);
        assert_eq!(compute_ratio(900.0, 200.0, 50.0), 1.0);
    }

    #[test]
    fn test_unscrollable_page_is_zero() {
        assert_eq!(compute_ratio(10.0, 40.0, 50.0), 0.0);
        assert_eq!(compute_ratio(10.0, 50.0, 50.0), 0.0);
    }

    #[test]
    fn test_signals_drive_ratio() {
        let hub = SignalHub::new();
        let mut progress = ScrollProgress::new();
        progress.attach(&hub);
        progress.set_document_height(120);

        hub.publish(UiSignal::Resize { width: 80, height: 20 });
        hub.publish(UiSignal::Scroll { offset: 50 });
        assert_eq!(progress.ratio(), 0.0);

        progress.on_frame();
        assert!((progress.ratio() - 0.5).abs() < 1e-9);
        assert!((progress.interpolate(0.0, 40.0) - 20.0).abs() < 1e-9);

        hub.publish(UiSignal::Scroll { offset: 500 });
        progress.on_frame();
        assert_eq!(progress.ratio(), 1.0);
    }
}

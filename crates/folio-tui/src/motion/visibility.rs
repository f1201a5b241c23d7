//! L3 Molecular Layer: One-shot viewport visibility
//!
//! Each tracked element latches to "in view" the first time its row span
//! meets the viewport (shrunk by a margin) and never goes back.

use std::collections::BTreeMap;
use std::time::Duration;

use super::signals::{SignalHub, Subscription, Topic, UiSignal};

/// Half-open row range `[top, top + height)` in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub top: i32,
    pub height: i32,
}

impl Span {
    pub fn new(top: i32, height: i32) -> Self {
        Self { top, height }
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    pub fn contains(&self, row: i32) -> bool {
        row >= self.top && row < self.bottom()
    }

    pub fn intersects(&self, other: &Span) -> bool {
        self.height > 0
            && other.height > 0
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    /// Shrink by `margin` rows on both edges, keeping at least the middle row
    pub fn inset(&self, margin: i32) -> Span {
        let height = self.height - 2 * margin;
        if height >= 1 {
            Span::new(self.top + margin, height)
        } else {
            Span::new(self.top + self.height / 2, 1)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InViewLatch {
    entered: bool,
}

impl InViewLatch {
    #[inline]
    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Returns true only on the observation that flips the latch
    pub fn observe(&mut self, element: Option<Span>, viewport: Span, margin: i32) -> bool {
        if self.entered {
            return false;
        }
        let Some(element) = element else {
            return false;
        };
        if element.intersects(&viewport.inset(margin)) {
            self.entered = true;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Tracked {
    latch: InViewLatch,
    entered_at: Option<Duration>,
}

/// Visibility latches for a set of keyed elements
#[derive(Debug)]
pub struct VisibilityTracker<K: Ord + Copy> {
    tracked: BTreeMap<K, Tracked>,
    viewport: Span,
    margin: i32,
    dirty: bool,
    subscription: Option<Subscription>,
}

impl<K: Ord + Copy> VisibilityTracker<K> {
    pub fn new(keys: impl IntoIterator<Item = K>, margin: u16) -> Self {
        Self {
            tracked: keys.into_iter().map(|k| (k, Tracked::default())).collect(),
            viewport: Span::default(),
            margin: margin as i32,
            dirty: true,
            subscription: None,
        }
    }

    pub fn attach(&mut self, hub: &SignalHub) {
        self.subscription = Some(hub.subscribe(&[Topic::Scroll, Topic::Resize]));
        self.dirty = true;
    }

    pub fn detach(&mut self) {
        self.subscription = None;
    }

    /// Content changed shape; recheck on the next frame
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Apply queued signals and recheck at most once. Returns the keys that
    /// entered on this frame.
    pub fn on_frame<F>(&mut self, now: Duration, layout: F) -> Vec<K>
    where
        F: Fn(K) -> Option<Span>,
    {
        if let Some(sub) = &self.subscription {
            for signal in sub.drain() {
                match signal {
                    UiSignal::Scroll { offset } => self.viewport.top = offset as i32,
                    UiSignal::Resize { height, .. } => self.viewport.height = height as i32,
                    UiSignal::Pointer { .. } => continue,
                }
                self.dirty = true;
            }
        }
        if !self.dirty {
            return Vec::new();
        }
        self.dirty = false;

        let mut entered = Vec::new();
        for (key, tracked) in self.tracked.iter_mut() {
            if tracked.latch.observe(layout(*key), self.viewport, self.margin) {
                tracked.entered_at = Some(now);
                entered.push(*key);
            }
        }
        entered
    }

    pub fn is_visible(&self, key: K) -> bool {
        self.tracked
            .get(&key)
            .map(|t| t.latch.is_entered())
            .unwrap_or(false)
    }

    pub fn entered_at(&self, key: K) -> Option<Duration> {
        self.tracked.get(&key).and_then(|t| t.entered_at)
    }

    /// Time since `key` entered, if it has
    pub fn since_entered(&self, key: K, now: Duration) -> Option<Duration> {
        self.entered_at(key).map(|at| now.saturating_sub(at))
    }

    pub fn viewport(&self) -> Span {
        self.viewport
    }
}

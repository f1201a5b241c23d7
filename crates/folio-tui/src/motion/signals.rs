//! Scroll, pointer and resize signal delivery
//!
//! Input events are published into a [`SignalHub`]; each primitive holds a
//! [`Subscription`] and drains whatever arrived since its last frame. Signals
//! coalesce per topic, so a burst of pointer moves between two frames is
//! seen as the latest position only. Dropping a subscription unregisters it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Topic {
    Scroll,
    Pointer,
    Resize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiSignal {
    /// Page scroll offset in rows
    Scroll { offset: u16 },
    /// Pointer position in virtual pixels
    Pointer { x: f64, y: f64 },
    /// Page viewport size in cells
    Resize { width: u16, height: u16 },
}

impl UiSignal {
    pub fn topic(&self) -> Topic {
        match self {
            UiSignal::Scroll { .. } => Topic::Scroll,
            UiSignal::Pointer { .. } => Topic::Pointer,
            UiSignal::Resize { .. } => Topic::Resize,
        }
    }
}

#[derive(Debug)]
struct Listener {
    topics: Vec<Topic>,
    pending: BTreeMap<Topic, UiSignal>,
}

#[derive(Debug, Default)]
struct HubInner {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Single-threaded fan-out of UI signals
#[derive(Debug, Clone, Default)]
pub struct SignalHub {
    inner: Rc<RefCell<HubInner>>,
}

impl SignalHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, topics: &[Topic]) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.insert(
            id,
            Listener {
                topics: topics.to_vec(),
                pending: BTreeMap::new(),
            },
        );
        Subscription {
            id,
            hub: Rc::downgrade(&self.inner),
        }
    }

    pub fn publish(&self, signal: UiSignal) {
        let topic = signal.topic();
        let mut inner = self.inner.borrow_mut();
        for listener in inner.listeners.values_mut() {
            if listener.topics.contains(&topic) {
                listener.pending.insert(topic, signal);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Registration guard returned by [`SignalHub::subscribe`]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    hub: Weak<RefCell<HubInner>>,
}

impl Subscription {
    /// Take the latest signal per topic received since the previous drain
    pub fn drain(&self) -> Vec<UiSignal> {
        let Some(hub) = self.hub.upgrade() else {
            return Vec::new();
        };
        let mut inner = hub.borrow_mut();
        match inner.listeners.get_mut(&self.id) {
            Some(listener) => std::mem::take(&mut listener.pending).into_values().collect(),
            None => Vec::new(),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.borrow_mut().listeners.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signals_coalesce_per_topic() {
        let hub = SignalHub::new();
        let sub = hub.subscribe(&[Topic::Pointer, Topic::Scroll]);

        hub.publish(UiSignal::Pointer { x: 1.0, y: 1.0 });
        hub.publish(UiSignal::Pointer { x: 5.0, y: 7.0 });
        hub.publish(UiSignal::Scroll { offset: 3 });

        let signals = sub.drain();
        assert_eq!(signals.len(), 2);
        assert!(signals.contains(&UiSignal::Pointer { x: 5.0, y: 7.0 }));
        assert!(signals.contains(&UiSignal::Scroll { offset: 3 }));
        assert!(sub.drain().is_empty());
    }

    #[test]
    fn test_topics_are_filtered() {
        let hub = SignalHub::new();
        let sub = hub.subscribe(&[Topic::Resize]);
        hub.publish(UiSignal::Scroll { offset: 9 });
        assert!(sub.drain().is_empty());
    }

    #[test]
    fn test_drop_unregisters_listener() {
        let hub = SignalHub::new();
        let a = hub.subscribe(&[Topic::Scroll]);
        {
            let _b = hub.subscribe(&[Topic::Pointer]);
            assert_eq!(hub.listener_count(), 2);
        }
        assert_eq!(hub.listener_count(), 1);
        drop(a);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_hub() {
        let hub = SignalHub::new();
        let sub = hub.subscribe(&[Topic::Scroll]);
        drop(hub);
        assert!(sub.drain().is_empty());
    }
}

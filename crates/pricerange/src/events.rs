//! # Change Events
//!
//! Delivery of `priceRangeChange` notifications to listeners.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐      ┌─────────────┐      ┌─────────────┐
//! │  Document   │─────>│   Change    │─────>│  Listener   │
//! │  (gesture)  │      │   Channel   │      │  (consumer) │
//! └─────────────┘      └─────────────┘      └─────────────┘
//!       │
//!       └── one event per completed drag or track click,
//!           dispatched on the container and every ancestor
//! ```
//!
//! Each listener owns a bounded crossbeam channel. Dispatch never blocks:
//! a full channel drops the event for that listener only.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use pricerange_ui::RangeValues;

use crate::document::ElementId;

/// Name of the change event, as seen by markup consumers.
pub const EVENT_NAME: &str = "priceRangeChange";

/// Default capacity of a listener channel.
pub const DEFAULT_CAPACITY: usize = 64;

/// A completed gesture on one slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeChangeEvent {
    /// Container the event was dispatched on.
    pub target: ElementId,
    /// Element whose listener received this copy.
    pub current_target: ElementId,
    /// Final `(min, max)` of the gesture.
    pub detail: RangeValues,
}

impl RangeChangeEvent {
    /// Event name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        EVENT_NAME
    }

    /// Lower selected value.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.detail.min
    }

    /// Upper selected value.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.detail.max
    }
}

/// Outcome of a non-blocking send.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Queued for the listener.
    Delivered,
    /// The listener's channel is full; event dropped.
    Full,
    /// The listener was dropped; its registration can go.
    Disconnected,
}

/// A single listener channel.
pub struct ChangeBus {
    sender: Sender<RangeChangeEvent>,
    receiver: Receiver<RangeChangeEvent>,
}

impl ChangeBus {
    /// Creates a channel holding at most `capacity` undelivered events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity.max(1));
        Self { sender, receiver }
    }

    /// Creates a sender handle.
    #[must_use]
    pub fn sender(&self) -> ChangeSender {
        ChangeSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle.
    #[must_use]
    pub fn receiver(&self) -> ChangeReceiver {
        ChangeReceiver {
            receiver: self.receiver.clone(),
        }
    }

    /// Creates a sender and receiver for one listener.
    #[must_use]
    pub fn create_pair(capacity: usize) -> (ChangeSender, ChangeReceiver) {
        let bus = Self::new(capacity);
        (bus.sender(), bus.receiver())
    }
}

/// Document side of a listener.
#[derive(Clone, Debug)]
pub struct ChangeSender {
    sender: Sender<RangeChangeEvent>,
}

impl ChangeSender {
    /// Sends an event without blocking.
    #[inline]
    pub fn send(&self, event: RangeChangeEvent) -> Delivery {
        match self.sender.try_send(event) {
            Ok(()) => Delivery::Delivered,
            Err(TrySendError::Full(_)) => Delivery::Full,
            Err(TrySendError::Disconnected(_)) => Delivery::Disconnected,
        }
    }
}

/// Consumer side of a listener.
///
/// Dropping every clone of the receiver unsubscribes the listener on the
/// next dispatch.
#[derive(Clone, Debug)]
pub struct ChangeReceiver {
    receiver: Receiver<RangeChangeEvent>,
}

impl ChangeReceiver {
    /// Receives all pending events (non-blocking).
    #[inline]
    pub fn drain(&self) -> Vec<RangeChangeEvent> {
        self.receiver.try_iter().collect()
    }

    /// Receives one event (non-blocking).
    #[inline]
    pub fn try_recv(&self) -> Option<RangeChangeEvent> {
        self.receiver.try_recv().ok()
    }

    /// Returns the number of pending events.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Checks if there are pending events.
    #[inline]
    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.receiver.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricerange_ui::WidgetId;

    fn event(min: f64, max: f64) -> RangeChangeEvent {
        RangeChangeEvent {
            target: WidgetId::new(1),
            current_target: WidgetId::new(1),
            detail: RangeValues::new(min, max),
        }
    }

    #[test]
    fn test_event_send_receive() {
        let (sender, receiver) = ChangeBus::create_pair(8);

        assert_eq!(sender.send(event(10.0, 90.0)), Delivery::Delivered);
        assert!(receiver.has_events());

        let received = receiver.try_recv().unwrap();
        assert_eq!(received.name(), "priceRangeChange");
        assert_eq!((received.min(), received.max()), (10.0, 90.0));
    }

    #[test]
    fn test_full_channel_drops() {
        let (sender, receiver) = ChangeBus::create_pair(2);

        for i in 0..5 {
            sender.send(event(f64::from(i), 100.0));
        }

        assert_eq!(receiver.pending_count(), 2);
        let events = receiver.drain();
        assert_eq!(events[0].min(), 0.0);
        assert!(!receiver.has_events());
    }

    #[test]
    fn test_dropped_receiver_disconnects() {
        let bus = ChangeBus::new(4);
        let sender = bus.sender();
        drop(bus);

        assert_eq!(sender.send(event(0.0, 1.0)), Delivery::Disconnected);
    }
}

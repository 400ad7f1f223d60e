//! # Notification Sinks

//! A `NotificationSink` is the outbound port of a door controller: it receives every notification the
//! controller produces, in order. `TracingSink` writes them to the application log and
//! `RecordingSink` keeps them in memory so they can be inspected afterwards.

use std::sync::Arc;
use parking_lot::Mutex;
use tracing::info;
use crate::models::{DoorNotification, NotificationKind};

/// Receives the notifications produced by a door controller
pub trait NotificationSink {
    /// Called once per emitted notification, in emission order
    fn notify(&mut self, notification: &DoorNotification);
}

impl<S: NotificationSink + ?Sized> NotificationSink for &mut S {
    fn notify(&mut self, notification: &DoorNotification) {
        (**self).notify(notification)
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for Box<S> {
    fn notify(&mut self, notification: &DoorNotification) {
        (**self).notify(notification)
    }
}

/// Writes notifications to the `tracing` log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, notification: &DoorNotification) {
        match (notification.kind, notification.message.as_deref()) {
            (NotificationKind::Created, _) => info!(
                door = %notification.door_name,
                "Automatic door created, state: {}", notification.label
            ),
            (_, Some(message)) => info!(
                door = %notification.door_name,
                state = %notification.label,
                "{}", message
            ),
            (_, None) => info!(
                door = %notification.door_name,
                "state: {}", notification.label
            ),
        }
    }
}

/// Records notifications in memory
///
/// Clones share the same buffer, so a handle kept by the caller sees everything recorded by a clone
/// that was moved into a controller.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    notifications: Arc<Mutex<Vec<DoorNotification>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every notification recorded so far
    pub fn notifications(&self) -> Vec<DoorNotification> {
        self.notifications.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.notifications.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.lock().is_empty()
    }

    /// Returns the state labels of the recorded notifications
    pub fn labels(&self) -> Vec<String> {
        self.notifications
            .lock()
            .iter()
            .map(|n| n.label.clone())
            .collect()
    }

    /// Returns the action messages of the recorded notifications
    pub fn messages(&self) -> Vec<Option<String>> {
        self.notifications
            .lock()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notification: &DoorNotification) {
        self.notifications.lock().push(notification.clone());
    }
}

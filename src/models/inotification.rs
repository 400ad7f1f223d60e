//! # Door Notifications

//! This module defines the records a controller hands to its notification sink. One notification is
//! produced when the controller is created and one per dispatch that matched a transition, in the
//! order the events were dispatched.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::models::istates::DoorState;

/// Describes why a notification was emitted
#[derive(Debug, Clone, PartialEq, Eq, Copy, Serialize, Deserialize)]
pub enum NotificationKind {
    /// The controller was constructed in its initial state
    Created,
    /// A transition moved the door to a different state
    StateChanged,
    /// A transition fired its effect without leaving the current state
    SelfTransition,
}

/// A single outbound notification describing a state change or an in-place effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorNotification {
    /// Position of this notification in the controller's output, starting at 0 for `Created`
    pub sequence: u64,
    /// The name of the door that produced the notification
    pub door_name: String,
    /// Why the notification was emitted
    pub kind: NotificationKind,
    /// The state the door is in after the transition
    pub state: DoorState,
    /// The display label of `state`
    pub label: String,
    /// The action message of the transition, if it has one
    pub message: Option<String>,
    /// When the notification was produced
    pub timestamp: NaiveDateTime,
}

impl DoorNotification {
    /// Creates a notification stamped with the current local time
    pub fn new(
        sequence: u64,
        door_name: &str,
        kind: NotificationKind,
        state: DoorState,
        message: Option<&str>,
    ) -> Self {
        Self {
            sequence,
            door_name: door_name.to_string(),
            kind,
            state,
            label: state.label().to_string(),
            message: message.map(str::to_string),
            timestamp: crate::models::local_now(),
        }
    }
}

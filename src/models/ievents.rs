//! # Automatic Door Event Definitions

//! This module defines the `DoorEvent` enum, the external stimuli an automatic door reacts to.
//! Events carry no payload: the driver decides when motion is detected, when the open timer fires,
//! and when the open/closed sensors trip.

use serde::{Deserialize, Serialize};
use derive_more::{Display, FromStr};

/// Represents the events that can be delivered to an automatic door controller
#[derive(Debug, Clone, PartialEq, Eq, Hash, Copy, Serialize, Deserialize, Display, FromStr)]
pub enum DoorEvent {
    /// A person was detected approaching the door
    MotionDetected,
    /// The timer keeping the door open has expired
    OpenTimerExpired,
    /// The closed-position sensor reports the door is fully closed
    DoorClosedSignal,
    /// The open-position sensor reports the door is fully open
    DoorOpenSignal,
}

impl DoorEvent {
    /// All event kinds.
    pub const ALL: [DoorEvent; 4] = [
        DoorEvent::MotionDetected,
        DoorEvent::OpenTimerExpired,
        DoorEvent::DoorClosedSignal,
        DoorEvent::DoorOpenSignal,
    ];
}

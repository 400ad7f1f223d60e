//! # Automatic Door States

//! This module defines the `DoorState` enum, the four physical states an automatic door can be in.
//! A door is always in exactly one of these states; the controller starts in `Closed` and cycles
//! through `Opening`, `Open` and `Closing` as events arrive.

use serde::{Deserialize, Serialize};
use derive_more::{Display, FromStr};

/// Represents the physical state of an automatic door.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Copy, Default, Serialize, Deserialize, Display, FromStr)]
pub enum DoorState {
    /// The door is fully closed. This is the initial state.
    #[default]
    Closed,
    /// The door motor is driving the door open.
    Opening,
    /// The door is fully open and waiting for its open timer to expire.
    Open,
    /// The door motor is driving the door closed.
    Closing,
}

impl DoorState {
    /// All states, in cycle order starting from the initial state.
    pub const ALL: [DoorState; 4] = [
        DoorState::Closed,
        DoorState::Opening,
        DoorState::Open,
        DoorState::Closing,
    ];

    /// Returns the display label carried by notifications for this state.
    pub fn label(&self) -> &'static str {
        match self {
            DoorState::Closed => "Closed",
            DoorState::Opening => "Opening",
            DoorState::Open => "Open",
            DoorState::Closing => "Closing",
        }
    }
}


//! # Door Transition Table

//! The complete behaviour of an automatic door as pure data. Each `TransitionRule` maps a
//! `(state, event)` pair to the next state and an optional action message. Pairs that have no rule
//! are no-ops: the state is unchanged and nothing is emitted. A rule whose target equals its source is
//! a self-transition and still fires its effect.

use crate::models::{DoorEvent, DoorState};

/// A single row of the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRule {
    /// The state the rule applies in
    pub from: DoorState,
    /// The event that triggers the rule
    pub event: DoorEvent,
    /// The state the door moves to
    pub to: DoorState,
    /// The action message emitted with the notification, if any
    pub effect: Option<&'static str>,
}

impl TransitionRule {
    /// Returns `true` when the rule fires an effect without leaving its state
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}

pub const MOTION_OPENING_MESSAGE: &str = "Motion detected, opening the door";
pub const TIMER_CLOSING_MESSAGE: &str = "Timer has expired, closing the door now";
pub const TIMER_RESET_MESSAGE: &str = "Door is open, resetting timer";

/// Every wired `(state, event)` pair. Anything not listed here is ignored.
pub static TRANSITIONS: [TransitionRule; 6] = [
    TransitionRule {
        from: DoorState::Closed,
        event: DoorEvent::MotionDetected,
        to: DoorState::Opening,
        effect: Some(MOTION_OPENING_MESSAGE),
    },
    TransitionRule {
        from: DoorState::Opening,
        event: DoorEvent::DoorOpenSignal,
        to: DoorState::Open,
        effect: None,
    },
    TransitionRule {
        from: DoorState::Open,
        event: DoorEvent::OpenTimerExpired,
        to: DoorState::Closing,
        effect: Some(TIMER_CLOSING_MESSAGE),
    },
    TransitionRule {
        from: DoorState::Open,
        event: DoorEvent::MotionDetected,
        to: DoorState::Open,
        effect: Some(TIMER_RESET_MESSAGE),
    },
    TransitionRule {
        from: DoorState::Closing,
        event: DoorEvent::MotionDetected,
        to: DoorState::Opening,
        effect: None,
    },
    TransitionRule {
        from: DoorState::Closing,
        event: DoorEvent::DoorClosedSignal,
        to: DoorState::Closed,
        effect: None,
    },
];

/// Finds the rule wired for `(state, event)`, if any
pub fn lookup(state: DoorState, event: DoorEvent) -> Option<&'static TransitionRule> {
    TRANSITIONS
        .iter()
        .find(|rule| rule.from == state && rule.event == event)
}

/// Returns the state reached from `state` on `event`; unmapped pairs leave the state unchanged
pub fn next_state(state: DoorState, event: DoorEvent) -> DoorState {
    lookup(state, event).map_or(state, |rule| rule.to)
}

/// Folds the transition table over `events`, starting from `initial`
pub fn replay<I>(initial: DoorState, events: I) -> DoorState
where
    I: IntoIterator<Item = DoorEvent>,
{
    events.into_iter().fold(initial, next_state)
}

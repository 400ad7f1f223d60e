use tracing::{debug, trace};

use crate::models::{DoorEvent, DoorNotification, DoorState, NotificationKind};
use crate::state_management::notification_sink::{NotificationSink, TracingSink};
use crate::state_management::transition_table;

/// The door name used when none is configured
pub const DEFAULT_DOOR_NAME: &str = "automatic-door";

/// Describes what a single dispatch did to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// No transition is wired for the event in the current state; nothing happened
    Ignored {
        state: DoorState,
    },
    /// The door moved to a different state
    Transitioned {
        from: DoorState,
        to: DoorState,
        notification: DoorNotification,
    },
    /// The door stayed in its state but the transition's effect fired
    SelfTransition {
        state: DoorState,
        notification: DoorNotification,
    },
}

impl DispatchOutcome {
    /// The state of the door after the dispatch
    pub fn state(&self) -> DoorState {
        match self {
            DispatchOutcome::Ignored { state } => *state,
            DispatchOutcome::Transitioned { to, .. } => *to,
            DispatchOutcome::SelfTransition { state, .. } => *state,
        }
    }

    /// The notification emitted by the dispatch, if any
    pub fn notification(&self) -> Option<&DoorNotification> {
        match self {
            DispatchOutcome::Ignored { .. } => None,
            DispatchOutcome::Transitioned { notification, .. } => Some(notification),
            DispatchOutcome::SelfTransition { notification, .. } => Some(notification),
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, DispatchOutcome::Ignored { .. })
    }
}

/// Finite-state controller for a single automatic door
///
/// The controller owns the current state and is the only thing that changes it. Every event goes
/// through [`DoorController::dispatch`], which consults the transition table and hands a
/// notification to the sink for each transition that fires. Events with no wired transition are
/// ignored silently.
#[derive(Debug)]
pub struct DoorController<S: NotificationSink = TracingSink> {
    door_name: String,
    current_state: DoorState,
    notifications_emitted: u64,
    sink: S,
}

impl DoorController<TracingSink> {
    /// Creates a controller in the `Closed` state that logs its notifications through `tracing`
    pub fn new() -> Self {
        Self::with_sink(DEFAULT_DOOR_NAME, TracingSink)
    }
}

impl Default for DoorController<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: NotificationSink> DoorController<S> {
    /// Creates a controller in the `Closed` state that sends its notifications to `sink`
    ///
    /// The "created" notification, carrying the `Closed` label, is emitted before this returns.
    ///
    /// # Arguments
    ///
    /// * `door_name`: The name reported in every notification
    /// * `sink`: The collaborator that receives notifications
    pub fn with_sink(door_name: impl Into<String>, sink: S) -> Self {
        let mut controller = Self {
            door_name: door_name.into(),
            current_state: DoorState::Closed,
            notifications_emitted: 0,
            sink,
        };
        controller.emit(NotificationKind::Created, None);
        controller
    }

    /// Applies `event` to the current state
    ///
    /// If the transition table has a rule for `(current_state, event)` the state is updated and one
    /// notification is emitted. Otherwise the call is a no-op: the state is unchanged and nothing is
    /// emitted.
    ///
    /// # Returns
    ///
    /// A `DispatchOutcome` describing the transition taken, if any
    pub fn dispatch(&mut self, event: DoorEvent) -> DispatchOutcome {
        let from = self.current_state;
        let Some(rule) = transition_table::lookup(from, event) else {
            trace!(door = %self.door_name, %event, state = %from, "No transition, ignoring event");
            return DispatchOutcome::Ignored { state: from };
        };

        debug!(door = %self.door_name, %event, %from, to = %rule.to, "Applying transition");
        self.current_state = rule.to;

        if rule.is_self_transition() {
            let notification = self.emit(NotificationKind::SelfTransition, rule.effect);
            DispatchOutcome::SelfTransition { state: from, notification }
        } else {
            let notification = self.emit(NotificationKind::StateChanged, rule.effect);
            DispatchOutcome::Transitioned { from, to: rule.to, notification }
        }
    }

    /// A person approached the door
    pub fn person_approaches_door(&mut self) -> DispatchOutcome {
        self.dispatch(DoorEvent::MotionDetected)
    }

    /// The timer keeping the door open expired
    pub fn open_timer_expired(&mut self) -> DispatchOutcome {
        self.dispatch(DoorEvent::OpenTimerExpired)
    }

    /// The closed-position sensor tripped
    pub fn door_closed(&mut self) -> DispatchOutcome {
        self.dispatch(DoorEvent::DoorClosedSignal)
    }

    /// The open-position sensor tripped
    pub fn door_open(&mut self) -> DispatchOutcome {
        self.dispatch(DoorEvent::DoorOpenSignal)
    }

    pub fn current_state(&self) -> DoorState {
        self.current_state
    }

    pub fn door_name(&self) -> &str {
        &self.door_name
    }

    /// Number of notifications emitted so far, including the "created" one
    pub fn notifications_emitted(&self) -> u64 {
        self.notifications_emitted
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the controller and returns its sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn emit(&mut self, kind: NotificationKind, message: Option<&str>) -> DoorNotification {
        let notification = DoorNotification::new(
            self.notifications_emitted,
            &self.door_name,
            kind,
            self.current_state,
            message,
        );
        self.notifications_emitted += 1;
        self.sink.notify(&notification);
        notification
    }
}

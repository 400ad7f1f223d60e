pub mod scenario_runner;

pub use scenario_runner::{ScenarioReport, ScenarioRunner};

use crate::models::DoorEvent;

/// The canonical walk through the door cycle: a person approaches, the door opens, a second
/// approach resets the timer, the timer expires and the door closes.
pub fn reference_scenario() -> Vec<DoorEvent> {
    vec![
        DoorEvent::MotionDetected,
        DoorEvent::DoorOpenSignal,
        DoorEvent::MotionDetected,
        DoorEvent::OpenTimerExpired,
        DoorEvent::DoorClosedSignal,
    ]
}

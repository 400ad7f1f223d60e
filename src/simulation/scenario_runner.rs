use std::time::{Duration, Instant};
use tracing::info;
use crate::controllers::automatic_door::DispatchOutcome;
use crate::errors::{DoorControllerError, DoorControllerResult};
use crate::models::{DoorEvent, DoorState};
use crate::state_management::event_dispatcher::EventDispatcher;

/// Summary of a replayed scenario
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    /// One outcome per dispatched event, in order
    pub outcomes: Vec<DispatchOutcome>,
    /// The state of the door once the last event was applied
    pub final_state: DoorState,
}

impl ScenarioReport {
    /// Number of notifications emitted by the scenario's events
    pub fn notification_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.notification().is_some()).count()
    }

    /// Number of events that matched no transition
    pub fn ignored_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ignored()).count()
    }
}

/// Plays the role of the door's sensors and timer: feeds a list of events to a dispatcher,
/// optionally pausing between them.
pub struct ScenarioRunner {
    dispatcher: EventDispatcher,
    step_interval: Duration,
}

impl ScenarioRunner {
    /// Creates a new `ScenarioRunner`
    ///
    /// # Arguments
    ///
    /// * `dispatcher`: The dispatcher connected to the door under simulation
    /// * `step_interval`: Delay between consecutive events; `Duration::ZERO` replays without pausing
    pub fn new(dispatcher: EventDispatcher, step_interval: Duration) -> Self {
        Self { dispatcher, step_interval }
    }

    /// Replays `events` in order
    ///
    /// # Returns
    ///
    /// * `Ok(ScenarioReport)` once every event has been applied
    /// * `Err(DoorControllerError)` if the event processor stopped before the scenario finished
    pub async fn run(&self, events: Vec<DoorEvent>) -> DoorControllerResult<ScenarioReport> {
        let start = Instant::now();
        info!("Replaying scenario of {} events", events.len());

        let mut outcomes = Vec::with_capacity(events.len());
        for (step, event) in events.into_iter().enumerate() {
            if step > 0 && !self.step_interval.is_zero() {
                tokio::time::sleep(self.step_interval).await;
            }
            let outcome = self.dispatcher.dispatch_event(event).await.map_err(|e| {
                DoorControllerError::ScenarioError(format!("step {} ({}) failed: {}", step + 1, event, e))
            })?;
            outcomes.push(outcome);
        }

        let final_state = self.dispatcher.current_state().await?;
        info!("Scenario completed in {:?}, final state: {}", start.elapsed(), final_state);

        Ok(ScenarioReport { outcomes, final_state })
    }
}

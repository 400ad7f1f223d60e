use tokio::sync::{mpsc, oneshot};
use crate::controllers::automatic_door::DispatchOutcome;
use crate::errors::{DoorControllerError, DoorControllerResult};
use crate::models::{DoorEvent, DoorState};
use crate::state_management::door_event_processor::DoorCommand;
use tracing::{info, error};

/// Delivers events to a door controller owned by a `DoorEventProcessor`.
///
/// Handles are cheap to clone; every clone feeds the same queue, so events from any number of
/// callers are applied one at a time in the order they reach the queue.
#[derive(Debug, Clone)]
pub struct EventDispatcher {
    /// The sender end of the processor's command channel.
    command_sender: mpsc::Sender<DoorCommand>,
}

impl EventDispatcher {
    /// Creates a new `EventDispatcher`.
    ///
    /// # Arguments
    ///
    /// * `command_sender` - The sender end of the processor's command channel.
    pub fn new(command_sender: mpsc::Sender<DoorCommand>) -> Self {
        Self { command_sender }
    }

    /// Dispatches an event and waits for the processor to apply it.
    ///
    /// # Arguments
    ///
    /// * `event` - The `DoorEvent` to be dispatched.
    ///
    /// # Returns
    ///
    /// The `DispatchOutcome` produced by the controller, or a channel error if the processor has stopped.
    pub async fn dispatch_event(&self, event: DoorEvent) -> DoorControllerResult<DispatchOutcome> {
        info!("Dispatching event: {:?}", event);
        let (reply_sender, reply_receiver) = oneshot::channel();
        self.command_sender.send(DoorCommand::Dispatch(event, reply_sender)).await
            .map_err(|e| {
                error!("Failed to dispatch event: {:?}", e);
                DoorControllerError::ChannelSendError(format!("Failed to dispatch event {}: {}", event, e))
            })?;
        Ok(reply_receiver.await?)
    }

    /// Dispatches multiple events in order.
    ///
    /// Stops at the first channel failure.
    ///
    /// # Arguments
    ///
    /// * `events` - The `DoorEvent`s to be dispatched.
    pub async fn dispatch_events(&self, events: Vec<DoorEvent>) -> DoorControllerResult<Vec<DispatchOutcome>> {
        info!("Dispatching {} events", events.len());
        let mut outcomes = Vec::with_capacity(events.len());
        for event in events {
            match self.dispatch_event(event).await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    error!("Failed to dispatch event: {:?}", e);
                    return Err(e);
                }
            }
        }
        Ok(outcomes)
    }

    /// Queries the controller's current state.
    ///
    /// The query is queued behind any events already sent, so it observes all of them.
    pub async fn current_state(&self) -> DoorControllerResult<DoorState> {
        let (reply_sender, reply_receiver) = oneshot::channel();
        self.command_sender.send(DoorCommand::GetState(reply_sender)).await?;
        Ok(reply_receiver.await?)
    }

    /// Checks if the command channel is still open and able to send events.
    ///
    /// # Returns
    ///
    /// `true` if the channel is open, `false` otherwise.
    pub fn is_channel_open(&self) -> bool {
        !self.command_sender.is_closed()
    }
}

use tokio::sync::{mpsc, oneshot};
use tracing::{info, warn};
use crate::controllers::automatic_door::{DispatchOutcome, DoorController};
use crate::models::{DoorEvent, DoorState};
use crate::state_management::event_dispatcher::EventDispatcher;
use crate::state_management::notification_sink::NotificationSink;

/// Represents the commands accepted by a `DoorEventProcessor`
#[derive(Debug)]
pub enum DoorCommand {
    Dispatch(DoorEvent, oneshot::Sender<DispatchOutcome>),
    GetState(oneshot::Sender<DoorState>),
}

/// Owns a `DoorController` and applies queued commands to it one at a time
///
/// This is the only way to share a controller between tasks: the processor is the single owner of
/// the controller's state, and callers talk to it through `EventDispatcher` handles.
pub struct DoorEventProcessor<S: NotificationSink> {
    command_receiver: mpsc::Receiver<DoorCommand>,
    controller: DoorController<S>,
}

impl<S: NotificationSink> DoorEventProcessor<S> {
    /// Creates a processor for `controller` and the dispatcher that feeds it
    ///
    /// # Arguments
    ///
    /// * `controller` - The controller to take ownership of
    /// * `buffer` - Capacity of the command channel; a capacity of zero is raised to one
    ///
    /// # Returns
    ///
    /// The processor and an `EventDispatcher` connected to it
    pub fn new(controller: DoorController<S>, buffer: usize) -> (Self, EventDispatcher) {
        let (command_sender, command_receiver) = mpsc::channel(buffer.max(1));
        (
            Self { command_receiver, controller },
            EventDispatcher::new(command_sender),
        )
    }

    /// Runs the command processing loop
    ///
    /// Processes commands in arrival order until every `EventDispatcher` handle has been dropped,
    /// then hands the controller back.
    pub async fn run(mut self) -> DoorController<S> {
        info!(door = %self.controller.door_name(), "Starting door event processor");
        while let Some(command) = self.command_receiver.recv().await {
            self.process_command(command);
        }
        info!(
            door = %self.controller.door_name(),
            state = %self.controller.current_state(),
            "All dispatchers dropped, stopping door event processor"
        );
        self.controller
    }

    fn process_command(&mut self, command: DoorCommand) {
        match command {
            DoorCommand::Dispatch(event, response_sender) => {
                let outcome = self.controller.dispatch(event);
                if response_sender.send(outcome).is_err() {
                    warn!("Dispatch caller went away before receiving the outcome of {}", event);
                }
            }
            DoorCommand::GetState(response_sender) => {
                if response_sender.send(self.controller.current_state()).is_err() {
                    warn!("State query caller went away before receiving a reply");
                }
            }
        }
    }
}

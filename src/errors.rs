/// # Door Controller Errors
/// This module defines the `DoorControllerError` enum, which covers the failures of the layers around the door state machine:
/// configuration loading, logging setup, the dispatch queue and scenario replay.
/// The state machine itself is total and never returns an error; an event that does not apply to the current state is simply ignored.


use thiserror::Error;
use std::io;
use tokio::sync::mpsc::error::SendError;
use tokio::sync::oneshot::error::RecvError;

#[derive(Error, Debug)]
pub enum DoorControllerError {
    /// Represents errors arising from missing or invalid configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Represents errors during the initialization of the logging system.
    #[error("Logging initialization error: {0}")]
    LoggingError(String),

    /// Represents errors when sending a command to the event processor.
    #[error("Channel send error: {0}")]
    ChannelSendError(String),

    /// Represents errors when receiving a reply from the event processor.
    #[error("Channel receive error: {0}")]
    ChannelRecvError(String),

    /// Represents errors while replaying an event scenario.
    #[error("Scenario error: {0}")]
    ScenarioError(String),
}

impl<T> From<SendError<T>> for DoorControllerError {
    fn from(err: SendError<T>) -> Self {
        DoorControllerError::ChannelSendError(err.to_string())
    }
}

impl From<RecvError> for DoorControllerError {
    fn from(err: RecvError) -> Self {
        DoorControllerError::ChannelRecvError(err.to_string())
    }
}

impl From<config::ConfigError> for DoorControllerError {
    fn from(err: config::ConfigError) -> Self {
        DoorControllerError::ConfigError(err.to_string())
    }
}

pub type DoorControllerResult<T> = Result<T, DoorControllerError>;

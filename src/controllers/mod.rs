pub mod automatic_door;

pub use automatic_door::{DispatchOutcome, DoorController, DEFAULT_DOOR_NAME};

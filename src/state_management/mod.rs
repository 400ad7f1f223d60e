pub mod transition_table;
pub mod notification_sink;
pub mod event_dispatcher;
pub mod door_event_processor;

pub use door_event_processor::{DoorCommand, DoorEventProcessor};
pub use event_dispatcher::EventDispatcher;
pub use notification_sink::{NotificationSink, RecordingSink, TracingSink};

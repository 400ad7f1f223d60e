use std::time::{Duration, Instant};

use automatic_door::config::Settings;
use automatic_door::controllers::DoorController;
use automatic_door::errors::DoorControllerError;
use automatic_door::models::{DoorEvent, DoorState};
use automatic_door::simulation::{reference_scenario, ScenarioRunner};
use automatic_door::state_management::{DoorEventProcessor, EventDispatcher, RecordingSink};

fn create_mock_processor() -> (DoorEventProcessor<RecordingSink>, EventDispatcher, RecordingSink) {
    let sink = RecordingSink::new();
    let controller = DoorController::with_sink("TEST_DOOR", sink.clone());
    let (processor, dispatcher) = DoorEventProcessor::new(controller, 16);
    (processor, dispatcher, sink)
}

fn config_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("src/config")
}

#[tokio::test]
async fn test_dispatcher_applies_events_in_order() {
    let (processor, dispatcher, sink) = create_mock_processor();
    let handle = tokio::spawn(processor.run());

    let outcomes = dispatcher
        .dispatch_events(reference_scenario())
        .await
        .expect("processor is running");

    let states: Vec<DoorState> = outcomes.iter().map(|o| o.state()).collect();
    assert_eq!(
        states,
        vec![DoorState::Opening, DoorState::Open, DoorState::Open, DoorState::Closing, DoorState::Closed]
    );
    assert_eq!(dispatcher.current_state().await.expect("processor is running"), DoorState::Closed);

    drop(dispatcher);
    let controller = handle.await.expect("processor task panicked");
    assert_eq!(controller.current_state(), DoorState::Closed);
    assert_eq!(controller.notifications_emitted(), 6);
    assert_eq!(sink.len(), 6);
}

#[tokio::test]
async fn test_processor_stops_when_every_dispatcher_is_dropped() {
    let (processor, dispatcher, _sink) = create_mock_processor();
    let second = dispatcher.clone();
    let handle = tokio::spawn(processor.run());

    dispatcher.dispatch_event(DoorEvent::MotionDetected).await.expect("processor is running");
    drop(dispatcher);
    assert!(second.is_channel_open(), "a remaining clone keeps the processor alive");

    second.dispatch_event(DoorEvent::DoorOpenSignal).await.expect("processor is running");
    drop(second);

    let controller = handle.await.expect("processor task panicked");
    assert_eq!(controller.current_state(), DoorState::Open);
}

#[tokio::test]
async fn test_concurrent_dispatchers_are_serialized() {
    let (processor, dispatcher, sink) = create_mock_processor();
    let handle = tokio::spawn(processor.run());

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let dispatcher = dispatcher.clone();
        tasks.push(tokio::spawn(async move {
            let mut applied = 0usize;
            for event in DoorEvent::ALL {
                let outcome = dispatcher.dispatch_event(event).await.expect("processor is running");
                if !outcome.is_ignored() {
                    applied += 1;
                }
            }
            applied
        }));
    }

    let mut applied = 0;
    for task in tasks {
        applied += task.await.expect("dispatch task panicked");
    }
    drop(dispatcher);
    let controller = handle.await.expect("processor task panicked");

    let notifications = sink.notifications();
    assert_eq!(notifications.len(), applied + 1);
    assert_eq!(controller.notifications_emitted() as usize, applied + 1);
    for (expected, notification) in notifications.iter().enumerate() {
        assert_eq!(notification.sequence, expected as u64);
    }
    assert_eq!(notifications.last().map(|n| n.state), Some(controller.current_state()));
}

#[tokio::test]
async fn test_dispatch_fails_once_processor_is_gone() {
    let (processor, dispatcher, _sink) = create_mock_processor();
    drop(processor);

    assert!(!dispatcher.is_channel_open());
    let result = dispatcher.dispatch_event(DoorEvent::MotionDetected).await;
    assert!(matches!(result, Err(DoorControllerError::ChannelSendError(_))));
    assert!(dispatcher.current_state().await.is_err());
}

#[tokio::test]
async fn test_scenario_runner_reports_reference_scenario() {
    let (processor, dispatcher, sink) = create_mock_processor();
    let handle = tokio::spawn(processor.run());

    let runner = ScenarioRunner::new(dispatcher, Duration::ZERO);
    let report = runner.run(reference_scenario()).await.expect("scenario completes");

    assert_eq!(report.final_state, DoorState::Closed);
    assert_eq!(report.outcomes.len(), 5);
    assert_eq!(report.notification_count(), 5);
    assert_eq!(report.ignored_count(), 0);

    drop(runner);
    handle.await.expect("processor task panicked");
    assert_eq!(sink.len(), 6, "created notification plus five transitions");
}

#[tokio::test]
async fn test_scenario_runner_counts_ignored_events_and_paces_steps() {
    let (processor, dispatcher, _sink) = create_mock_processor();
    let handle = tokio::spawn(processor.run());

    let runner = ScenarioRunner::new(dispatcher, Duration::from_millis(5));
    let start = Instant::now();
    let report = runner
        .run(vec![
            DoorEvent::DoorClosedSignal,
            DoorEvent::MotionDetected,
            DoorEvent::OpenTimerExpired,
        ])
        .await
        .expect("scenario completes");

    assert!(start.elapsed() >= Duration::from_millis(10), "two pauses between three events");
    assert_eq!(report.final_state, DoorState::Opening);
    assert_eq!(report.ignored_count(), 2);
    assert_eq!(report.notification_count(), 1);

    drop(runner);
    handle.await.expect("processor task panicked");
}

#[tokio::test]
async fn test_scenario_runner_fails_without_processor() {
    let (processor, dispatcher, _sink) = create_mock_processor();
    drop(processor);

    let runner = ScenarioRunner::new(dispatcher, Duration::ZERO);
    let result = runner.run(reference_scenario()).await;
    assert!(matches!(result, Err(DoorControllerError::ScenarioError(_))));
}

#[tokio::test]
async fn test_zero_capacity_buffer_is_raised_to_one() {
    let sink = RecordingSink::new();
    let controller = DoorController::with_sink("TEST_DOOR", sink.clone());
    let (processor, dispatcher) = DoorEventProcessor::new(controller, 0);
    let handle = tokio::spawn(processor.run());

    let outcomes = dispatcher
        .dispatch_events(reference_scenario())
        .await
        .expect("processor is running");
    assert_eq!(outcomes.last().map(|o| o.state()), Some(DoorState::Closed));

    drop(dispatcher);
    handle.await.expect("processor task panicked");
    assert_eq!(sink.len(), 6);
}

#[test]
fn test_settings_load_from_config_dir() {
    let settings = Settings::from_config_dir(config_dir(), "development").expect("bundled config loads");

    assert_eq!(settings.door.name, "front-entrance");
    assert_eq!(settings.logging.level, "debug", "development overrides default level");
    assert_eq!(settings.logging.path, None);
    assert_eq!(settings.simulation.step_interval(), Duration::ZERO);
    assert_eq!(settings.scenario(), reference_scenario());
}

#[test]
fn test_settings_missing_run_mode_file_is_optional() {
    let settings = Settings::from_config_dir(config_dir(), "staging").expect("default.yaml alone is enough");
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn test_settings_missing_config_dir_is_an_error() {
    let result = Settings::from_config_dir(config_dir().join("does-not-exist"), "development");
    assert!(matches!(result, Err(DoorControllerError::ConfigError(_))));
}

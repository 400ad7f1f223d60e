use anyhow::{Context, Result};
use tracing::info;
use tokio::signal::ctrl_c;
use automatic_door::config::Settings;
use automatic_door::controllers::DoorController;
use automatic_door::simulation::ScenarioRunner;
use automatic_door::state_management::{DoorEventProcessor, TracingSink};
use automatic_door::utils::logging;

/// The main entry point of the automatic door simulator
///
/// This function runs the simulator and exits with a non-zero status if it fails
#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Application error: {:#}", e);
        std::process::exit(1);
    }
}


/// The core logic of the automatic door simulator
///
/// This asynchronous function performs the following steps:
/// 1. Loads application settings from configuration files and the environment
/// 2. Initializes the logging system
/// 3. Creates the `DoorController`, logging its notifications through `tracing`
/// 4. Hands the controller to a `DoorEventProcessor` running on its own task
/// 5. Replays the configured scenario with a `ScenarioRunner` until it completes or a shutdown signal is received
/// 6. Drops the dispatcher and waits for the processor to hand the controller back
/// 7. Fails if the scenario could not be replayed to the end
///
/// # Returns
///
/// * `Ok(())` if the simulation runs successfully and shuts down gracefully
/// * `Err(anyhow::Error)` if any errors occur during initialization or the replay, so the process exits non-zero
async fn run() -> Result<()> {
    let settings = Settings::new().context("Failed to load settings")?;
    let _guard = logging::init_logger(settings.logging.path.clone(), &settings.logging.level)?;

    let controller = DoorController::with_sink(settings.door.name.clone(), TracingSink);
    let (processor, dispatcher) = DoorEventProcessor::new(controller, 32);
    let processor_handle = tokio::spawn(processor.run());

    let runner = ScenarioRunner::new(dispatcher, settings.simulation.step_interval());
    let scenario = settings.scenario();

    let replay = tokio::select! {
        result = runner.run(scenario) => Some(result),
        _ = ctrl_c() => {
            info!("Received shutdown signal. Shutting down gracefully...");
            None
        }
    };

    drop(runner);
    let controller = processor_handle.await.context("Door event processor task failed")?;
    info!(
        "Door {} stopped in state {} after {} notifications",
        controller.door_name(),
        controller.current_state(),
        controller.notifications_emitted()
    );

    if let Some(result) = replay {
        let report = result.context("Scenario replay failed")?;
        info!(
            "Scenario finished: {} events, {} notifications, {} ignored, final state {}",
            report.outcomes.len(),
            report.notification_count(),
            report.ignored_count(),
            report.final_state
        );
    }
    Ok(())
}

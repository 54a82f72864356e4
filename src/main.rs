//! Development harness.
//!
//! Wires the in-memory adapters, seeds the default catalog and runs the
//! outbound event dispatcher (logging transport) until Ctrl-C.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info};

use assessment_service::adapters::memory::{
    seed_defaults, InMemoryAssessmentRepository, InMemoryCommentTemplates,
    InMemoryDimensionCatalog, InMemoryFeedbackRepository, InMemoryUserDirectory,
};
use assessment_service::adapters::{
    outbound_queue, DispatcherConfig, EventDispatcher, LoggingTransport,
};
use assessment_service::application::AssessmentServices;
use assessment_service::config::AppConfig;
use assessment_service::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let catalog = Arc::new(InMemoryDimensionCatalog::new());
    let templates = Arc::new(InMemoryCommentTemplates::new());
    let report = seed_defaults(&catalog, &templates).await?;
    info!(
        dimensions = report.dimensions_created,
        templates = report.templates_created,
        skipped = report.skipped,
        "Catalog seeded"
    );

    let (publisher, queue) = outbound_queue(config.events.queue_capacity);
    let dispatcher = EventDispatcher::with_config(
        queue,
        Arc::new(LoggingTransport::new()),
        DispatcherConfig {
            drain_on_shutdown: config.events.drain_on_shutdown,
        },
    );
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let dispatcher_task = tokio::spawn(dispatcher.run(shutdown_rx));

    let services = AssessmentServices::new(
        catalog,
        templates,
        Arc::new(InMemoryAssessmentRepository::new()),
        Arc::new(InMemoryFeedbackRepository::new()),
        Arc::new(InMemoryUserDirectory::new()),
        Arc::new(publisher),
        config.event_source(),
    );
    info!(
        source = services.emitter.source(),
        environment = ?config.service.environment,
        "Assessment service ready, press Ctrl-C to stop"
    );

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    // Dropping the services closes the queue's last sender.
    drop(services);
    if shutdown_tx.send(true).is_err() {
        error!("Event dispatcher already stopped");
    }
    match dispatcher_task.await {
        Ok(stats) => info!(
            delivered = stats.delivered(),
            failed = stats.failed(),
            "Shutdown complete"
        ),
        Err(err) => error!(error = %err, "Event dispatcher task failed"),
    }

    Ok(())
}

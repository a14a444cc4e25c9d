// ============================================================================
// Fulfillment Worker - asynchronous order fulfillment
// ============================================================================
//
// Consumes orders from one partition of the order topic in arrival order and
// brews them. Delivery is at-least-once: the worker replays from the oldest
// retained offset on start, so a message interrupted mid-run is redelivered.
//
// Shutdown is cooperative: SIGINT/SIGTERM delivers one interrupt into the
// dispatch loop, the in-flight order finishes processing, no further messages
// are dispatched, and the broker connection is released on exit.
//
// ============================================================================

use anyhow::{Context, Result};
use brewline_config::Config;
use brewline_shared::fulfillment::{run_dispatch_loop, BrewHandler};
use brewline_shared::kafka::OrderConsumer;
use brewline_shared::shutdown::{spawn_signal_listener, ShutdownController};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.rust_log.clone()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("=== Fulfillment Worker Starting ===");
    info!("Kafka Brokers: {}", config.kafka.brokers);
    info!("Kafka Topic: {}", config.kafka.topic);
    info!("Kafka Partition: {}", config.kafka.partition);

    let consumer =
        OrderConsumer::connect(&config.kafka).context("Failed to initialize Kafka consumer")?;

    info!("Consumer started");

    let shutdown = ShutdownController::new();
    spawn_signal_listener(shutdown.clone());

    // The dispatch loop runs on its own task; this task blocks until the
    // loop confirms it has drained and terminated.
    let signal = shutdown.subscribe();
    let dispatch = tokio::spawn(async move {
        let events = consumer.into_event_stream();
        run_dispatch_loop(events, &BrewHandler, signal).await
    });

    let report = dispatch.await.context("Dispatch loop task failed")?;

    info!(
        processed = report.received,
        failed = report.failed,
        "Fulfillment worker stopped gracefully"
    );

    Ok(())
}

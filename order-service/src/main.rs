// ============================================================================
// Order Service - synchronous order intake
// ============================================================================
//
// Accepts coffee orders over HTTP and publishes them to the order topic with
// full broker acknowledgment. Fulfillment happens asynchronously in the
// fulfillment-worker; the two communicate only through the broker.
//
// ============================================================================

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use brewline_config::Config;
use brewline_shared::kafka::OrderPublisher;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod handlers;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.rust_log.clone()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("=== Order Service Starting ===");
    info!("Port: {}", config.port);
    info!("Kafka Brokers: {}", config.kafka.brokers);
    info!("Kafka Topic: {}", config.kafka.topic);

    let publisher = Arc::new(OrderPublisher::new(config.kafka.clone()));

    // Create router
    let app = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/order", post(handlers::place_order))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .into_inner(),
        )
        .with_state(publisher);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .context("Failed to bind order service listener")?;

    info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .await
        .context("Failed to start order service")?;

    Ok(())
}

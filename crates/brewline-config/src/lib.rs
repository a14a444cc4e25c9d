// ============================================================================
// Brewline Config - Centralized configuration management
// ============================================================================
//
// This crate provides centralized configuration for the Brewline services.
// Supports loading from environment variables with sensible defaults.
//
// ============================================================================

mod constants;
mod kafka;

pub use constants::{DEFAULT_BROKERS, DEFAULT_CONSUMER_GROUP, DEFAULT_PORT, DEFAULT_TOPIC};
pub use kafka::KafkaConfig;

use anyhow::Result;

/// Main configuration structure for Brewline services
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub rust_log: String,

    // Sub-configurations
    pub kafka: KafkaConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            port,
            bind_address: format!("[::]:{}", port),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            kafka: KafkaConfig::from_env(),
        })
    }
}

use brewline_config::KafkaConfig;
use brewline_error::{AppError, AppResult};
use rdkafka::config::ClientConfig;
use rdkafka::consumer::StreamConsumer;
use rdkafka::producer::FutureProducer;
use tracing::info;

/// Creates a new `rdkafka::config::ClientConfig` from the application's `KafkaConfig`.
///
/// This function centralizes the connection settings shared by producers and
/// consumers: bootstrap servers, SSL/TLS, and SASL authentication.
pub fn create_client_config(config: &KafkaConfig) -> AppResult<ClientConfig> {
    let mut client_config = ClientConfig::new();
    client_config.set("bootstrap.servers", &config.brokers);

    // Default to plaintext if SSL is not explicitly enabled and no SASL.
    client_config.set("security.protocol", "plaintext");

    if config.ssl_enabled {
        info!("Enabling SSL/TLS for Kafka connection");
        client_config.set("security.protocol", "ssl");
    }

    if let (Some(mechanism), Some(username), Some(password)) = (
        &config.sasl_mechanism,
        &config.sasl_username,
        &config.sasl_password,
    ) {
        info!(sasl_mechanism = %mechanism, "Configuring SASL authentication");
        client_config
            .set("sasl.mechanism", mechanism)
            .set("sasl.username", username)
            .set("sasl.password", password);

        if config.ssl_enabled {
            client_config.set("security.protocol", "sasl_ssl");
        } else {
            client_config.set("security.protocol", "sasl_plaintext");
        }
    }

    Ok(client_config)
}

/// Open a publisher-role connection.
///
/// # Configuration
/// - `acks`: all in-sync replicas must acknowledge before a send succeeds
///   (durability over latency).
/// - `retries`: bounded internal retry (default 5) before a send surfaces
///   failure to the caller.
///
/// Fails with [`AppError::Connection`] when the client cannot be built; the
/// caller owns the returned producer and releases the connection by dropping
/// it.
pub fn connect_producer(config: &KafkaConfig) -> AppResult<FutureProducer> {
    let mut client_config = create_client_config(config)?;

    client_config
        // Reliability settings
        .set("acks", &config.producer_acks)
        .set("retries", config.producer_retries.to_string())
        // Timeout settings
        .set(
            "request.timeout.ms",
            config.producer_request_timeout_ms.to_string(),
        )
        .set(
            "delivery.timeout.ms",
            config.producer_delivery_timeout_ms.to_string(),
        );

    client_config
        .create()
        .map_err(|e| AppError::connection(format!("failed to create Kafka producer: {}", e)))
}

/// Open a consumer-role connection.
///
/// # Configuration
/// - `enable.auto.commit=false`: the worker replays from a fixed offset on
///   restart; no commit-based progress is recorded.
/// - `auto.offset.reset=earliest`: no un-replayed backlog is skipped.
///
/// Consumption errors surface as per-poll events from `recv()`; the
/// connection never terminates silently.
pub fn connect_consumer(config: &KafkaConfig) -> AppResult<StreamConsumer> {
    let mut client_config = create_client_config(config)?;

    client_config
        .set("group.id", &config.consumer_group)
        // Offset management
        .set("enable.auto.commit", "false")
        .set("auto.offset.reset", "earliest")
        // Session management
        .set("session.timeout.ms", "30000")
        .set("heartbeat.interval.ms", "3000");

    client_config
        .create()
        .map_err(|e| AppError::connection(format!("failed to create Kafka consumer: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plaintext_by_default() {
        let config = KafkaConfig::default();
        let client_config = create_client_config(&config).unwrap();

        assert_eq!(client_config.get("bootstrap.servers"), Some("localhost:9092"));
        assert_eq!(client_config.get("security.protocol"), Some("plaintext"));
    }

    #[test]
    fn ssl_enabled_switches_protocol() {
        let config = KafkaConfig {
            ssl_enabled: true,
            ..KafkaConfig::default()
        };
        let client_config = create_client_config(&config).unwrap();

        assert_eq!(client_config.get("security.protocol"), Some("ssl"));
    }

    #[test]
    fn sasl_without_ssl_uses_sasl_plaintext() {
        let config = KafkaConfig {
            sasl_mechanism: Some("PLAIN".to_string()),
            sasl_username: Some("brew".to_string()),
            sasl_password: Some("secret".to_string()),
            ..KafkaConfig::default()
        };
        let client_config = create_client_config(&config).unwrap();

        assert_eq!(client_config.get("security.protocol"), Some("sasl_plaintext"));
    }
}

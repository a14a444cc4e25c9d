use crate::constants::{DEFAULT_BROKERS, DEFAULT_CONSUMER_GROUP, DEFAULT_TOPIC};

/// Kafka configuration for order transport
#[derive(Clone, Debug)]
pub struct KafkaConfig {
    /// Comma-separated list of Kafka brokers (e.g., "kafka1:9092,kafka2:9092")
    pub brokers: String,
    /// Kafka topic name for orders
    pub topic: String,
    /// Partition the fulfillment worker reads from
    pub partition: i32,
    /// Consumer group ID for fulfillment workers
    pub consumer_group: String,
    /// SSL/TLS enabled
    pub ssl_enabled: bool,
    /// SASL mechanism (e.g., "SCRAM-SHA-256", "PLAIN")
    pub sasl_mechanism: Option<String>,
    /// SASL username
    pub sasl_username: Option<String>,
    /// SASL password
    pub sasl_password: Option<String>,
    // producer-specific settings
    pub producer_acks: String, // "all" | "1" | "-1" | "0"
    pub producer_retries: u32,
    pub producer_request_timeout_ms: u32,
    pub producer_delivery_timeout_ms: u32,
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self {
            brokers: DEFAULT_BROKERS.to_string(),
            topic: DEFAULT_TOPIC.to_string(),
            partition: 0,
            consumer_group: DEFAULT_CONSUMER_GROUP.to_string(),
            ssl_enabled: false,
            sasl_mechanism: None,
            sasl_username: None,
            sasl_password: None,
            producer_acks: "all".to_string(),
            producer_retries: 5,
            producer_request_timeout_ms: 30000,
            producer_delivery_timeout_ms: 120000,
        }
    }
}

impl KafkaConfig {
    pub(crate) fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            brokers: std::env::var("KAFKA_BROKERS").unwrap_or(defaults.brokers),
            topic: std::env::var("KAFKA_TOPIC").unwrap_or(defaults.topic),
            partition: std::env::var("KAFKA_PARTITION")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.partition),
            consumer_group: std::env::var("KAFKA_CONSUMER_GROUP")
                .unwrap_or(defaults.consumer_group),
            ssl_enabled: std::env::var("KAFKA_SSL_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ssl_enabled),
            sasl_mechanism: std::env::var("KAFKA_SASL_MECHANISM").ok(),
            sasl_username: std::env::var("KAFKA_SASL_USERNAME").ok(),
            sasl_password: std::env::var("KAFKA_SASL_PASSWORD").ok(),
            producer_acks: std::env::var("KAFKA_PRODUCER_ACKS").unwrap_or(defaults.producer_acks),
            producer_retries: std::env::var("KAFKA_PRODUCER_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.producer_retries),
            producer_request_timeout_ms: std::env::var("KAFKA_PRODUCER_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.producer_request_timeout_ms),
            producer_delivery_timeout_ms: std::env::var("KAFKA_PRODUCER_DELIVERY_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.producer_delivery_timeout_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_broker_contract() {
        let config = KafkaConfig::default();

        assert_eq!(config.brokers, "localhost:9092");
        assert_eq!(config.topic, "coffee_orders");
        assert_eq!(config.partition, 0);
        // All replica acknowledgments, bounded internal retry
        assert_eq!(config.producer_acks, "all");
        assert_eq!(config.producer_retries, 5);
    }
}

use brewline_config::KafkaConfig;
use brewline_error::{AppError, AppResult};
use rdkafka::producer::FutureRecord;
use rdkafka::util::Timeout;
use tracing::{error, info};

use super::config::connect_producer;
use super::types::DeliveryReceipt;

/// Publisher for order payloads.
///
/// Each `publish` call acquires a fresh publisher-role connection, performs a
/// synchronous acknowledged send, and releases the connection before
/// returning — no pooling, no batching. The send blocks the caller until the
/// broker acknowledges or the internal retry budget is exhausted, so on
/// success the payload is durably recorded at the returned offset.
pub struct OrderPublisher {
    config: KafkaConfig,
}

impl OrderPublisher {
    pub fn new(config: KafkaConfig) -> Self {
        Self { config }
    }

    /// Topic this publisher targets
    pub fn topic(&self) -> &str {
        &self.config.topic
    }

    /// Publish a payload to the configured topic and wait for acknowledgment.
    ///
    /// # Returns
    /// * `Ok(DeliveryReceipt)` — the broker recorded the payload at the
    ///   returned partition/offset before this call returned.
    /// * `Err(AppError::Connection)` — the broker client could not be built.
    /// * `Err(AppError::Publish)` — the send failed after the broker-internal
    ///   retry budget; no partial state is observable to the caller.
    pub async fn publish(&self, payload: &[u8]) -> AppResult<DeliveryReceipt> {
        let producer = connect_producer(&self.config)?;

        let record = FutureRecord::<str, [u8]>::to(&self.config.topic).payload(payload);

        match producer.send(record, Timeout::Never).await {
            Ok((partition, offset)) => {
                let receipt = DeliveryReceipt {
                    topic: self.config.topic.clone(),
                    partition,
                    offset,
                };

                info!("Order stored in {}", receipt);

                Ok(receipt)
            }
            Err((kafka_err, _)) => {
                error!(
                    error = %kafka_err,
                    topic = %self.config.topic,
                    "Failed to send order to Kafka"
                );

                Err(AppError::publish(kafka_err.to_string()))
            }
        }
        // producer dropped here: the connection is released on every exit path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publisher_targets_configured_topic() {
        let publisher = OrderPublisher::new(KafkaConfig::default());
        assert_eq!(publisher.topic(), "coffee_orders");
    }
}

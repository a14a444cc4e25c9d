use brewline_config::KafkaConfig;
use brewline_error::{AppError, AppResult};
use futures::stream::{self, BoxStream};
use futures::StreamExt;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::{Message, Offset, TopicPartitionList};
use tracing::info;

use super::config::connect_consumer;
use super::types::ReceivedOrder;

/// Ordered consumer over one partition of the order topic.
///
/// Subscription starts at the oldest retained offset so no un-replayed
/// backlog is skipped; restart resumes only via offset, never in-process.
pub struct OrderConsumer {
    consumer: StreamConsumer,
    topic: String,
    partition: i32,
}

impl OrderConsumer {
    /// Open a consumer-role connection and assign the configured partition
    /// at the oldest retained offset.
    pub fn connect(config: &KafkaConfig) -> AppResult<Self> {
        let consumer = connect_consumer(config)?;

        let mut assignment = TopicPartitionList::new();
        assignment
            .add_partition_offset(&config.topic, config.partition, Offset::Beginning)
            .map_err(|e| {
                AppError::connection(format!("invalid partition assignment: {}", e))
            })?;

        consumer.assign(&assignment).map_err(|e| {
            AppError::connection(format!("failed to assign topic partition: {}", e))
        })?;

        info!(
            topic = %config.topic,
            partition = config.partition,
            "Kafka consumer assigned at oldest retained offset"
        );

        Ok(Self {
            consumer,
            topic: config.topic.clone(),
            partition: config.partition,
        })
    }

    /// Topic this consumer reads from
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Partition this consumer reads from
    pub fn partition(&self) -> i32 {
        self.partition
    }

    /// Turn the connection into a lazy, unbounded event stream.
    ///
    /// Messages arrive in partition order; broker-reported problems surface
    /// as `Err` items and the stream continues. The underlying connection is
    /// released when the stream is dropped.
    pub fn into_event_stream(self) -> BoxStream<'static, Result<ReceivedOrder, AppError>> {
        stream::unfold(self.consumer, |consumer| async move {
            let item = match consumer.recv().await {
                Ok(message) => Ok(ReceivedOrder {
                    topic: message.topic().to_owned(),
                    partition: message.partition(),
                    offset: message.offset(),
                    payload: message.payload().map(<[u8]>::to_vec).unwrap_or_default(),
                }),
                Err(e) => Err(AppError::consumption(e.to_string())),
            };

            Some((item, consumer))
        })
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_builds_single_partition_assignment() {
        // Client creation is lazy; this exercises configuration and
        // assignment without a running broker.
        let result = OrderConsumer::connect(&KafkaConfig::default());

        if let Ok(consumer) = result {
            assert_eq!(consumer.topic(), "coffee_orders");
            assert_eq!(consumer.partition(), 0);
        }
    }
}

// Kafka module for durable order transport
//
// Orders flow through a single named topic: the order service publishes with
// full acknowledgment, the fulfillment worker consumes one partition in
// arrival order.

pub mod config;
pub mod consumer;
pub mod producer;
pub mod types;

// Re-export commonly used types
pub use config::{connect_consumer, connect_producer, create_client_config};
pub use consumer::OrderConsumer;
pub use producer::OrderPublisher;
pub use types::{ConsumptionEvent, DeliveryReceipt, Order, ReceivedOrder};

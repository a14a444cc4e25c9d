// Shared defaults used when the corresponding environment variable is unset.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BROKERS: &str = "localhost:9092";
pub const DEFAULT_TOPIC: &str = "coffee_orders";
pub const DEFAULT_CONSUMER_GROUP: &str = "fulfillment-workers";

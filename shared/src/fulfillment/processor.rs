use async_trait::async_trait;
use brewline_error::AppError;
use tracing::info;

use super::dispatcher::OrderHandler;
use crate::kafka::ReceivedOrder;

/// Production order handler: parses the payload and brews.
///
/// A malformed payload is a processing failure for that one message — it is
/// reported and the loop moves on.
pub struct BrewHandler;

#[async_trait]
impl OrderHandler for BrewHandler {
    async fn handle(&self, received: ReceivedOrder) -> Result<(), AppError> {
        let order = received.order()?;

        info!(
            topic = %received.topic,
            partition = received.partition,
            offset = received.offset,
            customer = %order.customer_name,
            coffee = %order.coffee_type,
            "Brewing coffee for order"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn brews_valid_order() {
        let received = ReceivedOrder {
            topic: "coffee_orders".to_string(),
            partition: 0,
            offset: 0,
            payload: br#"{"customer_name":"Ana","coffee_type":"latte"}"#.to_vec(),
        };

        assert!(BrewHandler.handle(received).await.is_ok());
    }

    #[tokio::test]
    async fn reports_malformed_payload() {
        let received = ReceivedOrder {
            topic: "coffee_orders".to_string(),
            partition: 0,
            offset: 3,
            payload: b"\xff\xfe not an order".to_vec(),
        };

        assert!(BrewHandler.handle(received).await.is_err());
    }
}

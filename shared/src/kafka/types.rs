use std::fmt;

use brewline_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A coffee order as accepted by the ingress endpoint.
///
/// Immutable once created; the serialized JSON form is the unit transported
/// through the topic. Orders carry no identity beyond their content, so
/// duplicates are indistinguishable — a known consequence of at-least-once
/// delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub customer_name: String,
    pub coffee_type: String,
}

impl Order {
    /// Validate order structure
    pub fn validate(&self) -> AppResult<()> {
        if self.customer_name.is_empty() {
            return Err(AppError::validation("customer_name is required"));
        }
        if self.coffee_type.is_empty() {
            return Err(AppError::validation("coffee_type is required"));
        }
        Ok(())
    }
}

/// Broker acknowledgment of a successful publish.
///
/// Observability only — the offset is not used for deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
}

impl fmt::Display for DeliveryReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "topic({})/partition({})/offset({})",
            self.topic, self.partition, self.offset
        )
    }
}

/// One message as observed by the ordered consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedOrder {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
    pub payload: Vec<u8>,
}

impl ReceivedOrder {
    /// Parse the payload back into an [`Order`]
    pub fn order(&self) -> AppResult<Order> {
        Ok(serde_json::from_slice(&self.payload)?)
    }
}

/// One iteration's outcome in the dispatch loop.
///
/// Produced by whichever source is ready first, consumed exactly once,
/// never persisted.
#[derive(Debug)]
pub enum ConsumptionEvent {
    Message(ReceivedOrder),
    Error(AppError),
    Interrupt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_fields() {
        let order = Order {
            customer_name: "".to_string(),
            coffee_type: "latte".to_string(),
        };
        assert!(order.validate().is_err());

        let order = Order {
            customer_name: "Ana".to_string(),
            coffee_type: "".to_string(),
        };
        assert!(order.validate().is_err());
    }

    #[test]
    fn received_order_parses_wire_payload() {
        let received = ReceivedOrder {
            topic: "coffee_orders".to_string(),
            partition: 0,
            offset: 0,
            payload: br#"{"customer_name":"Ana","coffee_type":"latte"}"#.to_vec(),
        };

        let order = received.order().unwrap();
        assert_eq!(order.customer_name, "Ana");
        assert_eq!(order.coffee_type, "latte");
        assert!(order.validate().is_ok());
    }

    #[test]
    fn received_order_rejects_garbage_payload() {
        let received = ReceivedOrder {
            topic: "coffee_orders".to_string(),
            partition: 0,
            offset: 7,
            payload: b"not json at all".to_vec(),
        };

        assert!(matches!(received.order(), Err(AppError::Json(_))));
    }

    #[test]
    fn receipt_display_names_delivery_position() {
        let receipt = DeliveryReceipt {
            topic: "coffee_orders".to_string(),
            partition: 0,
            offset: 42,
        };
        assert_eq!(receipt.to_string(), "topic(coffee_orders)/partition(0)/offset(42)");
    }
}

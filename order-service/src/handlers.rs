use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use brewline_error::AppResult;
use brewline_shared::kafka::{Order, OrderPublisher};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Accept an order and publish it to the order topic.
///
/// The publish result is awaited and propagated: a failed send answers 500
/// rather than a false success. A malformed or invalid body answers 400.
pub async fn place_order(
    State(publisher): State<Arc<OrderPublisher>>,
    body: Bytes,
) -> AppResult<Json<serde_json::Value>> {
    let order: Order = serde_json::from_slice(&body)?;
    order.validate()?;

    let payload = serde_json::to_vec(&order)?;
    let receipt = publisher.publish(&payload).await?;

    info!(
        customer = %order.customer_name,
        coffee = %order.coffee_type,
        receipt = %receipt,
        "Order accepted"
    );

    Ok(Json(json!({
        "success": true,
        "msg": format!("Order for {} placed successfully", order.customer_name),
    })))
}

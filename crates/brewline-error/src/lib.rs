use axum::{http::StatusCode, response::IntoResponse};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Application error type covering the order pipeline
///
/// Connection-layer failures abort the enclosing operation; message-layer
/// failures are reported and never abort the consumer loop.
#[derive(Error, Debug)]
pub enum AppError {
    // ===== Broker Errors =====
    #[error("broker connection error: {0}")]
    Connection(String),

    #[error("publish failed: {0}")]
    Publish(String),

    #[error("consumption error: {0}")]
    Consumption(String),

    // ===== Order Processing Errors =====
    #[error("order processing failed: {0}")]
    Processing(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ===== Ambient Errors =====
    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Connection(_)
            | AppError::Publish(_)
            | AppError::Consumption(_)
            | AppError::Processing(_)
            | AppError::Config(_)
            | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-friendly error message (without sensitive details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => format!("Validation error: {}", msg),
            AppError::Json(e) => format!("Malformed request body: {}", e),
            AppError::Connection(_) | AppError::Publish(_) => "Message queue error".to_string(),
            AppError::Config(msg) => format!("Configuration error: {}", msg),
            _ => "Internal server error".to_string(),
        }
    }

    /// Get error code for programmatic error handling
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Connection(_) => "CONNECTION_ERROR",
            AppError::Publish(_) => "PUBLISH_ERROR",
            AppError::Consumption(_) => "CONSUMPTION_ERROR",
            AppError::Processing(_) => "PROCESSING_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Json(_) => "JSON_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
        }
    }

    /// Log this error with appropriate level and context
    pub fn log(&self) {
        let status = self.status_code();
        let code = self.error_code();

        if status.is_server_error() {
            tracing::error!(
                error = %self,
                error_code = %code,
                status = %status.as_u16(),
                "Server error occurred"
            );
        } else {
            tracing::debug!(
                error = %self,
                error_code = %code,
                "Client error occurred"
            );
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        self.log();

        let status = self.status_code();
        let error_code = self.error_code();

        // Server errors never expose internal details to the client
        let response_body = if status.is_server_error() {
            json!({
                "error": "Internal server error",
                "error_code": error_code,
                "status": status.as_u16(),
            })
        } else {
            json!({
                "error": self.user_message(),
                "error_code": error_code,
                "status": status.as_u16(),
            })
        };

        (status, axum::Json(response_body)).into_response()
    }
}

// ============================================================================
// Helper functions for creating common errors
// ============================================================================

impl AppError {
    /// Create a broker connection error
    pub fn connection(msg: impl Into<String>) -> Self {
        AppError::Connection(msg.into())
    }

    /// Create a publish error
    pub fn publish(msg: impl Into<String>) -> Self {
        AppError::Publish(msg.into())
    }

    /// Create a consumption error
    pub fn consumption(msg: impl Into<String>) -> Self {
        AppError::Consumption(msg.into())
    }

    /// Create a processing error
    pub fn processing(msg: impl Into<String>) -> Self {
        AppError::Processing(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broker_failures_map_to_server_errors() {
        assert_eq!(
            AppError::connection("unreachable").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::publish("delivery timeout").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn malformed_input_maps_to_bad_request() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert_eq!(AppError::from(json_err).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::validation("customer_name is required").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn server_errors_do_not_leak_details() {
        let msg = AppError::publish("broker at 10.0.0.3 rejected batch").user_message();
        assert!(!msg.contains("10.0.0.3"));
    }
}

//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Gateway client failed to initialize
    #[error("Configuration error: {0}")]
    Config(String),

    /// Gateway rejected the request
    #[error("Gateway error: {0}")]
    Gateway(String),
}

impl PaymentError {
    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            PaymentError::Config(_) => "Payment service is not configured.",
            PaymentError::Gateway(_) => "Failed to initiate payment. Please try again.",
        }
    }
}

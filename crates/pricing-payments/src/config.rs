//! Gateway Configuration

use serde::{Deserialize, Serialize};

use crate::error::{PaymentError, Result};

/// Demo publishable key, standing in for a real processor key
pub const DEMO_PUBLISHABLE_KEY: &str = "pk_test_your_public_key";

/// Client-side gateway configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Publishable key handed to the processor's browser SDK
    pub publishable_key: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            publishable_key: DEMO_PUBLISHABLE_KEY.into(),
        }
    }
}

impl GatewayConfig {
    pub fn new(publishable_key: impl Into<String>) -> Self {
        Self {
            publishable_key: publishable_key.into(),
        }
    }

    /// Reject configs a real SDK could not initialize with
    pub fn validate(&self) -> Result<()> {
        if self.publishable_key.trim().is_empty() {
            return Err(PaymentError::Config("publishable key not set".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GatewayConfig::default().validate().is_ok());
        assert_eq!(GatewayConfig::default().publishable_key, DEMO_PUBLISHABLE_KEY);
    }

    #[test]
    fn test_blank_key_is_rejected() {
        assert!(GatewayConfig::new("  ").validate().is_err());
    }
}

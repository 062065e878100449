//! Domain model for a rental property's pricing inputs.
use serde::{Deserialize, Serialize};

/// Currency used when a property does not specify one
pub const DEFAULT_CURRENCY: &str = "XAF";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub base_price: f64,
    #[serde(default)]
    pub cleaning_fee: f64,
    #[serde(default)]
    pub service_fee: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Property {
    /// Check the host-facing rules for a property that is about to be saved
    pub fn validate(&self) -> Result<(), PropertyValidationError> {
        if self.id.trim().is_empty() {
            return Err(PropertyValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(PropertyValidationError::EmptyTitle);
        }
        if !self.base_price.is_finite() || self.base_price <= 0.0 {
            return Err(PropertyValidationError::NonPositiveBasePrice);
        }
        for fee in [self.cleaning_fee, self.service_fee] {
            if !fee.is_finite() || fee < 0.0 {
                return Err(PropertyValidationError::NegativeFee);
            }
        }
        if self.currency.trim().is_empty() {
            return Err(PropertyValidationError::EmptyCurrency);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropertyValidationError {
    #[error("Property ID cannot be empty")]
    EmptyId,
    #[error("Property title cannot be empty")]
    EmptyTitle,
    #[error("Base price must be positive")]
    NonPositiveBasePrice,
    #[error("Fees cannot be negative")]
    NegativeFee,
    #[error("Currency cannot be empty")]
    EmptyCurrency,
}

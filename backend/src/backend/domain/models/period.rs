//! Domain model for a host-authored availability period.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of the free-text notes a host can attach to a period
pub const MAX_NOTES_LENGTH: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityPeriod {
    pub id: String,
    pub property_id: String,
    /// First day covered (inclusive)
    pub start_date: NaiveDate,
    /// Last day covered (inclusive)
    pub end_date: NaiveDate,
    pub is_available: bool,
    pub special_price: Option<f64>,
    pub notes: Option<String>,
}

impl AvailabilityPeriod {
    pub fn generate_id() -> String {
        format!("period::{}", Uuid::new_v4())
    }

    /// True when `date` falls inside [start_date, end_date]
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Check the host-facing rules for a period that is about to be saved
    pub fn validate(&self, today: NaiveDate) -> Result<(), PeriodValidationError> {
        if self.end_date < self.start_date {
            return Err(PeriodValidationError::EndBeforeStart);
        }
        if let Some(price) = self.special_price {
            if !price.is_finite() || price <= 0.0 {
                return Err(PeriodValidationError::NonPositiveSpecialPrice);
            }
        }
        if let Some(notes) = &self.notes {
            if notes.chars().count() > MAX_NOTES_LENGTH {
                return Err(PeriodValidationError::NotesTooLong);
            }
        }
        if self.end_date < today {
            return Err(PeriodValidationError::EntirelyInPast);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PeriodValidationError {
    #[error("End date must not be before start date")]
    EndBeforeStart,
    #[error("Special price must be positive")]
    NonPositiveSpecialPrice,
    #[error("Notes cannot exceed {} characters", MAX_NOTES_LENGTH)]
    NotesTooLong,
    #[error("Period lies entirely in the past")]
    EntirelyInPast,
}

//! JSON bodies exchanged with the marketplace API (camelCase on the wire).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::backend::domain::models::period::AvailabilityPeriod;
use crate::backend::domain::models::property::{Property, DEFAULT_CURRENCY};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteProperty {
    pub id: String,
    pub title: String,
    pub base_price: f64,
    #[serde(default)]
    pub cleaning_fee: f64,
    #[serde(default)]
    pub service_fee: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePeriod {
    pub id: String,
    pub property_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_available: bool,
    #[serde(default)]
    pub special_price: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<RemoteProperty> for Property {
    fn from(remote: RemoteProperty) -> Self {
        Self {
            id: remote.id,
            title: remote.title,
            base_price: remote.base_price,
            cleaning_fee: remote.cleaning_fee,
            service_fee: remote.service_fee,
            currency: remote
                .currency
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        }
    }
}

impl From<&Property> for RemoteProperty {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id.clone(),
            title: property.title.clone(),
            base_price: property.base_price,
            cleaning_fee: property.cleaning_fee,
            service_fee: property.service_fee,
            currency: Some(property.currency.clone()),
        }
    }
}

impl From<RemotePeriod> for AvailabilityPeriod {
    fn from(remote: RemotePeriod) -> Self {
        Self {
            id: remote.id,
            property_id: remote.property_id,
            start_date: remote.start_date,
            end_date: remote.end_date,
            is_available: remote.is_available,
            special_price: remote.special_price,
            notes: remote.notes,
        }
    }
}

impl From<&AvailabilityPeriod> for RemotePeriod {
    fn from(period: &AvailabilityPeriod) -> Self {
        Self {
            id: period.id.clone(),
            property_id: period.property_id.clone(),
            start_date: period.start_date,
            end_date: period.end_date,
            is_available: period.is_available,
            special_price: period.special_price,
            notes: period.notes.clone(),
        }
    }
}

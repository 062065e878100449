//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;

use crate::backend::domain::models::period::AvailabilityPeriod;
use crate::backend::domain::models::property::Property;

/// Trait defining the interface for property storage operations
#[async_trait]
pub trait PropertyStorage: Send + Sync {
    /// Store or replace a property
    async fn store_property(&self, property: &Property) -> Result<()>;

    /// Retrieve a specific property by ID
    async fn get_property(&self, property_id: &str) -> Result<Option<Property>>;
}

/// Trait defining the interface for availability period storage operations
///
/// Periods are returned in the order they were stored. The resolver relies on
/// that order to break ties between overlapping periods.
#[async_trait]
pub trait AvailabilityStorage: Send + Sync {
    /// List all periods of a property, oldest first
    async fn list_periods(&self, property_id: &str) -> Result<Vec<AvailabilityPeriod>>;

    /// Retrieve a specific period by ID
    async fn get_period(&self, property_id: &str, period_id: &str) -> Result<Option<AvailabilityPeriod>>;

    /// Append a new period
    async fn store_period(&self, period: &AvailabilityPeriod) -> Result<()>;

    /// Replace an existing period in place.
    /// Returns false if no period with that ID exists.
    async fn update_period(&self, period: &AvailabilityPeriod) -> Result<bool>;

    /// Delete a period.
    /// Returns true if the period was found and deleted, false otherwise.
    async fn delete_period(&self, property_id: &str, period_id: &str) -> Result<bool>;
}

/// Trait defining the interface for storage connections
///
/// This trait abstracts away the specific connection type (CSV files, remote
/// API, etc.) and provides factory methods for creating repositories.
pub trait Connection: Send + Sync + Clone {
    /// The type of PropertyStorage this connection creates
    type PropertyRepository: PropertyStorage + 'static;

    /// The type of AvailabilityStorage this connection creates
    type AvailabilityRepository: AvailabilityStorage + 'static;

    fn create_property_repository(&self) -> Self::PropertyRepository;

    fn create_availability_repository(&self) -> Self::AvailabilityRepository;
}

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info};

use super::connection::{found, RemoteApiConnection};
use super::wire::RemotePeriod;
use crate::backend::domain::models::period::AvailabilityPeriod;
use crate::backend::storage::AvailabilityStorage;

/// Availability periods held by the marketplace API.
///
/// The API returns periods in the order they were created.
#[derive(Clone)]
pub struct RemoteAvailabilityRepository {
    connection: RemoteApiConnection,
}

impl RemoteAvailabilityRepository {
    pub fn new(connection: RemoteApiConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl AvailabilityStorage for RemoteAvailabilityRepository {
    async fn list_periods(&self, property_id: &str) -> Result<Vec<AvailabilityPeriod>> {
        let url = self.connection.property_url(&[property_id, "availability"])?;
        let response = self
            .connection
            .client()
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        let Some(response) = found(response)? else {
            debug!("Remote API has no availability for '{}'", property_id);
            return Ok(Vec::new());
        };

        let periods: Vec<RemotePeriod> = response
            .json()
            .await
            .with_context(|| format!("Malformed availability body from {}", url))?;
        Ok(periods.into_iter().map(AvailabilityPeriod::from).collect())
    }

    async fn get_period(&self, property_id: &str, period_id: &str) -> Result<Option<AvailabilityPeriod>> {
        let periods = self.list_periods(property_id).await?;
        Ok(periods.into_iter().find(|p| p.id == period_id))
    }

    async fn store_period(&self, period: &AvailabilityPeriod) -> Result<()> {
        let url = self.connection.property_url(&[&period.property_id, "availability"])?;
        let response = self
            .connection
            .client()
            .post(url.clone())
            .json(&RemotePeriod::from(period))
            .send()
            .await
            .with_context(|| format!("POST {} failed", url))?;

        response
            .error_for_status()
            .with_context(|| format!("Remote API rejected period {}", period.id))?;

        info!("Stored availability period {} remotely", period.id);
        Ok(())
    }

    async fn update_period(&self, period: &AvailabilityPeriod) -> Result<bool> {
        let url = self
            .connection
            .property_url(&[&period.property_id, "availability", &period.id])?;
        let response = self
            .connection
            .client()
            .put(url.clone())
            .json(&RemotePeriod::from(period))
            .send()
            .await
            .with_context(|| format!("PUT {} failed", url))?;

        Ok(found(response)?.is_some())
    }

    async fn delete_period(&self, property_id: &str, period_id: &str) -> Result<bool> {
        let url = self
            .connection
            .property_url(&[property_id, "availability", period_id])?;
        let response = self
            .connection
            .client()
            .delete(url.clone())
            .send()
            .await
            .with_context(|| format!("DELETE {} failed", url))?;

        Ok(found(response)?.is_some())
    }
}

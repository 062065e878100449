use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::connection::{found, RemoteApiConnection};
use super::wire::RemoteProperty;
use crate::backend::domain::models::property::Property;
use crate::backend::storage::PropertyStorage;

#[derive(Clone)]
pub struct RemotePropertyRepository {
    connection: RemoteApiConnection,
}

impl RemotePropertyRepository {
    pub fn new(connection: RemoteApiConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl PropertyStorage for RemotePropertyRepository {
    async fn store_property(&self, property: &Property) -> Result<()> {
        let url = self.connection.property_url(&[&property.id])?;
        let response = self
            .connection
            .client()
            .put(url.clone())
            .json(&RemoteProperty::from(property))
            .send()
            .await
            .with_context(|| format!("PUT {} failed", url))?;

        response
            .error_for_status()
            .with_context(|| format!("Remote API rejected property {}", property.id))?;
        Ok(())
    }

    async fn get_property(&self, property_id: &str) -> Result<Option<Property>> {
        let url = self.connection.property_url(&[property_id])?;
        let response = self
            .connection
            .client()
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        let Some(response) = found(response)? else {
            debug!("Remote API has no property '{}'", property_id);
            return Ok(None);
        };

        let remote: RemoteProperty = response
            .json()
            .await
            .with_context(|| format!("Malformed property body from {}", url))?;
        Ok(Some(remote.into()))
    }
}

//! # CSV Property Repository
//!
//! Stores each property's pricing inputs as YAML in
//! `{property_directory}/property.yaml`.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::fs;
use tracing::debug;

use super::connection::CsvConnection;
use crate::backend::domain::models::property::Property;
use crate::backend::storage::PropertyStorage;

#[derive(Clone)]
pub struct PropertyRepository {
    connection: CsvConnection,
}

impl PropertyRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl PropertyStorage for PropertyRepository {
    async fn store_property(&self, property: &Property) -> Result<()> {
        let _guard = self.connection.lock_for_write().await;
        self.connection.ensure_property_directory_exists(&property.id)?;

        let yaml_path = self.connection.get_property_file_path(&property.id);
        let yaml_content = serde_yaml::to_string(property)?;

        // Atomic write: temp file, then rename
        let temp_path = yaml_path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, &yaml_path)?;

        debug!("Saved property {} to {:?}", property.id, yaml_path);
        Ok(())
    }

    async fn get_property(&self, property_id: &str) -> Result<Option<Property>> {
        let yaml_path = self.connection.get_property_file_path(property_id);

        if !yaml_path.exists() {
            debug!("No property file for '{}'", property_id);
            return Ok(None);
        }

        let yaml_content = fs::read_to_string(&yaml_path)?;
        let property: Property = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Malformed property file {}", yaml_path.display()))?;

        if property.id != property_id {
            bail!(
                "Property file {} holds '{}', expected '{}'",
                yaml_path.display(),
                property.id,
                property_id
            );
        }
        Ok(Some(property))
    }
}

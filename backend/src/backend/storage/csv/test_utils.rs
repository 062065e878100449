//! Shared test fixtures for the CSV storage layer and the services built on it.

use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;

use super::connection::CsvConnection;
use crate::backend::domain::models::property::Property;
use crate::backend::storage::{Connection, PropertyStorage};

/// Test environment backed by a temporary data directory.
/// The directory is removed when the environment is dropped.
pub struct TestEnvironment {
    pub connection: CsvConnection,
    pub base_path: PathBuf,
    _temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = CsvConnection::new(&base_path)?;

        Ok(Self {
            connection,
            base_path,
            _temp_dir: temp_dir,
        })
    }

    /// Environment with one stored property: 5,000 cleaning fee, 2,000 service fee, XAF
    pub async fn with_property(property_id: &str, base_price: f64) -> Result<Self> {
        let env = Self::new()?;
        env.connection
            .create_property_repository()
            .store_property(&Property {
                id: property_id.to_string(),
                title: format!("Test property {}", property_id),
                base_price,
                cleaning_fee: 5_000.0,
                service_fee: 2_000.0,
                currency: "XAF".to_string(),
            })
            .await?;
        Ok(env)
    }
}

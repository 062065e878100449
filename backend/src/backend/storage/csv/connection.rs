use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::backend::storage::traits::Connection;

/// Header of every `availability.csv` file
pub const AVAILABILITY_CSV_HEADER: [&str; 7] = [
    "id",
    "property_id",
    "start_date",
    "end_date",
    "is_available",
    "special_price",
    "notes",
];

/// CsvConnection manages the data directory layout:
///
/// ```text
/// data/
/// └── {property_id}/
///     ├── property.yaml
///     └── availability.csv
/// ```
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
    /// Serializes read-modify-write cycles on the data files
    write_lock: Arc<Mutex<()>>,
}

impl CsvConnection {
    /// Create a new CSV connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {}", base_path.display()))?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Default data directory, e.g. `~/.local/share/rental-availability` on Linux
    pub fn get_default_data_directory() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine platform data directory"))?;
        Ok(data_dir.join("rental-availability"))
    }

    /// Directory name for a property.
    ///
    /// Lowercase ASCII letters, digits, `-` and `_` are kept; every other byte
    /// is written as `%XX`. Distinct ids always get distinct names, even on
    /// case-insensitive filesystems. The empty id maps to `%`.
    pub fn generate_safe_directory_name(property_id: &str) -> String {
        if property_id.is_empty() {
            return "%".to_string();
        }

        let mut safe = String::with_capacity(property_id.len());
        for byte in property_id.bytes() {
            match byte {
                b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' => safe.push(char::from(byte)),
                _ => safe.push_str(&format!("%{:02X}", byte)),
            }
        }
        safe
    }

    /// Get the directory holding a property's data files
    pub fn get_property_directory(&self, property_id: &str) -> PathBuf {
        self.base_directory
            .join(Self::generate_safe_directory_name(property_id))
    }

    pub fn get_property_file_path(&self, property_id: &str) -> PathBuf {
        self.get_property_directory(property_id).join("property.yaml")
    }

    pub fn get_availability_file_path(&self, property_id: &str) -> PathBuf {
        self.get_property_directory(property_id).join("availability.csv")
    }

    /// Ensure the property directory exists
    pub fn ensure_property_directory_exists(&self, property_id: &str) -> Result<PathBuf> {
        let property_dir = self.get_property_directory(property_id);
        if !property_dir.exists() {
            fs::create_dir_all(&property_dir)?;
            info!("Created property directory: {}", property_dir.display());
        }
        Ok(property_dir)
    }

    /// Ensure an availability CSV file exists with the proper header
    pub fn ensure_availability_file_exists(&self, property_id: &str) -> Result<()> {
        self.ensure_property_directory_exists(property_id)?;

        let file_path = self.get_availability_file_path(property_id);
        if !file_path.exists() {
            let header = format!("{}\n", AVAILABILITY_CSV_HEADER.join(","));
            fs::write(&file_path, header)?;
        }

        Ok(())
    }

    /// Hold this guard across a read-modify-write of a data file
    pub async fn lock_for_write(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}

impl Connection for CsvConnection {
    type PropertyRepository = super::property_repository::PropertyRepository;
    type AvailabilityRepository = super::availability_repository::AvailabilityRepository;

    fn create_property_repository(&self) -> Self::PropertyRepository {
        super::property_repository::PropertyRepository::new(self.clone())
    }

    fn create_availability_repository(&self) -> Self::AvailabilityRepository {
        super::availability_repository::AvailabilityRepository::new(self.clone())
    }
}

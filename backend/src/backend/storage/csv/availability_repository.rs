//! # CSV Availability Repository
//!
//! Host-authored availability periods live in `{property_directory}/availability.csv`,
//! one row per period, in the order they were authored. Writes go through a
//! temp file and a rename so a crash never leaves a half-written file.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use tracing::{debug, info, warn};

use super::connection::{CsvConnection, AVAILABILITY_CSV_HEADER};
use crate::backend::domain::models::period::AvailabilityPeriod;
use crate::backend::storage::AvailabilityStorage;

/// One row of `availability.csv`
#[derive(Debug, Serialize, Deserialize)]
struct PeriodRecord {
    id: String,
    property_id: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    is_available: bool,
    special_price: Option<f64>,
    notes: Option<String>,
}

impl From<PeriodRecord> for AvailabilityPeriod {
    fn from(record: PeriodRecord) -> Self {
        Self {
            id: record.id,
            property_id: record.property_id,
            start_date: record.start_date,
            end_date: record.end_date,
            is_available: record.is_available,
            special_price: record.special_price,
            notes: record.notes,
        }
    }
}

impl From<&AvailabilityPeriod> for PeriodRecord {
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

/// CSV-based availability period repository
#[derive(Clone)]
pub struct AvailabilityRepository {
    connection: CsvConnection,
}

impl AvailabilityRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read all periods of a property from its CSV file.
    ///
    /// Rows naming another property are skipped.
    fn read_periods(&self, property_id: &str) -> Result<Vec<AvailabilityPeriod>> {
        let file_path = self.connection.get_availability_file_path(property_id);
        if !file_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&file_path)?;
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let mut periods = Vec::new();
        for result in csv_reader.deserialize::<PeriodRecord>() {
            let record = result?;
            if record.property_id != property_id {
                warn!(
                    "Skipping period {} in {}: it belongs to property '{}'",
                    record.id,
                    file_path.display(),
                    record.property_id
                );
                continue;
            }
            periods.push(record.into());
        }

        Ok(periods)
    }

    /// Rewrite a property's CSV file with the given periods
    fn write_periods(&self, property_id: &str, periods: &[AvailabilityPeriod]) -> Result<()> {
        self.connection.ensure_availability_file_exists(property_id)?;
        let file_path = self.connection.get_availability_file_path(property_id);
        let temp_path = file_path.with_extension("tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;

            let mut csv_writer = WriterBuilder::new()
                .has_headers(false)
                .from_writer(BufWriter::new(file));

            csv_writer.write_record(AVAILABILITY_CSV_HEADER)?;
            for period in periods {
                csv_writer.serialize(PeriodRecord::from(period))?;
            }
            csv_writer.flush()?;
        }

        std::fs::rename(&temp_path, &file_path)?;
        debug!("Wrote {} periods for property {}", periods.len(), property_id);
        Ok(())
    }
}

#[async_trait]
impl AvailabilityStorage for AvailabilityRepository {
    async fn list_periods(&self, property_id: &str) -> Result<Vec<AvailabilityPeriod>> {
        self.read_periods(property_id)
    }

    async fn get_period(&self, property_id: &str, period_id: &str) -> Result<Option<AvailabilityPeriod>> {
        let periods = self.read_periods(property_id)?;
        Ok(periods.into_iter().find(|p| p.id == period_id))
    }

    async fn store_period(&self, period: &AvailabilityPeriod) -> Result<()> {
        let _guard = self.connection.lock_for_write().await;

        let mut periods = self.read_periods(&period.property_id)?;
        periods.push(period.clone());
        self.write_periods(&period.property_id, &periods)?;

        info!("Stored availability period {} for property {}", period.id, period.property_id);
        Ok(())
    }

    async fn update_period(&self, period: &AvailabilityPeriod) -> Result<bool> {
        let _guard = self.connection.lock_for_write().await;

        let mut periods = self.read_periods(&period.property_id)?;
        match periods.iter_mut().find(|p| p.id == period.id) {
            Some(existing) => *existing = period.clone(),
            None => return Ok(false),
        }

        self.write_periods(&period.property_id, &periods)?;
        Ok(true)
    }

    async fn delete_period(&self, property_id: &str, period_id: &str) -> Result<bool> {
        let _guard = self.connection.lock_for_write().await;

        let mut periods = self.read_periods(property_id)?;
        let original_len = periods.len();
        periods.retain(|p| p.id != period_id);

        if periods.len() == original_len {
            return Ok(false);
        }

        self.write_periods(property_id, &periods)?;
        info!("Deleted availability period {} for property {}", period_id, property_id);
        Ok(true)
    }
}

//! Availability service for the booking calendar and the host availability manager.
//!
//! Orchestrates property and period retrieval from storage with the pure
//! calendar, resolver, selector and pricing logic.
//!
//! ## Key Responsibilities
//!
//! - **Calendar Months**: 42-day grids resolved against a property's periods
//! - **Range Selection**: applying a click to the client's current selection
//! - **Quotes**: nights and totals for a selected stay
//! - **Availability Manager**: host CRUD on availability periods
//! - **Properties**: host upsert of a property's prices and fees
//!
//! ## Business Rules
//!
//! - Periods must end on or after the day they start
//! - Special prices must be positive
//! - Notes are limited to 500 characters
//! - Periods lying entirely in the past cannot be saved
//! - Past days are never selectable and never charged

use chrono::NaiveDate;
use shared::{CalendarMonthView, DateRange, PriceQuote, YearMonth};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::backend::domain::availability::AvailabilityResolver;
use crate::backend::domain::calendar::{normalize_year_month, CalendarService};
use crate::backend::domain::commands::availability::{CreatePeriodCommand, UpdatePeriodCommand};
use crate::backend::domain::commands::property::UpsertPropertyCommand;
use crate::backend::domain::models::period::{AvailabilityPeriod, PeriodValidationError};
use crate::backend::domain::models::property::{Property, PropertyValidationError, DEFAULT_CURRENCY};
use crate::backend::domain::pricing::PriceTotalizer;
use crate::backend::domain::range_selector::RangeSelector;
use crate::backend::storage::{AvailabilityStorage, Connection, PropertyStorage};

#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    #[error("Property not found: {0}")]
    PropertyNotFound(String),
    #[error("Availability period not found: {0}")]
    PeriodNotFound(String),
    #[error("Invalid availability period: {0}")]
    InvalidPeriod(#[from] PeriodValidationError),
    #[error("Invalid property: {0}")]
    InvalidProperty(#[from] PropertyValidationError),
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type AvailabilityResult<T> = std::result::Result<T, AvailabilityError>;

#[derive(Clone)]
pub struct AvailabilityService {
    property_storage: Arc<dyn PropertyStorage>,
    availability_storage: Arc<dyn AvailabilityStorage>,
    calendar_service: CalendarService,
    resolver: AvailabilityResolver,
    totalizer: PriceTotalizer,
}

impl AvailabilityService {
    pub fn new<C: Connection>(connection: &C, calendar_service: CalendarService) -> Self {
        Self {
            property_storage: Arc::new(connection.create_property_repository()),
            availability_storage: Arc::new(connection.create_availability_repository()),
            calendar_service,
            resolver: AvailabilityResolver::new(),
            totalizer: PriceTotalizer::new(),
        }
    }

    /// Load a property or fail with `PropertyNotFound`
    pub async fn get_property(&self, property_id: &str) -> AvailabilityResult<Property> {
        self.property_storage
            .get_property(property_id)
            .await?
            .ok_or_else(|| AvailabilityError::PropertyNotFound(property_id.to_string()))
    }

    /// Validate and store a property, replacing any previous version
    pub async fn upsert_property(&self, command: UpsertPropertyCommand) -> AvailabilityResult<Property> {
        let property = Property {
            id: command.property_id,
            title: command.title.trim().to_string(),
            base_price: command.base_price,
            cleaning_fee: command.cleaning_fee,
            service_fee: command.service_fee,
            currency: command
                .currency
                .map(|c| c.trim().to_uppercase())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        };

        if let Err(e) = property.validate() {
            warn!("Rejected property {}: {}", property.id, e);
            return Err(e.into());
        }

        self.property_storage.store_property(&property).await?;
        info!("Saved property {} ({} {} per night)", property.id, property.base_price, property.currency);
        Ok(property)
    }

    async fn property_with_periods(
        &self,
        property_id: &str,
    ) -> AvailabilityResult<(Property, Vec<AvailabilityPeriod>)> {
        let property = self.get_property(property_id).await?;
        let periods = self.availability_storage.list_periods(property_id).await?;
        debug!("Loaded {} availability periods for property {}", periods.len(), property_id);
        Ok((property, periods))
    }

    /// Resolve the 42-day calendar grid of a month for a property
    pub async fn get_calendar_month(
        &self,
        property_id: &str,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> AvailabilityResult<CalendarMonthView> {
        info!("🗓️ Building calendar for property {} ({}/{})", property_id, month, year);

        let (property, periods) = self.property_with_periods(property_id).await?;
        let (year, month) = normalize_year_month(year, month);

        let dates = self.calendar_service.grid_dates(year, month);
        let days = self.resolver.resolve_month_grid(
            &dates,
            year,
            month,
            property.base_price,
            &periods,
            today,
        );
        let summary = self.resolver.summarize_month(&days);
        let shown = YearMonth { year, month };

        Ok(CalendarMonthView {
            property_id: property.id,
            year,
            month,
            month_name: self.calendar_service.month_name(month).to_string(),
            week_start: self.calendar_service.week_start(),
            days,
            summary,
            previous: self.calendar_service.previous_month(shown),
            next: self.calendar_service.next_month(shown),
        })
    }

    /// Apply a click on `clicked` to the client's current selection
    pub async fn select_range(
        &self,
        property_id: &str,
        current: DateRange,
        clicked: NaiveDate,
        today: NaiveDate,
    ) -> AvailabilityResult<DateRange> {
        let (property, periods) = self.property_with_periods(property_id).await?;
        let day = self.resolver.resolve_day(clicked, property.base_price, &periods, today);

        let mut selector = RangeSelector::from(current);
        let range = selector.click(&day);
        debug!("Selection for property {} after click on {}: {:?}", property_id, clicked, range);
        Ok(range)
    }

    /// Price a selected stay
    pub async fn quote(
        &self,
        property_id: &str,
        range: DateRange,
        today: NaiveDate,
    ) -> AvailabilityResult<PriceQuote> {
        let (property, periods) = self.property_with_periods(property_id).await?;
        let quote = self.totalizer.compute_total(&range, &property, &periods, today);
        info!(
            "💰 Quote for property {}: {} nights, total {}",
            property_id, quote.nights, quote.formatted_total
        );
        Ok(quote)
    }

    /// List the host's periods for a property, in authoring order
    pub async fn list_periods(&self, property_id: &str) -> AvailabilityResult<Vec<AvailabilityPeriod>> {
        let (_, periods) = self.property_with_periods(property_id).await?;
        Ok(periods)
    }

    /// Validate and store a new period
    pub async fn create_period(
        &self,
        command: CreatePeriodCommand,
        today: NaiveDate,
    ) -> AvailabilityResult<AvailabilityPeriod> {
        self.get_property(&command.property_id).await?;

        let period = AvailabilityPeriod {
            id: AvailabilityPeriod::generate_id(),
            property_id: command.property_id,
            start_date: command.start_date,
            end_date: command.end_date,
            is_available: command.is_available,
            special_price: command.special_price,
            notes: normalize_notes(command.notes),
        };

        if let Err(e) = period.validate(today) {
            warn!("Rejected availability period for property {}: {}", period.property_id, e);
            return Err(e.into());
        }

        self.availability_storage.store_period(&period).await?;
        info!(
            "Created availability period {} for property {} ({} to {})",
            period.id, period.property_id, period.start_date, period.end_date
        );
        Ok(period)
    }

    /// Validate and replace an existing period, keeping its position in the list
    pub async fn update_period(
        &self,
        command: UpdatePeriodCommand,
        today: NaiveDate,
    ) -> AvailabilityResult<AvailabilityPeriod> {
        self.get_property(&command.property_id).await?;

        if self
            .availability_storage
            .get_period(&command.property_id, &command.period_id)
            .await?
            .is_none()
        {
            return Err(AvailabilityError::PeriodNotFound(command.period_id));
        }

        let period = AvailabilityPeriod {
            id: command.period_id,
            property_id: command.property_id,
            start_date: command.start_date,
            end_date: command.end_date,
            is_available: command.is_available,
            special_price: command.special_price,
            notes: normalize_notes(command.notes),
        };

        period.validate(today)?;

        if !self.availability_storage.update_period(&period).await? {
            return Err(AvailabilityError::PeriodNotFound(period.id));
        }

        info!("Updated availability period {} for property {}", period.id, period.property_id);
        Ok(period)
    }

    pub async fn delete_period(&self, property_id: &str, period_id: &str) -> AvailabilityResult<()> {
        self.get_property(property_id).await?;

        if !self.availability_storage.delete_period(property_id, period_id).await? {
            return Err(AvailabilityError::PeriodNotFound(period_id.to_string()));
        }

        info!("Deleted availability period {} from property {}", period_id, property_id);
        Ok(())
    }
}

/// Blank notes are stored as no notes
fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single cell of the booking calendar, resolved against a property's
/// base price and its host-defined availability periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityDay {
    pub date: NaiveDate,
    /// Selectable for booking. Always false for past days.
    pub is_available: bool,
    pub is_past: bool,
    pub is_today: bool,
    /// Price comes from a period's special price instead of the base price
    pub is_special_price: bool,
    /// Nightly price in the property's currency
    pub price: f64,
    /// False for the leading/trailing days borrowed from adjacent months
    pub is_current_month: bool,
}

/// Host-authored override of availability and/or price over an inclusive date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityPeriod {
    pub id: String,
    pub property_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_available: bool,
    pub special_price: Option<f64>,
    pub notes: Option<String>,
}

/// Transient check-in/check-out selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a complete range, swapping the ends if needed so start <= end
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        let (start, end) = if b < a { (b, a) } else { (a, b) };
        Self {
            start_date: Some(start),
            end_date: Some(end),
        }
    }
}

/// Rental property as seen by the availability engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    /// Nightly price when no availability period overrides it
    pub base_price: f64,
    pub cleaning_fee: f64,
    pub service_fee: f64,
    /// ISO 4217 code, e.g. "XAF"
    pub currency: String,
}

/// First column of the calendar grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Offset of the week start from Sunday (0 = Sunday, 1 = Monday)
    pub fn days_from_sunday(&self) -> u32 {
        match self {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Sunday => write!(f, "sunday"),
            WeekStart::Monday => write!(f, "monday"),
        }
    }
}

impl FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            other => Err(format!("Invalid week start: '{}'. Expected 'sunday' or 'monday'", other)),
        }
    }
}

/// Counts of the days that belong to the displayed month, for the host dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthAvailabilitySummary {
    pub available_days: u32,
    pub blocked_days: u32,
    pub special_price_days: u32,
    pub past_days: u32,
}

/// A month of the booking calendar: always 42 days (6 weeks x 7 days)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMonthView {
    pub property_id: String,
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub week_start: WeekStart,
    pub days: Vec<AvailabilityDay>,
    pub summary: MonthAvailabilitySummary,
    /// Months the client navigates to; the server keeps no current month
    pub previous: YearMonth,
    pub next: YearMonth,
}

/// Nights and price totals for a selected range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub property_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Available nights inside [start_date, end_date)
    pub nights: u32,
    pub nightly_subtotal: f64,
    pub cleaning_fee: f64,
    pub service_fee: f64,
    pub total: f64,
    pub currency: String,
    /// False when there is nothing to book; the UI disables its "Book" action
    pub can_book: bool,
    pub formatted_total: String,
}

/// Request to resolve a click on the booking calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectRangeRequest {
    /// Selection currently held by the client
    #[serde(default)]
    pub range: DateRange,
    pub clicked: NaiveDate,
}

/// Request to create a new availability period for a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAvailabilityPeriodRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_available: bool,
    pub special_price: Option<f64>,
    pub notes: Option<String>,
}

/// Request to replace an existing availability period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAvailabilityPeriodRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_available: bool,
    pub special_price: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityPeriodListResponse {
    pub property_id: String,
    pub periods: Vec<AvailabilityPeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteAvailabilityPeriodResponse {
    pub deleted_id: String,
    pub success_message: String,
}

/// A calendar month, used as the query of a month view and for navigation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

/// Host request to create or replace a property's pricing inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsertPropertyRequest {
    pub title: String,
    pub base_price: f64,
    #[serde(default)]
    pub cleaning_fee: f64,
    #[serde(default)]
    pub service_fee: f64,
    /// Defaults to XAF when omitted
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentDateResponse {
    pub month: u32,
    pub year: i32,
    pub day: u32,
    pub formatted_date: String, // e.g., "June 19, 2025"
    pub iso_date: String,       // e.g., "2025-06-19"
}

/// Error body returned by the REST layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

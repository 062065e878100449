//! Calendar domain logic for the booking calendar.
//!
//! This module owns the month arithmetic behind the booking calendar: the
//! fixed 6-week grid of dates shown for a month (including the leading and
//! trailing days borrowed from adjacent months) and month navigation. The
//! displayed month is held by the client; the service keeps no state besides
//! its week start. Availability and prices are layered on top of the
//! grid by the availability resolver; the UI only renders the result.

use chrono::{Datelike, Days, Local, NaiveDate};
use shared::{CurrentDateResponse, WeekStart, YearMonth};
use tracing::debug;

/// Number of cells in the calendar grid (6 rows x 7 columns)
pub const CALENDAR_GRID_DAYS: usize = 42;

/// Calendar service that handles all calendar-related business logic
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarService {
    /// Weekday shown in the first column of the grid
    week_start: WeekStart,
}

impl CalendarService {
    /// Create a new CalendarService with weeks starting on Sunday
    pub fn new() -> Self {
        Self::with_week_start(WeekStart::Sunday)
    }

    pub fn with_week_start(week_start: WeekStart) -> Self {
        Self { week_start }
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Today's date in the server's local time zone
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// Generate the 42 consecutive dates of the calendar grid for a month.
    ///
    /// The grid starts on the last `week_start` weekday on or before the 1st
    /// of the month and runs past the end of the month to fill six rows.
    /// Out-of-range months roll over (month 13 of 2025 is January 2026), so
    /// this never fails.
    pub fn grid_dates(&self, year: i32, month: u32) -> Vec<NaiveDate> {
        let (year, month) = normalize_year_month(year, month);
        let first = first_of_month(year, month);
        let leading = self.leading_days(first);

        debug!(
            "Generating calendar grid for {}/{}: {} leading days, week starts {}",
            month, year, leading, self.week_start
        );

        let grid_start = first
            .checked_sub_days(Days::new(u64::from(leading)))
            .unwrap_or(first);

        grid_start.iter_days().take(CALENDAR_GRID_DAYS).collect()
    }

    /// Number of cells before the 1st of the month in the first grid row
    fn leading_days(&self, first: NaiveDate) -> u32 {
        (first.weekday().num_days_from_sunday() + 7 - self.week_start.days_from_sunday()) % 7
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Format a date for human-readable display, e.g. "July 3, 2025"
    pub fn format_date_for_display(&self, date: NaiveDate) -> String {
        format!("{} {}, {}", self.month_name(date.month()), date.day(), date.year())
    }

    /// The month before `current`, rolling back over the year boundary
    pub fn previous_month(&self, current: YearMonth) -> YearMonth {
        if current.month <= 1 {
            YearMonth { year: current.year.saturating_sub(1), month: 12 }
        } else {
            YearMonth { year: current.year, month: current.month - 1 }
        }
    }

    /// The month after `current`, rolling over into the next year
    pub fn next_month(&self, current: YearMonth) -> YearMonth {
        if current.month >= 12 {
            YearMonth { year: current.year.saturating_add(1), month: 1 }
        } else {
            YearMonth { year: current.year, month: current.month + 1 }
        }
    }

    /// Get current date information
    pub fn get_current_date(&self) -> CurrentDateResponse {
        let today = self.today();

        CurrentDateResponse {
            month: today.month(),
            year: today.year(),
            day: today.day(),
            formatted_date: self.format_date_for_display(today),
            iso_date: today.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Roll an arbitrary (year, month) over into a real calendar month.
///
/// Month 0 is December of the previous year and month 13 is January of the
/// next one. Years are clamped to the range the date library can represent
/// with room for a full grid on either side.
pub fn normalize_year_month(year: i32, month: u32) -> (i32, u32) {
    let zero_based = i64::from(year) * 12 + i64::from(month) - 1;
    let min_year = i64::from(NaiveDate::MIN.year() + 1);
    let max_year = i64::from(NaiveDate::MAX.year() - 1);

    let normalized_year = zero_based.div_euclid(12).clamp(min_year, max_year);
    let normalized_month = zero_based.rem_euclid(12) as u32 + 1;

    (normalized_year as i32, normalized_month)
}

/// First day of an already normalized month
fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

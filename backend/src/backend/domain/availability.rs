//! Availability resolution for the booking calendar.
//!
//! Each day is resolved by overlaying the host's availability periods on the
//! property's base nightly price:
//!
//! - a day covered by a period takes that period's availability flag and,
//!   when set, its special price
//! - when several periods cover the same day, the last one in list order
//!   wins (storage keeps periods in the order they were authored)
//! - a day covered by no period is available at the base price
//! - a day before today is never available, whatever the periods say

use chrono::{Datelike, NaiveDate};
use shared::{AvailabilityDay, MonthAvailabilitySummary};

use crate::backend::domain::models::period::AvailabilityPeriod;

/// Stateless resolver turning dates into priced, selectable calendar days
#[derive(Clone, Default)]
pub struct AvailabilityResolver;

impl AvailabilityResolver {
    pub fn new() -> Self {
        Self
    }

    /// The period that decides a date: the last one covering it
    pub fn matching_period<'a>(
        &self,
        date: NaiveDate,
        periods: &'a [AvailabilityPeriod],
    ) -> Option<&'a AvailabilityPeriod> {
        periods.iter().rev().find(|period| period.covers(date))
    }

    /// Resolve a single day against the base price and the host's periods.
    ///
    /// A lone day belongs to no displayed month, so `is_current_month` is
    /// false; `resolve_month_grid` sets it for grid cells.
    pub fn resolve_day(
        &self,
        date: NaiveDate,
        base_price: f64,
        periods: &[AvailabilityPeriod],
        today: NaiveDate,
    ) -> AvailabilityDay {
        let (open, price, is_special_price) = match self.matching_period(date, periods) {
            Some(period) => (
                period.is_available,
                period.special_price.unwrap_or(base_price),
                period.special_price.is_some(),
            ),
            None => (true, base_price, false),
        };

        let is_past = date < today;

        AvailabilityDay {
            date,
            is_available: open && !is_past,
            is_past,
            is_today: date == today,
            is_special_price,
            price,
            is_current_month: false,
        }
    }

    /// Resolve the days of a calendar grid, flagging the cells that belong to
    /// `year`/`month` as the current month
    pub fn resolve_month_grid(
        &self,
        dates: &[NaiveDate],
        year: i32,
        month: u32,
        base_price: f64,
        periods: &[AvailabilityPeriod],
        today: NaiveDate,
    ) -> Vec<AvailabilityDay> {
        dates
            .iter()
            .map(|&date| AvailabilityDay {
                is_current_month: date.year() == year && date.month() == month,
                ..self.resolve_day(date, base_price, periods, today)
            })
            .collect()
    }

    /// Count the current-month days of a resolved grid by category.
    ///
    /// Past days are counted only as past. Special-price days are the
    /// bookable days priced by a period.
    pub fn summarize_month(&self, days: &[AvailabilityDay]) -> MonthAvailabilitySummary {
        days.iter()
            .filter(|day| day.is_current_month)
            .fold(MonthAvailabilitySummary::default(), |mut summary, day| {
                if day.is_past {
                    summary.past_days += 1;
                } else if day.is_available {
                    summary.available_days += 1;
                    if day.is_special_price {
                        summary.special_price_days += 1;
                    }
                } else {
                    summary.blocked_days += 1;
                }
                summary
            })
    }
}

//! Price totals for a selected stay.
//!
//! A stay over [start, end) is charged per night, but only for the nights
//! that resolve as available. Fixed cleaning and service fees are added once.
//! When nothing is bookable the quote is all zeros with `can_book == false`,
//! which the UI shows as a disabled "Book" button. Stays longer than
//! `MAX_STAY_NIGHTS` are not priced and get the same zero quote.

use chrono::NaiveDate;
use shared::{DateRange, PriceQuote};
use tracing::{debug, warn};

use crate::backend::domain::availability::AvailabilityResolver;
use crate::backend::domain::models::period::AvailabilityPeriod;
use crate::backend::domain::models::property::Property;

/// Longest stay that can be quoted
pub const MAX_STAY_NIGHTS: i64 = 365;

#[derive(Clone, Default)]
pub struct PriceTotalizer {
    resolver: AvailabilityResolver,
}

impl PriceTotalizer {
    pub fn new() -> Self {
        Self {
            resolver: AvailabilityResolver::new(),
        }
    }

    /// Compute nights and totals for a selected range
    pub fn compute_total(
        &self,
        range: &DateRange,
        property: &Property,
        periods: &[AvailabilityPeriod],
        today: NaiveDate,
    ) -> PriceQuote {
        let (nights, nightly_subtotal) = match (range.start_date, range.end_date) {
            (Some(start), Some(end)) if stay_length(start, end) > MAX_STAY_NIGHTS => {
                warn!(
                    "Refusing to quote {} nights for property {} (limit {})",
                    stay_length(start, end),
                    property.id,
                    MAX_STAY_NIGHTS
                );
                (0, 0.0)
            }
            (Some(start), Some(end)) => self.sum_available_nights(start, end, property, periods, today),
            _ => (0, 0.0),
        };

        debug!(
            "Quote for property {}: {} available nights, subtotal {}",
            property.id, nights, nightly_subtotal
        );

        if nights == 0 {
            return PriceQuote {
                property_id: property.id.clone(),
                start_date: range.start_date,
                end_date: range.end_date,
                nights: 0,
                nightly_subtotal: 0.0,
                cleaning_fee: 0.0,
                service_fee: 0.0,
                total: 0.0,
                currency: property.currency.clone(),
                can_book: false,
                formatted_total: format_price(0.0, &property.currency),
            };
        }

        let total = nightly_subtotal + property.cleaning_fee + property.service_fee;

        PriceQuote {
            property_id: property.id.clone(),
            start_date: range.start_date,
            end_date: range.end_date,
            nights,
            nightly_subtotal,
            cleaning_fee: property.cleaning_fee,
            service_fee: property.service_fee,
            total,
            currency: property.currency.clone(),
            can_book: true,
            formatted_total: format_price(total, &property.currency),
        }
    }

    /// Count and price the available nights in [start, end)
    fn sum_available_nights(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        property: &Property,
        periods: &[AvailabilityPeriod],
        today: NaiveDate,
    ) -> (u32, f64) {
        let (start, end) = if end < start { (end, start) } else { (start, end) };

        start
            .iter_days()
            .take_while(|night| *night < end)
            .map(|night| self.resolver.resolve_day(night, property.base_price, periods, today))
            .filter(|day| day.is_available)
            .fold((0, 0.0), |(nights, subtotal), day| (nights + 1, subtotal + day.price))
    }
}

/// Number of nights between two dates, in either order
fn stay_length(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days().abs()
}

/// Render a whole amount with thousands separators, e.g. "142,000 XAF"
pub fn format_price(amount: f64, currency: &str) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}{} {}", sign, grouped, currency)
}

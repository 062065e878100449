//! Two-click check-in/check-out selection for the booking calendar.
//!
//! The selection moves through three states:
//!
//! ```text
//! Empty --click--> PartialStart --click--> Complete --click--> PartialStart
//! ```
//!
//! The second click completes the range, swapping the ends when needed so the
//! earlier date is always the start. A third click starts over instead of
//! extending the range. Clicks on past or unavailable days are ignored in
//! every state.

use chrono::NaiveDate;
use shared::{AvailabilityDay, DateRange};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Empty,
    PartialStart(NaiveDate),
    Complete { start: NaiveDate, end: NaiveDate },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeSelector {
    state: SelectionState,
}

impl RangeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// The selection as a date range
    pub fn range(&self) -> DateRange {
        match self.state {
            SelectionState::Empty => DateRange::empty(),
            SelectionState::PartialStart(start) => DateRange {
                start_date: Some(start),
                end_date: None,
            },
            SelectionState::Complete { start, end } => DateRange {
                start_date: Some(start),
                end_date: Some(end),
            },
        }
    }

    pub fn reset(&mut self) {
        self.state = SelectionState::Empty;
    }

    /// Apply a click on a resolved calendar day and return the new selection
    pub fn click(&mut self, day: &AvailabilityDay) -> DateRange {
        if day.is_past || !day.is_available {
            debug!("Ignoring click on non-selectable day {}", day.date);
            return self.range();
        }

        self.state = match self.state {
            SelectionState::Empty | SelectionState::Complete { .. } => {
                SelectionState::PartialStart(day.date)
            }
            SelectionState::PartialStart(first) => {
                let (start, end) = if day.date < first {
                    (day.date, first)
                } else {
                    (first, day.date)
                };
                SelectionState::Complete { start, end }
            }
        };

        self.range()
    }
}

impl From<DateRange> for RangeSelector {
    /// Rebuild the selector from a range held by the client
    fn from(range: DateRange) -> Self {
        let state = match (range.start_date, range.end_date) {
            (None, None) => SelectionState::Empty,
            (Some(start), None) | (None, Some(start)) => SelectionState::PartialStart(start),
            (Some(a), Some(b)) => SelectionState::Complete {
                start: a.min(b),
                end: a.max(b),
            },
        };
        Self { state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open_day(date: NaiveDate) -> AvailabilityDay {
        AvailabilityDay {
            date,
            is_available: true,
            is_past: false,
            is_today: false,
            is_special_price: false,
            price: 45_000.0,
            is_current_month: true,
        }
    }

    fn blocked_day(date: NaiveDate) -> AvailabilityDay {
        AvailabilityDay {
            is_available: false,
            ..open_day(date)
        }
    }

    fn past_day(date: NaiveDate) -> AvailabilityDay {
        AvailabilityDay {
            is_available: false,
            is_past: true,
            ..open_day(date)
        }
    }

    #[test]
    fn test_two_clicks_complete_a_range() {
        let mut selector = RangeSelector::new();

        let range = selector.click(&open_day(date(2025, 7, 3)));
        assert_eq!(selector.state(), SelectionState::PartialStart(date(2025, 7, 3)));
        assert_eq!(range.start_date, Some(date(2025, 7, 3)));
        assert_eq!(range.end_date, None);

        let range = selector.click(&open_day(date(2025, 7, 6)));
        assert_eq!(range, DateRange::between(date(2025, 7, 3), date(2025, 7, 6)));
    }

    #[test]
    fn test_earlier_second_click_is_swapped() {
        let mut selector = RangeSelector::new();

        selector.click(&open_day(date(2025, 7, 10)));
        let range = selector.click(&open_day(date(2025, 7, 4)));

        assert_eq!(range.start_date, Some(date(2025, 7, 4)));
        assert_eq!(range.end_date, Some(date(2025, 7, 10)));
    }

    #[test]
    fn test_third_click_starts_over() {
        let mut selector = RangeSelector::new();

        selector.click(&open_day(date(2025, 7, 3)));
        selector.click(&open_day(date(2025, 7, 6)));
        let range = selector.click(&open_day(date(2025, 7, 20)));

        assert_eq!(selector.state(), SelectionState::PartialStart(date(2025, 7, 20)));
        assert_eq!(range.end_date, None);
    }

    #[test]
    fn test_non_selectable_clicks_are_ignored_in_every_state() {
        let mut selector = RangeSelector::new();

        selector.click(&past_day(date(2025, 6, 1)));
        assert_eq!(selector.state(), SelectionState::Empty);

        selector.click(&open_day(date(2025, 7, 3)));
        selector.click(&blocked_day(date(2025, 7, 5)));
        assert_eq!(selector.state(), SelectionState::PartialStart(date(2025, 7, 3)));

        selector.click(&open_day(date(2025, 7, 6)));
        let before = selector.range();
        let after = selector.click(&blocked_day(date(2025, 7, 8)));
        assert_eq!(before, after);
        let after = selector.click(&past_day(date(2025, 6, 1)));
        assert_eq!(before, after);
    }

    #[test]
    fn test_same_day_twice_completes_a_zero_night_range() {
        let mut selector = RangeSelector::new();

        selector.click(&open_day(date(2025, 7, 3)));
        let range = selector.click(&open_day(date(2025, 7, 3)));
        assert_eq!(range, DateRange::between(date(2025, 7, 3), date(2025, 7, 3)));
    }

    #[test]
    fn test_completed_ranges_are_ordered() {
        let days: Vec<NaiveDate> = date(2025, 7, 1).iter_days().take(10).collect();

        for &first in &days {
            for &second in &days {
                let mut selector = RangeSelector::new();
                selector.click(&open_day(first));
                let range = selector.click(&open_day(second));
                assert!(range.start_date.unwrap() <= range.end_date.unwrap());
            }
        }
    }

    #[test]
    fn test_reset() {
        let mut selector = RangeSelector::new();
        selector.click(&open_day(date(2025, 7, 3)));
        selector.reset();
        assert_eq!(selector.range(), DateRange::empty());
    }

    #[test]
    fn test_from_date_range() {
        assert_eq!(RangeSelector::from(DateRange::empty()).state(), SelectionState::Empty);

        let partial = DateRange {
            start_date: Some(date(2025, 7, 3)),
            end_date: None,
        };
        assert_eq!(
            RangeSelector::from(partial).state(),
            SelectionState::PartialStart(date(2025, 7, 3))
        );

        let reversed = DateRange {
            start_date: Some(date(2025, 7, 9)),
            end_date: Some(date(2025, 7, 3)),
        };
        assert_eq!(
            RangeSelector::from(reversed).state(),
            SelectionState::Complete { start: date(2025, 7, 3), end: date(2025, 7, 9) }
        );
    }
}

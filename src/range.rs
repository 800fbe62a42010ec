//! Reporting-period selection.
//!
//! The API consumes inclusive calendar dates as `YYYY-MM-DD`; no time of day
//! is ever transmitted. Inverted or future ranges are passed through
//! unchanged, their handling is the server's contract.

use chrono::{Duration, Local, NaiveDate};

/// Inclusive calendar-date range for a data request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Rolling window of `span_days` trailing days ending on `today`.
    pub fn trailing(today: NaiveDate, span_days: i64) -> Self {
        Self {
            start: today - Duration::days(span_days),
            end: today,
        }
    }

    /// Quick period relative to `today`: `days > 0` selects the trailing
    /// `days`-day window, `days == 0` selects the current calendar day only.
    pub fn quick(today: NaiveDate, days: i64) -> Self {
        if days > 0 {
            Self::trailing(today, days)
        } else {
            Self {
                start: today,
                end: today,
            }
        }
    }

    /// Quick period anchored at the local calendar date.
    pub fn quick_from_today(days: i64) -> Self {
        Self::quick(Local::now().date_naive(), days)
    }

    /// Move the start date by `days` (negative moves it earlier). The end
    /// date is left alone even if the range inverts.
    pub fn shift_start(&self, days: i64) -> Self {
        Self {
            start: self.start + Duration::days(days),
            end: self.end,
        }
    }

    /// Move the end date by `days`.
    pub fn shift_end(&self, days: i64) -> Self {
        Self {
            start: self.start,
            end: self.end + Duration::days(days),
        }
    }

    /// Start date in the wire format.
    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// End date in the wire format.
    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }

    /// Human-readable label for the header line.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%d.%m.%Y"),
            self.end.format("%d.%m.%Y")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    // Quick-period(7) spans today minus seven days through today.
    fn quick_seven_days_is_trailing_window() {
        let today = day(2026, 8, 28);
        let range = DateRange::quick(today, 7);
        assert_eq!(range.start, day(2026, 8, 21));
        assert_eq!(range.end, today);
    }

    #[test]
    // Quick-period(0) collapses to the current calendar day.
    fn quick_zero_is_single_day() {
        let today = day(2026, 8, 28);
        let range = DateRange::quick(today, 0);
        assert_eq!(range.start, today);
        assert_eq!(range.end, today);
    }

    #[test]
    fn wire_format_is_iso_calendar_date() {
        let range = DateRange::new(day(2026, 1, 5), day(2026, 1, 12));
        assert_eq!(range.start_param(), "2026-01-05");
        assert_eq!(range.end_param(), "2026-01-12");
    }

    #[test]
    // Shifts may invert the range; it is passed through unvalidated.
    fn shifting_does_not_clamp() {
        let range = DateRange::new(day(2026, 3, 10), day(2026, 3, 11));
        let shifted = range.shift_start(5);
        assert_eq!(shifted.start, day(2026, 3, 15));
        assert_eq!(shifted.end, day(2026, 3, 11));
    }

    #[test]
    fn label_uses_dotted_dates() {
        let range = DateRange::new(day(2026, 3, 1), day(2026, 3, 8));
        assert_eq!(range.label(), "01.03.2026 - 08.03.2026");
    }

    #[test]
    fn trailing_crosses_month_boundary() {
        let range = DateRange::trailing(day(2026, 3, 3), 7);
        assert_eq!(range.start, day(2026, 2, 24));
    }
}

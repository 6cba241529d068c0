//! Calendar arithmetic shared by the navigation state and the grid renderer.

use chrono::{Datelike, Months, NaiveDate, Weekday};

pub const DEFAULT_MIN_YEAR: i32 = 1900;
pub const DEFAULT_MAX_YEAR: i32 = 2100;

pub fn default_min_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(DEFAULT_MIN_YEAR, 1, 1).unwrap_or(NaiveDate::MIN)
}

pub fn default_max_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(DEFAULT_MAX_YEAR, 12, 31).unwrap_or(NaiveDate::MAX)
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Length of `month` in `year`; `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some(last.day())
}

/// Adds `delta` months, clamping the day to the target month's length.
pub fn shift_months(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    if delta >= 0 {
        date.checked_add_months(Months::new(delta as u32))
    } else {
        date.checked_sub_months(Months::new(delta.unsigned_abs()))
    }
}

pub fn shift_years(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    shift_months(date, delta.checked_mul(12)?)
}

/// Builds `year-month-day`, clamping the day into the month.
pub fn clamped_ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let month = month.clamp(1, 12);
    let day = day.clamp(1, days_in_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn clamp_date(date: NaiveDate, min: NaiveDate, max: NaiveDate) -> NaiveDate {
    date.clamp(min, max)
}

/// Every day from `start` to `end` inclusive. Empty when `start > end`.
pub fn dates_in_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |date| *date <= end)
}

/// Month laid out as six week rows starting on `first_day_of_week`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub first_day_of_week: Weekday,
    pub cells: [[Option<NaiveDate>; 7]; 6],
}

impl MonthGrid {
    pub fn new(year: i32, month: u32, first_day_of_week: Weekday) -> Self {
        let mut cells = [[None; 7]; 6];
        if let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) {
            let offset = (first.weekday().num_days_from_monday() + 7
                - first_day_of_week.num_days_from_monday())
                % 7;
            let days = first.iter_days().take_while(|date| date.month() == month);
            for (idx, date) in days.enumerate() {
                let slot = idx + offset as usize;
                cells[slot / 7][slot % 7] = Some(date);
            }
        }
        Self {
            year,
            month,
            first_day_of_week,
            cells,
        }
    }

    pub fn for_date(date: NaiveDate, first_day_of_week: Weekday) -> Self {
        Self::new(date.year(), date.month(), first_day_of_week)
    }

    /// Weekdays in column order.
    pub fn weekdays(&self) -> [Weekday; 7] {
        let mut out = [self.first_day_of_week; 7];
        let mut day = self.first_day_of_week;
        for slot in out.iter_mut() {
            *slot = day;
            day = day.succ();
        }
        out
    }

    /// Rows that contain at least one day.
    pub fn used_rows(&self) -> impl Iterator<Item = &[Option<NaiveDate>; 7]> {
        self.cells.iter().filter(|row| row.iter().any(Option::is_some))
    }

    pub fn position_of(&self, date: NaiveDate) -> Option<(usize, usize)> {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if *cell == Some(date) {
                    return Some((r, c));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn month_shift_clamps_day_to_month_end() {
        assert_eq!(shift_months(date(2024, 1, 31), 1), Some(date(2024, 2, 29)));
        assert_eq!(shift_months(date(2023, 3, 31), -1), Some(date(2023, 2, 28)));
    }

    #[test]
    fn year_shift_handles_leap_day() {
        assert_eq!(shift_years(date(2024, 2, 29), 1), Some(date(2025, 2, 28)));
        assert_eq!(shift_years(date(2024, 6, 15), -2), Some(date(2022, 6, 15)));
    }

    #[test]
    fn days_in_month_respects_leap_years() {
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2024, 4), Some(30));
        assert_eq!(days_in_month(2100, 12), Some(31));
    }

    #[test]
    fn days_in_month_rejects_invalid_months() {
        assert_eq!(days_in_month(2024, 0), None);
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn grid_starts_on_configured_weekday() {
        // June 2024 starts on a Saturday.
        let monday_first = MonthGrid::new(2024, 6, Weekday::Mon);
        assert_eq!(monday_first.position_of(date(2024, 6, 1)), Some((0, 5)));
        assert_eq!(monday_first.position_of(date(2024, 6, 30)), Some((4, 6)));

        let sunday_first = MonthGrid::new(2024, 6, Weekday::Sun);
        assert_eq!(sunday_first.position_of(date(2024, 6, 1)), Some((0, 6)));
        assert_eq!(sunday_first.used_rows().count(), 6);
    }

    #[test]
    fn grid_weekdays_follow_first_day() {
        let grid = MonthGrid::new(2024, 6, Weekday::Sun);
        let days = grid.weekdays();
        assert_eq!(days[0], Weekday::Sun);
        assert_eq!(days[6], Weekday::Sat);
    }

    #[test]
    fn range_iteration_is_inclusive() {
        let days: Vec<_> = dates_in_range(date(2024, 2, 27), date(2024, 3, 1)).collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[2], date(2024, 2, 29));
        assert_eq!(dates_in_range(date(2024, 3, 2), date(2024, 3, 1)).count(), 0);
    }

    #[test]
    fn clamped_ymd_keeps_day_in_month() {
        assert_eq!(clamped_ymd(2023, 2, 31), Some(date(2023, 2, 28)));
    }
}

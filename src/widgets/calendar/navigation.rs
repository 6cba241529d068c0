use crate::core::date::{self, clamped_ymd};
use crate::core::event::CalendarEvent;
use crate::core::mode::ViewMode;
use crate::error::CalendarError;
use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

pub const YEARS_PER_PAGE: i32 = 12;

/// Displayed period and active view, kept inside `[min, max]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    cursor: NaiveDate,
    mode: ViewMode,
    year_page: u32,
    min: NaiveDate,
    max: NaiveDate,
}

impl NavigationState {
    pub fn new(cursor: NaiveDate, min: NaiveDate, max: NaiveDate) -> Result<Self, CalendarError> {
        if min > max {
            return Err(CalendarError::InvalidBounds { min, max });
        }
        let cursor = date::clamp_date(cursor, min, max);
        let mut state = Self {
            cursor,
            mode: ViewMode::Days,
            year_page: 0,
            min,
            max,
        };
        state.year_page = state.page_of(cursor.year());
        Ok(state)
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn year_page(&self) -> u32 {
        self.year_page
    }

    pub fn min(&self) -> NaiveDate {
        self.min
    }

    pub fn max(&self) -> NaiveDate {
        self.max
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }

    pub fn set_bounds(&mut self, min: NaiveDate, max: NaiveDate) -> Result<(), CalendarError> {
        if min > max {
            return Err(CalendarError::InvalidBounds { min, max });
        }
        self.min = min;
        self.max = max;
        self.cursor = date::clamp_date(self.cursor, min, max);
        self.year_page = self.year_page.min(self.last_page());
        Ok(())
    }

    /// Moves by whole months keeping the day. The shifted day itself must be
    /// in bounds, unlike `select_month`, which clamps.
    pub fn shift_month(&mut self, delta: i32) -> Option<CalendarEvent> {
        let candidate = date::shift_months(self.cursor, delta)?;
        if !self.apply(candidate) {
            log::debug!("month shift {delta} from {} refused by bounds", self.cursor);
            return None;
        }
        Some(CalendarEvent::MonthChanged(self.cursor))
    }

    pub fn shift_year(&mut self, delta: i32) -> Option<CalendarEvent> {
        let candidate = date::shift_years(self.cursor, delta)?;
        if !self.apply(candidate) {
            log::debug!("year shift {delta} from {} refused by bounds", self.cursor);
            return None;
        }
        Some(CalendarEvent::YearChanged(self.cursor))
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) -> Option<CalendarEvent> {
        if mode == ViewMode::Years {
            self.year_page = self.page_of(self.cursor.year());
        }
        if self.mode == mode {
            return None;
        }
        log::debug!("view mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        Some(CalendarEvent::ViewModeChanged(mode))
    }

    /// Month cell tapped: jump to its first day and go back to Days.
    pub fn select_month(&mut self, month: u32) -> Option<CalendarEvent> {
        if let Some(target) = clamped_ymd(self.cursor.year(), month, 1) {
            self.cursor = date::clamp_date(target, self.min, self.max);
        }
        self.set_view_mode(ViewMode::Days)
    }

    /// Year cell tapped: jump to the cursor month of that year and go back
    /// to Days.
    pub fn select_year(&mut self, year: i32) -> Option<CalendarEvent> {
        if let Some(target) = clamped_ymd(year, self.cursor.month(), 1) {
            self.cursor = date::clamp_date(target, self.min, self.max);
        }
        self.set_view_mode(ViewMode::Days)
    }

    pub fn next_year_page(&mut self) -> bool {
        if self.page_start(self.year_page + 1) > self.max.year() {
            return false;
        }
        self.year_page += 1;
        true
    }

    pub fn previous_year_page(&mut self) -> bool {
        if self.year_page == 0 {
            return false;
        }
        self.year_page -= 1;
        true
    }

    /// Years shown on the current page, truncated at the maximum year.
    pub fn year_page_range(&self) -> RangeInclusive<i32> {
        let start = self.page_start(self.year_page);
        let end = (start + YEARS_PER_PAGE - 1).min(self.max.year());
        start..=end
    }

    fn apply(&mut self, candidate: NaiveDate) -> bool {
        if !self.contains(candidate) {
            return false;
        }
        self.cursor = candidate;
        true
    }

    fn page_start(&self, page: u32) -> i32 {
        self.min.year() + page as i32 * YEARS_PER_PAGE
    }

    fn page_of(&self, year: i32) -> u32 {
        ((year - self.min.year()).max(0) / YEARS_PER_PAGE) as u32
    }

    fn last_page(&self) -> u32 {
        self.page_of(self.max.year())
    }
}

#[cfg(test)]
mod tests {
    use super::NavigationState;
    use crate::core::date::{default_max_date, default_min_date};
    use crate::core::event::CalendarEvent;
    use crate::core::mode::ViewMode;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn state(cursor: NaiveDate) -> NavigationState {
        NavigationState::new(cursor, default_min_date(), default_max_date()).expect("bounds")
    }

    #[test]
    fn month_shift_emits_month_changed() {
        let mut nav = state(date(2024, 6, 15));
        assert_eq!(
            nav.shift_month(1),
            Some(CalendarEvent::MonthChanged(date(2024, 7, 15)))
        );
        assert_eq!(
            nav.shift_year(-1),
            Some(CalendarEvent::YearChanged(date(2023, 7, 15)))
        );
    }

    #[test]
    fn month_shift_below_min_is_a_no_op() {
        let mut nav = state(default_min_date());
        for _ in 0..3 {
            assert_eq!(nav.shift_month(-1), None);
        }
        assert_eq!(nav.cursor(), default_min_date());
    }

    #[test]
    fn month_shift_checks_the_shifted_day_not_the_month() {
        let min = date(2024, 6, 15);
        let mut nav = NavigationState::new(date(2024, 7, 10), min, default_max_date())
            .expect("bounds");
        assert_eq!(nav.shift_month(-1), None);
        assert_eq!(nav.cursor(), date(2024, 7, 10));

        // The month picker reaches June by clamping instead.
        nav.set_view_mode(ViewMode::Months);
        nav.select_month(6);
        assert_eq!(nav.cursor(), min);
        assert_eq!(nav.mode(), ViewMode::Days);
    }

    #[test]
    fn year_shift_past_max_is_a_no_op() {
        let mut nav = state(date(2100, 3, 1));
        assert_eq!(nav.shift_year(1), None);
        assert_eq!(nav.cursor(), date(2100, 3, 1));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert!(NavigationState::new(date(2024, 1, 1), date(2025, 1, 1), date(2020, 1, 1)).is_err());
    }

    #[test]
    fn cursor_is_clamped_into_bounds() {
        let nav = NavigationState::new(date(1800, 1, 1), date(1950, 5, 5), date(2000, 1, 1))
            .expect("bounds");
        assert_eq!(nav.cursor(), date(1950, 5, 5));
    }

    #[test]
    fn view_mode_transitions_report_changes_only() {
        let mut nav = state(date(2024, 6, 15));
        assert_eq!(nav.set_view_mode(ViewMode::Days), None);
        assert_eq!(
            nav.set_view_mode(ViewMode::Months),
            Some(CalendarEvent::ViewModeChanged(ViewMode::Months))
        );
        assert_eq!(
            nav.set_view_mode(ViewMode::Years),
            Some(CalendarEvent::ViewModeChanged(ViewMode::Years))
        );
    }

    #[test]
    fn selecting_month_returns_to_days() {
        let mut nav = state(date(2024, 6, 15));
        nav.set_view_mode(ViewMode::Months);
        assert_eq!(
            nav.select_month(2),
            Some(CalendarEvent::ViewModeChanged(ViewMode::Days))
        );
        assert_eq!(nav.cursor(), date(2024, 2, 1));
        assert_eq!(nav.mode(), ViewMode::Days);
    }

    #[test]
    fn selecting_year_keeps_month() {
        let mut nav = state(date(2024, 6, 15));
        nav.set_view_mode(ViewMode::Years);
        nav.select_year(1999);
        assert_eq!(nav.cursor(), date(1999, 6, 1));
    }

    #[test]
    fn year_pages_are_twelve_years_from_min() {
        let mut nav = state(date(1905, 1, 1));
        assert_eq!(nav.year_page(), 0);
        assert_eq!(nav.year_page_range(), 1900..=1911);
        assert!(!nav.previous_year_page());
        assert_eq!(nav.year_page(), 0);
        assert!(nav.next_year_page());
        assert_eq!(nav.year_page_range(), 1912..=1923);
    }

    #[test]
    fn last_year_page_is_truncated_and_final() {
        let mut nav = state(date(2100, 1, 1));
        nav.set_view_mode(ViewMode::Years);
        assert_eq!(nav.year_page(), 16);
        assert_eq!(nav.year_page_range(), 2092..=2100);
        assert!(!nav.next_year_page());
    }

    #[test]
    fn entering_years_reanchors_page_on_cursor() {
        let mut nav = state(date(1905, 1, 1));
        nav.shift_year(30);
        nav.set_view_mode(ViewMode::Years);
        assert_eq!(nav.year_page_range(), 1924..=1935);
    }

    #[test]
    fn narrowing_bounds_clamps_cursor() {
        let mut nav = state(date(2024, 6, 15));
        nav.set_bounds(date(2000, 1, 1), date(2010, 12, 31)).expect("bounds");
        assert_eq!(nav.cursor(), date(2010, 12, 31));
    }
}

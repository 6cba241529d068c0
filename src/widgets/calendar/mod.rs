mod navigation;
mod render;
mod selection;
mod transition;

pub use navigation::{NavigationState, YEARS_PER_PAGE};
pub use render::{CalendarRenderer, GridCursor, Section};
pub use selection::{SelectionChange, SelectionEngine, SelectionOutcome, SelectionSet};
pub use transition::{FadePhase, Transition};

use crate::config::{CalendarStyle, Culture, LocaleData};
use crate::core::date::{self, default_max_date, default_min_date};
use crate::core::event::CalendarEvent;
use crate::core::event_queue::EventQueue;
use crate::core::listeners::{Listeners, SubscriptionId};
use crate::core::mode::{DisplayMode, ViewMode};
use crate::error::CalendarError;
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::span::Span;
use crate::widgets::base::WidgetBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext,
};
use chrono::{Datelike, Duration as DateDelta, NaiveDate};
use std::time::{Duration, Instant};

const MONTH_COLUMNS: i32 = 3;

/// Month calendar with single/range selection, month and year pickers and a
/// header whose layout follows the display mode.
pub struct Calendar {
    base: WidgetBase,
    navigation: NavigationState,
    selection: SelectionEngine,
    display_mode: DisplayMode,
    culture: Box<dyn LocaleData>,
    style: CalendarStyle,
    transition: Transition,
    events: EventQueue<CalendarEvent>,
    listeners: Listeners<CalendarEvent>,
    section: Section,
    cursor: GridCursor,
    today: NaiveDate,
}

impl Calendar {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        cursor: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    ) -> Result<Self, CalendarError> {
        let navigation = NavigationState::new(cursor, min, max)?;
        let cursor = navigation.cursor();
        Ok(Self {
            base: WidgetBase::new(id, label),
            navigation,
            selection: SelectionEngine::new(),
            display_mode: DisplayMode::default(),
            culture: Box::new(Culture::default()),
            style: CalendarStyle::default(),
            transition: Transition::default(),
            events: EventQueue::new(),
            listeners: Listeners::new(),
            section: Section::Grid,
            cursor: GridCursor {
                day: cursor,
                month: cursor.month(),
                year: cursor.year(),
            },
            today: date::today(),
        })
    }

    /// Calendar over the default 1900-01-01..=2100-12-31 bounds.
    pub fn with_default_bounds(
        id: impl Into<String>,
        label: impl Into<String>,
        cursor: NaiveDate,
    ) -> Result<Self, CalendarError> {
        Self::new(id, label, cursor, default_min_date(), default_max_date())
    }

    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self.rebuild();
        self
    }

    pub fn with_culture(mut self, culture: impl LocaleData + 'static) -> Self {
        self.culture = Box::new(culture);
        self
    }

    pub fn with_style(mut self, style: CalendarStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_fade(mut self, duration: Duration) -> Self {
        self.transition.set_duration(duration);
        self
    }

    /// Pins "today" for highlighting; defaults to the local date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn displayed_date(&self) -> NaiveDate {
        self.navigation.cursor()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.navigation.mode()
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn culture(&self) -> &dyn LocaleData {
        self.culture.as_ref()
    }

    pub fn style(&self) -> &CalendarStyle {
        &self.style
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn selection(&self) -> &SelectionSet {
        self.selection.selection()
    }

    /// Every day covered by the selected range; empty without a range.
    pub fn range_dates(&self) -> Vec<NaiveDate> {
        self.selection.dates_in_range()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn grid_cursor(&self) -> GridCursor {
        self.cursor
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&CalendarEvent) + Send + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn dispose(&mut self) {
        self.events = EventQueue::new();
        self.listeners.dispose();
    }

    // -- setters -------------------------------------------------------

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        if self.display_mode == mode {
            return;
        }
        self.display_mode = mode;
        self.events.emit(CalendarEvent::DisplayModeChanged(mode));
        self.update_calendar();
    }

    pub fn set_culture(&mut self, culture: impl LocaleData + 'static) {
        self.culture = Box::new(culture);
        self.events
            .emit(CalendarEvent::CultureChanged(self.culture.name().to_string()));
        self.update_calendar();
    }

    pub fn set_style(&mut self, style: CalendarStyle) {
        self.style = style;
        self.events.emit(CalendarEvent::StyleChanged);
        self.update_calendar();
    }

    /// Replaces the bounds and clamps the displayed month into them. The
    /// selection is kept as is.
    pub fn set_bounds(&mut self, min: NaiveDate, max: NaiveDate) -> Result<(), CalendarError> {
        self.navigation.set_bounds(min, max)?;
        self.update_calendar();
        Ok(())
    }

    // -- header actions ------------------------------------------------

    pub fn previous_month(&mut self) -> bool {
        self.shift(|nav| nav.shift_month(-1))
    }

    pub fn next_month(&mut self) -> bool {
        self.shift(|nav| nav.shift_month(1))
    }

    pub fn previous_year(&mut self) -> bool {
        self.shift(|nav| nav.shift_year(-1))
    }

    pub fn next_year(&mut self) -> bool {
        self.shift(|nav| nav.shift_year(1))
    }

    pub fn tap_month_label(&mut self) {
        self.change_view(ViewMode::Months);
    }

    pub fn tap_year_label(&mut self) {
        self.change_view(ViewMode::Years);
    }

    pub fn tap_month_year_label(&mut self) {
        self.change_view(ViewMode::Months);
    }

    // -- grid actions --------------------------------------------------

    /// Toggles `day` in the selection. Days outside the bounds are ignored.
    pub fn tap_day(&mut self, day: NaiveDate) {
        if !self.navigation.contains(day) {
            log::debug!("{}: ignoring out-of-range day {day}", self.base.id());
            return;
        }
        let outcome = self.selection.toggle_date(day);
        self.events.extend(outcome.events());
        self.cursor.day = day;
        self.flush();
    }

    pub fn tap_month(&mut self, month: u32) {
        if !(1..=12).contains(&month) {
            return;
        }
        if let Some(event) = self.navigation.select_month(month) {
            self.events.emit(event);
        }
        self.update_calendar();
    }

    pub fn tap_year(&mut self, year: i32) {
        if !(self.navigation.min().year()..=self.navigation.max().year()).contains(&year) {
            return;
        }
        if let Some(event) = self.navigation.select_year(year) {
            self.events.emit(event);
        }
        self.update_calendar();
    }

    pub fn next_year_page(&mut self) -> bool {
        let applied = self.navigation.next_year_page();
        if applied {
            self.update_calendar();
        }
        applied
    }

    pub fn previous_year_page(&mut self) -> bool {
        let applied = self.navigation.previous_year_page();
        if applied {
            self.update_calendar();
        }
        applied
    }

    pub fn clear_selection(&mut self) {
        if let Some(event) = self.selection.clear() {
            self.events.emit(event);
        }
        self.flush();
    }

    /// Advances the fade transition; returns whether a redraw is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.transition.tick(now)
    }

    // -- internals -----------------------------------------------------

    fn shift(
        &mut self,
        apply: impl FnOnce(&mut NavigationState) -> Option<CalendarEvent>,
    ) -> bool {
        match apply(&mut self.navigation) {
            Some(event) => {
                self.events.emit(event);
                self.update_calendar();
                true
            }
            None => false,
        }
    }

    fn change_view(&mut self, mode: ViewMode) {
        if let Some(event) = self.navigation.set_view_mode(mode) {
            self.events.emit(event);
        }
        self.update_calendar();
    }

    /// Rebuilds from current state, then fades. State is final before the
    /// fade starts.
    fn update_calendar(&mut self) {
        self.rebuild();
        self.transition.start(Instant::now());
        self.flush();
    }

    fn rebuild(&mut self) {
        let shown = self.navigation.cursor();
        if self.cursor.day.year() != shown.year() || self.cursor.day.month() != shown.month() {
            self.cursor.day = shown;
        }
        self.cursor.month = shown.month();
        let page = self.navigation.year_page_range();
        if !page.contains(&self.cursor.year) {
            self.cursor.year = if page.contains(&shown.year()) {
                shown.year()
            } else {
                *page.start()
            };
        }
        if !self.sections().contains(&self.section) {
            self.section = Section::Grid;
        }
    }

    fn flush(&mut self) {
        for event in self.events.drain_ready(Instant::now()) {
            log::debug!("{}: {:?}", self.base.id(), event);
            self.listeners.dispatch(&event);
        }
    }

    fn sections(&self) -> Vec<Section> {
        let mut sections = vec![Section::MonthLabel];
        if self.display_mode.has_year_navigation() {
            sections.push(Section::YearLabel);
        }
        sections.push(Section::Grid);
        sections
    }

    fn cycle_section(&mut self, forward: bool) -> bool {
        let sections = self.sections();
        let Some(idx) = sections.iter().position(|s| *s == self.section) else {
            return false;
        };
        let next = if forward {
            idx.checked_add(1).filter(|i| *i < sections.len())
        } else {
            idx.checked_sub(1)
        };
        match next {
            Some(i) => {
                self.section = sections[i];
                true
            }
            None => false,
        }
    }

    fn on_header_key(&mut self, key: KeyEvent) -> InteractionResult {
        let year_section = self.section == Section::YearLabel;
        match key.code {
            KeyCode::Left if year_section => InteractionResult::from_applied(self.previous_year()),
            KeyCode::Right if year_section => InteractionResult::from_applied(self.next_year()),
            KeyCode::Left => InteractionResult::from_applied(self.previous_month()),
            KeyCode::Right => InteractionResult::from_applied(self.next_month()),
            KeyCode::Enter => {
                if year_section {
                    self.tap_year_label();
                } else if self.display_mode == DisplayMode::Default {
                    self.tap_month_year_label();
                } else {
                    self.tap_month_label();
                }
                self.section = Section::Grid;
                InteractionResult::handled()
            }
            _ => InteractionResult::ignored(),
        }
    }

    fn on_grid_key(&mut self, key: KeyEvent) -> InteractionResult {
        match self.navigation.mode() {
            ViewMode::Days => self.on_days_key(key),
            ViewMode::Months => self.on_months_key(key),
            ViewMode::Years => self.on_years_key(key),
        }
    }

    fn on_days_key(&mut self, key: KeyEvent) -> InteractionResult {
        let step = match key.code {
            KeyCode::Left => -1,
            KeyCode::Right => 1,
            KeyCode::Up => -7,
            KeyCode::Down => 7,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.tap_day(self.cursor.day);
                return InteractionResult::handled();
            }
            KeyCode::Delete => {
                self.clear_selection();
                return InteractionResult::handled();
            }
            _ => return InteractionResult::ignored(),
        };
        InteractionResult::from_applied(self.move_day_cursor(step))
    }

    /// Moves the day cursor, following it into the adjacent month.
    fn move_day_cursor(&mut self, days: i64) -> bool {
        let Some(target) = self.cursor.day.checked_add_signed(DateDelta::days(days)) else {
            return false;
        };
        if !self.navigation.contains(target) {
            return false;
        }
        let shown = self.navigation.cursor();
        let months = (target.year() - shown.year()) * 12 + target.month() as i32
            - shown.month() as i32;
        if months != 0 && !self.shift(|nav| nav.shift_month(months)) {
            return false;
        }
        self.cursor.day = target;
        true
    }

    fn on_months_key(&mut self, key: KeyEvent) -> InteractionResult {
        let step = match key.code {
            KeyCode::Left => -1,
            KeyCode::Right => 1,
            KeyCode::Up => -MONTH_COLUMNS,
            KeyCode::Down => MONTH_COLUMNS,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.tap_month(self.cursor.month);
                return InteractionResult::handled();
            }
            KeyCode::Esc => return self.escape_to_days(),
            _ => return InteractionResult::ignored(),
        };
        let target = self.cursor.month as i32 + step;
        if !(1..=12).contains(&target) {
            return InteractionResult::consumed();
        }
        self.cursor.month = target as u32;
        InteractionResult::handled()
    }

    fn on_years_key(&mut self, key: KeyEvent) -> InteractionResult {
        let step = match key.code {
            KeyCode::Left => -1,
            KeyCode::Right => 1,
            KeyCode::Up => -MONTH_COLUMNS,
            KeyCode::Down => MONTH_COLUMNS,
            KeyCode::PageUp => return self.page_years(false),
            KeyCode::PageDown => return self.page_years(true),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.tap_year(self.cursor.year);
                return InteractionResult::handled();
            }
            KeyCode::Esc => return self.escape_to_days(),
            _ => return InteractionResult::ignored(),
        };
        let target = self.cursor.year + step;
        if !self.navigation.year_page_range().contains(&target) {
            return InteractionResult::consumed();
        }
        self.cursor.year = target;
        InteractionResult::handled()
    }

    fn page_years(&mut self, forward: bool) -> InteractionResult {
        let offset = self.cursor.year - *self.navigation.year_page_range().start();
        let applied = if forward {
            self.next_year_page()
        } else {
            self.previous_year_page()
        };
        if applied {
            let page = self.navigation.year_page_range();
            self.cursor.year = (*page.start() + offset).min(*page.end());
        }
        InteractionResult::from_applied(applied)
    }

    fn escape_to_days(&mut self) -> InteractionResult {
        self.change_view(ViewMode::Days);
        InteractionResult::handled()
    }

    fn renderer(&self, ctx: &RenderContext) -> CalendarRenderer<'_> {
        CalendarRenderer {
            navigation: &self.navigation,
            selection: self.selection.selection(),
            culture: self.culture.as_ref(),
            style: &self.style,
            display_mode: self.display_mode,
            today: self.today,
            focus: ctx.focused.then_some(self.section),
            cursor: self.cursor,
            opacity: self.transition.opacity(ctx.now),
        }
    }
}

impl Drawable for Calendar {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let mut out = DrawOutput::default();
        out.push(vec![Span::new(self.base.prefixed_label(ctx.focused))]);
        let renderer = self.renderer(ctx);
        for line in renderer.header() {
            out.push(line);
        }
        for line in renderer.body() {
            out.push(line);
        }
        out
    }
}

impl Interactive for Calendar {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            // Leaving the last section hands focus back to the host.
            return if self.cycle_section(key.code == KeyCode::Tab) {
                InteractionResult::handled()
            } else {
                InteractionResult::ignored()
            };
        }
        match self.section {
            Section::Grid => self.on_grid_key(key),
            Section::MonthLabel | Section::YearLabel => self.on_header_key(key),
        }
    }

    fn on_focus(&mut self) {
        self.section = Section::MonthLabel;
    }

    fn on_tick(&mut self, now: Instant) -> InteractionResult {
        if self.tick(now) || self.transition.is_running() {
            InteractionResult::handled()
        } else {
            InteractionResult::ignored()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Calendar, Section};
    use crate::config::Culture;
    use crate::core::event::CalendarEvent;
    use crate::core::mode::{DisplayMode, ViewMode};
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::ui::span::line_text;
    use crate::widgets::traits::{Drawable, Interactive, RenderContext};
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn calendar() -> (Calendar, Arc<Mutex<Vec<CalendarEvent>>>) {
        let mut calendar = Calendar::with_default_bounds("due", "Due", date(2024, 6, 15))
            .expect("bounds")
            .with_fade(Duration::ZERO)
            .with_today(date(2024, 6, 3));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        calendar.subscribe(move |event| sink.lock().expect("lock").push(event.clone()));
        (calendar, seen)
    }

    fn press(calendar: &mut Calendar, code: KeyCode) {
        calendar.on_key(KeyEvent::plain(code));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let inverted = Calendar::new("c", "C", date(2024, 1, 1), date(2025, 1, 1), date(2024, 1, 1));
        assert!(inverted.is_err());
    }

    #[test]
    fn day_taps_follow_selection_rules() {
        let (mut calendar, seen) = calendar();
        calendar.tap_day(date(2024, 6, 10));
        calendar.tap_day(date(2024, 6, 20));
        calendar.tap_day(date(2024, 6, 15));
        assert_eq!(calendar.selection().dates(), &[date(2024, 6, 15)]);
        assert_eq!(
            *seen.lock().expect("lock"),
            vec![
                CalendarEvent::DateSelected(date(2024, 6, 10)),
                CalendarEvent::RangeSelected {
                    start: date(2024, 6, 10),
                    end: date(2024, 6, 20),
                },
                CalendarEvent::RangeCleared,
                CalendarEvent::DateSelected(date(2024, 6, 15)),
            ]
        );
    }

    #[test]
    fn range_dates_cover_inclusive_span() {
        let (mut calendar, _) = calendar();
        calendar.tap_day(date(2024, 6, 12));
        calendar.tap_day(date(2024, 6, 10));
        assert_eq!(
            calendar.range_dates(),
            vec![date(2024, 6, 10), date(2024, 6, 11), date(2024, 6, 12)]
        );
    }

    #[test]
    fn out_of_bounds_day_is_ignored() {
        let mut calendar = Calendar::new(
            "c",
            "C",
            date(2024, 6, 15),
            date(2024, 6, 5),
            date(2024, 6, 25),
        )
        .expect("bounds");
        calendar.tap_day(date(2024, 6, 1));
        assert!(calendar.selection().is_empty());
    }

    #[test]
    fn month_arrows_emit_and_clamp() {
        let mut calendar = Calendar::new(
            "c",
            "C",
            date(1900, 2, 1),
            date(1900, 1, 1),
            date(2100, 12, 31),
        )
        .expect("bounds")
        .with_fade(Duration::ZERO);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        calendar.subscribe(move |event| sink.lock().expect("lock").push(event.clone()));

        assert!(calendar.previous_month());
        assert!(!calendar.previous_month());
        assert_eq!(calendar.displayed_date(), date(1900, 1, 1));
        assert_eq!(
            *seen.lock().expect("lock"),
            vec![CalendarEvent::MonthChanged(date(1900, 1, 1))]
        );
    }

    #[test]
    fn label_and_cell_taps_switch_views() {
        let (mut calendar, seen) = calendar();
        calendar.tap_month_year_label();
        assert_eq!(calendar.view_mode(), ViewMode::Months);
        calendar.tap_month(2);
        assert_eq!(calendar.view_mode(), ViewMode::Days);
        assert_eq!(calendar.displayed_date(), date(2024, 2, 1));

        calendar.tap_year_label();
        calendar.tap_year(2030);
        assert_eq!(calendar.displayed_date(), date(2030, 2, 1));
        assert_eq!(
            *seen.lock().expect("lock"),
            vec![
                CalendarEvent::ViewModeChanged(ViewMode::Months),
                CalendarEvent::ViewModeChanged(ViewMode::Days),
                CalendarEvent::ViewModeChanged(ViewMode::Years),
                CalendarEvent::ViewModeChanged(ViewMode::Days),
            ]
        );
    }

    #[test]
    fn year_pages_are_bounded() {
        let (mut calendar, _) = calendar();
        calendar.tap_year_label();
        assert_eq!(calendar.navigation().year_page_range(), 2020..=2031);
        assert!(calendar.next_year_page());
        assert_eq!(calendar.navigation().year_page_range(), 2032..=2043);
        while calendar.previous_year_page() {}
        assert_eq!(calendar.navigation().year_page(), 0);
        assert!(!calendar.previous_year_page());
    }

    #[test]
    fn setters_raise_change_events() {
        let (mut calendar, seen) = calendar();
        calendar.set_display_mode(DisplayMode::SeparateMonthYear);
        calendar.set_display_mode(DisplayMode::SeparateMonthYear);
        calendar.set_culture(Culture::de_de());
        assert_eq!(
            *seen.lock().expect("lock"),
            vec![
                CalendarEvent::DisplayModeChanged(DisplayMode::SeparateMonthYear),
                CalendarEvent::CultureChanged("de-DE".to_string()),
            ]
        );
    }

    #[test]
    fn year_section_disappears_with_display_mode() {
        let (mut calendar, _) = calendar();
        calendar.set_display_mode(DisplayMode::SeparateMonthYear);
        calendar.on_focus();
        press(&mut calendar, KeyCode::Tab);
        assert_eq!(calendar.section(), Section::YearLabel);
        calendar.set_display_mode(DisplayMode::Default);
        assert_eq!(calendar.section(), Section::Grid);
    }

    #[test]
    fn keyboard_walks_header_and_grid() {
        let (mut calendar, seen) = calendar();
        calendar.on_focus();
        assert_eq!(calendar.section(), Section::MonthLabel);
        press(&mut calendar, KeyCode::Right);
        assert_eq!(calendar.displayed_date(), date(2024, 7, 15));

        press(&mut calendar, KeyCode::Tab);
        assert_eq!(calendar.section(), Section::Grid);
        let leave = calendar.on_key(KeyEvent::plain(KeyCode::Tab));
        assert!(!leave.handled);

        // Cursor follows the displayed month; moving past its end turns the page.
        assert_eq!(calendar.grid_cursor().day, date(2024, 7, 15));
        for _ in 0..3 {
            press(&mut calendar, KeyCode::Down);
        }
        assert_eq!(calendar.grid_cursor().day, date(2024, 8, 5));
        assert_eq!(calendar.displayed_date(), date(2024, 8, 15));
        press(&mut calendar, KeyCode::Enter);
        assert_eq!(calendar.selection().single(), Some(date(2024, 8, 5)));

        let events = seen.lock().expect("lock");
        assert_eq!(
            events.as_slice(),
            &[
                CalendarEvent::MonthChanged(date(2024, 7, 15)),
                CalendarEvent::MonthChanged(date(2024, 8, 15)),
                CalendarEvent::DateSelected(date(2024, 8, 5)),
            ]
        );
    }

    #[test]
    fn month_grid_keys_pick_a_month() {
        let (mut calendar, _) = calendar();
        calendar.tap_month_label();
        press(&mut calendar, KeyCode::Down);
        press(&mut calendar, KeyCode::Right);
        assert_eq!(calendar.grid_cursor().month, 10);
        press(&mut calendar, KeyCode::Enter);
        assert_eq!(calendar.view_mode(), ViewMode::Days);
        assert_eq!(calendar.displayed_date(), date(2024, 10, 1));
    }

    #[test]
    fn page_keys_keep_year_offset() {
        let (mut calendar, _) = calendar();
        calendar.tap_year_label();
        assert_eq!(calendar.grid_cursor().year, 2024);
        press(&mut calendar, KeyCode::PageDown);
        assert_eq!(calendar.grid_cursor().year, 2036);
        press(&mut calendar, KeyCode::Esc);
        assert_eq!(calendar.view_mode(), ViewMode::Days);
    }

    #[test]
    fn fade_runs_after_navigation() {
        let (calendar, _) = calendar();
        let mut calendar = calendar.with_fade(Duration::from_millis(200));
        calendar.next_month();
        assert!(calendar.transition().is_running());
        // State is already final while the fade plays.
        assert_eq!(calendar.displayed_date(), date(2024, 7, 15));
        let later = Instant::now() + Duration::from_secs(1);
        assert!(calendar.on_tick(later).handled);
        assert!(!calendar.transition().is_running());
    }

    #[test]
    fn zero_fade_never_runs() {
        let (mut calendar, _) = calendar();
        calendar.next_month();
        assert!(!calendar.transition().is_running());
    }

    #[test]
    fn dispose_drops_listeners() {
        let (mut calendar, seen) = calendar();
        calendar.dispose();
        calendar.tap_day(date(2024, 6, 10));
        calendar.next_month();
        assert!(seen.lock().expect("lock").is_empty());
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let (mut calendar, _) = calendar();
        let count = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&count);
        let id = calendar.subscribe(move |_| *sink.lock().expect("lock") += 1);
        calendar.tap_day(date(2024, 6, 10));
        assert!(calendar.unsubscribe(id));
        calendar.tap_day(date(2024, 6, 11));
        assert_eq!(*count.lock().expect("lock"), 1);
    }

    #[test]
    fn draw_stacks_label_header_and_grid() {
        let (calendar, _) = calendar();
        let out = calendar.draw(&RenderContext::new(false));
        assert_eq!(line_text(&out.lines[0]), "  Due");
        assert_eq!(line_text(&out.lines[1]), "  ‹ June 2024 ›");
        // en-US weeks start on Sunday, so June 2024 spans six rows.
        assert_eq!(out.lines.len(), 2 + 7);
    }
}

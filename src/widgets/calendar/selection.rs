use crate::core::date::dates_in_range;
use crate::core::event::CalendarEvent;
use chrono::NaiveDate;

/// Zero, one or two selected days; sorted when two.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    dates: Vec<NaiveDate>,
}

impl SelectionSet {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn single(&self) -> Option<NaiveDate> {
        match self.dates.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match self.dates.as_slice() {
            [start, end] => Some((*start, *end)),
            _ => None,
        }
    }

    /// Exact membership: one of the stored dates, not merely inside a range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Whether a grid cell for `date` is drawn as selected.
    pub fn highlights(&self, date: NaiveDate) -> bool {
        match self.dates.as_slice() {
            [only] => *only == date,
            [start, end] => *start <= date && date <= *end,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(NaiveDate),
    Deselected(NaiveDate),
    RangeSelected { start: NaiveDate, end: NaiveDate },
    Cleared,
}

impl SelectionChange {
    pub fn event(self) -> CalendarEvent {
        match self {
            SelectionChange::Selected(date) => CalendarEvent::DateSelected(date),
            SelectionChange::Deselected(date) => CalendarEvent::DateDeselected(date),
            SelectionChange::RangeSelected { start, end } => {
                CalendarEvent::RangeSelected { start, end }
            }
            SelectionChange::Cleared => CalendarEvent::RangeCleared,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOutcome {
    /// A previous two-date range was discarded before this tap applied.
    pub range_reset: bool,
    pub change: SelectionChange,
}

impl SelectionOutcome {
    pub fn events(&self) -> Vec<CalendarEvent> {
        let mut events = Vec::with_capacity(2);
        if self.range_reset {
            events.push(CalendarEvent::RangeCleared);
        }
        events.push(self.change.event());
        events
    }
}

/// Turns day taps into single-date or range selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionEngine {
    set: SelectionSet,
}

impl SelectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.set
    }

    pub fn toggle_date(&mut self, date: NaiveDate) -> SelectionOutcome {
        if let Some(pos) = self.set.dates.iter().position(|item| *item == date) {
            self.set.dates.remove(pos);
            let change = if self.set.is_empty() {
                SelectionChange::Cleared
            } else {
                SelectionChange::Deselected(date)
            };
            return SelectionOutcome {
                range_reset: false,
                change,
            };
        }

        let range_reset = self.set.len() == 2;
        if range_reset {
            self.set.dates.clear();
        }

        self.set.dates.push(date);
        let change = match self.set.dates.as_mut_slice() {
            [start, end] => {
                if *start > *end {
                    std::mem::swap(start, end);
                }
                SelectionChange::RangeSelected {
                    start: *start,
                    end: *end,
                }
            }
            _ => SelectionChange::Selected(date),
        };

        SelectionOutcome {
            range_reset,
            change,
        }
    }

    /// Empties the selection. `None` when there was nothing to clear.
    pub fn clear(&mut self) -> Option<CalendarEvent> {
        if self.set.is_empty() {
            return None;
        }
        self.set.dates.clear();
        Some(CalendarEvent::RangeCleared)
    }

    /// Every day covered by the selected range, inclusive.
    pub fn dates_in_range(&self) -> Vec<NaiveDate> {
        match self.set.range() {
            Some((start, end)) => dates_in_range(start, end).collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SelectionChange, SelectionEngine};
    use crate::core::event::CalendarEvent;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn first_tap_selects_single_date() {
        let mut engine = SelectionEngine::new();
        let outcome = engine.toggle_date(date(2024, 6, 10));
        assert!(!outcome.range_reset);
        assert_eq!(outcome.change, SelectionChange::Selected(date(2024, 6, 10)));
        assert_eq!(engine.selection().single(), Some(date(2024, 6, 10)));
    }

    #[test]
    fn toggling_same_date_twice_returns_to_empty() {
        let mut engine = SelectionEngine::new();
        engine.toggle_date(date(2024, 6, 10));
        let outcome = engine.toggle_date(date(2024, 6, 10));
        assert_eq!(outcome.events(), vec![CalendarEvent::RangeCleared]);
        assert!(engine.selection().is_empty());
    }

    #[test]
    fn second_tap_forms_sorted_range() {
        let mut engine = SelectionEngine::new();
        engine.toggle_date(date(2024, 6, 20));
        let outcome = engine.toggle_date(date(2024, 6, 10));
        assert_eq!(
            outcome.events(),
            vec![CalendarEvent::RangeSelected {
                start: date(2024, 6, 10),
                end: date(2024, 6, 20),
            }]
        );
        assert_eq!(
            engine.selection().dates(),
            &[date(2024, 6, 10), date(2024, 6, 20)]
        );
    }

    #[test]
    fn third_tap_resets_range_before_selecting() {
        let mut engine = SelectionEngine::new();
        engine.toggle_date(date(2024, 6, 10));
        engine.toggle_date(date(2024, 6, 20));
        let outcome = engine.toggle_date(date(2024, 6, 15));
        assert_eq!(
            outcome.events(),
            vec![
                CalendarEvent::RangeCleared,
                CalendarEvent::DateSelected(date(2024, 6, 15)),
            ]
        );
        assert_eq!(engine.selection().dates(), &[date(2024, 6, 15)]);
    }

    #[test]
    fn tapping_range_endpoint_deselects_it() {
        let mut engine = SelectionEngine::new();
        engine.toggle_date(date(2024, 6, 10));
        engine.toggle_date(date(2024, 6, 20));
        let outcome = engine.toggle_date(date(2024, 6, 20));
        assert_eq!(outcome.change, SelectionChange::Deselected(date(2024, 6, 20)));
        assert_eq!(engine.selection().single(), Some(date(2024, 6, 10)));
    }

    #[test]
    fn highlight_covers_inclusive_range_only() {
        let mut engine = SelectionEngine::new();
        engine.toggle_date(date(2024, 6, 10));
        assert!(engine.selection().highlights(date(2024, 6, 10)));
        assert!(!engine.selection().highlights(date(2024, 6, 11)));

        engine.toggle_date(date(2024, 6, 12));
        let set = engine.selection();
        assert!(set.highlights(date(2024, 6, 10)));
        assert!(set.highlights(date(2024, 6, 11)));
        assert!(set.highlights(date(2024, 6, 12)));
        assert!(!set.highlights(date(2024, 6, 13)));
        assert!(!set.contains(date(2024, 6, 11)));
    }

    #[test]
    fn dates_in_range_lists_every_day() {
        let mut engine = SelectionEngine::new();
        assert!(engine.dates_in_range().is_empty());
        engine.toggle_date(date(2024, 2, 28));
        engine.toggle_date(date(2024, 3, 1));
        assert_eq!(engine.dates_in_range().len(), 3);
    }

    #[test]
    fn clear_reports_only_when_something_was_selected() {
        let mut engine = SelectionEngine::new();
        assert_eq!(engine.clear(), None);
        engine.toggle_date(date(2024, 6, 10));
        assert_eq!(engine.clear(), Some(CalendarEvent::RangeCleared));
        assert!(engine.selection().is_empty());
    }
}

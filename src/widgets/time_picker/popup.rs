use super::format::{TimeComponent, TimeFormat};
use crate::config::TimePickerStyle;
use crate::ui::span::{Span, SpanLine, center_in};
use chrono::NaiveTime;

const COLUMN_WIDTH: usize = 8;
const VISIBLE_ROWS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PopupColumn {
    kind: TimeComponent,
    selected: u32,
}

/// Dropdown with one scrollable column per formatted component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePickerPopup {
    columns: Vec<PopupColumn>,
    focused: usize,
}

impl TimePickerPopup {
    pub fn new(format: &TimeFormat, time: NaiveTime) -> Self {
        let columns = format
            .components()
            .iter()
            .map(|kind| PopupColumn {
                kind: *kind,
                selected: kind.value_of(time),
            })
            .collect();
        Self {
            columns,
            focused: 0,
        }
    }

    pub fn components(&self) -> Vec<TimeComponent> {
        self.columns.iter().map(|column| column.kind).collect()
    }

    pub fn focused_component(&self) -> Option<TimeComponent> {
        self.columns.get(self.focused).map(|column| column.kind)
    }

    pub fn selected(&self, kind: TimeComponent) -> Option<u32> {
        self.columns
            .iter()
            .find(|column| column.kind == kind)
            .map(|column| column.selected)
    }

    /// Re-highlights every column from `time`.
    pub fn sync(&mut self, time: NaiveTime) {
        for column in &mut self.columns {
            column.selected = column.kind.value_of(time);
        }
    }

    pub fn focus_next(&mut self) -> bool {
        if self.focused + 1 < self.columns.len() {
            self.focused += 1;
            return true;
        }
        false
    }

    pub fn focus_prev(&mut self) -> bool {
        if self.focused > 0 {
            self.focused -= 1;
            return true;
        }
        false
    }

    /// Moves the focused column's highlight by `delta`, wrapping around.
    /// Returns the tapped component and value.
    pub fn step(&mut self, delta: i64) -> Option<(TimeComponent, u32)> {
        let column = self.columns.get_mut(self.focused)?;
        let span = i64::from(column.kind.max()) + 1;
        let next = (i64::from(column.selected) + delta).rem_euclid(span);
        column.selected = next as u32;
        Some((column.kind, column.selected))
    }

    pub fn draw(&self, style: &TimePickerStyle) -> Vec<SpanLine> {
        let mut lines: Vec<SpanLine> = Vec::new();

        let mut header: SpanLine = vec![Span::new("  ")];
        for (idx, column) in self.columns.iter().enumerate() {
            let st = if idx == self.focused {
                style.popup_text().bold()
            } else {
                style.popup_text()
            };
            header.push(Span::styled(center_in(column.kind.label(), COLUMN_WIDTH), st));
        }
        lines.push(header);

        let half = VISIBLE_ROWS / 2;
        for offset in -half..=half {
            let mut line: SpanLine = vec![Span::new("  ")];
            for column in &self.columns {
                let span = i64::from(column.kind.max()) + 1;
                let value = (i64::from(column.selected) + offset).rem_euclid(span);
                let st = if offset == 0 {
                    style.selected_component()
                } else {
                    style.component()
                };
                line.push(Span::styled(
                    center_in(&format!("{value:02}"), COLUMN_WIDTH),
                    st,
                ));
            }
            lines.push(line);
        }
        lines
    }
}

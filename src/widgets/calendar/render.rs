use super::navigation::NavigationState;
use super::selection::SelectionSet;
use crate::config::{CalendarStyle, LocaleData};
use crate::core::date::MonthGrid;
use crate::core::mode::{DisplayMode, ViewMode};
use crate::ui::span::{Span, SpanLine, center_in};
use crate::ui::style::Style;
use chrono::{Datelike, NaiveDate};

const DAY_CELL: usize = 4;
const MONTH_CELL: usize = 12;
const GRID_COLUMNS: usize = 3;

/// Header element or grid holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    MonthLabel,
    YearLabel,
    Grid,
}

/// Highlighted cell in each grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    pub day: NaiveDate,
    pub month: u32,
    pub year: i32,
}

/// Everything the text renderer reads for one frame.
pub struct CalendarRenderer<'a> {
    pub navigation: &'a NavigationState,
    pub selection: &'a SelectionSet,
    pub culture: &'a dyn LocaleData,
    pub style: &'a CalendarStyle,
    pub display_mode: DisplayMode,
    pub today: NaiveDate,
    pub focus: Option<Section>,
    pub cursor: GridCursor,
    pub opacity: f32,
}

impl CalendarRenderer<'_> {
    pub fn header(&self) -> Vec<SpanLine> {
        let cursor = self.navigation.cursor();
        let month = self.culture.month_name(cursor.month());
        let year = cursor.year().to_string();
        let month_focused = self.focus == Some(Section::MonthLabel);
        let year_focused = self.focus == Some(Section::YearLabel);

        match self.display_mode {
            DisplayMode::Default => {
                let label = self.culture.month_year_label(cursor);
                vec![self.navigable(&label, month_focused)]
            }
            DisplayMode::SeparateMonthYear => {
                let mut line = self.navigable(month, month_focused);
                line.push(Span::new("   "));
                line.extend(self.navigable(&year, year_focused));
                vec![line]
            }
            DisplayMode::SeparateMonthFixedYear => vec![
                vec![Span::styled(format!("  {year}"), self.style.label())],
                self.navigable(month, month_focused),
            ],
        }
    }

    pub fn body(&self) -> Vec<SpanLine> {
        match self.navigation.mode() {
            ViewMode::Days => self.days(),
            ViewMode::Months => self.months(),
            ViewMode::Years => self.years(),
        }
    }

    fn navigable(&self, label: &str, focused: bool) -> SpanLine {
        let label_style = if focused {
            self.style.label().background(self.style.navigation_button_text_color)
        } else {
            self.style.label()
        };
        vec![
            Span::styled("  ‹ ", self.style.navigation()),
            Span::styled(label.to_string(), label_style),
            Span::styled(" ›", self.style.navigation()),
        ]
    }

    fn grid_focused(&self) -> bool {
        self.focus == Some(Section::Grid)
    }

    fn faded(&self, style: Style) -> Style {
        if self.opacity < 1.0 { style.dim() } else { style }
    }

    fn cell(&self, text: &str, width: usize, is_cursor: bool, style: Style) -> Span {
        let text = if is_cursor {
            format!("[{}]", center_in(text, width - 2))
        } else {
            center_in(text, width)
        };
        Span::styled(text, self.faded(style))
    }

    fn days(&self) -> Vec<SpanLine> {
        let grid = MonthGrid::for_date(self.navigation.cursor(), self.culture.first_day_of_week());
        let mut lines = Vec::new();

        let mut header: SpanLine = vec![Span::new("  ")];
        for weekday in grid.weekdays() {
            header.push(Span::styled(
                center_in(self.culture.abbreviated_day_name(weekday), DAY_CELL),
                self.faded(self.style.day_of_week()),
            ));
        }
        lines.push(header);

        for row in grid.used_rows() {
            let mut line: SpanLine = vec![Span::new("  ")];
            for cell in row {
                match cell {
                    None => line.push(Span::new(" ".repeat(DAY_CELL))),
                    Some(date) => {
                        let is_cursor = self.grid_focused() && *date == self.cursor.day;
                        line.push(self.cell(
                            &date.day().to_string(),
                            DAY_CELL,
                            is_cursor,
                            self.day_style(*date),
                        ));
                    }
                }
            }
            lines.push(line);
        }
        lines
    }

    fn day_style(&self, date: NaiveDate) -> Style {
        if !self.navigation.contains(date) {
            return self.style.day().dim();
        }
        if self.selection.highlights(date) {
            return if self.selection.len() == 2 {
                self.style.date_range()
            } else {
                self.style.selected_date()
            };
        }
        if date == self.today {
            return self.style.today();
        }
        self.style.day()
    }

    fn months(&self) -> Vec<SpanLine> {
        let current = self.navigation.cursor().month();
        let months: Vec<u32> = (1..=12).collect();
        months
            .chunks(GRID_COLUMNS)
            .map(|row| {
                let mut line: SpanLine = vec![Span::new("  ")];
                for month in row {
                    let style = if *month == current {
                        self.style.month_cell().bold()
                    } else {
                        self.style.month_cell()
                    };
                    let is_cursor = self.grid_focused() && *month == self.cursor.month;
                    line.push(self.cell(
                        self.culture.month_name(*month),
                        MONTH_CELL,
                        is_cursor,
                        style,
                    ));
                }
                line
            })
            .collect()
    }

    fn years(&self) -> Vec<SpanLine> {
        let current = self.navigation.cursor().year();
        let years: Vec<i32> = self.navigation.year_page_range().collect();
        let mut lines: Vec<SpanLine> = years
            .chunks(GRID_COLUMNS)
            .map(|row| {
                let mut line: SpanLine = vec![Span::new("  ")];
                for year in row {
                    let style = if *year == current {
                        self.style.month_cell().bold()
                    } else {
                        self.style.month_cell()
                    };
                    let is_cursor = self.grid_focused() && *year == self.cursor.year;
                    line.push(self.cell(&year.to_string(), MONTH_CELL, is_cursor, style));
                }
                line
            })
            .collect();

        let gap = MONTH_CELL * GRID_COLUMNS - 2;
        lines.push(vec![
            Span::new("  "),
            Span::styled("‹", self.style.navigation()),
            Span::new(" ".repeat(gap)),
            Span::styled("›", self.style.navigation()),
        ]);
        lines
    }
}

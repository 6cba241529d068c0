use serde::{Deserialize, Serialize};

/// Which grid the calendar body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Days,
    Months,
    Years,
}

/// Header layout variant. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// One "Month Year" label between month arrows.
    #[default]
    Default,
    /// Month label with month arrows, year label with year arrows.
    SeparateMonthYear,
    /// Year shown as a fixed caption above the month label and arrows.
    SeparateMonthFixedYear,
}

impl DisplayMode {
    pub fn has_year_navigation(self) -> bool {
        matches!(self, DisplayMode::SeparateMonthYear)
    }
}

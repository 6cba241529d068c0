use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Source of culture-specific names. The calendar never formats names
/// itself; it asks the provider.
pub trait LocaleData: Send {
    fn name(&self) -> &str;

    /// `month` is 1-based.
    fn month_name(&self, month: u32) -> &str;

    fn abbreviated_day_name(&self, day: Weekday) -> &str;

    fn first_day_of_week(&self) -> Weekday;

    fn month_year_label(&self, date: NaiveDate) -> String {
        format!("{} {}", self.month_name(date.month()), date.year())
    }
}

/// Table-backed culture. Day names are Sunday-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Culture {
    pub name: String,
    pub month_names: [String; 12],
    pub abbreviated_day_names: [String; 7],
    pub first_day_of_week: Weekday,
}

const BUILT_IN: &[&str] = &["en-US", "en-GB", "ru-RU", "de-DE", "fr-FR"];

impl Culture {
    pub fn new(
        name: impl Into<String>,
        month_names: [&str; 12],
        abbreviated_day_names: [&str; 7],
        first_day_of_week: Weekday,
    ) -> Self {
        Self {
            name: name.into(),
            month_names: month_names.map(str::to_string),
            abbreviated_day_names: abbreviated_day_names.map(str::to_string),
            first_day_of_week,
        }
    }

    pub fn en_us() -> Self {
        Self::new("en-US", ENGLISH_MONTHS, ENGLISH_DAYS, Weekday::Sun)
    }

    pub fn en_gb() -> Self {
        Self::new("en-GB", ENGLISH_MONTHS, ENGLISH_DAYS, Weekday::Mon)
    }

    pub fn ru_ru() -> Self {
        Self::new(
            "ru-RU",
            [
                "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август",
                "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
            ],
            ["Вс", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб"],
            Weekday::Mon,
        )
    }

    pub fn de_de() -> Self {
        Self::new(
            "de-DE",
            [
                "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
                "September", "Oktober", "November", "Dezember",
            ],
            ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
            Weekday::Mon,
        )
    }

    pub fn fr_fr() -> Self {
        Self::new(
            "fr-FR",
            [
                "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
                "septembre", "octobre", "novembre", "décembre",
            ],
            ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
            Weekday::Mon,
        )
    }

    /// Looks up a built-in culture; matching ignores case and accepts `_`.
    pub fn by_name(name: &str) -> Option<Self> {
        let wanted = name.replace('_', "-");
        match BUILT_IN
            .iter()
            .find(|known| known.eq_ignore_ascii_case(&wanted))
            .copied()?
        {
            "en-US" => Some(Self::en_us()),
            "en-GB" => Some(Self::en_gb()),
            "ru-RU" => Some(Self::ru_ru()),
            "de-DE" => Some(Self::de_de()),
            "fr-FR" => Some(Self::fr_fr()),
            _ => None,
        }
    }

    pub fn with_first_day_of_week(mut self, day: Weekday) -> Self {
        self.first_day_of_week = day;
        self
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::en_us()
    }
}

impl LocaleData for Culture {
    fn name(&self) -> &str {
        &self.name
    }

    fn month_name(&self, month: u32) -> &str {
        let idx = (month.clamp(1, 12) - 1) as usize;
        &self.month_names[idx]
    }

    fn abbreviated_day_name(&self, day: Weekday) -> &str {
        &self.abbreviated_day_names[day.num_days_from_sunday() as usize]
    }

    fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }
}

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ENGLISH_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

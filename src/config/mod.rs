mod culture;
mod style;

pub use culture::{Culture, LocaleData};
pub use style::{CalendarStyle, Thickness, TimePickerStyle};

use crate::core::date::{default_max_date, default_min_date};
use crate::core::mode::DisplayMode;
use crate::error::{CalendarError, ConfigError};
use crate::widgets::time_picker::TimeFormat;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TIME_FORMAT: &str = "HH:mm:ss";
pub const DEFAULT_FADE_MILLIS: u64 = 200;

/// Host-level settings for a calendar + time picker pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub culture: String,
    pub first_day_of_week: Option<Weekday>,
    pub display_mode: DisplayMode,
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
    pub time_format: String,
    pub fade_millis: u64,
    pub calendar_style: CalendarStyle,
    pub time_picker_style: TimePickerStyle,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            culture: "en-US".to_string(),
            first_day_of_week: None,
            display_mode: DisplayMode::Default,
            min_date: default_min_date(),
            max_date: default_max_date(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            fade_millis: DEFAULT_FADE_MILLIS,
            calendar_style: CalendarStyle::default(),
            time_picker_style: TimePickerStyle::default(),
        }
    }
}

impl PickerConfig {
    /// Loads a config file; `.json` is read as JSON, anything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&raw)?
        } else {
            Self::from_yaml_str(&raw)?
        };
        log::debug!("loaded picker config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_date > self.max_date {
            return Err(CalendarError::InvalidBounds {
                min: self.min_date,
                max: self.max_date,
            }
            .into());
        }
        self.time_format()?;
        self.resolve_culture()?;
        Ok(())
    }

    pub fn resolve_culture(&self) -> Result<Culture, ConfigError> {
        let culture = Culture::by_name(&self.culture)
            .ok_or_else(|| ConfigError::UnknownCulture(self.culture.clone()))?;
        Ok(match self.first_day_of_week {
            Some(day) => culture.with_first_day_of_week(day),
            None => culture,
        })
    }

    pub fn time_format(&self) -> Result<TimeFormat, ConfigError> {
        Ok(TimeFormat::parse(&self.time_format)?)
    }

    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::PickerConfig;
    use crate::core::mode::DisplayMode;
    use crate::error::ConfigError;
    use crate::ui::style::Color;
    use chrono::{NaiveDate, Weekday};

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = PickerConfig::from_yaml_str("{}").expect("defaults");
        assert_eq!(config, PickerConfig::default());
    }

    #[test]
    fn yaml_overrides_selected_fields() {
        let raw = r#"
culture: ru-RU
display_mode: separate_month_year
min_date: 2000-01-01
max_date: 2030-12-31
time_format: "HH:mm"
calendar_style:
  selected_date_background_color: magenta
  days_button_width: 40
"#;
        let config = PickerConfig::from_yaml_str(raw).expect("config");
        assert_eq!(config.display_mode, DisplayMode::SeparateMonthYear);
        assert_eq!(
            config.min_date,
            NaiveDate::from_ymd_opt(2000, 1, 1).expect("date")
        );
        assert_eq!(
            config.calendar_style.selected_date_background_color,
            Color::Magenta
        );
        assert_eq!(config.calendar_style.days_button_width, 40.0);
        assert_eq!(config.time_format().expect("format").components().len(), 2);
        assert_eq!(config.resolve_culture().expect("culture").name, "ru-RU");
    }

    #[test]
    fn json_config_is_accepted() {
        let config = PickerConfig::from_json_str(r#"{"culture":"en-GB","fade_millis":0}"#)
            .expect("config");
        assert_eq!(config.fade_duration().as_millis(), 0);
        let culture = config.resolve_culture().expect("culture");
        assert_eq!(culture.first_day_of_week, Weekday::Mon);
    }

    #[test]
    fn first_day_override_applies_to_culture() {
        let config = PickerConfig::from_yaml_str("first_day_of_week: Sat").expect("config");
        let culture = config.resolve_culture().expect("culture");
        assert_eq!(culture.first_day_of_week, Weekday::Sat);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = PickerConfig::from_yaml_str("min_date: 2030-01-01\nmax_date: 2020-01-01")
            .expect_err("bounds must be rejected");
        assert!(matches!(err, ConfigError::Calendar(_)));
    }

    #[test]
    fn unknown_culture_is_rejected() {
        let err = PickerConfig::from_yaml_str("culture: tlh-QO").expect_err("unknown culture");
        assert!(matches!(err, ConfigError::UnknownCulture(name) if name == "tlh-QO"));
    }

    #[test]
    fn format_without_components_is_rejected() {
        let err = PickerConfig::from_yaml_str("time_format: \"::\"").expect_err("bad format");
        assert!(matches!(err, ConfigError::TimeFormat(_)));
    }
}

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("minimum date {min} is after maximum date {max}")]
    InvalidBounds { min: NaiveDate, max: NaiveDate },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeFormatError {
    #[error("time format {0:?} contains no hour, minute or second token")]
    NoComponents(String),

    #[error("time format {format:?} repeats the {token} token")]
    RepeatedComponent { format: String, token: &'static str },

    #[error("time format {format:?} uses an unexpected character {found:?} as separator")]
    MixedSeparators { format: String, found: char },

    #[error("time format {format:?} uses the digit {found:?} as separator")]
    DigitSeparator { format: String, found: char },

    #[error("time format pattern could not be compiled: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown culture {0:?}")]
    UnknownCulture(String),

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    TimeFormat(#[from] TimeFormatError),
}

use crate::error::TimeFormatError;
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::fmt;

pub const DEFAULT_SEPARATOR: char = ':';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeComponent {
    Hour,
    Minute,
    Second,
}

impl TimeComponent {
    pub fn max(self) -> u32 {
        match self {
            TimeComponent::Hour => 23,
            TimeComponent::Minute | TimeComponent::Second => 59,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeComponent::Hour => "Hour",
            TimeComponent::Minute => "Minute",
            TimeComponent::Second => "Second",
        }
    }

    pub fn value_of(self, time: NaiveTime) -> u32 {
        match self {
            TimeComponent::Hour => time.hour(),
            TimeComponent::Minute => time.minute(),
            TimeComponent::Second => time.second(),
        }
    }

    /// Replaces this component of `time`, clamping `value` to the maximum.
    pub fn apply(self, time: NaiveTime, value: u32) -> NaiveTime {
        let value = value.min(self.max());
        let updated = match self {
            TimeComponent::Hour => time.with_hour(value),
            TimeComponent::Minute => time.with_minute(value),
            TimeComponent::Second => time.with_second(value),
        };
        updated.unwrap_or(time)
    }

    fn token_name(self) -> &'static str {
        match self {
            TimeComponent::Hour => "hour",
            TimeComponent::Minute => "minute",
            TimeComponent::Second => "second",
        }
    }
}

/// Display format: an ordered subset of hour/minute/second, two digits
/// each, joined by one separator character.
#[derive(Debug, Clone)]
pub struct TimeFormat {
    source: String,
    components: Vec<TimeComponent>,
    separator: char,
    strict: Regex,
}

impl TimeFormat {
    /// Accepts `HH`/`hh`/`H`/`h`, `mm`/`m` and `ss`/`s` tokens. A backslash
    /// escapes the following character.
    pub fn parse(format: &str) -> Result<Self, TimeFormatError> {
        let chars: Vec<char> = format.chars().collect();
        let mut components = Vec::<TimeComponent>::new();
        let mut separator: Option<char> = None;
        let mut idx = 0usize;

        while idx < chars.len() {
            let ch = chars[idx];
            let escaped = ch == '\\';

            if let Some(kind) = token_kind(ch).filter(|_| !escaped) {
                while idx < chars.len() && chars[idx] == ch {
                    idx += 1;
                }
                if components.contains(&kind) {
                    return Err(TimeFormatError::RepeatedComponent {
                        format: format.to_string(),
                        token: kind.token_name(),
                    });
                }
                components.push(kind);
                continue;
            }

            let literal = if escaped {
                idx += 1;
                match chars.get(idx) {
                    Some(next) => *next,
                    None => break,
                }
            } else {
                ch
            };
            if literal.is_ascii_digit() {
                return Err(TimeFormatError::DigitSeparator {
                    format: format.to_string(),
                    found: literal,
                });
            }
            match separator {
                None => separator = Some(literal),
                Some(existing) if existing == literal => {}
                Some(_) => {
                    return Err(TimeFormatError::MixedSeparators {
                        format: format.to_string(),
                        found: literal,
                    });
                }
            }
            idx += 1;
        }

        if components.is_empty() {
            return Err(TimeFormatError::NoComponents(format.to_string()));
        }

        let separator = separator.unwrap_or(DEFAULT_SEPARATOR);
        let field = r"(\d{2})";
        let escaped = regex::escape(&separator.to_string());
        let pattern = vec![field; components.len()].join(escaped.as_str());
        let strict = Regex::new(&format!("^{pattern}$"))?;

        Ok(Self {
            source: format.to_string(),
            components,
            separator,
            strict,
        })
    }

    pub fn components(&self) -> &[TimeComponent] {
        &self.components
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn contains(&self, kind: TimeComponent) -> bool {
        self.components.contains(&kind)
    }

    pub fn position(&self, kind: TimeComponent) -> Option<usize> {
        self.components.iter().position(|item| *item == kind)
    }

    /// Component following `kind` in display order.
    pub fn next_after(&self, kind: TimeComponent) -> Option<TimeComponent> {
        let pos = self.position(kind)?;
        self.components.get(pos + 1).copied()
    }

    pub fn format_time(&self, time: NaiveTime) -> String {
        self.components
            .iter()
            .map(|kind| format!("{:02}", kind.value_of(time)))
            .collect::<Vec<_>>()
            .join(self.separator.to_string().as_str())
    }

    /// Strictly parses `text` onto `base`, replacing the formatted
    /// components. Returns `None` unless every field is two digits in range.
    pub fn parse_time(&self, text: &str, base: NaiveTime) -> Option<NaiveTime> {
        let captures = self.strict.captures(text)?;
        let mut time = base;
        for (idx, kind) in self.components.iter().enumerate() {
            let value: u32 = captures.get(idx + 1)?.as_str().parse().ok()?;
            if value > kind.max() {
                return None;
            }
            time = kind.apply(time, value);
        }
        Some(time)
    }
}

impl PartialEq for TimeFormat {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components && self.separator == other.separator
    }
}

impl Eq for TimeFormat {}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn token_kind(ch: char) -> Option<TimeComponent> {
    match ch {
        'H' | 'h' => Some(TimeComponent::Hour),
        'm' => Some(TimeComponent::Minute),
        's' => Some(TimeComponent::Second),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{TimeComponent, TimeFormat};
    use crate::error::TimeFormatError;
    use chrono::NaiveTime;

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).expect("valid time")
    }

    #[test]
    fn parses_components_in_order() {
        let format = TimeFormat::parse("mm.ss").expect("format");
        assert_eq!(
            format.components(),
            &[TimeComponent::Minute, TimeComponent::Second]
        );
        assert_eq!(format.separator(), '.');
        assert_eq!(format.next_after(TimeComponent::Minute), Some(TimeComponent::Second));
        assert_eq!(format.next_after(TimeComponent::Second), None);
    }

    #[test]
    fn escaped_separators_are_accepted() {
        let format = TimeFormat::parse(r"hh\:mm\:ss").expect("format");
        assert_eq!(format.components().len(), 3);
        assert_eq!(format.separator(), ':');
    }

    #[test]
    fn single_component_uses_default_separator() {
        let format = TimeFormat::parse("HH").expect("format");
        assert_eq!(format.separator(), ':');
        assert_eq!(format.format_time(time(7, 5, 0)), "07");
    }

    #[test]
    fn rejects_repeated_and_missing_components() {
        assert!(matches!(
            TimeFormat::parse("HH:mm:HH"),
            Err(TimeFormatError::RepeatedComponent { token: "hour", .. })
        ));
        assert!(matches!(
            TimeFormat::parse("--"),
            Err(TimeFormatError::NoComponents(_))
        ));
        assert!(matches!(
            TimeFormat::parse("HH:mm.ss"),
            Err(TimeFormatError::MixedSeparators { found: '.', .. })
        ));
    }

    #[test]
    fn rejects_digit_separators() {
        assert!(matches!(
            TimeFormat::parse("HH1mm"),
            Err(TimeFormatError::DigitSeparator { found: '1', .. })
        ));
        assert!(matches!(
            TimeFormat::parse(r"HH\0mm"),
            Err(TimeFormatError::DigitSeparator { found: '0', .. })
        ));
    }

    #[test]
    fn formats_with_zero_padding() {
        let format = TimeFormat::parse("HH:mm:ss").expect("format");
        assert_eq!(format.format_time(time(9, 3, 7)), "09:03:07");
    }

    #[test]
    fn strict_parse_keeps_unformatted_components() {
        let format = TimeFormat::parse("HH:mm").expect("format");
        assert_eq!(
            format.parse_time("13:45", time(0, 0, 30)),
            Some(time(13, 45, 30))
        );
        assert_eq!(format.parse_time("1:45", time(0, 0, 0)), None);
        assert_eq!(format.parse_time("24:00", time(0, 0, 0)), None);
        assert_eq!(format.parse_time("13:45:00", time(0, 0, 0)), None);
    }
}

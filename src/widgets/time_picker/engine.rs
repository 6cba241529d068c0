use super::format::{TimeComponent, TimeFormat};
use crate::core::event::TimePickerEvent;
use crate::core::event_queue::EventQueue;
use chrono::NaiveTime;
use std::time::Instant;

const FIELD_WIDTH: usize = 2;

/// Keeps a valid time fed from popup taps or free text. Malformed text is
/// clamped or discarded, never reported as an error.
pub struct TimeSelectionEngine {
    format: TimeFormat,
    time: NaiveTime,
    events: EventQueue<TimePickerEvent>,
}

impl TimeSelectionEngine {
    pub fn new(format: TimeFormat, initial: NaiveTime) -> Self {
        Self {
            format,
            time: truncate_to_seconds(initial),
            events: EventQueue::new(),
        }
    }

    pub fn format(&self) -> &TimeFormat {
        &self.format
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Current time rendered under the format.
    pub fn text(&self) -> String {
        self.format.format_time(self.time)
    }

    /// Programmatic assignment; does not raise `TimeSelected`.
    pub fn set_time(&mut self, time: NaiveTime) {
        self.time = truncate_to_seconds(time);
    }

    pub fn set_format(&mut self, format: TimeFormat) {
        self.format = format;
    }

    pub fn set_component(&mut self, kind: TimeComponent, value: u32) -> NaiveTime {
        self.time = kind.apply(self.time, value);
        log::debug!("{} set to {}, time now {}", kind.label(), value, self.time);
        self.events.emit(TimePickerEvent::TimeSelected(self.time));
        self.time
    }

    pub fn correct_hours(&self, field: &str) -> String {
        self.correct_field(TimeComponent::Hour, field)
    }

    pub fn correct_minutes(&self, field: &str) -> String {
        self.correct_field(TimeComponent::Minute, field)
    }

    pub fn correct_seconds(&self, field: &str) -> String {
        self.correct_field(TimeComponent::Second, field)
    }

    /// Completes one field: digits only, clamped, left-padded, followed by
    /// the separator. A trailing separator is dropped again on commit.
    pub fn correct_field(&self, kind: TimeComponent, field: &str) -> String {
        let digits: String = field
            .chars()
            .filter(char::is_ascii_digit)
            .take(FIELD_WIDTH)
            .collect();
        if digits.is_empty() {
            return String::new();
        }
        let mut out = clamp_field(kind, &digits);
        out.push(self.format.separator());
        out
    }

    /// Live correction applied on every text change.
    pub fn parse_partial_input(&self, text: &str) -> String {
        let separator = self.format.separator();
        let components = self.format.components();

        let mut fields: Vec<(String, bool)> = Vec::new();
        let mut current = String::new();
        for ch in text.chars() {
            if ch.is_ascii_digit() {
                if current.len() == FIELD_WIDTH {
                    fields.push((std::mem::take(&mut current), false));
                }
                current.push(ch);
            } else if ch == separator && !current.is_empty() {
                fields.push((std::mem::take(&mut current), true));
            }
        }
        if !current.is_empty() {
            fields.push((current, false));
        }
        fields.truncate(components.len());

        let mut out = String::new();
        for (idx, (digits, terminated)) in fields.iter().enumerate() {
            if digits.len() == FIELD_WIDTH || *terminated {
                out.push_str(&clamp_field(components[idx], digits));
                out.push(separator);
            } else {
                out.push_str(digits);
            }
        }

        if out != text {
            log::trace!("time input {:?} corrected to {:?}", text, out);
        }
        out
    }

    /// Focus-loss/submit: pads and strictly parses `text`, keeping the last
    /// valid time when it does not parse. Returns the text to display.
    pub fn commit_input(&mut self, text: &str) -> String {
        let separator = self.format.separator();
        let corrected = self.parse_partial_input(text);
        let candidate = corrected
            .split(separator)
            .filter(|field| !field.is_empty())
            .map(|field| format!("{:0>width$}", field, width = FIELD_WIDTH))
            .collect::<Vec<_>>()
            .join(separator.to_string().as_str());

        match self.format.parse_time(&candidate, self.time) {
            Some(time) => {
                self.time = time;
                self.events.emit(TimePickerEvent::TimeSelected(time));
            }
            None => {
                log::warn!(
                    "time input {:?} does not match {}; keeping {}",
                    text,
                    self.format,
                    self.text()
                );
            }
        }
        self.text()
    }

    pub fn take_events(&mut self) -> Vec<TimePickerEvent> {
        self.events.drain_ready(Instant::now())
    }
}

fn clamp_field(kind: TimeComponent, digits: &str) -> String {
    let value: u32 = digits.parse().unwrap_or(0);
    format!("{:02}", value.min(kind.max()))
}

fn truncate_to_seconds(time: NaiveTime) -> NaiveTime {
    use chrono::Timelike;
    time.with_nanosecond(0).unwrap_or(time)
}

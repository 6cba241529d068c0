mod engine;
mod format;
mod popup;

pub use engine::TimeSelectionEngine;
pub use format::{TimeComponent, TimeFormat};
pub use popup::TimePickerPopup;

use crate::config::TimePickerStyle;
use crate::core::event::TimePickerEvent;
use crate::core::listeners::{Listeners, SubscriptionId};
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::span::{Span, SpanLine};
use crate::widgets::base::WidgetBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext,
};
use chrono::NaiveTime;

/// Text entry with a dropdown of hour/minute/second columns. The entry and
/// the popup stay in sync in both directions.
pub struct TimePicker {
    base: WidgetBase,
    engine: TimeSelectionEngine,
    entry: String,
    popup: Option<TimePickerPopup>,
    style: TimePickerStyle,
    focused: bool,
    pending: Vec<TimePickerEvent>,
    listeners: Listeners<TimePickerEvent>,
}

impl TimePicker {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        format: TimeFormat,
        initial: NaiveTime,
    ) -> Self {
        let engine = TimeSelectionEngine::new(format, initial);
        let entry = engine.text();
        Self {
            base: WidgetBase::new(id, label),
            engine,
            entry,
            popup: None,
            style: TimePickerStyle::default(),
            focused: false,
            pending: Vec::new(),
            listeners: Listeners::new(),
        }
    }

    pub fn with_style(mut self, style: TimePickerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &TimePickerStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: TimePickerStyle) {
        self.style = style;
    }

    pub fn selected_time(&self) -> NaiveTime {
        self.engine.time()
    }

    pub fn entry_text(&self) -> &str {
        &self.entry
    }

    pub fn format(&self) -> &TimeFormat {
        self.engine.format()
    }

    pub fn is_popup_open(&self) -> bool {
        self.popup.is_some()
    }

    pub fn popup(&self) -> Option<&TimePickerPopup> {
        self.popup.as_ref()
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&TimePickerEvent) + Send + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Detaches every listener and closes the popup.
    pub fn dispose(&mut self) {
        self.popup = None;
        self.pending.clear();
        self.listeners.dispose();
    }

    /// Property setter: replaces the time without raising `TimeSelected`.
    pub fn set_selected_time(&mut self, time: NaiveTime) {
        self.engine.set_time(time);
        self.rebuild();
    }

    pub fn set_format(&mut self, format: TimeFormat) {
        self.engine.set_format(format);
        if self.popup.is_some() {
            self.popup = Some(TimePickerPopup::new(self.engine.format(), self.engine.time()));
        }
        self.rebuild();
    }

    /// Text-change callback from the entry; returns the corrected text.
    pub fn on_text_changed(&mut self, text: &str) -> &str {
        self.entry = self.engine.parse_partial_input(text);
        &self.entry
    }

    pub fn on_focus_gained(&mut self) {
        self.focused = true;
        self.open_popup();
    }

    pub fn on_focus_lost(&mut self) {
        self.focused = false;
        self.commit();
        self.close_popup();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Commits the entry text; invalid text reverts to the last valid time.
    pub fn commit(&mut self) {
        self.entry = self.engine.commit_input(&self.entry);
        if let Some(popup) = self.popup.as_mut() {
            popup.sync(self.engine.time());
        }
        self.flush();
    }

    pub fn toggle_popup(&mut self) {
        if self.popup.is_some() {
            self.close_popup();
        } else {
            self.open_popup();
        }
    }

    pub fn open_popup(&mut self) {
        if self.popup.is_none() {
            self.popup = Some(TimePickerPopup::new(self.engine.format(), self.engine.time()));
            self.pending.push(TimePickerEvent::PopupOpened);
        }
        self.flush();
    }

    pub fn close_popup(&mut self) {
        if self.popup.take().is_some() {
            self.pending.push(TimePickerEvent::PopupClosed);
        }
        self.flush();
    }

    /// A value tapped in one popup column.
    pub fn tap_component(&mut self, kind: TimeComponent, value: u32) -> NaiveTime {
        let time = self.engine.set_component(kind, value);
        self.rebuild();
        self.flush();
        time
    }

    fn rebuild(&mut self) {
        self.entry = self.engine.text();
        if let Some(popup) = self.popup.as_mut() {
            popup.sync(self.engine.time());
        }
    }

    fn flush(&mut self) {
        let mut events = self.engine.take_events();
        events.append(&mut self.pending);
        for event in &events {
            log::debug!("{}: {:?}", self.base.id(), event);
            self.listeners.dispatch(event);
        }
    }

    fn delete_back(&mut self) -> bool {
        let Some(removed) = self.entry.pop() else {
            return false;
        };
        if removed == self.engine.format().separator() {
            self.entry.pop();
        }
        true
    }

    fn on_popup_key(&mut self, key: KeyEvent) -> InteractionResult {
        let Some(popup) = self.popup.as_mut() else {
            return InteractionResult::ignored();
        };
        match key.code {
            KeyCode::Left => InteractionResult::from_applied(popup.focus_prev()),
            KeyCode::Right | KeyCode::Tab => InteractionResult::from_applied(popup.focus_next()),
            KeyCode::BackTab => InteractionResult::from_applied(popup.focus_prev()),
            KeyCode::Up | KeyCode::Down => {
                let delta = if key.code == KeyCode::Up { -1 } else { 1 };
                match popup.step(delta) {
                    Some((kind, value)) => {
                        self.tap_component(kind, value);
                        InteractionResult::handled()
                    }
                    None => InteractionResult::consumed(),
                }
            }
            KeyCode::Enter | KeyCode::Esc => {
                self.close_popup();
                InteractionResult::handled()
            }
            _ => InteractionResult::ignored(),
        }
    }
}

impl Drawable for TimePicker {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let mut out = DrawOutput::default();
        let arrow = if self.popup.is_some() { "▲" } else { "▼" };
        let entry = if self.entry.is_empty() {
            " ".repeat(self.engine.text().chars().count())
        } else {
            format!("{:<width$}", self.entry, width = self.engine.text().chars().count())
        };
        let line: SpanLine = vec![
            Span::new(format!("{}: ", self.base.prefixed_label(ctx.focused))),
            Span::styled(format!("[{entry}]"), self.style.entry()),
            Span::new(" "),
            Span::styled(arrow, self.style.dropdown_button()),
        ];
        out.push(line);
        if let Some(popup) = &self.popup {
            for line in popup.draw(&self.style) {
                out.push(line);
            }
        }
        out
    }
}

impl Interactive for TimePicker {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        if self.popup.is_some() {
            let result = self.on_popup_key(key);
            if result.handled {
                return result;
            }
        }

        match key.code {
            KeyCode::Char(ch) => {
                let mut text = self.entry.clone();
                text.push(ch);
                self.on_text_changed(&text);
                InteractionResult::handled()
            }
            KeyCode::Backspace => InteractionResult::from_applied(self.delete_back()),
            KeyCode::Down => {
                self.toggle_popup();
                InteractionResult::handled()
            }
            KeyCode::Enter => {
                self.commit();
                InteractionResult::handled()
            }
            _ => InteractionResult::ignored(),
        }
    }

    fn on_focus(&mut self) {
        self.on_focus_gained();
    }

    fn on_blur(&mut self) {
        self.on_focus_lost();
    }
}

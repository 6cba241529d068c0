use crate::ui::style::{Color, Style};
use serde::{Deserialize, Serialize};

/// Uniform or per-side spacing, in host units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Thickness {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Thickness {
    pub const fn uniform(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

/// Visual constants for the calendar. Carries no behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarStyle {
    pub background_color: Color,
    pub frame_padding: Thickness,
    pub frame_margin: Thickness,

    pub day_text_color: Color,
    pub day_font_size: f32,
    pub day_button_padding: Thickness,
    pub day_button_margin: Thickness,
    pub day_button_background_color: Color,
    pub today_background_color: Color,
    pub selected_date_background_color: Color,
    pub date_range_background_color: Color,
    pub days_button_height: f32,
    pub days_button_width: f32,

    pub month_font_size: f32,
    pub month_corner_radius: u16,
    pub month_button_background_color: Color,

    pub navigation_button_background_color: Color,
    pub navigation_button_text_color: Color,
    pub navigation_button_size: f32,
    pub navigation_button_corner_radius: u16,
    pub navigation_button_padding: Thickness,
    pub navigation_button_margin: Thickness,

    pub label_text_color: Color,
    pub label_font_size: f32,

    pub day_of_week_label_text_color: Color,
    pub day_of_week_label_font_size: f32,
}

impl Default for CalendarStyle {
    fn default() -> Self {
        Self {
            background_color: Color::Transparent,
            frame_padding: Thickness::default(),
            frame_margin: Thickness::default(),
            day_text_color: Color::Reset,
            day_font_size: 12.0,
            day_button_padding: Thickness::uniform(2.0),
            day_button_margin: Thickness::uniform(5.0),
            day_button_background_color: Color::Transparent,
            today_background_color: Color::LightBlue,
            selected_date_background_color: Color::LightGreen,
            date_range_background_color: Color::Green,
            days_button_height: 20.0,
            days_button_width: 50.0,
            month_font_size: 14.0,
            month_corner_radius: 0,
            month_button_background_color: Color::Transparent,
            navigation_button_background_color: Color::Transparent,
            navigation_button_text_color: Color::Cyan,
            navigation_button_size: 20.0,
            navigation_button_corner_radius: 30,
            navigation_button_padding: Thickness::uniform(2.0),
            navigation_button_margin: Thickness::uniform(5.0),
            label_text_color: Color::Reset,
            label_font_size: 16.0,
            day_of_week_label_text_color: Color::DarkGrey,
            day_of_week_label_font_size: 12.0,
        }
    }
}

impl CalendarStyle {
    pub fn day(&self) -> Style {
        Style::new()
            .color(self.day_text_color)
            .background(self.day_button_background_color)
    }

    pub fn today(&self) -> Style {
        self.day().background(self.today_background_color).bold()
    }

    pub fn selected_date(&self) -> Style {
        self.day()
            .background(self.selected_date_background_color)
            .bold()
    }

    pub fn date_range(&self) -> Style {
        self.day().background(self.date_range_background_color)
    }

    pub fn month_cell(&self) -> Style {
        Style::new()
            .color(self.label_text_color)
            .background(self.month_button_background_color)
    }

    pub fn navigation(&self) -> Style {
        Style::new()
            .color(self.navigation_button_text_color)
            .background(self.navigation_button_background_color)
    }

    pub fn label(&self) -> Style {
        Style::new().color(self.label_text_color).bold()
    }

    pub fn day_of_week(&self) -> Style {
        Style::new().color(self.day_of_week_label_text_color).bold()
    }
}

/// Visual constants for the time picker entry and its popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimePickerStyle {
    pub background_color: Color,

    pub time_entry_background_color: Color,
    pub time_entry_text_color: Color,
    pub time_entry_font_size: f32,
    pub time_entry_padding: Thickness,

    pub dropdown_button_background_color: Color,
    pub dropdown_button_text_color: Color,
    pub dropdown_button_size: f32,
    pub dropdown_button_font_size: f32,
    pub dropdown_button_padding: Thickness,

    pub popup_background_color: Color,
    pub popup_corner_radius: f32,
    pub popup_padding: Thickness,
    pub popup_margin: Thickness,
    pub popup_text_color: Color,
    pub popup_font_size: f32,

    pub time_component_background_color: Color,
    pub time_component_selected_background_color: Color,
    pub time_component_selected_text_color: Color,
    pub time_component_padding: Thickness,
}

impl Default for TimePickerStyle {
    fn default() -> Self {
        Self {
            background_color: Color::Transparent,
            time_entry_background_color: Color::Transparent,
            time_entry_text_color: Color::Reset,
            time_entry_font_size: 14.0,
            time_entry_padding: Thickness::uniform(5.0),
            dropdown_button_background_color: Color::Transparent,
            dropdown_button_text_color: Color::Cyan,
            dropdown_button_size: 20.0,
            dropdown_button_font_size: 10.0,
            dropdown_button_padding: Thickness::default(),
            popup_background_color: Color::Transparent,
            popup_corner_radius: 10.0,
            popup_padding: Thickness::uniform(5.0),
            popup_margin: Thickness::uniform(5.0),
            popup_text_color: Color::Reset,
            popup_font_size: 14.0,
            time_component_background_color: Color::Transparent,
            time_component_selected_background_color: Color::Purple,
            time_component_selected_text_color: Color::White,
            time_component_padding: Thickness::uniform(3.0),
        }
    }
}

impl TimePickerStyle {
    pub fn entry(&self) -> Style {
        Style::new()
            .color(self.time_entry_text_color)
            .background(self.time_entry_background_color)
    }

    pub fn dropdown_button(&self) -> Style {
        Style::new()
            .color(self.dropdown_button_text_color)
            .background(self.dropdown_button_background_color)
    }

    pub fn popup_text(&self) -> Style {
        Style::new()
            .color(self.popup_text_color)
            .background(self.popup_background_color)
    }

    pub fn component(&self) -> Style {
        Style::new()
            .color(self.popup_text_color)
            .background(self.time_component_background_color)
    }

    pub fn selected_component(&self) -> Style {
        Style::new()
            .color(self.time_component_selected_text_color)
            .background(self.time_component_selected_background_color)
            .bold()
    }
}

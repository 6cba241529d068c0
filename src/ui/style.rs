use serde::{Deserialize, Serialize};

/// Terminal color. Named colors map onto the 16-color palette, `Rgb` onto
/// true-color terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Reset,
    Black,
    DarkGrey,
    Grey,
    Red,
    Green,
    LightGreen,
    Yellow,
    Blue,
    LightBlue,
    Magenta,
    Purple,
    Cyan,
    White,
    Transparent,
    Rgb(u8, u8, u8),
}

impl Color {
    pub fn is_transparent(self) -> bool {
        matches!(self, Color::Transparent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        if !color.is_transparent() {
            self.color = Some(color);
        }
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        if !color.is_transparent() {
            self.background = Some(color);
        }
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn has_attributes(&self) -> bool {
        self.color.is_some() || self.background.is_some() || self.bold || self.dim
    }
}

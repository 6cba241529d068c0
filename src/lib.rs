pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use crate::config::{CalendarStyle, Culture, LocaleData, PickerConfig, TimePickerStyle};
pub use crate::core::{CalendarEvent, DisplayMode, SubscriptionId, TimePickerEvent, ViewMode};
pub use crate::error::{CalendarError, ConfigError, TimeFormatError};

pub use crate::widgets::calendar::{Calendar, NavigationState, SelectionEngine, SelectionSet};
pub use crate::widgets::time_picker::{TimeComponent, TimeFormat, TimePicker, TimeSelectionEngine};
pub use crate::widgets::traits::{Drawable, Interactive, RenderContext};

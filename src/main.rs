use calendar_picker::logging::init_logging;
use calendar_picker::terminal::{KeyCode, KeyEvent, KeyModifiers, Terminal, TerminalEvent};
use calendar_picker::ui::span::{Span, SpanLine};
use calendar_picker::ui::style::Style;
use calendar_picker::widgets::traits::{Drawable, Interactive, RenderContext};
use calendar_picker::{Calendar, PickerConfig, TimePicker};
use chrono::{Local, Timelike};
use std::error::Error;
use std::time::{Duration, Instant};

const HELP: &str = "tab: next  arrows: move  enter: pick  q: quit";

fn main() {
    if let Err(err) = init_logging() {
        eprintln!("logger already installed: {err}");
    }
    let config_path = std::env::args().nth(1);
    if let Err(err) = run(config_path.as_deref()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(config_path: Option<&str>) -> Result<(), Box<dyn Error>> {
    let config = match config_path {
        Some(path) => PickerConfig::load(path)?,
        None => PickerConfig::default(),
    };
    let mut demo = Demo::from_config(&config)?;

    let mut terminal = Terminal::new()?;
    terminal.run_raw(|terminal| demo.event_loop(terminal))?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Calendar,
    TimePicker,
}

struct Demo {
    calendar: Calendar,
    time_picker: TimePicker,
    focus: Focus,
    should_exit: bool,
}

impl Demo {
    fn from_config(config: &PickerConfig) -> Result<Self, Box<dyn Error>> {
        let now = Local::now();
        let mut calendar = Calendar::new(
            "date",
            "Date",
            now.date_naive(),
            config.min_date,
            config.max_date,
        )?
        .with_display_mode(config.display_mode)
        .with_culture(config.resolve_culture()?)
        .with_style(config.calendar_style.clone())
        .with_fade(config.fade_duration());
        calendar.subscribe(|event| log::info!("calendar: {event:?}"));

        let time = now.time().with_nanosecond(0).unwrap_or(now.time());
        let mut time_picker = TimePicker::new("time", "Time", config.time_format()?, time)
            .with_style(config.time_picker_style.clone());
        time_picker.subscribe(|event| log::info!("time picker: {event:?}"));

        let mut demo = Self {
            calendar,
            time_picker,
            focus: Focus::Calendar,
            should_exit: false,
        };
        demo.calendar.on_focus();
        Ok(demo)
    }

    fn event_loop(&mut self, terminal: &mut Terminal) -> std::io::Result<()> {
        let mut render_requested = true;

        loop {
            if terminal.poll(Duration::from_millis(50))? {
                match terminal.read_event()? {
                    TerminalEvent::Key(key) => {
                        self.handle_key(key);
                        render_requested = true;
                    }
                    TerminalEvent::Resize { .. } => {
                        render_requested = true;
                    }
                }
            }

            if self.calendar.on_tick(Instant::now()).request_render {
                render_requested = true;
            }

            if render_requested {
                terminal.render_frame(&self.frame())?;
                render_requested = false;
            }

            if self.should_exit {
                break;
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_exit = true;
            return;
        }
        if self.focus == Focus::Calendar && key.code == KeyCode::Char('q') {
            self.should_exit = true;
            return;
        }

        let result = match self.focus {
            Focus::Calendar => self.calendar.on_key(key),
            Focus::TimePicker => self.time_picker.on_key(key),
        };
        if !result.handled && matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            self.switch_focus();
        }
    }

    fn switch_focus(&mut self) {
        match self.focus {
            Focus::Calendar => {
                self.calendar.on_blur();
                self.time_picker.on_focus();
                self.focus = Focus::TimePicker;
            }
            Focus::TimePicker => {
                self.time_picker.on_blur();
                self.calendar.on_focus();
                self.focus = Focus::Calendar;
            }
        }
        log::debug!("focus moved to {:?}", self.focus);
    }

    fn frame(&self) -> Vec<SpanLine> {
        let mut lines = Vec::new();
        let calendar_ctx = RenderContext::new(self.focus == Focus::Calendar);
        lines.extend(self.calendar.draw(&calendar_ctx).lines);
        lines.push(Vec::new());
        let picker_ctx = RenderContext::new(self.focus == Focus::TimePicker);
        lines.extend(self.time_picker.draw(&picker_ctx).lines);
        lines.push(Vec::new());
        lines.push(vec![Span::styled(HELP, Style::new().dim())]);
        lines
    }
}

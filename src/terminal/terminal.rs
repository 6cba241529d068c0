use super::{KeyCode, KeyEvent, KeyModifiers, TerminalEvent};
use crate::ui::span::SpanLine;
use crate::ui::style::Color;
use crossterm::event::{Event, KeyEventKind, poll, read};
use crossterm::style::{
    Attribute, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Inline terminal host: the widgets redraw in place below the prompt line.
pub struct Terminal {
    stdout: Stdout,
    drawn_lines: u16,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            stdout: io::stdout(),
            drawn_lines: 0,
        })
    }

    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    pub fn exit_raw_mode(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    pub fn set_line_wrap(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            execute!(self.stdout, terminal::EnableLineWrap)?;
        } else {
            execute!(self.stdout, terminal::DisableLineWrap)?;
        }
        Ok(())
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Hide)
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Show)
    }

    pub fn poll(&self, timeout: Duration) -> io::Result<bool> {
        poll(timeout)
    }

    pub fn read_event(&mut self) -> io::Result<TerminalEvent> {
        loop {
            match read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    return Ok(TerminalEvent::Key(map_key_event(key)));
                }
                Event::Resize(width, height) => {
                    return Ok(TerminalEvent::Resize { width, height });
                }
                _ => continue,
            }
        }
    }

    /// Replaces the previously drawn frame with `lines`.
    pub fn render_frame(&mut self, lines: &[SpanLine]) -> io::Result<()> {
        if self.drawn_lines > 1 {
            queue!(self.stdout, cursor::MoveUp(self.drawn_lines - 1))?;
        }
        queue!(
            self.stdout,
            cursor::MoveToColumn(0),
            terminal::Clear(terminal::ClearType::FromCursorDown)
        )?;
        for (idx, line) in lines.iter().enumerate() {
            if idx > 0 {
                write!(self.stdout, "\r\n")?;
            }
            self.render_line(line)?;
        }
        self.drawn_lines = lines.len().max(1) as u16;
        self.stdout.flush()
    }

    fn render_line(&mut self, line: &SpanLine) -> io::Result<()> {
        for span in line {
            let style = span.style;
            if let Some(fg) = style.color {
                queue!(self.stdout, SetForegroundColor(map_color(fg)))?;
            }
            if let Some(bg) = style.background {
                queue!(self.stdout, SetBackgroundColor(map_color(bg)))?;
            }
            if style.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                queue!(self.stdout, SetAttribute(Attribute::Dim))?;
            }

            write!(self.stdout, "{}", span.text)?;

            if style.has_attributes() {
                queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
            }
        }
        Ok(())
    }

    pub fn finish(&mut self) -> io::Result<()> {
        write!(self.stdout, "\r\n")?;
        self.drawn_lines = 0;
        self.stdout.flush()
    }

    /// Runs `body` in raw mode with the cursor hidden. The terminal is
    /// restored on every exit path once raw mode was entered, including
    /// setup failures.
    pub fn run_raw<T>(
        &mut self,
        body: impl FnOnce(&mut Self) -> io::Result<T>,
    ) -> io::Result<T> {
        self.enter_raw_mode()?;
        let result = self
            .set_line_wrap(false)
            .and_then(|()| self.hide_cursor())
            .and_then(|()| body(self));
        let restored = self.restore();
        settle(result, restored)
    }

    /// Attempts every restore step even when an earlier one fails; reports
    /// the first failure.
    pub fn restore(&mut self) -> io::Result<()> {
        let steps = [
            self.finish(),
            self.show_cursor(),
            self.set_line_wrap(true),
            self.exit_raw_mode(),
        ];
        steps.into_iter().collect()
    }
}

/// Combines a session result with its restore result. A session error wins
/// over a restore error.
fn settle<T>(result: io::Result<T>, restored: io::Result<()>) -> io::Result<T> {
    let value = result?;
    restored?;
    Ok(value)
}

fn map_color(color: Color) -> crossterm::style::Color {
    use crossterm::style::Color as C;
    match color {
        Color::Reset | Color::Transparent => C::Reset,
        Color::Black => C::Black,
        Color::DarkGrey => C::DarkGrey,
        Color::Grey => C::Grey,
        Color::Red => C::Red,
        Color::Green => C::DarkGreen,
        Color::LightGreen => C::Green,
        Color::Yellow => C::Yellow,
        Color::Blue => C::DarkBlue,
        Color::LightBlue => C::Blue,
        Color::Magenta => C::Magenta,
        Color::Purple => C::DarkMagenta,
        Color::Cyan => C::Cyan,
        Color::White => C::White,
        Color::Rgb(r, g, b) => C::Rgb { r, g, b },
    }
}

fn map_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    KeyEvent {
        code: map_key_code(event.code),
        modifiers: map_key_modifiers(event.modifiers),
    }
}

fn map_key_code(code: crossterm::event::KeyCode) -> KeyCode {
    match code {
        crossterm::event::KeyCode::Char(ch) => KeyCode::Char(ch),
        crossterm::event::KeyCode::Backspace => KeyCode::Backspace,
        crossterm::event::KeyCode::Enter => KeyCode::Enter,
        crossterm::event::KeyCode::Esc => KeyCode::Esc,
        crossterm::event::KeyCode::Left => KeyCode::Left,
        crossterm::event::KeyCode::Right => KeyCode::Right,
        crossterm::event::KeyCode::Up => KeyCode::Up,
        crossterm::event::KeyCode::Down => KeyCode::Down,
        crossterm::event::KeyCode::Home => KeyCode::Home,
        crossterm::event::KeyCode::End => KeyCode::End,
        crossterm::event::KeyCode::PageUp => KeyCode::PageUp,
        crossterm::event::KeyCode::PageDown => KeyCode::PageDown,
        crossterm::event::KeyCode::Tab => KeyCode::Tab,
        crossterm::event::KeyCode::BackTab => KeyCode::BackTab,
        crossterm::event::KeyCode::Delete => KeyCode::Delete,
        _ => KeyCode::Unknown,
    }
}

fn map_key_modifiers(modifiers: crossterm::event::KeyModifiers) -> KeyModifiers {
    let mut mapped = KeyModifiers::NONE;
    if modifiers.contains(crossterm::event::KeyModifiers::SHIFT) {
        mapped |= KeyModifiers::SHIFT;
    }
    if modifiers.contains(crossterm::event::KeyModifiers::CONTROL) {
        mapped |= KeyModifiers::CONTROL;
    }
    if modifiers.contains(crossterm::event::KeyModifiers::ALT) {
        mapped |= KeyModifiers::ALT;
    }
    mapped
}

use crate::terminal::KeyEvent;
use crate::ui::span::SpanLine;
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub focused: bool,
    pub now: Instant,
}

impl RenderContext {
    pub fn new(focused: bool) -> Self {
        Self {
            focused,
            now: Instant::now(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DrawOutput {
    pub lines: Vec<SpanLine>,
}

impl DrawOutput {
    pub fn push(&mut self, line: SpanLine) {
        self.lines.push(line);
    }
}

// ---------------------------------------------------------------------------
// Drawable: every widget can draw itself
// ---------------------------------------------------------------------------

pub trait Drawable {
    fn id(&self) -> &str;
    fn label(&self) -> &str {
        ""
    }
    fn draw(&self, ctx: &RenderContext) -> DrawOutput;
}

// ---------------------------------------------------------------------------
// InteractionResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionResult {
    pub handled: bool,
    pub request_render: bool,
}

impl InteractionResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn consumed() -> Self {
        Self {
            handled: true,
            request_render: false,
        }
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            request_render: true,
        }
    }

    pub fn from_applied(applied: bool) -> Self {
        if applied { Self::handled() } else { Self::consumed() }
    }
}

// ---------------------------------------------------------------------------
// Interactive: widgets that take keyboard focus
// ---------------------------------------------------------------------------

pub trait Interactive {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult;

    fn on_focus(&mut self) {}

    fn on_blur(&mut self) {}

    /// Drives time-based state such as transitions.
    fn on_tick(&mut self, _now: Instant) -> InteractionResult {
        InteractionResult::ignored()
    }
}

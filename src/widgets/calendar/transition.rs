use crate::core::event_queue::EventQueue;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    Idle,
    FadingOut,
    FadingIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadeStep {
    BeginFadeIn,
    Finish,
}

/// Cosmetic fade around a grid rebuild. State is updated before the fade
/// starts, so rendering is correct whatever phase the fade is in.
pub struct Transition {
    duration: Duration,
    phase: FadePhase,
    started: Option<Instant>,
    steps: EventQueue<FadeStep>,
}

impl Transition {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            phase: FadePhase::Idle,
            started: None,
            steps: EventQueue::new(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase != FadePhase::Idle
    }

    /// Starts fade-out at `now`, superseding any fade in flight.
    pub fn start(&mut self, now: Instant) {
        self.steps.cancel_scheduled(|_| true);
        if self.duration.is_zero() {
            self.phase = FadePhase::Idle;
            self.started = None;
            return;
        }
        self.phase = FadePhase::FadingOut;
        self.started = Some(now);
        self.steps.emit_at(FadeStep::BeginFadeIn, now + self.duration);
        self.steps
            .emit_at(FadeStep::Finish, now + self.duration + self.duration);
    }

    /// Advances the fade; returns whether the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.phase;
        while let Some(step) = self.steps.next_ready(now) {
            self.phase = match step {
                FadeStep::BeginFadeIn => FadePhase::FadingIn,
                FadeStep::Finish => FadePhase::Idle,
            };
        }
        if self.phase == FadePhase::Idle {
            self.started = None;
        }
        before != self.phase
    }

    /// Grid opacity in `[0, 1]` at `now`.
    pub fn opacity(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return 1.0;
        };
        let total = self.duration.as_secs_f32();
        let elapsed = now.saturating_duration_since(started).as_secs_f32();
        let value = match self.phase {
            FadePhase::Idle => 1.0,
            FadePhase::FadingOut => 1.0 - elapsed / total,
            FadePhase::FadingIn => (elapsed - total) / total,
        };
        value.clamp(0.0, 1.0)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_FADE_MILLIS))
    }
}

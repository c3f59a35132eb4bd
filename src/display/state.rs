//! Session state management
//!
//! Contains the `Session` struct that owns all mutable state of the
//! display: animation offset, terminal dimensions and lifecycle.

use crate::color::AnimationState;
use crate::font::FontSize;
use crate::layout::{compose_frame, effective_font_size, Dimensions, ViewOptions, LOADING};
use crate::text::Text;

/// Result of processing an event.
///
/// Returned by event handlers to signal control flow to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Stop the session cleanly
    Quit,
}

/// Lifecycle of a display session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Terminal size not yet reported; only the placeholder is shown.
    Idle,
    /// Rendering into a terminal of the given size.
    Active(Dimensions),
    /// Quit received; nothing more is rendered or scheduled.
    Terminated,
}

/// Event delivered to the session, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The animation timer fired.
    Tick,
    /// The terminal reported a new size.
    Resize(u16, u16),
    /// The user asked to quit.
    Quit,
}

/// The single owner of all mutable display state.
#[derive(Debug)]
pub struct Session {
    text: Text,
    options: ViewOptions,
    animation: AnimationState,
    state: SessionState,
}

impl Session {
    pub fn new(text: Text, options: ViewOptions) -> Self {
        Self {
            text,
            options,
            animation: AnimationState::new(),
            state: SessionState::Idle,
        }
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// Apply one event.
    ///
    /// Ticks only advance the animation. Resizes only record the new size;
    /// the font size is re-selected when the next frame is composed. A size
    /// of zero in either direction puts the session back into `Idle`.
    pub fn handle(&mut self, event: SessionEvent) -> InputResult {
        if self.is_terminated() {
            return InputResult::Quit;
        }

        match event {
            SessionEvent::Tick => {
                self.animation.advance();
                InputResult::Continue
            }
            SessionEvent::Resize(width, height) => {
                let dims = Dimensions::new(width, height);
                self.state = if dims.is_known() {
                    SessionState::Active(dims)
                } else {
                    SessionState::Idle
                };
                InputResult::Continue
            }
            SessionEvent::Quit => {
                self.state = SessionState::Terminated;
                InputResult::Quit
            }
        }
    }

    /// Font size the next frame will use, if the session is active.
    pub fn font_size(&self) -> Option<FontSize> {
        match self.state {
            SessionState::Active(dims) => Some(effective_font_size(&self.text, dims, &self.options)),
            _ => None,
        }
    }

    /// Compose the current frame. `None` once terminated.
    pub fn view(&self) -> Option<String> {
        match self.state {
            SessionState::Idle => Some(LOADING.to_string()),
            SessionState::Active(dims) => Some(compose_frame(
                &self.text,
                dims,
                self.animation.offset(),
                &self.options,
            )),
            SessionState::Terminated => None,
        }
    }
}

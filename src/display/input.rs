//! Input handling for the display session.
//!
//! Translates crossterm events into `SessionEvent`s. Only quit keys and
//! resizes matter; everything else is ignored.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::SessionEvent;

/// Whether a key press ends the session (`q`, `Ctrl+C`, `Esc`).
pub fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Esc => true,
        _ => false,
    }
}

/// Map a terminal event to a session event.
///
/// Key releases (reported on some platforms) are dropped so a single
/// press never counts twice.
pub fn translate_event(event: Event) -> Option<SessionEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release && is_quit_key(&key) => {
            Some(SessionEvent::Quit)
        }
        Event::Resize(cols, rows) => Some(SessionEvent::Resize(cols, rows)),
        _ => None, // Ignore other keys, mouse, focus, paste
    }
}

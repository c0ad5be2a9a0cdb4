//! Mapping from terminal events to game input.

use crate::types::{InputEvent, Key, Point};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

/// Map a terminal event to a game event.
///
/// `to_pixel` projects a terminal cell (column, row) onto the game surface;
/// mouse events outside the projected surface are dropped. Terminals rarely
/// report key releases, so a key press counts as [`InputEvent::KeyUp`].
pub fn map_event(event: &Event, to_pixel: impl Fn(u16, u16) -> Option<Point>) -> Option<InputEvent> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Repeat {
                return None;
            }
            if should_quit(*key) {
                return Some(InputEvent::Quit);
            }
            if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Release {
                return Some(InputEvent::KeyUp(map_key(key.code)));
            }
            None
        }
        Event::Mouse(mouse) => {
            let p = to_pixel(mouse.column, mouse.row)?;
            match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::PointerMove(p)),
                MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::PointerUp(p)),
                _ => None,
            }
        }
        _ => None,
    }
}

pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

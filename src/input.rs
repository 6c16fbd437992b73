use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;

/// High-level commands read from the keyboard.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    /// Turn relative to the current heading on the next tick.
    Act(Action),
    Reset,
    Quit,
}

/// Maps a key press to a command. Turns are relative: Left always turns
/// the snake to its own left.
#[must_use]
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Command::Act(Action::TurnLeft)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Command::Act(Action::TurnRight)),
        KeyCode::Enter | KeyCode::Char('r' | 'R') => Some(Command::Reset),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(Command::Quit),
        _ => None,
    }
}

/// Waits up to `timeout` for a key press and maps it to a command.
pub fn poll_command(timeout: Duration) -> io::Result<Option<Command>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(command_for_key(key)),
        _ => Ok(None),
    }
}

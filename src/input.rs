use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::Difficulty;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit vector `(dx, dy)` in grid coordinates; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    /// Toggles between running and paused.
    Pause,
    Confirm,
    Back,
    Select(Difficulty),
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Decodes one key press into a game intent.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up => GameInput::Direction(Direction::Up),
        KeyCode::Down => GameInput::Direction(Direction::Down),
        KeyCode::Left => GameInput::Direction(Direction::Left),
        KeyCode::Right => GameInput::Direction(Direction::Right),
        KeyCode::Char(' ') | KeyCode::Esc => GameInput::Pause,
        KeyCode::Enter => GameInput::Confirm,
        KeyCode::Backspace => GameInput::Back,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => GameInput::Direction(Direction::Up),
            's' => GameInput::Direction(Direction::Down),
            'a' => GameInput::Direction(Direction::Left),
            'd' => GameInput::Direction(Direction::Right),
            '1' => GameInput::Select(Difficulty::Easy),
            '2' => GameInput::Select(Difficulty::Medium),
            '3' => GameInput::Select(Difficulty::Hard),
            'm' => GameInput::Back,
            'q' => GameInput::Quit,
            _ => return None,
        },
        _ => return None,
    };

    Some(input)
}

/// Non-blocking keyboard reader.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for a key and returns the decoded intent, if any.
    ///
    /// Non-key events (resize, focus, mouse) are swallowed.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key_event(key)),
            _ => Ok(None),
        }
    }
}

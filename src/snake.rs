use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::{direction_change_is_valid, Direction};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// The neighbouring cell one step towards `direction`. May leave the grid.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body and heading state.
///
/// The body is stored head first. Direction requests land in
/// `pending_heading` and are only committed by [`Snake::advance`], so input
/// arriving between ticks can never turn the snake back into its own neck.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
    pending_heading: Direction,
    growth_pending: bool,
}

impl Snake {
    /// Creates a snake of `length` cells centred on `grid`, facing right.
    #[must_use]
    pub fn new(grid: GridSize, length: usize) -> Self {
        let mut snake = Self {
            body: VecDeque::with_capacity(length),
            heading: Direction::Right,
            pending_heading: Direction::Right,
            growth_pending: false,
        };
        snake.reset(grid, length);
        snake
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, heading: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            heading,
            pending_heading: heading,
            growth_pending: false,
        }
    }

    /// Lays the body out horizontally through the grid centre, head rightmost.
    pub fn reset(&mut self, grid: GridSize, length: usize) {
        let start_x = i32::from(grid.width / 2);
        let start_y = i32::from(grid.height / 2);

        self.body.clear();
        for offset in 0..length.max(1) {
            let offset = i32::try_from(offset).unwrap_or(i32::MAX);
            self.body
                .push_back(Position::new(start_x.saturating_sub(offset), start_y));
        }

        self.heading = Direction::Right;
        self.pending_heading = Direction::Right;
        self.growth_pending = false;
    }

    /// Records the direction to try on the next tick. Last call wins.
    pub fn set_pending_heading(&mut self, direction: Direction) {
        self.pending_heading = direction;
    }

    /// Moves one cell, committing the pending heading unless it is a reversal.
    pub fn advance(&mut self) {
        if direction_change_is_valid(self.heading, self.pending_heading) {
            self.heading = self.pending_heading;
        }

        let next_head = self.head().stepped(self.heading);
        self.body.push_front(next_head);

        if self.growth_pending {
            self.growth_pending = false;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Queues growth on the next movement tick.
    pub fn grow(&mut self) {
        self.growth_pending = true;
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns true if the head has left the grid.
    #[must_use]
    pub fn collides_with_wall(&self, bounds: GridSize) -> bool {
        !self.head().is_within_bounds(bounds)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    #[must_use]
    pub fn pending_heading(&self) -> Direction {
        self.pending_heading
    }

    #[must_use]
    pub fn growth_pending(&self) -> bool {
        self.growth_pending
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// The single pickup on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Places food on a uniformly random cell the snake does not occupy.
    ///
    /// Returns `None` when the snake covers the whole grid.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Option<Self> {
        spawn_position(rng, bounds, snake).map(Self::new)
    }

    /// Moves this food to a fresh free cell. Returns `false`, leaving the
    /// position untouched, when no free cell exists.
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: GridSize, snake: &Snake) -> bool {
        match spawn_position(rng, bounds, snake) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }
}

/// Picks a free position uniformly among cells not occupied by the snake.
///
/// Samples directly from the free set, so it terminates even when only one
/// cell is left.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Food, spawn_position};
    use crate::snake::{Position, Snake};

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 2, y: 0 },
            ],
            Direction::Right,
        );

        for _ in 0..100 {
            let food = Food::spawn(
                &mut rng,
                GridSize {
                    width: 8,
                    height: 6,
                },
                &snake,
            )
            .expect("board has free cells");
            assert!(!snake.occupies(food.position));
        }
    }

    #[test]
    fn last_free_cell_is_always_found() {
        let bounds = GridSize {
            width: 3,
            height: 1,
        };
        let snake = Snake::from_segments(
            vec![Position { x: 0, y: 0 }, Position { x: 1, y: 0 }],
            Direction::Left,
        );
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            assert_eq!(
                spawn_position(&mut rng, bounds, &snake),
                Some(Position { x: 2, y: 0 })
            );
        }
    }

    #[test]
    fn full_board_yields_none() {
        let bounds = GridSize {
            width: 2,
            height: 1,
        };
        let snake = Snake::from_segments(
            vec![Position { x: 0, y: 0 }, Position { x: 1, y: 0 }],
            Direction::Left,
        );
        let mut rng = StdRng::seed_from_u64(3);

        assert!(Food::spawn(&mut rng, bounds, &snake).is_none());

        let mut food = Food::new(Position { x: 1, y: 0 });
        assert!(!food.respawn(&mut rng, bounds, &snake));
        assert_eq!(food.position, Position { x: 1, y: 0 });
    }

    #[test]
    fn spawn_reaches_every_free_cell() {
        let bounds = GridSize {
            width: 4,
            height: 4,
        };
        let snake = Snake::new(bounds, 3);
        let mut rng = StdRng::seed_from_u64(99);

        let seen: HashSet<_> = (0..2_000)
            .filter_map(|_| spawn_position(&mut rng, bounds, &snake))
            .collect();

        assert_eq!(seen.len(), bounds.total_cells() - snake.len());
    }
}

use std::time::Duration;

use neon_snake::config::{GameConfig, GridSize};
use neon_snake::food::{Food, spawn_position};
use neon_snake::game::{GameEvent, GameStatus, Simulation};
use neon_snake::input::Direction;
use neon_snake::snake::{Position, Snake};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

proptest! {
    #[test]
    fn ticks_preserve_invariants(seed in any::<u64>(), moves in prop::collection::vec(direction(), 1..200)) {
        let config = GameConfig::default();
        let mut sim = Simulation::new_with_seed(config, seed);
        sim.start(Duration::from_millis(200));

        for direction in moves {
            let len_before = sim.snake().len();
            let score_before = sim.score();
            let growth_due = sim.snake().growth_pending();
            let heading_before = sim.snake().heading();

            sim.set_direction(direction);
            let event = sim.step();

            if sim.status() == GameStatus::GameOver {
                prop_assert!(matches!(event, Some(GameEvent::GameOver { .. })), "expected GameOver event");
                let frozen: Vec<Position> = sim.snake().segments().copied().collect();
                prop_assert_eq!(sim.step(), None);
                let after: Vec<Position> = sim.snake().segments().copied().collect();
                prop_assert_eq!(frozen, after);
                break;
            }

            let expected_len = len_before + usize::from(growth_due);
            prop_assert_eq!(sim.snake().len(), expected_len);
            prop_assert_ne!(sim.snake().heading(), heading_before.opposite());
            prop_assert!(!sim.snake().occupies(sim.food().position));

            match event {
                Some(GameEvent::ScoreChanged { score }) => {
                    prop_assert_eq!(score, score_before + config.points_per_food);
                    prop_assert!(sim.snake().growth_pending());
                }
                None => prop_assert_eq!(sim.score(), score_before),
                Some(GameEvent::GameOver { .. }) => prop_assert!(false, "game over without status"),
            }
            prop_assert_eq!(sim.score() % config.points_per_food, 0);
        }
    }

    #[test]
    fn spawn_avoids_any_partial_occupancy(
        seed in any::<u64>(),
        occupied in prop::collection::hash_set((0i32..6, 0i32..6), 1..35),
    ) {
        let bounds = GridSize::square(6);
        let segments: Vec<Position> = occupied.into_iter().map(|(x, y)| Position::new(x, y)).collect();
        let snake = Snake::from_segments(segments, Direction::Right);
        let mut rng = StdRng::seed_from_u64(seed);

        let position = spawn_position(&mut rng, bounds, &snake);

        prop_assert!(position.is_some());
        let position = position.unwrap_or(Position::new(-1, -1));
        prop_assert!(position.is_within_bounds(bounds));
        prop_assert!(!snake.occupies(position));
    }

    #[test]
    fn reversal_never_commits(start in direction()) {
        let mut snake = Snake::from_segments(vec![Position::new(5, 5)], start);

        snake.set_pending_heading(start.opposite());
        snake.advance();

        prop_assert_eq!(snake.heading(), start);
        prop_assert_eq!(snake.head(), Position::new(5, 5).stepped(start));
    }
}

#[test]
fn respawned_food_stays_off_the_body_on_a_crowded_board() {
    let bounds = GridSize::square(3);
    let snake = Snake::from_segments(
        vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(2, 1),
            Position::new(1, 1),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(1, 2),
        ],
        Direction::Up,
    );
    let mut rng = StdRng::seed_from_u64(1);
    let mut food = Food::new(Position::new(0, 0));

    assert!(food.respawn(&mut rng, bounds, &snake));
    assert_eq!(food.position, Position::new(2, 2));
}

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{Difficulty, GameConfig, GridSize};
use crate::food::Food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Lifecycle of one simulation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Ready,
    Running,
    Paused,
    GameOver,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverReason {
    Wall,
    SelfCollision,
    /// The snake filled every cell, so no food could be placed.
    BoardFilled,
}

/// Outcome of a step that the UI layer has to react to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    ScoreChanged { score: u32 },
    GameOver { score: u32, reason: GameOverReason },
}

/// Read-only view of the board handed to the renderer each frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub snake: &'a Snake,
    pub food: Position,
    pub grid: GridSize,
    pub score: u32,
    pub status: GameStatus,
}

impl Snapshot<'_> {
    /// Iterates the body from head to tail.
    pub fn body(&self) -> impl Iterator<Item = &Position> {
        self.snake.segments()
    }

    #[must_use]
    pub fn heading(&self) -> Direction {
        self.snake.heading()
    }
}

/// The tick engine: one snake, one food, one score.
#[derive(Debug, Clone)]
pub struct Simulation {
    snake: Snake,
    food: Food,
    score: u32,
    status: GameStatus,
    tick_interval: Duration,
    tick_count: u64,
    game_over_reason: Option<GameOverReason>,
    config: GameConfig,
    rng: StdRng,
}

impl Simulation {
    /// Creates an idle simulation seeded from OS entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic simulation for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::new(config.grid, config.initial_snake_length);
        let food = initial_food(&mut rng, config.grid, &snake);

        Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Ready,
            tick_interval: Duration::from_millis(Difficulty::default().tick_interval_ms()),
            tick_count: 0,
            game_over_reason: None,
            config,
            rng,
        }
    }

    /// Puts a fresh snake, food and zero score on the board and returns to `Ready`.
    pub fn reset(&mut self) {
        self.snake
            .reset(self.config.grid, self.config.initial_snake_length);
        self.food = initial_food(&mut self.rng, self.config.grid, &self.snake);
        self.score = 0;
        self.tick_count = 0;
        self.game_over_reason = None;
        self.status = GameStatus::Ready;
    }

    /// Resets and begins a run with `tick_interval` between steps.
    ///
    /// Valid from any state; a running game is restarted.
    pub fn start(&mut self, tick_interval: Duration) {
        self.reset();
        self.tick_interval = tick_interval;
        self.status = GameStatus::Running;
        log::info!(
            "game started: interval={}ms grid={}x{}",
            tick_interval.as_millis(),
            self.config.grid.width,
            self.config.grid.height
        );
    }

    /// Advances simulation by one gameplay tick. A no-op unless running.
    pub fn step(&mut self) -> Option<GameEvent> {
        if self.status != GameStatus::Running {
            return None;
        }

        self.tick_count += 1;
        self.snake.advance();

        if self.snake.collides_with_wall(self.config.grid) {
            return Some(self.finish(GameOverReason::Wall));
        }

        if self.snake.collides_with_self() {
            return Some(self.finish(GameOverReason::SelfCollision));
        }

        if self.snake.head() != self.food.position {
            return None;
        }

        self.snake.grow();
        self.score += self.config.points_per_food;
        log::debug!("food eaten at {:?}, score={}", self.food.position, self.score);

        if !self
            .food
            .respawn(&mut self.rng, self.config.grid, &self.snake)
        {
            return Some(self.finish(GameOverReason::BoardFilled));
        }

        Some(GameEvent::ScoreChanged { score: self.score })
    }

    fn finish(&mut self, reason: GameOverReason) -> GameEvent {
        self.status = GameStatus::GameOver;
        self.game_over_reason = Some(reason);
        log::info!(
            "game over: {reason:?} at {:?}, score={} after {} ticks",
            self.snake.head(),
            self.score,
            self.tick_count
        );
        GameEvent::GameOver {
            score: self.score,
            reason,
        }
    }

    /// Suspends ticking. Ignored unless running.
    pub fn pause(&mut self) {
        if self.status == GameStatus::Running {
            self.status = GameStatus::Paused;
            log::debug!("paused at tick {}", self.tick_count);
        }
    }

    /// Continues a paused run. Ignored unless paused.
    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Running;
            log::debug!("resumed at tick {}", self.tick_count);
        }
    }

    /// Halts the run and returns to `Ready`. Board contents stay for display.
    pub fn stop(&mut self) {
        if self.status != GameStatus::Ready {
            log::debug!("stopped from {:?}", self.status);
        }
        self.status = GameStatus::Ready;
    }

    /// Requests a heading for the next tick. Only honoured while running.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::Running {
            self.snake.set_pending_heading(direction);
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: &self.snake,
            food: self.food.position,
            grid: self.config.grid,
            score: self.score,
            status: self.status,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Food {
        self.food
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Replaces the snake; intended for scripted scenarios.
    pub fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    /// Replaces the food; intended for scripted scenarios.
    pub fn set_food(&mut self, food: Food) {
        self.food = food;
    }
}

// A reset board always has free cells unless the configured snake fills the grid.
fn initial_food(rng: &mut StdRng, grid: GridSize, snake: &Snake) -> Food {
    Food::spawn(rng, grid, snake).unwrap_or(Food::new(Position::new(0, 0)))
}

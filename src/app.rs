use std::time::Duration;

use crate::config::Difficulty;
use crate::game::{GameEvent, GameOverReason, GameStatus, Simulation};
use crate::input::{Direction, GameInput};
use crate::scheduler::Scheduler;
use crate::score::{HighScores, ScoreStore};

/// Result of a finished run, shown on the game-over screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RunSummary {
    pub score: u32,
    pub reason: GameOverReason,
    pub difficulty: Difficulty,
    pub high_score: u32,
    pub new_high_score: bool,
}

/// Which screen is in front.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    Title,
    DifficultySelect { selected: Difficulty },
    Playing,
    GameOver(RunSummary),
}

/// Whether the outer loop keeps going.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Quit,
}

/// Screen flow around the scheduler, plus high-score bookkeeping.
#[derive(Debug)]
pub struct App<S> {
    scheduler: Scheduler,
    store: S,
    screen: Screen,
    difficulty: Difficulty,
    high_score: u32,
}

impl<S: ScoreStore> App<S> {
    #[must_use]
    pub fn new(simulation: Simulation, store: S) -> Self {
        let difficulty = Difficulty::default();
        let high_score = store.get(difficulty);

        Self {
            scheduler: Scheduler::new(simulation),
            store,
            screen: Screen::Title,
            difficulty,
            high_score,
        }
    }

    /// Applies one input intent for the current screen.
    pub fn handle_input(&mut self, input: GameInput) -> AppControl {
        if input == GameInput::Quit {
            self.scheduler.stop();
            return AppControl::Quit;
        }

        match self.screen {
            Screen::Title => match input {
                GameInput::Confirm | GameInput::Pause => self.show_difficulty_select(),
                GameInput::Select(difficulty) => self.start(difficulty),
                _ => {}
            },
            Screen::DifficultySelect { selected } => match input {
                GameInput::Direction(direction) => {
                    self.screen = Screen::DifficultySelect {
                        selected: cycle_difficulty(selected, direction),
                    };
                }
                GameInput::Confirm => self.start(selected),
                GameInput::Select(difficulty) => self.start(difficulty),
                GameInput::Back => self.screen = Screen::Title,
                _ => {}
            },
            Screen::Playing => match input {
                GameInput::Direction(direction) => self.scheduler.set_direction(direction),
                GameInput::Pause => self.scheduler.toggle_pause(),
                GameInput::Confirm if self.is_paused() => self.scheduler.resume(),
                GameInput::Back if self.is_paused() => self.show_difficulty_select(),
                _ => {}
            },
            Screen::GameOver(summary) => match input {
                GameInput::Confirm | GameInput::Pause => self.start(summary.difficulty),
                GameInput::Select(difficulty) => self.start(difficulty),
                GameInput::Back => self.show_difficulty_select(),
                _ => {}
            },
        }

        AppControl::Continue
    }

    /// Frame callback; forwards to the scheduler and reacts to its events.
    pub fn on_frame(&mut self, now: Duration) -> Option<GameEvent> {
        let event = self.scheduler.on_frame(now)?;

        if let GameEvent::GameOver { score, reason } = event {
            self.finish_run(score, reason);
        }

        Some(event)
    }

    /// Starts (or restarts) a run at `difficulty`.
    pub fn start(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.high_score = self.store.get(difficulty);
        self.scheduler.start(difficulty);
        self.screen = Screen::Playing;
    }

    fn show_difficulty_select(&mut self) {
        self.scheduler.stop();
        self.scheduler.simulation_mut().reset();
        self.screen = Screen::DifficultySelect {
            selected: self.difficulty,
        };
    }

    fn finish_run(&mut self, score: u32, reason: GameOverReason) {
        let new_high_score = self.store.set(self.difficulty, score);
        if new_high_score {
            self.high_score = score;
        }

        self.screen = Screen::GameOver(RunSummary {
            score,
            reason,
            difficulty: self.difficulty,
            high_score: self.high_score,
            new_high_score,
        });
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Best score for the active difficulty.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn high_scores(&self) -> HighScores {
        self.store.all()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.scheduler.simulation().status() == GameStatus::Paused
    }

    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        self.scheduler.simulation()
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        self.scheduler.simulation_mut()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

fn cycle_difficulty(current: Difficulty, direction: Direction) -> Difficulty {
    let all = Difficulty::ALL;
    let index = all.iter().position(|d| *d == current).unwrap_or(0);
    let next = match direction {
        Direction::Up | Direction::Left => index.checked_sub(1).unwrap_or(all.len() - 1),
        Direction::Down | Direction::Right => (index + 1) % all.len(),
    };
    all[next]
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::config::{Difficulty, GameConfig};
    use crate::food::Food;
    use crate::game::{GameOverReason, GameStatus, Simulation};
    use crate::input::{Direction, GameInput};
    use crate::score::{MemoryScoreStore, ScoreStore};
    use crate::snake::{Position, Snake};

    use super::{App, AppControl, Screen};

    fn app() -> App<MemoryScoreStore> {
        App::new(
            Simulation::new_with_seed(GameConfig::default(), 5),
            MemoryScoreStore::new(),
        )
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    /// Puts a scripted snake one step from food and then from the right wall.
    fn doomed_run(app: &mut App<MemoryScoreStore>) {
        let sim = app.simulation_mut();
        sim.set_snake(Snake::from_segments(
            vec![Position::new(18, 4), Position::new(17, 4)],
            Direction::Right,
        ));
        sim.set_food(Food::new(Position::new(19, 4)));
    }

    #[test]
    fn title_leads_to_difficulty_select() {
        let mut app = app();
        assert_eq!(app.screen(), Screen::Title);

        app.handle_input(GameInput::Confirm);

        assert_eq!(
            app.screen(),
            Screen::DifficultySelect {
                selected: Difficulty::Medium
            }
        );
    }

    #[test]
    fn difficulty_selection_wraps_and_starts() {
        let mut app = app();
        app.handle_input(GameInput::Confirm);

        app.handle_input(GameInput::Direction(Direction::Down));
        app.handle_input(GameInput::Direction(Direction::Down));
        assert_eq!(
            app.screen(),
            Screen::DifficultySelect {
                selected: Difficulty::Easy
            }
        );

        app.handle_input(GameInput::Confirm);

        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.difficulty(), Difficulty::Easy);
        assert_eq!(app.simulation().tick_interval(), ms(300));
    }

    #[test]
    fn pause_toggle_and_back_to_menu() {
        let mut app = app();
        app.start(Difficulty::Hard);

        app.handle_input(GameInput::Back);
        assert_eq!(app.screen(), Screen::Playing);

        app.handle_input(GameInput::Pause);
        assert!(app.is_paused());

        app.handle_input(GameInput::Pause);
        assert!(!app.is_paused());

        app.handle_input(GameInput::Pause);
        app.handle_input(GameInput::Back);
        assert_eq!(
            app.screen(),
            Screen::DifficultySelect {
                selected: Difficulty::Hard
            }
        );
        assert_eq!(app.simulation().status(), GameStatus::Ready);
    }

    #[test]
    fn game_over_records_high_score() {
        let mut app = app();
        app.start(Difficulty::Medium);
        doomed_run(&mut app);

        app.on_frame(ms(0));
        app.on_frame(ms(200));
        assert_eq!(app.simulation().score(), 10);

        app.on_frame(ms(400));

        let Screen::GameOver(summary) = app.screen() else {
            panic!("expected game over, got {:?}", app.screen());
        };
        assert_eq!(summary.score, 10);
        assert_eq!(summary.reason, GameOverReason::Wall);
        assert!(summary.new_high_score);
        assert_eq!(app.store().get(Difficulty::Medium), 10);
        assert_eq!(app.high_score(), 10);
    }

    #[test]
    fn repeat_score_is_not_a_new_record() {
        let mut app = app();
        for _ in 0..2 {
            app.start(Difficulty::Medium);
            doomed_run(&mut app);
            app.on_frame(ms(0));
            app.on_frame(ms(200));
            app.on_frame(ms(400));
        }

        let Screen::GameOver(summary) = app.screen() else {
            panic!("expected game over");
        };
        assert!(!summary.new_high_score);
        assert_eq!(summary.high_score, 10);
    }

    #[test]
    fn confirm_on_game_over_restarts_same_difficulty() {
        let mut app = app();
        app.start(Difficulty::Hard);
        doomed_run(&mut app);
        app.on_frame(ms(0));
        app.on_frame(ms(120));
        app.on_frame(ms(240));
        assert!(matches!(app.screen(), Screen::GameOver(_)));

        app.handle_input(GameInput::Confirm);

        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.difficulty(), Difficulty::Hard);
        assert_eq!(app.simulation().score(), 0);
    }

    #[test]
    fn quit_is_honoured_everywhere() {
        let mut app = app();
        assert_eq!(app.handle_input(GameInput::Quit), AppControl::Quit);

        app.start(Difficulty::Easy);
        assert_eq!(app.handle_input(GameInput::Quit), AppControl::Quit);
        assert_eq!(app.simulation().status(), GameStatus::Ready);
    }
}

//! Neon grid snake: a deterministic tick engine with a terminal front end.
//!
//! [`game::Simulation`] advances one snake and one food item per step;
//! [`scheduler::Scheduler`] turns frame timestamps into steps at the
//! difficulty's interval; [`app::App`] layers the menu flow and high scores
//! on top, and [`renderer`] draws read-only snapshots with ratatui.

pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logger;
pub mod renderer;
pub mod scheduler;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;

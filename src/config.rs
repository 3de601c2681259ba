use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Cells along each side of the square play field.
pub const GRID_SIZE: u16 = 20;

/// Body length of a freshly reset snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Score granted for each food eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Delay between frame callbacks in the terminal loop.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Square grid with `side` cells per edge.
    #[must_use]
    pub const fn square(side: u16) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::square(GRID_SIZE)
    }
}

/// Difficulty presets, each mapping to a fixed tick interval.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All presets in menu order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Milliseconds between simulation ticks.
    #[must_use]
    pub fn tick_interval_ms(self) -> u64 {
        match self {
            Self::Easy => 300,
            Self::Medium => 200,
            Self::Hard => 120,
        }
    }

    /// Stable identifier used as the high-score key.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Human-readable label for menus and the HUD.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}

/// Tunables for one simulation instance.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub initial_snake_length: usize,
    pub points_per_food: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            initial_snake_length: INITIAL_SNAKE_LENGTH,
            points_per_food: POINTS_PER_FOOD,
        }
    }
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub grid_dot: Color,
    pub border_fg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_accent: Color,
    pub menu_footer: Color,
}

/// Cyan head, magenta body and yellow food on a near-black field.
pub const THEME_NEON: Theme = Theme {
    snake_head: Color::Rgb(0x00, 0xff, 0xff),
    snake_body: Color::Rgb(0xff, 0x00, 0xff),
    food: Color::Rgb(0xff, 0xff, 0x00),
    play_bg: Color::Rgb(0x05, 0x07, 0x14),
    grid_dot: Color::Rgb(0x0d, 0x1f, 0x2a),
    border_fg: Color::Rgb(0x00, 0xff, 0xff),
    hud_label: Color::Rgb(0x00, 0x66, 0x66),
    hud_value: Color::White,
    menu_title: Color::Rgb(0xff, 0x00, 0xff),
    menu_accent: Color::Rgb(0x00, 0xff, 0x00),
    menu_footer: Color::DarkGray,
};

/// Each logical cell is drawn two terminal columns wide so the grid looks square.
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_SNAKE_SEGMENT: &str = "██";
pub const GLYPH_FOOD: &str = "◆ ";
pub const GLYPH_EMPTY: &str = "· ";

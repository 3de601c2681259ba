use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType};

use crate::app::{App, Screen};
use crate::config::{
    CELL_WIDTH, GLYPH_EMPTY, GLYPH_FOOD, GLYPH_SNAKE_SEGMENT, GridSize, THEME_NEON, Theme,
};
use crate::game::Snapshot;
use crate::score::ScoreStore;
use crate::snake::Position;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{
    render_difficulty_menu, render_game_over_menu, render_pause_menu, render_title_menu,
};

/// Renders the full game frame from immutable state.
pub fn render<S: ScoreStore>(frame: &mut Frame<'_>, app: &App<S>) {
    let theme = &THEME_NEON;
    let snapshot = app.simulation().snapshot();
    let area = frame.area();

    let play_area = render_hud(
        frame,
        area,
        &HudInfo {
            score: snapshot.score,
            high_score: app.high_score(),
            difficulty: app.difficulty(),
            theme,
        },
    );
    let board_area = centered_board(play_area, snapshot.grid);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_board(frame, inner, &snapshot, theme);

    match app.screen() {
        Screen::Title => render_title_menu(frame, board_area, theme),
        Screen::DifficultySelect { selected } => {
            render_difficulty_menu(frame, board_area, selected, app.high_scores(), theme);
        }
        Screen::Playing if app.is_paused() => render_pause_menu(frame, board_area, theme),
        Screen::Playing => {}
        Screen::GameOver(summary) => render_game_over_menu(frame, board_area, &summary, theme),
    }
}

/// Outer rectangle (including border) for the board, centred in `area`.
fn centered_board(area: Rect, grid: GridSize) -> Rect {
    let width = grid.width.saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = grid.height.saturating_add(2);

    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, board, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(column);

    board
}

fn render_board(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let buffer = frame.buffer_mut();

    let background = Style::new().fg(theme.grid_dot).bg(theme.play_bg);
    for y in 0..i32::from(snapshot.grid.height) {
        for x in 0..i32::from(snapshot.grid.width) {
            if let Some((col, row)) = logical_to_terminal(inner, snapshot.grid, Position { x, y }) {
                buffer.set_string(col, row, GLYPH_EMPTY, background);
            }
        }
    }

    if let Some((col, row)) = logical_to_terminal(inner, snapshot.grid, snapshot.food) {
        buffer.set_string(
            col,
            row,
            GLYPH_FOOD,
            Style::new()
                .fg(theme.food)
                .bg(theme.play_bg)
                .add_modifier(Modifier::BOLD),
        );
    }

    // Tail first so the head wins if it overlaps the body after a collision.
    let body: Vec<_> = snapshot.body().copied().collect();
    for (index, segment) in body.iter().enumerate().rev() {
        let Some((col, row)) = logical_to_terminal(inner, snapshot.grid, *segment) else {
            continue;
        };

        let color = if index == 0 {
            theme.snake_head
        } else {
            theme.snake_body
        };
        buffer.set_string(
            col,
            row,
            GLYPH_SNAKE_SEGMENT,
            Style::new().fg(color).bg(theme.play_bg),
        );
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use crate::app::App;
    use crate::config::{Difficulty, GameConfig, GridSize};
    use crate::game::Simulation;
    use crate::score::MemoryScoreStore;
    use crate::snake::Position;

    use super::{logical_to_terminal, render};

    fn screen_text(app: &App<MemoryScoreStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, app))
            .expect("draw should succeed");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn cells_map_to_double_width_columns() {
        let inner = Rect::new(5, 3, 40, 20);
        let grid = GridSize::square(20);

        assert_eq!(
            logical_to_terminal(inner, grid, Position::new(0, 0)),
            Some((5, 3))
        );
        assert_eq!(
            logical_to_terminal(inner, grid, Position::new(19, 19)),
            Some((43, 22))
        );
        assert_eq!(logical_to_terminal(inner, grid, Position::new(-1, 0)), None);
    }

    #[test]
    fn title_screen_is_drawn() {
        let app = App::new(
            Simulation::new_with_seed(GameConfig::default(), 1),
            MemoryScoreStore::new(),
        );

        let text = screen_text(&app);

        assert!(text.contains("NEON SNAKE"));
        assert!(text.contains("SCORE"));
    }

    #[test]
    fn playing_screen_shows_snake_and_difficulty() {
        let mut app = App::new(
            Simulation::new_with_seed(GameConfig::default(), 1),
            MemoryScoreStore::new(),
        );
        app.start(Difficulty::Hard);

        let text = screen_text(&app);

        assert!(text.contains("HARD"));
        assert!(text.contains('█'));
        assert!(text.contains('◆'));
    }
}

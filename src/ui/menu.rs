use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::app::RunSummary;
use crate::config::{Difficulty, Theme};
use crate::game::GameOverReason;
use crate::score::HighScores;
use crate::ui::hud::format_counter;

/// Draws the title screen as a centered popup.
pub fn render_title_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, 80, 50);
    frame.render_widget(Clear, popup);

    let lines = vec![
        title_line("NEON SNAKE", theme),
        Line::from(""),
        Line::from("[Enter] Start"),
        Line::from("[Q] Quit"),
        Line::from(""),
        footer_line("Arrows/WASD move  Space pause", theme),
    ];

    frame.render_widget(popup_paragraph(lines, " start ", theme), popup);
}

/// Draws the difficulty picker with the stored best score for each level.
pub fn render_difficulty_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    selected: Difficulty,
    high_scores: HighScores,
    theme: &Theme,
) {
    let popup = centered_popup(area, 80, 60);
    frame.render_widget(Clear, popup);

    let mut lines = vec![title_line("SELECT DIFFICULTY", theme), Line::from("")];
    for (index, difficulty) in Difficulty::ALL.into_iter().enumerate() {
        let marker = if difficulty == selected { ">" } else { " " };
        let text = format!(
            "{marker} [{}] {:<6} {:>5} PTS",
            index + 1,
            difficulty.label(),
            high_scores.get(difficulty)
        );
        let style = if difficulty == selected {
            Style::new()
                .fg(theme.menu_accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new()
        };
        lines.push(Line::styled(text, style));
    }
    lines.push(Line::from(""));
    lines.push(footer_line("[Enter] Play  [Bksp] Back", theme));

    frame.render_widget(popup_paragraph(lines, " difficulty ", theme), popup);
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        title_line("PAUSED", theme),
        Line::from(""),
        Line::from("[Space]/[Esc] Resume"),
        Line::from("[M] Menu  [Q] Quit"),
    ];

    frame.render_widget(popup_paragraph(lines, " pause ", theme), popup);
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    summary: &RunSummary,
    theme: &Theme,
) {
    let popup = centered_popup(area, 80, 60);
    frame.render_widget(Clear, popup);

    let lines = vec![
        title_line("GAME OVER", theme),
        Line::from(""),
        Line::from(format!("Score: {}", format_counter(summary.score))),
        Line::from(format!("High score: {}", format_counter(summary.high_score))),
        Line::from(format!("Difficulty: {}", summary.difficulty.label())),
        Line::from(reason_text(summary.reason)),
        if summary.new_high_score {
            Line::styled(
                "NEW HIGH SCORE!",
                Style::new()
                    .fg(theme.menu_accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Line::from("")
        },
        Line::from(""),
        footer_line("[Enter] Again [M] Menu [Q] Quit", theme),
    ];

    frame.render_widget(popup_paragraph(lines, " game over ", theme), popup);
}

fn reason_text(reason: GameOverReason) -> &'static str {
    match reason {
        GameOverReason::Wall => "Cause: hit wall",
        GameOverReason::SelfCollision => "Cause: hit yourself",
        GameOverReason::BoardFilled => "Board cleared!",
    }
}

fn title_line(text: &'static str, theme: &Theme) -> Line<'static> {
    Line::styled(
        text,
        Style::new()
            .fg(theme.menu_title)
            .add_modifier(Modifier::BOLD),
    )
}

fn footer_line(text: &'static str, theme: &Theme) -> Line<'static> {
    Line::styled(text, Style::new().fg(theme.menu_footer))
}

fn popup_paragraph<'a>(lines: Vec<Line<'a>>, title: &'a str, theme: &Theme) -> Paragraph<'a> {
    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(theme.border_fg))
            .title(title),
    )
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

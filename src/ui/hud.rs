use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::{Difficulty, Theme};

const HUD_GAP: &str = "   ";

/// Values displayed by the HUD row.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub score: u32,
    pub high_score: u32,
    pub difficulty: Difficulty,
    pub theme: &'a Theme,
}

/// Renders the score row and returns the remaining play area below it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, info: &HudInfo<'_>) -> Rect {
    let [score_area, _, play_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let alignment = if score_line_width(info) > usize::from(score_area.width) {
        Alignment::Left
    } else {
        Alignment::Center
    };

    frame.render_widget(
        Paragraph::new(score_line(info)).alignment(alignment),
        score_area,
    );

    play_area
}

/// Score counters are zero-padded to four digits.
#[must_use]
pub fn format_counter(value: u32) -> String {
    format!("{value:04}")
}

fn score_line(info: &HudInfo<'_>) -> Line<'static> {
    let label = Style::new().fg(info.theme.hud_label);
    let value = Style::new()
        .fg(info.theme.hud_value)
        .add_modifier(Modifier::BOLD);

    let difficulty = format!("({})", info.difficulty.label());
    let spans = vec![
        Span::styled("SCORE ", label),
        Span::styled(format_counter(info.score), value),
        Span::raw(HUD_GAP),
        Span::styled("HI ", label),
        Span::styled(format_counter(info.high_score), value),
        Span::raw(HUD_GAP),
        Span::styled(difficulty, Style::new().fg(info.theme.menu_title)),
    ];

    Line::from(spans)
}

/// Display width of the HUD row, used to decide whether it can be centred.
#[must_use]
pub fn score_line_width(info: &HudInfo<'_>) -> usize {
    score_line(info)
        .spans
        .iter()
        .map(|span| UnicodeWidthStr::width(span.content.as_ref()))
        .sum()
}

//! Command input line and help pane rendering

use crate::parser::parse::help_text;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PROMPT: &str = "> ";

/// Render the input line and place the terminal cursor at its end
pub fn render_input_pane(frame: &mut Frame, area: Rect, title: &str, input: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    // Keep the end of a long line in view
    let content_width = area.width.saturating_sub(2 + PROMPT.len() as u16 + 1) as usize;
    let input_len = input.chars().count();
    let skip = input_len.saturating_sub(content_width);
    let shown: String = input.chars().skip(skip).collect();

    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(shown.clone(), Style::default().fg(DEFAULT_THEME.fg)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    let cursor_x = area.x + 1 + PROMPT.len() as u16 + shown.chars().count() as u16;
    frame.set_cursor_position((cursor_x, area.y + 1));
}

/// Render the help listing
pub fn render_help_pane(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let lines: Vec<Line> = help_text()
        .lines()
        .map(|line| match line.split_once(" - ") {
            Some((usage, description)) => Line::from(vec![
                Span::styled(
                    usage.to_string(),
                    Style::default()
                        .fg(DEFAULT_THEME.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" - {}", description),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ]),
            None => Line::styled(line.to_string(), Style::default().fg(DEFAULT_THEME.comment)),
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// How the last status message should be colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Notice,
    Error,
}

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub kind: StatusKind,
    pub snapshots: usize,
    /// Estimated bytes held by the history
    pub memory_used: usize,
    pub memory_limit: usize,
    pub is_replaying: bool,
    pub is_initialized: bool,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: snapshot count and the last message
    let message_color = match data.kind {
        StatusKind::Info => DEFAULT_THEME.fg,
        StatusKind::Notice => DEFAULT_THEME.warning,
        StatusKind::Error => DEFAULT_THEME.error,
    };

    // Turns yellow once the history has used most of its budget
    let memory_color = if data.memory_used.saturating_mul(5) >= data.memory_limit.saturating_mul(4)
    {
        DEFAULT_THEME.warning
    } else {
        DEFAULT_THEME.success
    };

    let left = Line::from(vec![
        Span::styled(
            format!(" {} snapshots ", data.snapshots),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " {}/{} ",
                format_bytes(data.memory_used),
                format_bytes(data.memory_limit)
            ),
            Style::default().bg(memory_color).fg(Color::Black),
        ),
        Span::styled(
            format!(" {}", data.message),
            Style::default().fg(message_color),
        ),
    ]);
    let left_paragraph =
        Paragraph::new(left).style(Style::default().bg(DEFAULT_THEME.current_line_bg));
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ↵ ", key_style),
        Span::styled(" run ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" history ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" esc ", key_style),
        Span::styled(" stop/clear ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ^C ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let indicator = if data.is_replaying {
        Some((" ▶ REPLAY ", DEFAULT_THEME.secondary))
    } else if !data.is_initialized {
        Some((" SIZE? ", DEFAULT_THEME.warning))
    } else {
        None
    };

    if let Some((label, color)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}

fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;
    if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

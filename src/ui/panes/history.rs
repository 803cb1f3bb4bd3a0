//! History pane rendering

use crate::snapshot::SnapshotManager;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Scroll state for the history pane
pub struct HistoryScrollState {
    pub offset: usize,
    pub prev_item_count: usize,
}

impl HistoryScrollState {
    pub fn new() -> Self {
        HistoryScrollState {
            offset: 0,
            prev_item_count: 0,
        }
    }
}

impl Default for HistoryScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Data needed to render the history pane
pub struct HistoryRenderData<'a> {
    pub history: &'a SnapshotManager,
    /// History index of the snapshot currently being replayed
    pub highlighted: Option<usize>,
}

/// Render the history pane, one row per recorded snapshot
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    data: HistoryRenderData,
    scroll_state: &mut HistoryScrollState,
) {
    let block = Block::default()
        .title(format!(" History ({}) ", data.history.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if data.history.is_empty() {
        let paragraph = Paragraph::new("(no snapshots)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let total_items = data.history.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = total_items.saturating_sub(visible_height);

    // Follow new snapshots and the replayed frame; otherwise keep the user's position
    if let Some(index) = data.highlighted {
        if index < scroll_state.offset {
            scroll_state.offset = index;
        } else if index >= scroll_state.offset + visible_height {
            scroll_state.offset = index + 1 - visible_height;
        }
    } else if total_items != scroll_state.prev_item_count {
        scroll_state.offset = max_scroll;
    }
    scroll_state.offset = scroll_state.offset.min(max_scroll);
    scroll_state.prev_item_count = total_items;

    let number_width = total_items.to_string().len();
    let items: Vec<ListItem> = (scroll_state.offset..total_items)
        .take(visible_height)
        .filter_map(|index| data.history.get(index).map(|view| (index, view)))
        .map(|(index, view)| {
            let is_highlighted = data.highlighted == Some(index);
            let marker = if is_highlighted { "▶ " } else { "  " };
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(
                    format!("#{:<width$} ", index + 1, width = number_width),
                    Style::default().fg(DEFAULT_THEME.primary),
                ),
                Span::styled(
                    format!("{} slots, {} blocks", view.len(), view.total_blocks()),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ]);

            let style = if is_highlighted {
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

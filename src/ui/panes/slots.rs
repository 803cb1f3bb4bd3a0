//! Slot pane rendering
//!
//! Draws one row per slot: the slot id, a bar with one marker per block and
//! the block count. During a replay the pane shows the replayed state instead
//! of the live one and says so in its title.

use crate::slots::SlotSetView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Data needed to render the slot pane
pub struct SlotsRenderData<'a> {
    /// `None` until the slots have been sized for the first time
    pub view: Option<&'a SlotSetView>,
    pub marker: char,
    /// `(frame, total)` while a replay is playing, 1-based
    pub replay_progress: Option<(usize, usize)>,
}

/// Render the slot pane
pub fn render_slots_pane(frame: &mut Frame, area: Rect, data: SlotsRenderData) {
    let (title, border_style) = match data.replay_progress {
        Some((current, total)) => (
            format!(" Replay {}/{} ", current, total),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        None => (
            " Slots ".to_string(),
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let Some(view) = data.view else {
        let paragraph = Paragraph::new("Input an integer size to initialize your SlotBot")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    if view.is_empty() {
        let paragraph = Paragraph::new("(no slots)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let id_width = view.len().to_string().len();
    let content_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = view
        .iter()
        .map(|(slot, count)| {
            let label = format!(" {:>width$} │ ", slot, width = id_width);
            let suffix = format!(" {}", count);
            let bar_room = content_width.saturating_sub(label.chars().count() + suffix.len());

            // Clip long stacks to the pane and mark the clipped end
            let shown = (count as usize).min(bar_room);
            let mut bar: String = std::iter::repeat(data.marker).take(shown).collect();
            if (count as usize) > bar_room && shown > 0 {
                bar.pop();
                bar.push('…');
            }

            ListItem::new(Line::from(vec![
                Span::styled(label, Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(bar, Style::default().fg(DEFAULT_THEME.block)),
                Span::styled(suffix, Style::default().fg(DEFAULT_THEME.comment)),
            ]))
        })
        .collect();

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let hidden = items.len().saturating_sub(visible_height);
    let mut visible: Vec<ListItem> = items.into_iter().take(visible_height).collect();
    if hidden > 0 {
        visible.pop();
        visible.push(
            ListItem::new(format!(" … {} more slots", hidden + 1))
                .style(Style::default().fg(DEFAULT_THEME.comment)),
        );
    }

    frame.render_widget(List::new(visible).block(block), area);
}

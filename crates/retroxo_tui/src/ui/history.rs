//! History list rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Label for a history entry.
pub fn entry_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// Renders the history pane: one entry per snapshot, the displayed
/// snapshot marked with `>`.
pub fn render_history(f: &mut Frame, area: Rect, app: &App) {
    let current = app.game().move_count();
    let items: Vec<ListItem> = (0..app.game().len())
        .map(|step| {
            let marker = if step == current { ">" } else { " " };
            let mut style = Style::default();
            if step == current {
                style = style.add_modifier(Modifier::BOLD);
            }
            ListItem::new(format!("{} {}", marker, entry_label(step))).style(style)
        })
        .collect();

    let highlight = if app.focus() == Focus::History {
        Style::default().bg(Color::Gray).fg(Color::Black)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("History"))
        .highlight_style(highlight);

    let mut state = ListState::default();
    state.select(Some(app.history_cursor()));
    f.render_stateful_widget(list, area, &mut state);
}

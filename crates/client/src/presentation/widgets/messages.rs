//! Messages widget displaying recent game events.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

/// Height of message panel in lines, borders included.
pub const MESSAGE_PANEL_HEIGHT: u16 = 7;

/// Render the message log panel, newest at the bottom.
pub fn render(frame: &mut Frame, area: Rect, messages: &[String]) {
    let visible = MESSAGE_PANEL_HEIGHT.saturating_sub(2) as usize;
    let items: Vec<ListItem> = messages
        .iter()
        .rev()
        .take(visible)
        .map(|text| ListItem::new(text.as_str()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

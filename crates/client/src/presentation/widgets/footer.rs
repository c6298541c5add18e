//! Key hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

const HINTS: &str = "arrows/wasd/hjkl move  f attack  e herb  r reset  q quit";

pub fn render(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(HINTS).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

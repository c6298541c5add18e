//! Status bar with player HP and herbs.

use game_core::PlayerState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, player: &PlayerState) {
    let line = Line::from(vec![
        Span::raw("HP "),
        Span::styled(
            format!("{}/{}", player.hp, player.max_hp),
            Style::default().fg(hp_color(player.hp, player.max_hp)),
        ),
        Span::raw("   Herbs "),
        Span::styled(player.herbs.to_string(), Style::default().fg(Color::LightGreen)),
    ]);

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Player"));
    frame.render_widget(paragraph, area);
}

/// Green above half, yellow above a quarter, red below.
fn hp_color(hp: u32, max: u32) -> Color {
    let max = max.max(1);
    if hp * 2 > max {
        Color::Green
    } else if hp * 4 > max {
        Color::Yellow
    } else {
        Color::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hp_color_thresholds() {
        assert_eq!(hp_color(50, 50), Color::Green);
        assert_eq!(hp_color(25, 50), Color::Yellow);
        assert_eq!(hp_color(12, 50), Color::Red);
        assert_eq!(hp_color(0, 0), Color::Red);
    }
}

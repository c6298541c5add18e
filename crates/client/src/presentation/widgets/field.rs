//! Field widget rendering the tile grid and the player.

use game_core::{CardinalDirection, FieldView, PlayerState, Position, TileFlags};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the field panel. One character per tile.
pub fn render(frame: &mut Frame, area: Rect, field: &FieldView, player: &PlayerState) {
    let rows: Vec<Line> = field
        .rows()
        .enumerate()
        .map(|(y, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(x, &flags)| {
                    let position = Position::new(x as i32, y as i32);
                    if position == player.position {
                        Span::styled(
                            player_glyph(player.facing).to_string(),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else {
                        let (glyph, style) = tile_glyph(flags);
                        Span::styled(glyph.to_string(), style)
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(rows).block(Block::default().borders(Borders::ALL).title("Field"));
    frame.render_widget(paragraph, area);
}

pub fn player_glyph(facing: CardinalDirection) -> char {
    match facing {
        CardinalDirection::North => '^',
        CardinalDirection::South => 'v',
        CardinalDirection::East => '>',
        CardinalDirection::West => '<',
    }
}

/// Obstacles win over decoration.
pub fn tile_glyph(flags: TileFlags) -> (char, Style) {
    if flags.contains(TileFlags::TREE) {
        ('T', Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else if flags.contains(TileFlags::WATER) {
        ('~', Style::default().fg(Color::Blue))
    } else if flags.contains(TileFlags::GRASS) {
        (',', Style::default().fg(Color::LightGreen))
    } else {
        ('.', Style::default().fg(Color::DarkGray))
    }
}

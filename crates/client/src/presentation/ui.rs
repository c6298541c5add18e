//! Frame layout and panel composition.
use anyhow::Result;
use game_core::GameSnapshot;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::terminal::Tui;
use super::widgets::{battle, field, footer, messages, status};

pub fn render(terminal: &mut Tui, snapshot: &GameSnapshot) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, snapshot))?;
    Ok(())
}

pub fn render_frame(frame: &mut Frame, snapshot: &GameSnapshot) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(messages::MESSAGE_PANEL_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.area());

    // Field is one column per tile plus borders.
    let field_width = u16::try_from(snapshot.field.dimensions.width)
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(field_width), Constraint::Min(24)])
        .split(rows[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(body[1]);

    field::render(frame, body[0], &snapshot.field, &snapshot.player);
    status::render(frame, side[0], &snapshot.player);
    battle::render(frame, side[1], snapshot.battle.as_ref());
    messages::render(frame, rows[1], &snapshot.messages);
    footer::render(frame, rows[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_content::ContentFactory;
    use game_core::{FieldView, GameState, TileFlags};
    use ratatui::{Terminal, backend::TestBackend};
    use runtime::OracleManager;

    #[test]
    fn draws_field_and_status() {
        let content = ContentFactory::builtin().load_all().unwrap();
        let oracles = OracleManager::from_content(content);
        let state = GameState::new(1, &oracles.as_game_env()).unwrap();
        let field: FieldView = oracles.field_view().clone();
        assert_eq!(field.flags_at(game_core::Position::new(3, 2)), TileFlags::TREE);
        let snapshot = GameSnapshot::capture(&state, field);

        let mut terminal = Terminal::new(TestBackend::new(80, 34)).unwrap();
        terminal.draw(|frame| render_frame(frame, &snapshot)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("HP 50/50"));
        assert!(text.contains("No enemies in sight."));
        // Player starts on (0, 0) facing south, drawn inside the border.
        assert_eq!(buffer[(1, 1)].symbol(), "v");
        assert_eq!(buffer[(4, 3)].symbol(), "T");
    }
}

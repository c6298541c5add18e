//! Battle panel: enemy, turn and the latest battle message.

use game_core::{BattlePhase, BattleSession};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect, battle: Option<&BattleSession>) {
    let block = Block::default().borders(Borders::ALL).title("Battle");

    let Some(battle) = battle else {
        let idle = Paragraph::new(Line::styled(
            "No enemies in sight.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(idle, area);
        return;
    };

    let enemy = &battle.enemy;
    let lines = vec![
        Line::from(Span::styled(
            enemy.name().to_owned(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::styled(
            format!("sprite: {}", enemy.template.sprite),
            Style::default().fg(Color::DarkGray),
        ),
        Line::from(format!("HP {}/{}", enemy.current_hp, enemy.max_hp())),
        Line::from(""),
        Line::styled(turn_label(battle.phase), turn_style(battle.phase)),
        Line::from(""),
        Line::from(battle.last_message.clone()),
    ];

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

pub fn turn_label(phase: BattlePhase) -> &'static str {
    match phase {
        BattlePhase::PlayerTurn => "Your turn: [f] attack  [e] herb",
        BattlePhase::EnemyTurn => "Enemy's turn...",
        BattlePhase::AwaitingVictory | BattlePhase::ResolvingVictory => "Victory!",
        BattlePhase::Ended => "Battle over",
    }
}

fn turn_style(phase: BattlePhase) -> Style {
    match phase {
        BattlePhase::PlayerTurn => Style::default().fg(Color::Cyan),
        BattlePhase::EnemyTurn => Style::default().fg(Color::Red),
        BattlePhase::AwaitingVictory | BattlePhase::ResolvingVictory => {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        }
        BattlePhase::Ended => Style::default().fg(Color::DarkGray),
    }
}

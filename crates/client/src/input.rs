//! Keyboard-to-command mapping.
//!
//! Kept free of runtime calls so the bindings can be tested on plain
//! `KeyEvent`s.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::CardinalDirection;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Move(CardinalDirection),
    Attack,
    UseHerb,
    /// Start a fresh session.
    Reset,
    None,
}

/// Converts a raw key event into a higher-level command.
///
/// Arrows, WASD and hjkl move; `f` or Enter attacks; `e` uses an herb;
/// `r` resets; `q`, Esc or Ctrl-C quits.
pub fn handle_key(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,

        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => {
            KeyAction::Move(CardinalDirection::North)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => {
            KeyAction::Move(CardinalDirection::South)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => {
            KeyAction::Move(CardinalDirection::East)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => {
            KeyAction::Move(CardinalDirection::West)
        }

        KeyCode::Char('f') | KeyCode::Enter => KeyAction::Attack,
        KeyCode::Char('e') => KeyAction::UseHerb,
        KeyCode::Char('r') => KeyAction::Reset,

        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyAction {
        handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn movement_keys_share_directions() {
        for (keys, direction) in [
            ([KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('k')], CardinalDirection::North),
            ([KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('j')], CardinalDirection::South),
            ([KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('l')], CardinalDirection::East),
            ([KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('h')], CardinalDirection::West),
        ] {
            for key in keys {
                assert_eq!(press(key), KeyAction::Move(direction));
            }
        }
    }

    #[test]
    fn battle_and_session_keys() {
        assert_eq!(press(KeyCode::Char('f')), KeyAction::Attack);
        assert_eq!(press(KeyCode::Enter), KeyAction::Attack);
        assert_eq!(press(KeyCode::Char('e')), KeyAction::UseHerb);
        assert_eq!(press(KeyCode::Char('r')), KeyAction::Reset);
        assert_eq!(press(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(press(KeyCode::Esc), KeyAction::Quit);
        assert_eq!(press(KeyCode::Char('x')), KeyAction::None);
    }

    #[test]
    fn control_c_quits_but_other_chords_do_nothing() {
        let ctrl = |c| handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
        assert_eq!(ctrl('c'), KeyAction::Quit);
        assert_eq!(ctrl('w'), KeyAction::None);
    }
}

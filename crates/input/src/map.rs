//! Key mapping from terminal events to player actions.

use crate::types::{CursorMove, Phase, UiAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to an action for the given phase.
pub fn handle_key_event(key: KeyEvent, phase: Phase) -> Option<UiAction> {
    match phase {
        Phase::Home => match key.code {
            KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => Some(UiAction::StartGame),
            KeyCode::Char('l') | KeyCode::Char('L') => Some(UiAction::ViewLeaderboard),
            _ => None,
        },
        Phase::Playing => match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
                Some(UiAction::MoveCursor(CursorMove::Left))
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(UiAction::MoveCursor(CursorMove::Right))
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
                Some(UiAction::MoveCursor(CursorMove::Up))
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
                Some(UiAction::MoveCursor(CursorMove::Down))
            }
            KeyCode::Char(' ') | KeyCode::Enter => Some(UiAction::FlipCursor),
            _ => None,
        },
        Phase::Result => match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::StartGame),
            KeyCode::Char('l') | KeyCode::Char('L') => Some(UiAction::ViewLeaderboard),
            _ => None,
        },
        Phase::Leaderboard => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('B') => {
                Some(UiAction::BackHome)
            }
            _ => None,
        },
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

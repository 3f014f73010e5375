use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::round::Phase;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Type(char),
    Backspace,
    EndRound,
    Restart,
    Quit,
    Nothing,
}

pub fn action_for(key: &KeyEvent, phase: Phase) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Nothing;
    }

    match key.code {
        KeyCode::Esc => return Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Action::Quit
        }
        _ => {}
    }

    match phase {
        Phase::NotStarted | Phase::Running => match key.code {
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Tab => Action::EndRound,
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Action::Type(c)
            }
            _ => Action::Nothing,
        },
        Phase::Over => match key.code {
            KeyCode::Char('r') | KeyCode::Enter => Action::Restart,
            _ => Action::Nothing,
        },
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    Dismiss,
    Restart,
    AvoidRoom,
    Play { slot: usize, barehanded: bool },
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::Dismiss,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Char('r') | KeyCode::Char('R') => InputAction::Restart,
        KeyCode::Char('a') | KeyCode::Char('A') => InputAction::AvoidRoom,
        KeyCode::Char(ch) => match slot_key(ch) {
            Some((slot, shifted)) => InputAction::Play {
                slot,
                barehanded: shifted || key.modifiers.contains(KeyModifiers::SHIFT),
            },
            None => InputAction::None,
        },
        _ => InputAction::None,
    }
}

/// Digits and vim keys pick a slot; their shifted forms fight barehanded.
fn slot_key(ch: char) -> Option<(usize, bool)> {
    match ch {
        '1' | 'h' => Some((0, false)),
        '2' | 'j' => Some((1, false)),
        '3' | 'k' => Some((2, false)),
        '4' | 'l' => Some((3, false)),
        '!' | 'H' => Some((0, true)),
        '@' | 'J' => Some((1, true)),
        '#' | 'K' => Some((2, true)),
        '$' | 'L' => Some((3, true)),
        _ => None,
    }
}

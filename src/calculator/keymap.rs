use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::{Action, CalcCommand, Operator};

/// Map a keyboard character onto a calculator command
pub fn command_for_char(c: char) -> Option<CalcCommand> {
    match c {
        '0'..='9' => c.to_digit(10).map(|d| CalcCommand::Digit(d as u8)),
        '.' => Some(CalcCommand::Point),
        '=' => Some(CalcCommand::Action(Action::Equals)),
        _ => Operator::from_symbol(c).map(CalcCommand::Operator),
    }
}

/// Map a terminal key press onto a calculator command.
///
/// Keys with Ctrl or Alt held are left to the host so shortcuts like Ctrl+C
/// keep working.
pub fn command_for_key(key: KeyEvent) -> Option<CalcCommand> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Char(c) => command_for_char(c),
        KeyCode::Enter => Some(CalcCommand::Action(Action::Equals)),
        KeyCode::Esc => Some(CalcCommand::Action(Action::Clear)),
        KeyCode::Backspace => Some(CalcCommand::Action(Action::Delete)),
        _ => None,
    }
}

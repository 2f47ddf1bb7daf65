use serde::{Deserialize, Serialize};

use super::keymap::command_for_char;

/// The four arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Parse the ASCII symbol used on keyboards
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Glyph shown in the previous-operation indicator
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

/// Non-arithmetic calculator buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Clear,
    Delete,
    Equals,
}

/// Every input the calculator understands, whatever adapter produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcCommand {
    /// A single decimal digit, 0 through 9
    Digit(u8),
    Point,
    Operator(Operator),
    Action(Action),
}

impl CalcCommand {
    /// The character this command appends to the entry, if any
    pub fn entry_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Point => Some('.'),
            _ => None,
        }
    }
}

/// Turn a string of key presses into commands, skipping characters that
/// don't map to anything.
///
/// Besides the keyboard characters (`0-9 . + - * / =`), `c`/`C` stands for
/// Escape and `<` for Backspace so whole sessions can be written on one line.
pub fn parse_key_string(keys: &str) -> Vec<CalcCommand> {
    keys.chars()
        .filter_map(|c| match c {
            'c' | 'C' => Some(CalcCommand::Action(Action::Clear)),
            '<' => Some(CalcCommand::Action(Action::Delete)),
            _ => command_for_char(c),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::from_symbol('+'), Some(Operator::Add));
        assert_eq!(Operator::from_symbol('-'), Some(Operator::Subtract));
        assert_eq!(Operator::from_symbol('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol('x'), None);
    }

    #[test]
    fn test_operator_glyphs() {
        assert_eq!(Operator::Add.glyph(), "+");
        assert_eq!(Operator::Subtract.glyph(), "−");
        assert_eq!(Operator::Multiply.glyph(), "×");
        assert_eq!(Operator::Divide.glyph(), "÷");
    }

    #[test]
    fn test_parse_key_string() {
        let commands = parse_key_string("12.5 * 2 = <c");
        assert_eq!(
            commands,
            vec![
                CalcCommand::Digit(1),
                CalcCommand::Digit(2),
                CalcCommand::Point,
                CalcCommand::Digit(5),
                CalcCommand::Operator(Operator::Multiply),
                CalcCommand::Digit(2),
                CalcCommand::Action(Action::Equals),
                CalcCommand::Action(Action::Delete),
                CalcCommand::Action(Action::Clear),
            ]
        );
    }

    #[test]
    fn test_entry_char() {
        assert_eq!(CalcCommand::Digit(7).entry_char(), Some('7'));
        assert_eq!(CalcCommand::Point.entry_char(), Some('.'));
        assert_eq!(CalcCommand::Action(Action::Equals).entry_char(), None);
    }
}

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use std::time::Duration;

use super::render::render_calculator;
use super::screen::Screen;
use super::theme::Theme;
use crate::calculator::{command_for_key, CalcCommand, Calculator};

/// Terminal host for the calculator
pub struct CalcApp {
    pub calculator: Calculator,
    pub theme: Theme,
    /// Last command applied, highlighted on the keypad
    pub last_command: Option<CalcCommand>,
    running: bool,
}

impl CalcApp {
    pub fn new(calculator: Calculator, theme: Theme) -> Self {
        Self {
            calculator,
            theme,
            last_command: None,
            running: true,
        }
    }
}

impl Screen for CalcApp {
    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('q') {
            self.quit();
            return;
        }

        if let Some(command) = command_for_key(key) {
            self.calculator.apply(command);
            self.last_command = Some(command);
        }
    }

    fn tick(&mut self, elapsed: Duration) {
        self.calculator.tick(elapsed);
    }

    fn render(&self, frame: &mut Frame) {
        render_calculator(frame, self);
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut CalcApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_keys_drive_calculator() {
        let mut app = CalcApp::new(Calculator::default(), Theme::dark());
        for c in "12+30".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.calculator.view().display, "42");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.calculator.view().display, "0");
        assert!(app.is_running());
    }

    #[test]
    fn test_error_clears_on_tick() {
        let mut app = CalcApp::new(Calculator::default(), Theme::dark());
        for c in "7/0=".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(app.calculator.view().is_error);
        app.tick(Duration::from_secs(2));
        assert_eq!(app.calculator.view().display, "0");
    }

    #[test]
    fn test_q_quits() {
        let mut app = CalcApp::new(Calculator::default(), Theme::dark());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.is_running());
    }
}

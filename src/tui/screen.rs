use crossterm::event::KeyEvent;
use ratatui::Frame;
use std::time::Duration;

/// A full-screen widget the terminal loop can drive
pub trait Screen {
    /// Handle one key press to completion
    fn handle_key(&mut self, key: KeyEvent);

    /// Advance deferred work by the time since the previous tick
    fn tick(&mut self, elapsed: Duration);

    fn render(&self, frame: &mut Frame);

    fn is_running(&self) -> bool;

    fn quit(&mut self);
}

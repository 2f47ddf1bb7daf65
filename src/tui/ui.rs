use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::screen::Screen;
use crate::utils::BenchtopError;

/// Run a screen in the terminal until it quits
pub async fn run_ui<S: Screen>(mut screen: S, tick: Duration) -> Result<()> {
    // Check if we have an interactive terminal
    if !crossterm::tty::IsTty::is_tty(&io::stdout()) {
        eprintln!("❌ Benchtop requires an interactive terminal.");
        eprintln!("   Use `benchtop calc --keys ...` or `benchtop gallery --list` in scripts.");
        return Err(BenchtopError::UIError("No interactive terminal available".to_string()).into());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.clear()?;

    let res = run_loop(&mut terminal, &mut screen, tick);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_loop<S: Screen>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    screen: &mut S,
    tick: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    while screen.is_running() {
        terminal.draw(|f| screen.render(f))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                // Some platforms report releases too; act on presses only
                if key.kind == KeyEventKind::Press {
                    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
                        screen.quit();
                    } else {
                        screen.handle_key(key);
                    }
                }
            }
        }

        let now = Instant::now();
        screen.tick(now.duration_since(last_tick));
        last_tick = now;
    }

    Ok(())
}

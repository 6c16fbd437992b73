use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, error};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

type EnvTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Terminal held by a rendered environment run (`play` or `watch`).
///
/// The screen is switched over on [`TerminalSession::enter`] and handed
/// back when the session drops, whichever way the run ends.
pub struct TerminalSession {
    terminal: EnvTerminal,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let terminal = execute!(io::stdout(), EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));

        match terminal {
            Ok(terminal) => {
                debug!("terminal session started");
                Ok(Self { terminal })
            }
            Err(error) => {
                let _ = leave_screen();
                Err(error)
            }
        }
    }

    /// Draws one environment frame.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        match leave_screen() {
            Ok(()) => debug!("terminal session closed"),
            Err(error) => error!("failed to restore terminal: {error}"),
        }
    }
}

/// Hands the screen back before a panic message is printed over it.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = leave_screen();
        default_hook(panic_info);
    }));
}

fn leave_screen() -> io::Result<()> {
    let raw_mode = disable_raw_mode();
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    raw_mode
}

//! Raw-mode terminal lifecycle.
//!
//! [`setup_terminal`] chains a panic hook that leaves raw mode and the
//! alternate screen before the panic message prints, so a crash still
//! hands the shell back in a usable state.

use std::io::{self, IsTerminal, Stdout};
use std::panic;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{Result, WalletDashError};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode on the alternate screen and installs the panic hook.
///
/// # Errors
///
/// Returns [`WalletDashError::Io`] if stdout is not a TTY or the terminal
/// cannot be switched over. Partial setup is undone first.
pub fn setup_terminal() -> Result<Tui> {
    if !io::stdout().is_terminal() {
        return Err(WalletDashError::Io(
            "the dashboard needs an interactive terminal (TTY)".to_string(),
        ));
    }

    enable_raw_mode().map_err(|e| WalletDashError::Io(format!("failed to enable raw mode: {e}")))?;

    if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
        leave_screen();
        return Err(WalletDashError::Io(format!(
            "failed to enter alternate screen: {e}"
        )));
    }

    let terminal = match Terminal::new(CrosstermBackend::new(io::stdout())) {
        Ok(terminal) => terminal,
        Err(e) => {
            leave_screen();
            return Err(WalletDashError::Io(format!("failed to create terminal: {e}")));
        }
    };

    install_panic_hook();
    Ok(terminal)
}

/// Leaves raw mode and the alternate screen after a normal exit.
///
/// # Errors
///
/// Returns [`WalletDashError::Io`] if any step fails.
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(|e| WalletDashError::Io(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| WalletDashError::Io(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| WalletDashError::Io(e.to_string()))
}

/// Runs [`leave_screen`] ahead of whatever hook was installed before.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        leave_screen();
        previous(info);
    }));
}

/// Best-effort teardown for error and panic paths, where there is no
/// `Terminal` to go through.
fn leave_screen() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

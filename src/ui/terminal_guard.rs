use crossterm::cursor::Show;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

pub type FormTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back into cooked mode on drop or panic, whichever
/// comes first. Restoring twice is a no-op.
pub struct TerminalGuard {
    armed: Arc<Mutex<bool>>,
}

impl TerminalGuard {
    fn arm() -> Self {
        let armed = Arc::new(Mutex::new(true));
        let hook_flag = Arc::clone(&armed);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            disarm(&hook_flag);
            previous(info);
        }));
        Self { armed }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        disarm(&self.armed);
    }
}

fn disarm(armed: &Mutex<bool>) {
    let mut armed = armed.lock();
    if std::mem::replace(&mut *armed, false) {
        restore_terminal();
    }
}

/// Best effort: the process is usually exiting when this runs.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableBracketedPaste);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

/// Switch to raw mode on the alternate screen with bracketed paste, so a
/// pasted link arrives as one event.
pub fn setup_terminal() -> io::Result<(FormTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::arm();

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableBracketedPaste)?;
    stdout.execute(TermClear(ClearType::All))?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

#![forbid(unsafe_code)]

//! Terminal session lifecycle guard.
//!
//! RAII-based terminal lifecycle management: entering a session enables raw
//! mode (and optionally the alternate screen) and hides the cursor; dropping
//! the session restores everything in reverse order. Cleanup runs on normal
//! return, `?`, and panic unwinding.
//!
//! Crossterm is the terminal backend: raw-mode entry/exit must be reliable
//! and resize events must be delivered accurately.
//!
//! On unix a watcher thread restores the terminal and exits the process when
//! SIGINT or SIGTERM arrives, so a `kill` never leaves the shell in raw mode.

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size,
};

#[cfg(unix)]
use signal_hook::consts::signal::{SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

/// Terminal session configuration options.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Enable the alternate screen buffer, preserving scrollback.
    pub alternate_screen: bool,
}

/// An active terminal session. Restores terminal state on drop.
#[derive(Debug)]
pub struct TerminalSession {
    alternate_screen: bool,
}

impl TerminalSession {
    /// Enter a terminal session with the given options.
    pub fn new(options: SessionOptions) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        if options.alternate_screen {
            execute!(out, EnterAlternateScreen)?;
        }
        execute!(out, Hide)?;
        out.flush()?;
        Ok(Self {
            alternate_screen: options.alternate_screen,
        })
    }

    /// Current terminal size as `(columns, rows)`.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        size()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal(self.alternate_screen);
    }
}

/// Best-effort terminal restore: show cursor, leave alt screen, exit raw mode.
///
/// Failures are swallowed; there is nowhere left to report them.
pub fn restore_terminal(alternate_screen: bool) {
    let mut out = io::stdout();
    let _ = execute!(out, Show);
    if alternate_screen {
        let _ = execute!(out, LeaveAlternateScreen);
    }
    let _ = disable_raw_mode();
    let _ = out.flush();
}

/// Install a unix signal watcher that restores the terminal and exits on
/// SIGINT/SIGTERM. No-op on other platforms.
#[cfg(unix)]
pub fn install_signal_restore(alternate_screen: bool) -> io::Result<()> {
    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("miniapps-signals".into())
        .spawn(move || {
            if signals.forever().next().is_some() {
                restore_terminal(alternate_screen);
                std::process::exit(130);
            }
        })?;
    Ok(())
}

/// Install a unix signal watcher that restores the terminal and exits on
/// SIGINT/SIGTERM. No-op on other platforms.
#[cfg(not(unix))]
pub fn install_signal_restore(_alternate_screen: bool) -> io::Result<()> {
    Ok(())
}

#![forbid(unsafe_code)]

//! Clock state.
//!
//! The clock renders immediately at startup and then once per second while
//! running. The widget only owns the running flag; the periodic tick is a
//! runtime subscription declared by the app while `is_running()` holds, so
//! stopping and starting can never stack timers.

use chrono::Local;

/// Running flag for the clock ticker.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    running: bool,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// A clock that starts running, matching the page-load behavior.
    #[must_use]
    pub const fn new() -> Self {
        Self { running: true }
    }

    /// Whether the periodic render is active.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Flip between running and paused.
    pub const fn toggle(&mut self) {
        self.running = !self.running;
    }
}

/// Current local time in the pt-BR convention (24h `HH:MM:SS`).
#[must_use]
pub fn local_time_string() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

#![forbid(unsafe_code)]

//! OSC 52 clipboard writer.
//!
//! Copies text to the system clipboard by emitting an OSC 52 escape
//! sequence; inside tmux the sequence is wrapped in a DCS passthrough so it
//! reaches the outer terminal. Failures are reported to the caller and
//! logged; they are never fatal.

use std::env;
use std::fmt;
use std::io::{self, Write};

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Clipboard errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// Payload exceeds the OSC 52 size limit.
    TooLarge {
        /// Encoded payload size in bytes.
        encoded: usize,
        /// Maximum allowed.
        max: usize,
    },
    /// Writing the sequence to the terminal failed.
    WriteError(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge { encoded, max } => {
                write!(f, "clipboard payload too large ({encoded} > {max} bytes)")
            }
            Self::WriteError(msg) => write!(f, "clipboard write failed: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Build the OSC 52 sequence for `text`, optionally wrapped for tmux.
///
/// tmux passthrough doubles every ESC inside a `DCS tmux; ... ST` envelope.
pub fn osc52_sequence(
    text: &str,
    max_payload: usize,
    tmux_passthrough: bool,
) -> Result<String, ClipboardError> {
    let payload = STANDARD.encode(text.as_bytes());
    if payload.len() > max_payload {
        return Err(ClipboardError::TooLarge {
            encoded: payload.len(),
            max: max_payload,
        });
    }
    let seq = format!("\x1b]52;c;{payload}\x07");
    if tmux_passthrough {
        Ok(format!("\x1bPtmux;{}\x1b\\", seq.replace('\x1b', "\x1b\x1b")))
    } else {
        Ok(seq)
    }
}

/// Terminal clipboard helper.
#[derive(Debug, Clone)]
pub struct Clipboard {
    max_payload: usize,
    tmux_passthrough: bool,
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::detect()
    }
}

impl Clipboard {
    /// Common OSC 52 size limit (base64 payload bytes).
    pub const DEFAULT_MAX_OSC52_PAYLOAD: usize = 74_994;

    /// Detect the environment: enables tmux passthrough when `$TMUX` is set.
    #[must_use]
    pub fn detect() -> Self {
        let tmux_passthrough = env::var_os("TMUX").is_some();
        tracing::debug!(tmux_passthrough, "clipboard backend detected: OSC 52");
        Self {
            max_payload: Self::DEFAULT_MAX_OSC52_PAYLOAD,
            tmux_passthrough,
        }
    }

    /// Copy `text` to the system clipboard.
    ///
    /// Returns once the sequence has been flushed to the terminal; whether
    /// the terminal honors OSC 52 is outside our view, so a flushed write
    /// counts as success.
    pub fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let seq = osc52_sequence(text, self.max_payload, self.tmux_passthrough)?;
        let mut out = io::stdout();
        out.write_all(seq.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| ClipboardError::WriteError(e.to_string()))?;
        tracing::debug!(bytes = text.len(), "copied to clipboard via OSC 52");
        Ok(())
    }
}

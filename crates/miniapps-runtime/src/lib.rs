#![forbid(unsafe_code)]

//! Runtime: the Elm-style program loop plus the ambient services screens
//! lean on (periodic subscriptions, key-value persistence, clipboard).

pub mod clipboard;
pub mod persistence;
pub mod program;
pub mod subscription;

pub use clipboard::{Clipboard, ClipboardError};
pub use persistence::{FileStorage, MemoryStorage, StateStore, StorageBackend, StorageError};
pub use program::{Cmd, Model, Program, ProgramConfig, ProgramError};
pub use subscription::{Every, StopSignal, SubId, Subscription};

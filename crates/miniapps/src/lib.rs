#![forbid(unsafe_code)]

//! Mini-apps hub: six small widgets behind shared navigation and theming.

pub mod app;
pub mod chrome;
pub mod cli;
pub mod logging;
pub mod screens;
pub mod theme;

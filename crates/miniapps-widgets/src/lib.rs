#![forbid(unsafe_code)]

//! Widget controllers for the mini-apps hub.
//!
//! Each module owns one widget's state and exposes only its operations;
//! none of them touches the terminal. Rendering lives in the app crate.

pub mod calculator;
pub mod clock;
pub mod input;
pub mod metrics;
pub mod password;
pub mod quiz;
pub mod todo;

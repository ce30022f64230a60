#![forbid(unsafe_code)]

//! Core: terminal lifecycle, canonical input events, geometry, and the
//! rendering surface shared by every screen of the mini-apps hub.

pub mod event;
pub mod geometry;
pub mod style;
pub mod surface;
pub mod terminal_session;

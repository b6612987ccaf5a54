//! Reel - catalog a directory of media folders and browse it in a TUI
//!
//! This library provides the index builder that turns a content directory
//! into a persisted JSON catalog, and the navigation state machine and
//! renderer behind the terminal browser.

pub mod catalog;
pub mod logging;
pub mod ui;

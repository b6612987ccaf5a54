//! # UI Module
//!
//! This module provides the terminal browser for the catalog.
//!
//! ## Components
//!
//! - [`App`] - Navigation state (snapshot, selection, focus, viewport)
//! - [`mod@keymap`] - Terminal events to [`Action`]s
//! - [`mod@render`] - Draws the two panes from an [`App`] and a [`Theme`]
//! - [`Theme`] - Colors and text styles, chosen once at startup
//! - [`Config`] - Persisted user settings
//!
//! ## Layout
//!
//! ```text
//! ╭─ Library ──────────────╮ ╭─ Details ──────────────╮
//! │ Show A                 │ │ Show A                 │
//! │ showA                  │ │ showA                  │
//! │                        │ │ drama, 2019            │
//! │ Show B                 │ │                        │
//! │ showB                  │ │ Episodes (1)           │
//! │                        │ │   ep1                  │
//! ╰────────────────────────╯ ╰────────────────────────╯
//! [↑↓/jk] Navigate  [Enter] Open  [q] Quit
//! ```
//!
//! The pane holding focus is drawn with the theme's active border.

pub mod app;
pub mod config;
pub mod keymap;
pub mod render;
pub mod theme;

pub use app::{Action, App, Focus, Viewport};
pub use config::Config;
pub use render::render;
pub use theme::Theme;

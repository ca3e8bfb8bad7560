//! Star Search - A TUI for looking up stars by name
//!
//! A Rust based terminal user interface (TUI) application that queries a remote
//! astronomical data service by star name and shows the returned markup, with a
//! back control and inline error display

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod panel;
pub mod render;
pub mod star;
pub mod tui;
pub mod validation;

// Re-export `Cli` for use from `main`
pub use cli::Cli;
pub use error::{Result, StarSearchError};

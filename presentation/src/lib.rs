//! Presentation layer for hwhelper
//!
//! This crate contains the HTTP front door, CLI definitions, output
//! formatters and progress reporters.

pub mod cli;
pub mod http;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use http::{AppState, router, serve};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};

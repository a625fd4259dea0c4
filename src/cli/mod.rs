//! Command Line Interface for Sentilex.

pub mod args;
pub mod commands;
pub mod menu;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use menu::*;
pub use output::*;

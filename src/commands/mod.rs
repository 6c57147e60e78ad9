//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and the loaded configuration.

pub mod browse;
pub mod completions;
pub mod config;
pub mod search;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use completions::execute as completions;
pub use config::execute as config;
pub use search::{SearchOptions, execute as search};

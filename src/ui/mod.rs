//! Terminal user interface
//!
//! The interactive browser lives in [`ratatui_adapter`]. [`output`] holds the
//! message abstraction shared by the browser's status bar and the plain CLI
//! commands.
//!
//! ```
//! use bookfinder::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Configuration saved");
//! output.info("Using https://openlibrary.org");
//! ```

mod error;

pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::BookBrowser;

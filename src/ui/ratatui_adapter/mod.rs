//! Ratatui-based book browser
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              BookBrowser                    │
//! │  (terminal setup, draw loop, dispatch)      │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Ratatui  │ │ Crossterm │
//! │ (+search)  │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! # Features
//!
//! - **Background search** so typing and navigation never block on the network
//! - **Card grid** that reflows with the terminal width
//! - **Detail view** with a link that opens in the system browser
//! - **Filter overlay** (F2) for eBook availability and publish years
//! - **Mouse support**: click a card, scroll the grid
//! - **Help overlay** (F1)

mod events;
mod finder;
mod state;
mod theme;
pub mod widgets;

pub use events::{EventResult, handle_event};
pub use finder::BookBrowser;
pub use state::{AppState, Focus, Mode};
pub use theme::Theme;

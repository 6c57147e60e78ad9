//! Search controller and background search worker
//!
//! The controller owns the query, the selected search field, the filter
//! inputs and the current result list. A search is split in two halves so
//! the TUI can keep drawing while a request is in flight:
//!
//! 1. [`SearchController::begin`] validates input, resets state and hands
//!    back a [`PendingSearch`] tagged with a sequence token.
//! 2. [`SearchController::complete`] applies the outcome, but only if its
//!    token is still the latest one. Responses from superseded searches are
//!    dropped.
//!
//! [`SearchWorker`] runs the blocking HTTP call for a `PendingSearch` on its
//! own thread and returns the outcome over a channel. The CLI skips the
//! worker and calls [`SearchController::run`].

pub mod controller;
pub mod worker;

pub use controller::{FilterInput, PendingSearch, SearchController, SearchNotice};
pub use worker::{SearchCompletion, SearchWorker};

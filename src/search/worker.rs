//! Runs searches off the UI thread

use super::controller::PendingSearch;
use crate::client::{BookSource, ClientError};
use crate::model::Book;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
#[cfg(test)]
use std::time::Duration;
use tracing::debug;

/// Outcome of a search together with the token it was started with
#[derive(Debug)]
pub struct SearchCompletion {
    pub token: u64,
    pub outcome: Result<Vec<Book>, ClientError>,
}

/// Spawns one short-lived thread per search and collects their results
///
/// Nothing is cancelled: a superseded search runs to completion and its
/// result is discarded by the controller's token check.
pub struct SearchWorker {
    source: Arc<dyn BookSource>,
    tx: Sender<SearchCompletion>,
    rx: Receiver<SearchCompletion>,
}

impl SearchWorker {
    /// Create a worker backed by `source`
    #[must_use]
    pub fn new(source: Arc<dyn BookSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { source, tx, rx }
    }

    /// Start running `pending` in the background
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the thread cannot be spawned.
    pub fn dispatch(&self, pending: PendingSearch) -> std::io::Result<()> {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        thread::Builder::new()
            .name(format!("bookfinder-search-{}", pending.token))
            .spawn(move || {
                let outcome = source.search(&pending.request);
                // The receiver only disappears when the UI is shutting down
                if tx.send(SearchCompletion { token: pending.token, outcome }).is_err() {
                    debug!(token = pending.token, "search finished after the UI closed");
                }
            })?;

        Ok(())
    }

    /// Take every completion that has arrived, without blocking
    #[must_use]
    pub fn drain(&self) -> Vec<SearchCompletion> {
        let mut completions = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(completion) => completions.push(completion),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        completions
    }

    /// Wait up to `timeout` for the next completion
    #[cfg(test)]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<SearchCompletion> {
        self.rx.recv_timeout(timeout).ok()
    }
}

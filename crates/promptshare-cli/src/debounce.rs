//! Trailing-edge debouncing
//!
//! Rapid triggers collapse into one execution that runs once the quiescence
//! window has passed since the last trigger.

use std::time::Duration;
use tokio::task::JoinHandle;

/// Quiescence window for keystroke-driven search (500ms)
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// At most one scheduled job is pending; scheduling replaces it
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Run `job` after the window unless another job is scheduled first
    pub fn schedule<F>(&mut self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            job();
        }));
    }

    /// Drop the pending job. Returns whether one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Wait until the pending job (if any) has run
    pub async fn settle(&mut self) {
        if let Some(handle) = self.pending.take() {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    tracing::warn!("Debounced job failed: {}", e);
                }
            }
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

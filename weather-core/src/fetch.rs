//! A single provider call raced against a wall-clock deadline.
//!
//! The provider call runs as its own tokio task. The caller waits for either
//! the task's join handle or the deadline timer, whichever fires first. When
//! the timer wins, the task is aborted and the abort is awaited before
//! returning, so the in-flight HTTP future (and its connection) is dropped
//! rather than left running until the transport's own timeout.

use std::{panic, sync::Arc, time::Duration};

use crate::{
    error::FetchError,
    model::{FetchOutcome, WeatherRequest},
    provider::WeatherProvider,
};

pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct BoundedFetch {
    provider: Arc<dyn WeatherProvider>,
    deadline: Duration,
}

impl BoundedFetch {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider, deadline: DEFAULT_DEADLINE }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Fetch current conditions, producing exactly one outcome no later than
    /// the deadline.
    ///
    /// Location and API key must already be validated as non-empty; see
    /// [`crate::config::Config::effective_location`].
    pub async fn fetch(&self, request: WeatherRequest) -> FetchOutcome {
        let provider = Arc::clone(&self.provider);
        let mut task = tokio::spawn(async move { provider.current(&request).await });

        tokio::select! {
            biased;

            joined = &mut task => match joined {
                Ok(outcome) => outcome,
                Err(err) if err.is_panic() => panic::resume_unwind(err.into_panic()),
                Err(err) => Err(FetchError::Transport(format!("fetch task cancelled: {err}"))),
            },
            _ = tokio::time::sleep(self.deadline) => {
                log::warn!("no response within {:?}, abandoning request", self.deadline);
                task.abort();
                // Whatever the task produced after the deadline is dropped here.
                let _ = task.await;
                Err(FetchError::DeadlineExceeded(self.deadline))
            }
        }
    }
}

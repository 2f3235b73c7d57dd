//! Deadline-bounded calls.
//!
//! Every outbound request this crate makes, the page fetch and each
//! generation call, is wrapped in the same bounded wait. On expiry the call
//! is abandoned and surfaced as [`ReferentError::Timeout`]; there is no retry.

use std::future::Future;
use std::time::Duration;

use crate::{ReferentError, Result};

/// Outcome of a deadline-bounded call.
#[derive(Debug)]
pub enum CallOutcome<T> {
    /// The future finished before the deadline.
    Completed(T),
    /// The deadline elapsed; the underlying call was dropped.
    TimedOut,
}

/// Runs a future with an upper bound on wall-clock time.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use referent_core::deadline::{CallOutcome, with_deadline};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let outcome = with_deadline(Duration::from_secs(1), async { 42 }).await;
/// assert!(matches!(outcome, CallOutcome::Completed(42)));
/// # });
/// ```
pub async fn with_deadline<F: Future>(limit: Duration, fut: F) -> CallOutcome<F::Output> {
    match tokio::time::timeout(limit, fut).await {
        Ok(value) => CallOutcome::Completed(value),
        Err(_) => CallOutcome::TimedOut,
    }
}

impl<T> CallOutcome<Result<T>> {
    /// Collapses the outcome of a fallible call into a single `Result`,
    /// mapping expiry to [`ReferentError::Timeout`] with the configured
    /// limit in seconds.
    pub fn flatten(self, timeout: u64) -> Result<T> {
        match self {
            CallOutcome::Completed(result) => result,
            CallOutcome::TimedOut => Err(ReferentError::Timeout { timeout }),
        }
    }
}

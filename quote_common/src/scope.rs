//! Deadline and cancellation carrier for bounded operations.
//!
//! A `Scope` pairs a cancellation signal with an optional deadline. Every
//! bounded call derives a child with [`Scope::child`]; the child's deadline is
//! never later than its parent's, and cancelling a parent cancels every
//! descendant. Dropping a scope cancels its own signal, so whatever was still
//! running under it unwinds on every exit path.
//!
//! ```ignore
//! let root = Scope::root();
//! let fetch = root.child(Duration::from_millis(200));
//! let body = fetch.run(async { Ok(client.get(url).send().await?) }).await?;
//! ```
use std::future::Future;
use std::time::Duration;

use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

use crate::error::QuoteError;
use crate::result::Result;

/// Cancellation signal plus optional deadline.
#[derive(Debug)]
pub struct Scope {
    token: CancellationToken,
    deadline: Option<Instant>,
    budget: Option<Duration>,
}

impl Scope {
    /// Unbounded scope with a fresh cancellation signal.
    pub fn root() -> Self {
        Self::from_token(CancellationToken::new())
    }

    /// Unbounded scope driven by an existing signal.
    pub fn from_token(token: CancellationToken) -> Self {
        Scope {
            token,
            deadline: None,
            budget: None,
        }
    }

    /// Derive a child bounded by `budget` from now, capped by this scope's deadline.
    pub fn child(&self, budget: Duration) -> Scope {
        let now = Instant::now();
        let requested = now + budget;
        let deadline = match self.deadline {
            Some(parent) if parent < requested => parent,
            _ => requested,
        };
        Scope {
            token: self.token.child_token(),
            deadline: Some(deadline),
            budget: Some(deadline.saturating_duration_since(now)),
        }
    }

    /// Drive `fut` until it completes, the deadline passes, or the scope is cancelled.
    ///
    /// When the deadline or the signal wins, `fut` is dropped in place, which
    /// aborts whatever I/O it had in flight.
    pub async fn run<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let expiry = async {
            match self.deadline {
                Some(deadline) => time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(QuoteError::Cancelled),
            _ = expiry => Err(QuoteError::Timeout(self.budget.unwrap_or_default())),
            result = fut => result,
        }
    }

    /// Fail with `Cancelled` or `Timeout` if this scope can no longer make progress.
    ///
    /// Lets a bounded operation skip an irreversible step (such as a commit)
    /// that would otherwise start after the deadline.
    pub fn ensure_live(&self) -> Result<()> {
        if self.token.is_cancelled() {
            return Err(QuoteError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                Err(QuoteError::Timeout(self.budget.unwrap_or_default()))
            }
            _ => Ok(()),
        }
    }

    /// Cancel this scope and all of its descendants.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether this scope (or an ancestor) has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Deadline of this scope, if bounded.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline; `None` for unbounded scopes.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Handle to this scope's signal, e.g. for a signal handler or a child scope.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

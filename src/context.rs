use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

/// Why an invocation stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cancellation {
    Canceled,
    DeadlineExceeded,
}

impl fmt::Display for Cancellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cancellation::Canceled => f.write_str("context canceled"),
            Cancellation::DeadlineExceeded => f.write_str("context deadline exceeded"),
        }
    }
}

/// Per-invocation handle carrying a cancellation signal and an optional deadline.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl Invocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Invocation {
            cancel: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Maps the runtime's deadline (ms since the epoch, 0 when absent).
    pub fn from_lambda(ctx: &lambda_runtime::Context) -> Self {
        match remaining_until(ctx.deadline, SystemTime::now()) {
            Some(left) => Self::with_timeout(left),
            None => Self::new(),
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// A token that cancels this invocation, for handing to other tasks.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// The reason this invocation is finished, if it is.
    pub fn err(&self) -> Option<Cancellation> {
        if self.cancel.is_cancelled() {
            return Some(Cancellation::Canceled);
        }
        match self.deadline {
            Some(d) if Instant::now() >= d => Some(Cancellation::DeadlineExceeded),
            _ => None,
        }
    }

    /// Resolves once the invocation is cancelled or its deadline passes.
    pub async fn done(&self) -> Cancellation {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    _ = self.cancel.cancelled() => Cancellation::Canceled,
                    _ = time::sleep_until(deadline) => Cancellation::DeadlineExceeded,
                }
            }
            None => {
                self.cancel.cancelled().await;
                Cancellation::Canceled
            }
        }
    }
}

/// Time left before `deadline_ms`. A deadline in the past gives zero.
fn remaining_until(deadline_ms: u64, now: SystemTime) -> Option<Duration> {
    if deadline_ms == 0 {
        return None;
    }
    let deadline = UNIX_EPOCH + Duration::from_millis(deadline_ms);
    Some(deadline.duration_since(now).unwrap_or_default())
}

use crate::client::Fetcher;
use crate::context::Invocation;
use crate::model::Item;
use crate::util::Trace;
use simple_error::{SimpleError, SimpleResult};
use std::time::Duration;
use tokio::time;

pub const BASE_DELAY: Duration = Duration::from_millis(100);

/// Wait before retry `attempt` (0-indexed): `100ms * 2^attempt`.
pub fn backoff_delay(attempt: u32) -> Duration {
    BASE_DELAY
        .checked_mul(2u32.saturating_pow(attempt))
        .unwrap_or(Duration::MAX)
}

/// Runs up to `max_retries` attempts (at least one), sleeping between them.
/// Cancelling `ctx` during a sleep ends the loop at once.
pub async fn fetch_with_retry(
    fetcher: &dyn Fetcher,
    ctx: &Invocation,
    max_retries: u32,
    trace: &Trace,
) -> SimpleResult<Vec<Item>> {
    let attempts = max_retries.max(1);
    let mut last_err = None;

    for attempt in 0..attempts {
        trace.info(format_args!("fetch attempt {}/{}", attempt + 1, attempts));
        match fetch_once(fetcher, ctx).await {
            Ok(items) => return Ok(items),
            Err(e) => {
                trace.warn(format_args!(
                    "Retry {}/{} failed: {}",
                    attempt + 1,
                    attempts,
                    e
                ));
                last_err = Some(e);
            }
        }

        if attempt + 1 == attempts {
            break;
        }

        let delay = backoff_delay(attempt);
        trace.debug(format_args!("backing off for {:?}", delay));
        tokio::select! {
            biased;
            reason = ctx.done() => {
                return Err(SimpleError::new(format!(
                    "context cancelled during retry: {}",
                    reason
                )));
            }
            _ = time::sleep(delay) => {}
        }
    }

    let last = last_err.map(|e| e.to_string()).unwrap_or_default();
    Err(SimpleError::new(format!(
        "all {} retries failed, last error: {}",
        attempts, last
    )))
}

async fn fetch_once(fetcher: &dyn Fetcher, ctx: &Invocation) -> SimpleResult<Vec<Item>> {
    tokio::select! {
        biased;
        reason = ctx.done() => Err(SimpleError::new(reason.to_string())),
        result = fetcher.fetch() => result,
    }
}

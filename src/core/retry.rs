//! Bounded retry for remote calls that fail server-side.
//!
//! Only [`ApiError::InternalServer`] is worth re-issuing; every other
//! failure kind reflects something a retry cannot fix and propagates
//! immediately. The policy knows nothing about the call it wraps and
//! never logs; attempts are sequential with no backoff delay.

use std::future::Future;

use crate::adapters::{ApiError, ApiResult};

/// Total invocations allowed per wrapped call: one original plus one retry
pub const DEFAULT_ATTEMPTS: u32 = 2;

/// Invoke `call` until it succeeds, fails with a non-retryable kind, or
/// the attempt budget runs out.
///
/// The budget is checked before each invocation, so a budget of zero fails
/// fast without calling at all.
pub async fn retry_on_server_error<T, F, Fut>(max_attempts: u32, mut call: F) -> ApiResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ApiResult<T>>,
{
    let mut remaining = max_attempts;
    loop {
        if remaining == 0 {
            return Err(ApiError::InternalServer {
                message: format!("retry budget of {max_attempts} attempts exhausted"),
                status: 500,
            });
        }
        remaining -= 1;

        match call().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_server_error() && remaining > 0 => continue,
            Err(err) => return Err(err),
        }
    }
}

//! Bounded immediate retry.

use std::future::Future;

use crate::error::Result;

/// Run `operation` up to `retries + 1` times, returning the first success
/// or the last failure.
///
/// Re-invocation is immediate: no delay, no jitter, and no inspection of
/// the error kind. A failure that cannot succeed on retry still consumes
/// every attempt.
pub(crate) async fn retry<T, F, Fut>(retries: u32, operation: F) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    for attempt in 0..=retries {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt == retries => return Err(e),
            Err(e) => {
                // The attempt total would wrap u32 at the largest budget.
                tracing::warn!(
                    "attempt {} of {} failed: {}; retrying",
                    attempt + 1,
                    u64::from(retries) + 1,
                    e
                );
            }
        }
    }

    unreachable!()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::Cell;
    use std::rc::Rc;

    #[tokio::test]
    async fn test_first_success_makes_one_call() {
        let calls = Rc::new(Cell::new(0));
        let operation = || {
            let calls = calls.clone();
            calls.set(calls.get() + 1);
            async move { Ok::<_, Error>("done") }
        };

        let result = retry(3, operation).await;
        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_recovers_after_transient_failures() {
        let calls = Rc::new(Cell::new(0));
        let operation = || {
            let calls = calls.clone();
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move {
                if n < 3 {
                    Err(Error::InvalidMethod(format!("attempt-{n}")))
                } else {
                    Ok("recovered")
                }
            }
        };

        let result = retry(3, operation).await;
        assert_eq!(result.unwrap(), "recovered");
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn test_exhaustion_returns_last_error() {
        let calls = Rc::new(Cell::new(0));
        let operation = || {
            let calls = calls.clone();
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move { Err::<(), _>(Error::InvalidMethod(format!("attempt-{n}"))) }
        };

        let err = retry(3, operation).await.unwrap_err();
        assert_eq!(calls.get(), 4);
        // The error handed back is from the final attempt.
        assert!(format!("{}", err).contains("attempt-4"));
    }

    #[tokio::test]
    async fn test_max_retry_budget_logs_without_overflow() {
        // A subscriber must be listening for the warn arguments to be
        // evaluated at all.
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::sink)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let calls = Rc::new(Cell::new(0));
        let operation = || {
            let calls = calls.clone();
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move {
                if n == 1 {
                    Err(Error::InvalidMethod("x".to_string()))
                } else {
                    Ok("done")
                }
            }
        };

        let result = retry(u32::MAX, operation).await;
        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_zero_retries_means_single_attempt() {
        let calls = Rc::new(Cell::new(0));
        let operation = || {
            let calls = calls.clone();
            calls.set(calls.get() + 1);
            async move { Err::<(), _>(Error::InvalidMethod("x".to_string())) }
        };

        let result = retry(0, operation).await;
        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }
}

//! Pluggable suspension for retry backoff and throttling.
//!
//! The dispatcher never sleeps directly. It goes through a [`Sleeper`] so that
//! tests can record the requested durations instead of waiting them out.

use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// A boxed future returned by [`Sleeper::sleep`].
pub type SleepFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Suspends the current task for a given duration.
///
/// # Example
///
/// ```rust
/// use clickup_api::clients::{SleepFuture, Sleeper};
/// use std::time::Duration;
///
/// #[derive(Debug)]
/// struct NoSleep;
///
/// impl Sleeper for NoSleep {
///     fn sleep(&self, _duration: Duration) -> SleepFuture {
///         Box::pin(async {})
///     }
/// }
/// ```
pub trait Sleeper: Send + Sync + Debug {
    /// Returns a future that completes after `duration`.
    fn sleep(&self, duration: Duration) -> SleepFuture;
}

/// The default [`Sleeper`], backed by `tokio::time::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> SleepFuture {
        Box::pin(tokio::time::sleep(duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_tokio_sleeper_waits() {
        let start = tokio::time::Instant::now();
        TokioSleeper.sleep(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_tokio_sleeper_works_as_trait_object() {
        let sleeper: Box<dyn Sleeper> = Box::new(TokioSleeper);
        tokio_test::block_on(sleeper.sleep(Duration::ZERO));
    }
}

//! Token-keyed background fetches.
//!
//! The UI runs on a single synchronous event loop, so network requests
//! are pushed onto worker threads that report back over a channel polled
//! by the loop's tick. Each request gets a monotonically increasing
//! token; starting a new request replaces the in-flight channel, so a
//! stale response that lands after a newer request was issued is
//! discarded without ever being observed.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::error::{MuseoError, Result};

/// Identifier of one background request, used for log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

struct InFlight<T> {
    token: RequestToken,
    rx: Receiver<Result<T>>,
}

/// A single-slot background request runner.
///
/// At most one request is tracked at a time; superseded requests keep
/// running to completion but their results go nowhere.
pub struct Fetcher<T> {
    next_token: u64,
    in_flight: Option<InFlight<T>>,
}

impl<T> std::fmt::Debug for Fetcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("next_token", &self.next_token)
            .field("loading", &self.in_flight.is_some())
            .finish()
    }
}

impl<T: Send + 'static> Fetcher<T> {
    /// Create an idle fetcher.
    pub fn new() -> Self {
        Self {
            next_token: 0,
            in_flight: None,
        }
    }

    /// Run `job` on a worker thread, superseding any in-flight request.
    pub fn spawn<F>(&mut self, job: F) -> RequestToken
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        self.next_token += 1;
        let token = RequestToken(self.next_token);

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let outcome = job();
            // The receiver is gone if a newer request superseded this one.
            if tx.send(outcome).is_err() {
                tracing::debug!(?token, "discarding superseded response");
            }
        });

        if let Some(previous) = self.in_flight.replace(InFlight { token, rx }) {
            tracing::debug!(superseded = ?previous.token, by = ?token, "request superseded");
        }

        token
    }

    /// Poll for the current request's outcome.
    ///
    /// Returns `Some` exactly once per tracked request, when it
    /// completes. A worker that died without reporting surfaces as
    /// [`MuseoError::WorkerExited`].
    pub fn poll(&mut self) -> Option<Result<T>> {
        let current = self.in_flight.as_ref()?;

        match current.rx.try_recv() {
            Ok(outcome) => {
                let token = current.token;
                self.in_flight = None;
                tracing::debug!(?token, "request completed");
                Some(outcome)
            },
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                let token = current.token;
                self.in_flight = None;
                tracing::warn!(?token, "request worker exited without a response");
                Some(Err(MuseoError::WorkerExited))
            },
        }
    }

    /// Whether a request is currently tracked.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }
}

impl<T: Send + 'static> Default for Fetcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn poll_until_complete(fetcher: &mut Fetcher<u32>) -> Result<u32> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(outcome) = fetcher.poll() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "fetch never completed");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn delivers_a_completed_request() {
        let mut fetcher = Fetcher::new();
        fetcher.spawn(|| Ok(7));

        assert!(fetcher.is_loading());
        assert_eq!(poll_until_complete(&mut fetcher).unwrap(), 7);
        assert!(!fetcher.is_loading());
    }

    #[test]
    fn poll_is_quiet_when_idle() {
        let mut fetcher: Fetcher<u32> = Fetcher::new();
        assert!(fetcher.poll().is_none());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut fetcher = Fetcher::new();

        fetcher.spawn(|| {
            thread::sleep(Duration::from_millis(50));
            Ok(1)
        });
        fetcher.spawn(|| Ok(2));

        assert_eq!(poll_until_complete(&mut fetcher).unwrap(), 2);

        // The first request's response lands on a dropped channel; the
        // fetcher stays idle and never reports it.
        thread::sleep(Duration::from_millis(100));
        assert!(fetcher.poll().is_none());
        assert!(!fetcher.is_loading());
    }

    #[test]
    fn worker_failure_is_reported_once() {
        let mut fetcher: Fetcher<u32> = Fetcher::new();
        fetcher.spawn(|| Err(MuseoError::terminal("boom")));

        assert!(matches!(
            poll_until_complete(&mut fetcher),
            Err(MuseoError::Terminal(_))
        ));
        assert!(fetcher.poll().is_none());
    }

    #[test]
    fn tokens_increase_monotonically() {
        let mut fetcher = Fetcher::new();
        let first = fetcher.spawn(|| Ok(1));
        let second = fetcher.spawn(|| Ok(2));

        assert_ne!(first, second);
    }
}

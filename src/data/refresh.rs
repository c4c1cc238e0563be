//! Background refresh worker.
//!
//! One thread owning a tokio runtime, talking to the GUI over std mpsc
//! channels. The GUI drains outcomes in its frame loop and can request an
//! immediate pass with [`RefreshCommand::Now`]; otherwise the worker wakes
//! on its fixed interval.

use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::data::feed::OccupancyFeed;
use crate::domain::{CollectorStatus, Sample};
use crate::utils::time_utils::local_now_as_timestamp_ms;

/// A request from the GUI to the refresh worker
#[derive(Debug, Clone, Copy)]
pub enum RefreshCommand {
    Now,
}

/// The result of one refresh pass
pub struct RefreshOutcome {
    /// Err carries a user-displayable message; the GUI keeps the previous
    /// snapshot in that case.
    pub samples: Result<Vec<Sample>, String>,
    /// None when the status resource failed - non-fatal, independent of
    /// the samples fetch.
    pub status: Option<CollectorStatus>,
    pub fetched_at_ms: i64,
}

pub fn spawn_refresh_worker<F>(
    feed: F,
    interval: Duration,
    rx: Receiver<RefreshCommand>,
    tx: Sender<RefreshOutcome>,
) where
    F: OccupancyFeed + 'static,
{
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("refresh worker: failed to build tokio runtime: {e}");
                return;
            }
        };

        loop {
            let outcome = rt.block_on(run_refresh_pass(&feed));
            if tx.send(outcome).is_err() {
                break; // GUI gone
            }
            match rx.recv_timeout(interval) {
                Ok(RefreshCommand::Now) => continue,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    });
}

pub(crate) async fn run_refresh_pass<F: OccupancyFeed>(feed: &F) -> RefreshOutcome {
    let samples = match feed.fetch_samples().await {
        Ok(s) => {
            log::debug!("refresh: fetched {} samples", s.len());
            Ok(s)
        }
        Err(e) => {
            log::warn!("refresh: sample fetch failed: {e:#}");
            Err(format!("{e:#}"))
        }
    };

    let status = match feed.fetch_status().await {
        Ok(st) => Some(st),
        Err(e) => {
            log::warn!("refresh: status fetch failed (non-fatal): {e:#}");
            None
        }
    };

    RefreshOutcome {
        samples,
        status,
        fetched_at_ms: local_now_as_timestamp_ms(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use crate::domain::Percent;

    struct StubFeed {
        samples_ok: bool,
        status_ok: bool,
    }

    #[async_trait]
    impl OccupancyFeed for StubFeed {
        async fn fetch_samples(&self) -> Result<Vec<Sample>> {
            if self.samples_ok {
                Ok(vec![Sample::new(1, Some(Percent::new(10)), None, None)])
            } else {
                Err(anyhow!("connect timeout"))
            }
        }

        async fn fetch_status(&self) -> Result<CollectorStatus> {
            if self.status_ok {
                Ok(CollectorStatus {
                    last_run_ms: 99,
                    success: true,
                    message: "ok".into(),
                    data: None,
                })
            } else {
                Err(anyhow!("404"))
            }
        }
    }

    fn block_on<T>(fut: impl Future<Output = T>) -> T {
        Runtime::new().unwrap().block_on(fut)
    }

    #[test]
    fn status_failure_is_independent_of_samples() {
        let outcome = block_on(run_refresh_pass(&StubFeed {
            samples_ok: true,
            status_ok: false,
        }));
        assert!(outcome.samples.is_ok());
        assert!(outcome.status.is_none());
    }

    #[test]
    fn sample_failure_surfaces_a_message_not_a_panic() {
        let outcome = block_on(run_refresh_pass(&StubFeed {
            samples_ok: false,
            status_ok: true,
        }));
        let msg = outcome.samples.unwrap_err();
        assert!(msg.contains("connect timeout"));
        assert_eq!(outcome.status.unwrap().last_run_ms, 99);
    }
}

//! Worker pool configuration.

use std::time::Duration;

const DEFAULT_DISPATCHER_COUNT: usize = 1;
const DEFAULT_POLL_INTERVAL_MS: u64 = 500;
const DEFAULT_JOB_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 10;

/// Configuration for the delivery worker pool.
///
/// `max_concurrent_jobs` bounds in-flight channel sends; the per-attempt
/// timeout keeps a hung send from occupying a permit forever.
#[derive(Clone)]
pub struct WorkerPoolConfig {
    pub max_concurrent_jobs: usize,
    pub dispatcher_count: usize,
    poll_interval_ms: u64,
    job_timeout_secs: u64,
    shutdown_timeout_secs: u64,
}

impl WorkerPoolConfig {
    pub fn new(max_concurrent_jobs: usize) -> Self {
        Self {
            max_concurrent_jobs,
            dispatcher_count: DEFAULT_DISPATCHER_COUNT,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            job_timeout_secs: DEFAULT_JOB_TIMEOUT_SECS,
            shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        }
    }

    /// How long a dispatcher sleeps when the queue is empty.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Per-attempt delivery timeout.
    pub fn job_timeout(&self) -> Duration {
        Duration::from_secs(self.job_timeout_secs)
    }

    /// How long `stop()` waits for each dispatcher to exit.
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

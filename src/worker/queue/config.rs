//! Delivery queue configuration: naming, retry policy, TTL and cleanup.

use std::time::Duration;

const DEFAULT_QUEUE_NAME: &str = "gjallar:delivery:queue";

/// Maximum delivery attempts per job before it is dead-lettered.
const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// First retry delay; doubles with each further attempt.
const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(10);

/// Upper bound for a single retry delay.
const DEFAULT_BACKOFF_CAP: Duration = Duration::from_secs(15 * 60);

/// Maximum age for jobs in the queue before they're considered stale.
/// A job this old was never claimable (clock skew, orphaned retries) and is
/// removed by cleanup operations rather than delivered days late.
const DEFAULT_JOB_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Cleanup runs every time this many jobs were pushed. Piggybacking on pushes
/// avoids a separate timer task.
const DEFAULT_CLEANUP_INTERVAL: u64 = 1000;

/// How many dead-lettered jobs are kept for operator inspection.
const DEFAULT_DEAD_LETTER_LIMIT: i64 = 1000;

/// Configuration for the delivery queue.
#[derive(Clone)]
pub struct DeliveryQueueConfig {
    /// Redis key of the sorted set holding pending jobs.
    pub queue_name: String,
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub backoff_cap: Duration,
    pub job_ttl: Duration,
    /// Pushes between two passive cleanup passes.
    pub cleanup_interval: u64,
    pub dead_letter_limit: i64,
}

impl DeliveryQueueConfig {
    /// Defaults with a custom queue name (tests namespace their queues).
    pub fn with_queue_name(queue_name: impl Into<String>) -> Self {
        Self {
            queue_name: queue_name.into(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_backoff: DEFAULT_INITIAL_BACKOFF,
            backoff_cap: DEFAULT_BACKOFF_CAP,
            job_ttl: DEFAULT_JOB_TTL,
            cleanup_interval: DEFAULT_CLEANUP_INTERVAL,
            dead_letter_limit: DEFAULT_DEAD_LETTER_LIMIT,
        }
    }

    /// Redis key of the sequence counter backing member uniqueness.
    pub fn sequence_name(&self) -> String {
        format!("{}:seq", self.queue_name)
    }

    /// Redis key of the dead-letter list.
    pub fn dead_letter_name(&self) -> String {
        format!("{}:dead", self.queue_name)
    }
}

impl Default for DeliveryQueueConfig {
    fn default() -> Self {
        Self::with_queue_name(DEFAULT_QUEUE_NAME)
    }
}

//! Durable delivery queue on a Redis sorted set.
//!
//! Members are `sequence|payload` strings scored by their deliver-at
//! timestamp in milliseconds. The sequence prefix (a Redis counter) makes
//! every enqueue a distinct entry: two identical messages never collapse,
//! because idempotence belongs to the router, not the queue.
//!
//! Enqueue is a fast local Redis write and never touches a chat platform.
//! Failed attempts are re-scheduled with exponential backoff until the
//! attempt budget is spent, then pushed to a capped dead-letter list and
//! logged, never silently dropped. The queue key survives process restarts;
//! whatever was pending is claimed again after a crash.
//!
//! Stale entries older than the TTL are cleaned up passively every
//! [`DeliveryQueueConfig::cleanup_interval`] pushes.

mod config;
mod lua;

#[cfg(all(test, feature = "redis-test"))]
mod tests;

use std::sync::{atomic::AtomicU64, Arc};

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use fred::prelude::*;
use rand::Rng;
use tracing::{error, info, warn};

use crate::{
    error::{worker::WorkerError, Error},
    model::worker::{DeliveryJob, JobHandle},
};

pub use config::DeliveryQueueConfig;
use lua::{CLAIM_DUE_SCRIPT, CLEANUP_STALE_JOBS_SCRIPT, PUSH_JOB_SCRIPT};

#[derive(Clone)]
pub struct DeliveryQueue {
    pool: Pool,
    config: DeliveryQueueConfig,
    /// Counter for tracking when to run passive cleanup.
    push_counter: Arc<AtomicU64>,
}

impl DeliveryQueue {
    pub fn new(pool: Pool) -> Self {
        Self::with_config(pool, DeliveryQueueConfig::default())
    }

    /// Create a queue with custom configuration (tests use namespaced queue
    /// names to isolate from each other).
    pub fn with_config(pool: Pool, config: DeliveryQueueConfig) -> Self {
        Self {
            pool,
            config,
            push_counter: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.config.max_attempts
    }

    /// Enqueue a job for immediate delivery.
    ///
    /// This is the local, transactional handoff the comparison cycle calls;
    /// it returns as soon as Redis acknowledged the write.
    pub async fn enqueue(&self, job: DeliveryJob) -> Result<JobHandle, Error> {
        let handle = self.push_at(&job, Utc::now()).await?;

        // Periodically clean up stale jobs, off the caller's path.
        let count = self
            .push_counter
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        if count % self.config.cleanup_interval == 0 {
            let queue = self.clone();
            tokio::spawn(async move {
                if let Err(e) = queue.cleanup_stale_jobs().await {
                    warn!("Failed to cleanup stale jobs: {}", e);
                }
            });
        }

        Ok(handle)
    }

    /// Re-schedule a failed job one attempt later, delayed by exponential
    /// backoff with jitter.
    pub async fn schedule_retry(&self, job: &DeliveryJob) -> Result<JobHandle, Error> {
        let next = job.next_attempt();
        let delay = self.backoff_delay(next.attempt);
        let deliver_at = Utc::now()
            + ChronoDuration::from_std(delay)
                .map_err(|e| WorkerError::Scheduler(e.to_string()))?;

        info!(
            "Re-scheduling {} in {:.0}s",
            next,
            delay.as_secs_f64().round()
        );

        self.push_at(&next, deliver_at).await
    }

    async fn push_at(
        &self,
        job: &DeliveryJob,
        deliver_at: DateTime<Utc>,
    ) -> Result<JobHandle, Error> {
        let payload = serde_json::to_string(job)
            .map_err(|e| WorkerError::SerializationError(e.to_string()))?;
        let score = deliver_at.timestamp_millis() as f64;

        let sequence: i64 = self
            .pool
            .eval(
                PUSH_JOB_SCRIPT,
                vec![self.config.queue_name.clone(), self.config.sequence_name()],
                vec![payload, score.to_string()],
            )
            .await?;

        Ok(JobHandle {
            sequence,
            deliver_at,
        })
    }

    /// Exponential backoff for the given attempt number, capped, with up to
    /// 25% jitter so retry bursts spread out.
    fn backoff_delay(&self, attempt: u32) -> std::time::Duration {
        let exponent = attempt.saturating_sub(1).min(16) as i32;
        let base = self.config.initial_backoff.as_secs_f64() * 2f64.powi(exponent);
        let capped = base.min(self.config.backoff_cap.as_secs_f64());
        let jitter = rand::rng().random_range(0.0..0.25);
        std::time::Duration::from_secs_f64(capped * (1.0 + jitter))
    }

    /// Atomically claim the earliest due job, if any.
    ///
    /// A corrupted entry is moved to the dead-letter list instead of
    /// poisoning the dispatcher loop.
    pub async fn claim_due(&self) -> Result<Option<DeliveryJob>, Error> {
        let now = Utc::now().timestamp_millis();

        let entry: Option<String> = self
            .pool
            .eval(
                CLAIM_DUE_SCRIPT,
                vec![self.config.queue_name.clone()],
                vec![now.to_string()],
            )
            .await?;

        let Some(entry) = entry else {
            return Ok(None);
        };

        let parsed = entry
            .split_once('|')
            .ok_or_else(|| WorkerError::MalformedEntry(entry.clone()))
            .and_then(|(_, payload)| {
                serde_json::from_str::<DeliveryJob>(payload)
                    .map_err(|e| WorkerError::SerializationError(e.to_string()))
            });

        match parsed {
            Ok(job) => Ok(Some(job)),
            Err(e) => {
                error!("Dropping corrupt queue entry to dead-letter list: {}", e);
                self.dead_letter_raw(&entry, &e.to_string()).await?;
                Ok(None)
            }
        }
    }

    /// Record a job that spent its attempt budget. The list is capped; the
    /// oldest entries roll off once operators stop looking.
    pub async fn dead_letter(&self, job: &DeliveryJob, reason: &str) -> Result<(), Error> {
        error!("Delivery dead-lettered: {} ({})", job, reason);

        let record = serde_json::json!({
            "job": job,
            "reason": reason,
            "failed_at": Utc::now().to_rfc3339(),
        })
        .to_string();

        self.push_dead_letter(record).await
    }

    async fn dead_letter_raw(&self, entry: &str, reason: &str) -> Result<(), Error> {
        let record = serde_json::json!({
            "raw_entry": entry,
            "reason": reason,
            "failed_at": Utc::now().to_rfc3339(),
        })
        .to_string();

        self.push_dead_letter(record).await
    }

    async fn push_dead_letter(&self, record: String) -> Result<(), Error> {
        let key = self.config.dead_letter_name();
        let _: () = self.pool.lpush(&key, record).await?;
        let _: () = self
            .pool
            .ltrim(&key, 0, self.config.dead_letter_limit - 1)
            .await?;
        Ok(())
    }

    /// Number of pending jobs.
    pub async fn len(&self) -> Result<u64, Error> {
        let count: u64 = self.pool.zcard(&self.config.queue_name).await?;
        Ok(count)
    }

    /// Number of dead-lettered jobs currently retained.
    pub async fn dead_letter_len(&self) -> Result<u64, Error> {
        let count: u64 = self.pool.llen(&self.config.dead_letter_name()).await?;
        Ok(count)
    }

    /// Remove all jobs older than the configured TTL from the queue.
    ///
    /// Called automatically during pushes, but can also be invoked manually.
    /// Returns the number of stale jobs removed.
    pub async fn cleanup_stale_jobs(&self) -> Result<u64, Error> {
        let cutoff =
            Utc::now().timestamp_millis() - self.config.job_ttl.as_millis() as i64;
        let cutoff_score = cutoff as f64;

        let removed: i64 = self
            .pool
            .eval(
                CLEANUP_STALE_JOBS_SCRIPT,
                vec![self.config.queue_name.clone()],
                vec![cutoff_score.to_string()],
            )
            .await?;

        if removed > 0 {
            info!("Cleaned up {} stale jobs from queue", removed);
        }

        Ok(removed as u64)
    }
}

//! Worker pool for processing delivery jobs with concurrency control.
//!
//! Dispatcher tasks poll the queue for due jobs and spawn execution tasks
//! behind a semaphore. The pool is sized independently of comparison
//! concurrency; slow channel sends never block a check cycle. Failed
//! attempts go back to the queue with backoff until the attempt budget is
//! spent, then to the dead-letter list.

mod config;

pub use config::WorkerPoolConfig;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, RwLock, Semaphore};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::error::{retry::ErrorRetryStrategy, Error};
use crate::model::worker::DeliveryJob;
use crate::worker::handler::DeliveryHandler;
use crate::worker::queue::DeliveryQueue;

/// Worker pool for processing jobs from the DeliveryQueue.
#[derive(Clone)]
pub struct WorkerPool {
    inner: Arc<WorkerPoolRef>,
}

/// Internal pool state behind the `Arc`.
struct WorkerPoolRef {
    config: WorkerPoolConfig,
    queue: DeliveryQueue,
    handler: Arc<DeliveryHandler>,
    semaphore: Arc<Semaphore>,
    shutdown: Arc<Notify>,
    dispatcher_handles: Arc<RwLock<Vec<JoinHandle<()>>>>,
}

impl WorkerPool {
    /// Create a new pool in stopped state; `start()` spawns the dispatchers.
    pub fn new(config: WorkerPoolConfig, queue: DeliveryQueue, handler: DeliveryHandler) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.max_concurrent_jobs));
        let shutdown = Arc::new(Notify::new());

        Self {
            inner: Arc::new(WorkerPoolRef {
                config,
                handler: Arc::new(handler),
                queue,
                semaphore,
                shutdown,
                dispatcher_handles: Arc::new(RwLock::new(Vec::new())),
            }),
        }
    }

    /// Start the configured number of dispatcher tasks.
    ///
    /// Non-blocking and idempotent; calling it on a running pool logs a
    /// warning and returns Ok.
    pub async fn start(&self) -> Result<(), Error> {
        let mut handles = self.inner.dispatcher_handles.write().await;

        if !handles.is_empty() {
            warn!("Worker pool is already running");
            return Ok(());
        }

        info!(
            "Starting worker pool with {} dispatcher(s) (max {} concurrent jobs)",
            self.inner.config.dispatcher_count, self.inner.config.max_concurrent_jobs
        );

        for id in 0..self.inner.config.dispatcher_count {
            let handle = self.spawn_dispatcher(id);
            handles.push(handle);
        }

        Ok(())
    }

    /// One dispatcher: polls the queue until told to shut down.
    fn spawn_dispatcher(&self, id: usize) -> JoinHandle<()> {
        let config = self.inner.config.clone();
        let queue = self.inner.queue.clone();
        let handler = Arc::clone(&self.inner.handler);
        let semaphore = Arc::clone(&self.inner.semaphore);
        let shutdown = Arc::clone(&self.inner.shutdown);

        tokio::spawn(async move {
            info!("Dispatcher {} started", id);

            loop {
                tokio::select! {
                    // Biased select ensures the shutdown signal is seen
                    // before the next poll.
                    biased;

                    _ = shutdown.notified() => {
                        debug!("Dispatcher {} received shutdown signal", id);
                        break;
                    }

                    _ = Self::process_jobs(
                        id,
                        &config,
                        &queue,
                        &handler,
                        &semaphore,
                    ) => {}
                }
            }

            info!("Dispatcher {} stopped", id);
        })
    }

    /// Claim one due job and spawn its execution, or sleep when idle.
    async fn process_jobs(
        dispatcher_id: usize,
        config: &WorkerPoolConfig,
        queue: &DeliveryQueue,
        handler: &Arc<DeliveryHandler>,
        semaphore: &Arc<Semaphore>,
    ) {
        match queue.claim_due().await {
            Ok(Some(job)) => {
                match semaphore.clone().acquire_owned().await {
                    Ok(permit) => {
                        let handler = Arc::clone(handler);
                        let queue = queue.clone();
                        let timeout = config.job_timeout();

                        tokio::spawn(async move {
                            Self::execute_job(job, handler, queue, timeout, permit).await;
                        });
                    }
                    Err(_) => {
                        // Semaphore closed (shutting down); the claimed job
                        // goes back so a restart picks it up.
                        let _ = queue.enqueue(job).await;
                        debug!(
                            "Dispatcher {} semaphore closed, returned job to queue",
                            dispatcher_id
                        );
                    }
                }
            }
            Ok(None) => {
                tokio::time::sleep(config.poll_interval()).await;
            }
            Err(e) => {
                error!("Dispatcher {} queue error: {:?}", dispatcher_id, e);
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }
    }

    /// Execute one delivery attempt with a timeout, then settle the job:
    /// done, retried with backoff, or dead-lettered.
    async fn execute_job(
        job: DeliveryJob,
        handler: Arc<DeliveryHandler>,
        queue: DeliveryQueue,
        timeout: Duration,
        _permit: tokio::sync::OwnedSemaphorePermit,
    ) {
        let result = tokio::time::timeout(timeout, handler.handle(&job)).await;

        let (transient, reason) = match result {
            Ok(Ok(())) => {
                debug!("Job completed: {}", job);
                return;
            }
            Ok(Err(e)) => {
                error!("Job failed: {}, error: {:?}", job, e);
                let reason = e.to_string();
                let transient = matches!(
                    Error::from(e).to_retry_strategy(),
                    ErrorRetryStrategy::Retry
                );
                (transient, reason)
            }
            Err(_) => {
                error!("Job timed out after {} seconds: {}", timeout.as_secs(), job);
                (true, format!("timed out after {}s", timeout.as_secs()))
            }
        };

        let out_of_attempts = job.attempt + 1 >= queue.max_attempts();
        let settle = if transient && !out_of_attempts {
            queue.schedule_retry(&job).await.map(|_| ())
        } else {
            queue.dead_letter(&job, &reason).await
        };

        if let Err(e) = settle {
            // The job is already claimed; losing the settle write means it is
            // gone from Redis. Loud log so operators can reconstruct it.
            error!("Failed to settle job {} after failure: {:?}", job, e);
        }

        // Permit drops here, releasing the semaphore slot.
    }

    /// Stop the pool gracefully: no new jobs start, dispatchers exit, and
    /// in-flight delivery tasks run to completion.
    ///
    /// Idempotent; blocks up to the configured shutdown timeout per
    /// dispatcher.
    pub async fn stop(&self) -> Result<(), Error> {
        if !self.is_running().await {
            debug!("Worker pool is already stopped");
            return Ok(());
        }

        info!("Shutting down worker pool...");

        self.inner.semaphore.close();
        self.inner.shutdown.notify_waiters();

        let mut handles = self.inner.dispatcher_handles.write().await;
        let dispatcher_count = handles.len();

        for (i, handle) in handles.drain(..).enumerate() {
            let timeout_result =
                tokio::time::timeout(self.inner.config.shutdown_timeout(), handle).await;

            match timeout_result {
                Ok(Ok(())) => debug!("Dispatcher {} stopped cleanly", i),
                Ok(Err(e)) => error!("Dispatcher {} panicked: {:?}", i, e),
                Err(_) => warn!("Dispatcher {} did not stop within timeout", i),
            }
        }

        info!(
            "Worker pool shut down ({} dispatchers stopped, in-flight tasks will complete)",
            dispatcher_count
        );

        Ok(())
    }

    /// Whether dispatchers are currently running.
    pub async fn is_running(&self) -> bool {
        let handles = self.inner.dispatcher_handles.read().await;
        !handles.is_empty()
    }

    /// Permits still available before the concurrency limit is hit.
    pub fn available_permits(&self) -> usize {
        self.inner.semaphore.available_permits()
    }
}

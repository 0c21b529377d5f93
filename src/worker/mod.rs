//! Dispatch queue and delivery workers.
//!
//! The queue is the pipeline's only asynchronous boundary: comparison cycles
//! hand rendered messages over and move on; the pool delivers them later,
//! retrying transient failures with backoff and surfacing exhausted jobs on
//! the dead-letter list.

pub mod handler;
pub mod pool;
pub mod queue;

use fred::prelude::Pool;

pub use pool::WorkerPool;
pub use queue::DeliveryQueue;

use crate::worker::{handler::DeliveryHandler, pool::WorkerPoolConfig};

#[derive(Clone)]
pub struct Worker {
    pub queue: DeliveryQueue,
    pub pool: WorkerPool,
}

impl Worker {
    pub fn new(max_concurrent_jobs: usize, redis_pool: Pool, handler: DeliveryHandler) -> Self {
        let config = WorkerPoolConfig::new(max_concurrent_jobs);
        let queue = DeliveryQueue::new(redis_pool);
        let pool = WorkerPool::new(config, queue.clone(), handler);

        Self { queue, pool }
    }
}

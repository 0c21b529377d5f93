use fred::prelude::*;
use gjallar_test_utils::RedisTest;

use super::{job, queue_for};

/// Expect a due job to be claimed and removed in one step
#[tokio::test]
async fn claims_due_job() {
    let redis = RedisTest::new().await.expect("redis test setup");
    let queue = queue_for(&redis);

    queue.enqueue(job()).await.unwrap();

    let claimed = queue.claim_due().await.unwrap();
    assert_eq!(claimed, Some(job()));
    assert_eq!(queue.len().await.unwrap(), 0);

    let claimed = queue.claim_due().await.unwrap();
    assert_eq!(claimed, None, "claimed jobs must not reappear");
}

/// Expect an empty queue to yield nothing
#[tokio::test]
async fn empty_queue_yields_none() {
    let redis = RedisTest::new().await.expect("redis test setup");
    let queue = queue_for(&redis);

    assert_eq!(queue.claim_due().await.unwrap(), None);
}

/// Expect a scheduled retry to stay invisible until its backoff elapses
#[tokio::test]
async fn future_jobs_are_not_due() {
    let redis = RedisTest::new().await.expect("redis test setup");
    let queue = queue_for(&redis);

    queue.schedule_retry(&job()).await.unwrap();

    assert_eq!(queue.claim_due().await.unwrap(), None);
    assert_eq!(queue.len().await.unwrap(), 1, "job waits in the queue");
}

/// Expect a corrupt entry to land on the dead-letter list, not in a loop
#[tokio::test]
async fn corrupt_entry_is_dead_lettered() {
    let redis = RedisTest::new().await.expect("redis test setup");
    let queue = queue_for(&redis);

    let _: () = redis
        .redis_pool
        .zadd(
            redis.queue_name(),
            None,
            None,
            false,
            false,
            (0.0, "1|this is not json"),
        )
        .await
        .unwrap();

    assert_eq!(queue.claim_due().await.unwrap(), None);
    assert_eq!(queue.len().await.unwrap(), 0);
    assert_eq!(queue.dead_letter_len().await.unwrap(), 1);
}

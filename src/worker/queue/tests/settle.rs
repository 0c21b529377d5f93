use gjallar_test_utils::RedisTest;

use super::{job, queue_for};

/// Expect retries to bump the attempt counter on the stored job
#[tokio::test]
async fn retry_bumps_attempt() {
    let redis = RedisTest::new().await.expect("redis test setup");
    let queue = queue_for(&redis);

    let handle = queue.schedule_retry(&job()).await.unwrap();

    assert!(handle.deliver_at > chrono::Utc::now());
    assert_eq!(queue.len().await.unwrap(), 1);
}

/// Expect dead-lettered jobs to be recorded and counted
#[tokio::test]
async fn dead_letter_records_job() {
    let redis = RedisTest::new().await.expect("redis test setup");
    let queue = queue_for(&redis);

    queue
        .dead_letter(&job(), "attempts exhausted")
        .await
        .unwrap();
    queue.dead_letter(&job(), "still broken").await.unwrap();

    assert_eq!(queue.dead_letter_len().await.unwrap(), 2);
}

//! End-to-end apply-and-notify against a live Redis (redis-test feature).

use entity::team_channel::ChannelKind;

use super::{setup, MatchUpdateService};
use crate::util::test::snapshot;
use crate::worker::queue::{DeliveryQueue, DeliveryQueueConfig};
use gjallar_test_utils::{RedisTest, TestError};

/// Expect one job per fired signal and registered channel
#[tokio::test]
async fn enqueues_one_job_per_signal_and_channel() -> Result<(), TestError> {
    let (test, match_row) = setup().await?;
    test.insert_channel(match_row.team_id, ChannelKind::Telegram, "-1001")
        .await?;
    test.insert_channel(
        match_row.team_id,
        ChannelKind::Discord,
        "https://discord.example/webhook",
    )
    .await?;

    let redis = RedisTest::new().await?;
    let queue = DeliveryQueue::with_config(
        redis.redis_pool.clone(),
        DeliveryQueueConfig::with_queue_name(redis.queue_name()),
    );

    let service = MatchUpdateService::new(&test.db);
    let aggregate = service.load_aggregate(&match_row).await.unwrap();

    let mut new = snapshot(100, 1);
    new.enemy_team_id = Some(7);
    let signals = MatchUpdateService::evaluate(&aggregate, &new);
    assert_eq!(signals.len(), 1);

    let handles = service
        .apply_and_notify(&queue, &aggregate, &new, &signals)
        .await
        .unwrap();

    assert_eq!(handles.len(), 2, "one handle per channel");
    assert_eq!(queue.len().await.unwrap(), 2);

    Ok(())
}

/// Expect muted kinds to enqueue nothing
#[tokio::test]
async fn muted_signal_enqueues_nothing() -> Result<(), TestError> {
    let (test, match_row) = setup().await?;
    test.insert_channel(match_row.team_id, ChannelKind::Telegram, "-1001")
        .await?;
    test.insert_setting(match_row.team_id, "new_enemy_team", false)
        .await?;

    let redis = RedisTest::new().await?;
    let queue = DeliveryQueue::with_config(
        redis.redis_pool.clone(),
        DeliveryQueueConfig::with_queue_name(redis.queue_name()),
    );

    let service = MatchUpdateService::new(&test.db);
    let aggregate = service.load_aggregate(&match_row).await.unwrap();

    let mut new = snapshot(100, 1);
    new.enemy_team_id = Some(7);
    let signals = MatchUpdateService::evaluate(&aggregate, &new);

    let handles = service
        .apply_and_notify(&queue, &aggregate, &new, &signals)
        .await
        .unwrap();

    assert!(handles.is_empty());
    assert_eq!(queue.len().await.unwrap(), 0);

    Ok(())
}

use super::{setup, MatchUpdateService};
use crate::data::matches::MatchRepository;
use crate::model::signal::{ChangeSignal, Side};
use crate::model::snapshot::SuggestionAuthor;
use crate::util::test::{comment, lineup, snapshot};
use crate::util::time::timestamp_to_naive;
use gjallar_test_utils::TestError;

/// Expect a full evaluate → apply → evaluate cycle to converge to silence
#[tokio::test]
async fn applied_state_converges() -> Result<(), TestError> {
    let (test, match_row) = setup().await?;
    let service = MatchUpdateService::new(&test.db);
    let aggregate = service.load_aggregate(&match_row).await.unwrap();

    let mut new = snapshot(100, 1);
    new.enemy_team_id = Some(7);
    new.begin = timestamp_to_naive(1_641_056_400);
    new.begin_confirmed = true;
    new.suggestion_author = SuggestionAuthor::Enemy;
    new.suggestions = Some(vec![timestamp_to_naive(1_641_056_400).unwrap()]);
    new.enemy_lineup = Some(lineup(&[21, 22]));
    new.comments = vec![comment(5, 21)];

    let signals = MatchUpdateService::evaluate(&aggregate, &new);
    assert!(!signals.is_empty(), "first cycle must fire");

    service.apply_snapshot(&aggregate, &new).await.unwrap();

    let reloaded = MatchRepository::new(&test.db)
        .get_by_match_and_team(100, match_row.team_id)
        .await?
        .expect("match row still exists");
    let aggregate = service.load_aggregate(&reloaded).await.unwrap();

    let signals = MatchUpdateService::evaluate(&aggregate, &new);
    assert!(
        signals.is_empty(),
        "re-running the same snapshot must be silent, got {:?}",
        signals
    );

    Ok(())
}

/// Expect the same non-empty lineup to fire on the first application only
#[tokio::test]
async fn lineup_fires_once() -> Result<(), TestError> {
    let (test, match_row) = setup().await?;
    let service = MatchUpdateService::new(&test.db);
    let aggregate = service.load_aggregate(&match_row).await.unwrap();

    let mut new = snapshot(100, 1);
    new.enemy_lineup = Some(lineup(&[21, 22]));

    let signals = MatchUpdateService::evaluate(&aggregate, &new);
    assert_eq!(
        signals,
        vec![ChangeSignal::LineupChanged { side: Side::Enemy }]
    );

    service.apply_snapshot(&aggregate, &new).await.unwrap();

    let reloaded = MatchRepository::new(&test.db)
        .get_by_match_and_team(100, match_row.team_id)
        .await?
        .unwrap();
    let aggregate = service.load_aggregate(&reloaded).await.unwrap();

    assert!(MatchUpdateService::evaluate(&aggregate, &new).is_empty());

    Ok(())
}

/// Expect a null → 7 opponent discovery to fire exactly once
#[tokio::test]
async fn enemy_discovery_fires_once() -> Result<(), TestError> {
    let (test, match_row) = setup().await?;
    let service = MatchUpdateService::new(&test.db);
    let aggregate = service.load_aggregate(&match_row).await.unwrap();

    let mut new = snapshot(100, 1);
    new.enemy_team_id = Some(7);

    let signals = MatchUpdateService::evaluate(&aggregate, &new);
    assert_eq!(
        signals,
        vec![ChangeSignal::NewEnemyTeam { enemy_team_id: 7 }]
    );

    service.apply_snapshot(&aggregate, &new).await.unwrap();

    let reloaded = MatchRepository::new(&test.db)
        .get_by_match_and_team(100, match_row.team_id)
        .await?
        .unwrap();
    let aggregate = service.load_aggregate(&reloaded).await.unwrap();

    assert!(MatchUpdateService::evaluate(&aggregate, &new).is_empty());

    Ok(())
}

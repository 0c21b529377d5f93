use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use entity::team_channel::ChannelKind;

use crate::data::team::TeamRepository;
use gjallar_test_utils::{test_setup_with_all_tables, TestError};

/// Expect get_or_create to mint a shell row once and reuse it afterwards
#[tokio::test]
async fn get_or_create_is_idempotent() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let repo = TeamRepository::new(&test.db);

    let first = repo.get_or_create(7).await?;
    let second = repo.get_or_create(7).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(first.team_id, 7);
    assert_eq!(first.name, None);

    Ok(())
}

/// Expect upsert to refresh the platform-sourced display fields
#[tokio::test]
async fn upsert_refreshes_fields() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let repo = TeamRepository::new(&test.db);

    repo.get_or_create(7).await?;
    let updated = repo
        .upsert(7, Some("Kings".to_string()), Some("KNG".to_string()), None)
        .await?;

    assert_eq!(updated.name.as_deref(), Some("Kings"));
    assert_eq!(updated.tag.as_deref(), Some("KNG"));

    Ok(())
}

/// Expect only teams with a channel registration to count as registered
#[tokio::test]
async fn registered_requires_a_channel() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let registered = test.insert_team(1).await?;
    test.insert_team(2).await?;
    test.insert_channel(registered.id, ChannelKind::Telegram, "-1001")
        .await?;

    let repo = TeamRepository::new(&test.db);
    let teams = repo.registered().await?;

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].team_id, 1);

    Ok(())
}

/// Expect register_channel to replace the same kind instead of duplicating
#[tokio::test]
async fn register_channel_replaces_same_kind() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let team = test.insert_team(1).await?;
    let repo = TeamRepository::new(&test.db);

    repo.register_channel(team.id, ChannelKind::Telegram, "-1001", None)
        .await?;
    repo.register_channel(team.id, ChannelKind::Telegram, "-2002", None)
        .await?;
    repo.register_channel(team.id, ChannelKind::Discord, "https://x/webhook", Some("42"))
        .await?;

    let channels = repo.channels(team.id).await?;
    assert_eq!(channels.len(), 2);
    let telegram = channels
        .iter()
        .find(|channel| channel.kind == ChannelKind::Telegram)
        .unwrap();
    assert_eq!(telegram.address, "-2002");

    Ok(())
}

/// Expect the settings map to reflect writes and updates
#[tokio::test]
async fn settings_round_trip() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let team = test.insert_team(1).await?;
    let repo = TeamRepository::new(&test.db);

    repo.set_setting(team.id, "new_comments", false).await?;
    repo.set_setting(team.id, "new_comments", true).await?;
    repo.set_setting(team.id, "new_enemy_lineup", false).await?;

    let settings = repo.settings(team.id).await?;
    assert_eq!(settings.get("new_comments"), Some(&true));
    assert_eq!(settings.get("new_enemy_lineup"), Some(&false));
    assert_eq!(settings.get("scheduling_confirmation"), None);

    Ok(())
}

/// Expect dropping the last channel to soft-remove the team's data
#[tokio::test]
async fn removing_last_channel_soft_deletes() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let team = test.insert_team(1).await?;
    test.insert_channel(team.id, ChannelKind::Telegram, "-1001")
        .await?;
    let match_row = test.insert_match(100, team.id, None).await?;
    test.insert_comment(match_row.id, 5, 9).await?;
    let repo = TeamRepository::new(&test.db);
    repo.set_setting(team.id, "new_comments", false).await?;

    let removed = repo.remove_channel(team.id, ChannelKind::Telegram).await?;
    assert!(removed);

    let matches = entity::prelude::LeagueMatch::find()
        .filter(entity::league_match::Column::TeamId.eq(team.id))
        .all(&test.db)
        .await?;
    assert!(matches.is_empty(), "matches should be gone");

    let comments = entity::prelude::MatchComment::find().all(&test.db).await?;
    assert!(comments.is_empty(), "match children should be gone");

    assert!(repo.settings(team.id).await?.is_empty());

    let team_row = entity::prelude::LeagueTeam::find_by_id(team.id)
        .one(&test.db)
        .await?;
    assert!(team_row.is_some(), "the team row itself stays");

    Ok(())
}

/// Expect a remaining registration to block the soft removal
#[tokio::test]
async fn remaining_channel_blocks_soft_delete() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let team = test.insert_team(1).await?;
    test.insert_channel(team.id, ChannelKind::Telegram, "-1001")
        .await?;
    test.insert_channel(team.id, ChannelKind::Discord, "https://x/webhook")
        .await?;
    test.insert_match(100, team.id, None).await?;

    let repo = TeamRepository::new(&test.db);
    let removed = repo.remove_channel(team.id, ChannelKind::Telegram).await?;
    assert!(!removed);

    let matches = entity::prelude::LeagueMatch::find().all(&test.db).await?;
    assert_eq!(matches.len(), 1);

    Ok(())
}

use crate::data::comment::CommentRepository;
use crate::util::test::comment;
use gjallar_test_utils::{test_setup_with_all_tables, TestError};

/// Expect stored ids scoped to one match row
#[tokio::test]
async fn stored_ids_are_scoped_per_row() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let team_a = test.insert_team(1).await?;
    let team_b = test.insert_team(2).await?;
    let row_a = test.insert_match(100, team_a.id, Some(team_b.id)).await?;
    let row_b = test.insert_match(100, team_b.id, Some(team_a.id)).await?;
    test.insert_comment(row_a.id, 5, 9).await?;

    let repo = CommentRepository::new(&test.db);
    assert!(repo.stored_ids(row_a.id).await?.contains(&5));
    assert!(repo.stored_ids(row_b.id).await?.is_empty());

    Ok(())
}

/// Expect upsert to insert unseen ids and keep known ones single
#[tokio::test]
async fn upsert_inserts_unseen_only_once() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let team = test.insert_team(1).await?;
    let row = test.insert_match(100, team.id, None).await?;
    let repo = CommentRepository::new(&test.db);

    repo.upsert_many(row.id, &[comment(5, 9), comment(6, 9)])
        .await?;
    repo.upsert_many(row.id, &[comment(5, 9), comment(6, 9)])
        .await?;

    let ids = repo.stored_ids(row.id).await?;
    assert_eq!(ids.len(), 2);

    Ok(())
}

/// Expect edited content to be refreshed in place
#[tokio::test]
async fn upsert_refreshes_content() -> Result<(), TestError> {
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

    let test = test_setup_with_all_tables!()?;
    let team = test.insert_team(1).await?;
    let row = test.insert_match(100, team.id, None).await?;
    let repo = CommentRepository::new(&test.db);

    repo.upsert_many(row.id, &[comment(5, 9)]).await?;

    let mut edited = comment(5, 9);
    edited.content = "edited".to_string();
    repo.upsert_many(row.id, &[edited]).await?;

    let stored = entity::prelude::MatchComment::find()
        .filter(entity::match_comment::Column::MatchId.eq(row.id))
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.content, "edited");

    Ok(())
}

/// Expect comments missing from the feed to stay persisted
#[tokio::test]
async fn deleted_feed_entries_stay_persisted() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let team = test.insert_team(1).await?;
    let row = test.insert_match(100, team.id, None).await?;
    test.insert_comment(row.id, 5, 9).await?;
    let repo = CommentRepository::new(&test.db);

    repo.upsert_many(row.id, &[]).await?;

    assert!(repo.stored_ids(row.id).await?.contains(&5));

    Ok(())
}

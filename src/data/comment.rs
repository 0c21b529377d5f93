use std::collections::BTreeSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::snapshot::SnapshotComment;

pub struct CommentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Comment ids already persisted for one match row. Ids are scoped to the
    /// row; the opposite perspective's feed numbers its comments separately.
    pub async fn stored_ids(&self, match_pk: i32) -> Result<BTreeSet<i64>, DbErr> {
        let rows = entity::prelude::MatchComment::find()
            .filter(entity::match_comment::Column::MatchId.eq(match_pk))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.comment_id).collect())
    }

    /// Insert unseen comments and refresh the mutable fields of known ones.
    /// Comments that disappeared from the feed are left alone.
    pub async fn upsert_many(
        &self,
        match_pk: i32,
        comments: &[SnapshotComment],
    ) -> Result<(), DbErr> {
        for comment in comments {
            let existing = entity::prelude::MatchComment::find()
                .filter(entity::match_comment::Column::MatchId.eq(match_pk))
                .filter(entity::match_comment::Column::CommentId.eq(comment.comment_id))
                .one(self.db)
                .await?;

            match existing {
                Some(row) => {
                    if row.content == comment.content
                        && row.flag_staff == comment.flag_staff
                        && row.flag_official == comment.flag_official
                    {
                        continue;
                    }
                    let mut active: entity::match_comment::ActiveModel = row.into();
                    active.content = ActiveValue::Set(comment.content.clone());
                    active.flag_staff = ActiveValue::Set(comment.flag_staff);
                    active.flag_official = ActiveValue::Set(comment.flag_official);
                    active.updated_at = ActiveValue::Set(Utc::now().naive_utc());
                    active.update(self.db).await?;
                }
                None => {
                    let active = entity::match_comment::ActiveModel {
                        match_id: ActiveValue::Set(match_pk),
                        comment_id: ActiveValue::Set(comment.comment_id),
                        parent_id: ActiveValue::Set(comment.parent_id),
                        user_id: ActiveValue::Set(comment.user_id),
                        content: ActiveValue::Set(comment.content.clone()),
                        posted_at: ActiveValue::Set(comment.posted_at),
                        flag_staff: ActiveValue::Set(comment.flag_staff),
                        flag_official: ActiveValue::Set(comment.flag_official),
                        created_at: ActiveValue::Set(Utc::now().naive_utc()),
                        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                        ..Default::default()
                    };
                    active.insert(self.db).await?;
                }
            }
        }

        Ok(())
    }
}

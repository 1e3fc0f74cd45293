use async_trait::async_trait;
use futures::FutureExt;
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::comment::{CommentReader, CommentWriter};
use crate::domain::entities::comment::Comment;
use crate::domain::entities::id::Id;
use crate::domain::entities::media_file::MediaFile;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct CommentGateway {
    session: SqlxSession,
}

impl CommentGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_comment(row: &PgRow) -> AppResult<Comment> {
        Ok(Comment {
            id: Id::new(row.try_get("id")?),
            user_id: Id::new(row.try_get("user_id")?),
            media_file_id: Id::new(row.try_get("media_file_id")?),
            body: row.try_get("body")?,
            viewed: row.try_get("viewed")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl CommentWriter for CommentGateway {
    async fn upsert(&self, comment: Comment) -> AppResult<Id<Comment>> {
        self.session
            .with_tx(|tx| {
                let comment = comment.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO comments
                                (id, user_id, media_file_id, body, viewed, created_at, updated_at)
                            VALUES ($1, $2, $3, $4, $5, $6, $7)
                            ON CONFLICT (user_id, media_file_id)
                            DO UPDATE SET body = $4, viewed = $5, updated_at = now()
                            RETURNING id
                        "#,
                    )
                    .bind(comment.id.value)
                    .bind(comment.user_id.value)
                    .bind(comment.media_file_id.value)
                    .bind(&comment.body)
                    .bind(comment.viewed)
                    .bind(comment.created_at)
                    .bind(comment.updated_at)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl CommentReader for CommentGateway {
    async fn find_by_user_and_file(
        &self,
        user_id: &Id<User>,
        media_file_id: &Id<MediaFile>,
    ) -> AppResult<Option<Comment>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                let media_file_id = media_file_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT id, user_id, media_file_id, body, viewed, created_at, updated_at
                            FROM comments
                            WHERE user_id = $1 AND media_file_id = $2
                        "#,
                    )
                    .bind(user_id)
                    .bind(media_file_id)
                    .fetch_optional(tx.as_mut())
                    .await?;
                    match result {
                        Some(row) => Ok(Some(Self::map_comment(&row)?)),
                        None => Ok(None),
                    }
                }
                .boxed()
            })
            .await
    }

    async fn list_by_media_file(&self, media_file_id: &Id<MediaFile>) -> AppResult<Vec<Comment>> {
        self.session
            .with_tx(|tx| {
                let media_file_id = media_file_id.value;
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT id, user_id, media_file_id, body, viewed, created_at, updated_at
                            FROM comments
                            WHERE media_file_id = $1
                            ORDER BY created_at
                        "#,
                    )
                    .bind(media_file_id)
                    .fetch_all(tx.as_mut())
                    .await?;
                    rows.iter().map(Self::map_comment).collect()
                }
                .boxed()
            })
            .await
    }
}

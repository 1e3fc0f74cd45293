use async_trait::async_trait;
use futures::FutureExt;
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::video_progress::{VideoProgressReader, VideoProgressWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;
use crate::domain::entities::video_progress::VideoProgress;

#[derive(Clone)]
pub struct VideoProgressGateway {
    session: SqlxSession,
}

impl VideoProgressGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_progress(row: &PgRow) -> AppResult<VideoProgress> {
        Ok(VideoProgress {
            id: Id::new(row.try_get("id")?),
            user_id: Id::new(row.try_get("user_id")?),
            filename: row.try_get("filename")?,
            offset: row.try_get("file_offset")?,
            date_edited: row.try_get("date_edited")?,
        })
    }
}

#[async_trait]
impl VideoProgressWriter for VideoProgressGateway {
    async fn upsert(&self, progress: VideoProgress) -> AppResult<Id<VideoProgress>> {
        self.session
            .with_tx(|tx| {
                let progress = progress.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO video_progress
                                (id, user_id, filename, file_offset, date_edited)
                            VALUES ($1, $2, $3, $4, $5)
                            ON CONFLICT (user_id, filename)
                            DO UPDATE SET file_offset = $4, date_edited = $5
                            RETURNING id
                        "#,
                    )
                    .bind(progress.id.value)
                    .bind(progress.user_id.value)
                    .bind(&progress.filename)
                    .bind(progress.offset)
                    .bind(progress.date_edited)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn delete(&self, user_id: &Id<User>, filename: &str) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                let filename = filename.to_owned();
                async move {
                    sqlx::query("DELETE FROM video_progress WHERE user_id = $1 AND filename = $2")
                        .bind(user_id)
                        .bind(&filename)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl VideoProgressReader for VideoProgressGateway {
    async fn find(&self, user_id: &Id<User>, filename: &str) -> AppResult<Option<VideoProgress>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                let filename = filename.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT id, user_id, filename, file_offset, date_edited
                            FROM video_progress
                            WHERE user_id = $1 AND filename = $2
                        "#,
                    )
                    .bind(user_id)
                    .bind(&filename)
                    .fetch_optional(tx.as_mut())
                    .await?;
                    match result {
                        Some(row) => Ok(Some(Self::map_progress(&row)?)),
                        None => Ok(None),
                    }
                }
                .boxed()
            })
            .await
    }
}

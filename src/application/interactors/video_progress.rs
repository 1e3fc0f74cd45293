use std::sync::Arc;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::video_progress::{DeleteProgressDTO, GetProgressDTO, ProgressDTO, UpsertProgressDTO};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::video_progress::{VideoProgressReader, VideoProgressWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;
use crate::domain::entities::video_progress::VideoProgress;

#[derive(Clone)]
pub struct UpsertProgressInteractor {
    db_session: Arc<dyn DBSession>,
    progress_reader: Arc<dyn VideoProgressReader>,
    progress_writer: Arc<dyn VideoProgressWriter>,
}

impl UpsertProgressInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        progress_reader: Arc<dyn VideoProgressReader>,
        progress_writer: Arc<dyn VideoProgressWriter>,
    ) -> Self {
        Self {
            db_session,
            progress_reader,
            progress_writer,
        }
    }

    pub async fn execute(&self, dto: UpsertProgressDTO) -> AppResult<ProgressDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let progress = match self.progress_reader.find(&user_id, &dto.filename).await? {
            Some(mut existing) => {
                existing.offset = dto.offset;
                existing
            }
            None => VideoProgress::new(user_id, dto.filename, dto.offset),
        };
        self.progress_writer.upsert(progress.clone()).await?;
        self.db_session.commit().await?;
        Ok(ProgressDTO { progress })
    }
}

#[derive(Clone)]
pub struct GetProgressInteractor {
    progress_reader: Arc<dyn VideoProgressReader>,
}

impl GetProgressInteractor {
    pub fn new(progress_reader: Arc<dyn VideoProgressReader>) -> Self {
        Self { progress_reader }
    }

    pub async fn execute(&self, dto: GetProgressDTO) -> AppResult<ProgressDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let progress = self
            .progress_reader
            .find(&user_id, &dto.filename)
            .await?
            .ok_or(AppError::NotFound("video progress"))?;
        Ok(ProgressDTO { progress })
    }
}

#[derive(Clone)]
pub struct DeleteProgressInteractor {
    db_session: Arc<dyn DBSession>,
    progress_writer: Arc<dyn VideoProgressWriter>,
}

impl DeleteProgressInteractor {
    pub fn new(db_session: Arc<dyn DBSession>, progress_writer: Arc<dyn VideoProgressWriter>) -> Self {
        Self {
            db_session,
            progress_writer,
        }
    }

    pub async fn execute(&self, dto: DeleteProgressDTO) -> AppResult<()> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        self.progress_writer.delete(&user_id, &dto.filename).await?;
        self.db_session.commit().await?;
        Ok(())
    }
}

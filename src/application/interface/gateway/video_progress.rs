use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;
use crate::domain::entities::video_progress::VideoProgress;
use async_trait::async_trait;

#[async_trait]
pub trait VideoProgressWriter: Send + Sync {
    async fn upsert(&self, progress: VideoProgress) -> AppResult<Id<VideoProgress>>;
    async fn delete(&self, user_id: &Id<User>, filename: &str) -> AppResult<()>;
}

#[async_trait]
pub trait VideoProgressReader: Send + Sync {
    async fn find(&self, user_id: &Id<User>, filename: &str) -> AppResult<Option<VideoProgress>>;
}

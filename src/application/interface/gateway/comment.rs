use crate::application::app_error::AppResult;
use crate::domain::entities::comment::Comment;
use crate::domain::entities::id::Id;
use crate::domain::entities::media_file::MediaFile;
use crate::domain::entities::user::User;
use async_trait::async_trait;

#[async_trait]
pub trait CommentWriter: Send + Sync {
    async fn upsert(&self, comment: Comment) -> AppResult<Id<Comment>>;
}

#[async_trait]
pub trait CommentReader: Send + Sync {
    async fn find_by_user_and_file(
        &self,
        user_id: &Id<User>,
        media_file_id: &Id<MediaFile>,
    ) -> AppResult<Option<Comment>>;
    async fn list_by_media_file(&self, media_file_id: &Id<MediaFile>) -> AppResult<Vec<Comment>>;
}

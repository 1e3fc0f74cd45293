use std::sync::Arc;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::comment::{CommentListDTO, ListCommentsDTO, UpsertCommentDTO};
use crate::application::dto::id::IdDTO;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::comment::{CommentReader, CommentWriter};
use crate::application::interface::gateway::media::MediaFileReader;
use crate::domain::entities::comment::Comment;
use crate::domain::entities::id::Id;
use crate::domain::entities::media_file::MediaFile;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct UpsertCommentInteractor {
    db_session: Arc<dyn DBSession>,
    media_file_reader: Arc<dyn MediaFileReader>,
    comment_reader: Arc<dyn CommentReader>,
    comment_writer: Arc<dyn CommentWriter>,
}

impl UpsertCommentInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        media_file_reader: Arc<dyn MediaFileReader>,
        comment_reader: Arc<dyn CommentReader>,
        comment_writer: Arc<dyn CommentWriter>,
    ) -> Self {
        Self {
            db_session,
            media_file_reader,
            comment_reader,
            comment_writer,
        }
    }

    pub async fn execute(&self, dto: UpsertCommentDTO) -> AppResult<IdDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let media_file_id: Id<MediaFile> = dto.media_file_id.try_into()?;
        if self.media_file_reader.find_by_id(&media_file_id).await?.is_none() {
            return Err(AppError::NotFound("media file"));
        }
        let comment = match self
            .comment_reader
            .find_by_user_and_file(&user_id, &media_file_id)
            .await?
        {
            Some(mut existing) => {
                existing.body = dto.body;
                existing.viewed = dto.viewed;
                existing
            }
            None => {
                let mut comment = Comment::new(user_id, media_file_id, dto.body);
                comment.viewed = dto.viewed;
                comment
            }
        };
        let comment_id = self.comment_writer.upsert(comment).await?;
        self.db_session.commit().await?;
        Ok(IdDTO {
            id: comment_id.value.to_string(),
        })
    }
}

#[derive(Clone)]
pub struct ListCommentsInteractor {
    comment_reader: Arc<dyn CommentReader>,
}

impl ListCommentsInteractor {
    pub fn new(comment_reader: Arc<dyn CommentReader>) -> Self {
        Self { comment_reader }
    }

    pub async fn execute(&self, dto: ListCommentsDTO) -> AppResult<CommentListDTO> {
        let media_file_id: Id<MediaFile> = dto.media_file_id.try_into()?;
        let comments = self.comment_reader.list_by_media_file(&media_file_id).await?;
        Ok(CommentListDTO { comments })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use mockall::mock;
    use rstest::{fixture, rstest};

    use crate::application::app_error::{AppError, AppResult};
    use crate::application::dto::comment::UpsertCommentDTO;
    use crate::application::interactors::comment::UpsertCommentInteractor;
    use crate::application::interface::db::DBSession;
    use crate::application::interface::gateway::comment::{CommentReader, CommentWriter};
    use crate::application::interface::gateway::media::MediaFileReader;
    use crate::domain::entities::comment::Comment;
    use crate::domain::entities::id::Id;
    use crate::domain::entities::media_file::MediaFile;
    use crate::domain::entities::media_path::MediaPath;
    use crate::domain::entities::user::User;

    mock! {
        pub DBSessionMock {}

        #[async_trait]
        impl DBSession for DBSessionMock {
            async fn commit(&self) -> AppResult<()>;
            async fn rollback(&self) -> AppResult<()>;
        }
    }

    mock! {
        pub MediaFileReaderMock {}

        #[async_trait]
        impl MediaFileReader for MediaFileReaderMock {
            async fn find_by_id(&self, media_file_id: &Id<MediaFile>) -> AppResult<Option<MediaFile>>;
            async fn list_by_media_path(&self, media_path_id: &Id<MediaPath>) -> AppResult<Vec<MediaFile>>;
        }
    }

    mock! {
        pub CommentReaderMock {}

        #[async_trait]
        impl CommentReader for CommentReaderMock {
            async fn find_by_user_and_file(
                &self,
                user_id: &Id<User>,
                media_file_id: &Id<MediaFile>,
            ) -> AppResult<Option<Comment>>;
            async fn list_by_media_file(&self, media_file_id: &Id<MediaFile>) -> AppResult<Vec<Comment>>;
        }
    }

    mock! {
        pub CommentWriterMock {}

        #[async_trait]
        impl CommentWriter for CommentWriterMock {
            async fn upsert(&self, comment: Comment) -> AppResult<Id<Comment>>;
        }
    }

    fn test_media_file() -> MediaFile {
        MediaFile::new(
            Id::generate(),
            "heat.1995.mkv".to_string(),
            "Heat (1995)".to_string(),
        )
    }

    #[fixture]
    fn upsert_dto() -> UpsertCommentDTO {
        UpsertCommentDTO {
            user_id: Id::<User>::generate().value.to_string(),
            media_file_id: Id::<MediaFile>::generate().value.to_string(),
            body: "Great pacing".to_string(),
            viewed: true,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_upsert_creates_new_comment(upsert_dto: UpsertCommentDTO) {
        let mut db_session = MockDBSessionMock::new();
        let mut media_file_reader = MockMediaFileReaderMock::new();
        let mut comment_reader = MockCommentReaderMock::new();
        let mut comment_writer = MockCommentWriterMock::new();

        media_file_reader
            .expect_find_by_id()
            .returning(|_| Ok(Some(test_media_file())));
        comment_reader.expect_find_by_user_and_file().returning(|_, _| Ok(None));
        comment_writer
            .expect_upsert()
            .withf(|comment| comment.body == "Great pacing" && comment.viewed)
            .returning(|comment| Ok(comment.id));
        db_session.expect_commit().returning(|| Ok(()));

        let interactor = UpsertCommentInteractor::new(
            Arc::new(db_session),
            Arc::new(media_file_reader),
            Arc::new(comment_reader),
            Arc::new(comment_writer),
        );
        assert!(interactor.execute(upsert_dto).await.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn test_upsert_replaces_existing_body(upsert_dto: UpsertCommentDTO) {
        let mut db_session = MockDBSessionMock::new();
        let mut media_file_reader = MockMediaFileReaderMock::new();
        let mut comment_reader = MockCommentReaderMock::new();
        let mut comment_writer = MockCommentWriterMock::new();

        media_file_reader
            .expect_find_by_id()
            .returning(|_| Ok(Some(test_media_file())));
        comment_reader.expect_find_by_user_and_file().returning(|user_id, file_id| {
            Ok(Some(Comment::new(
                user_id.clone(),
                file_id.clone(),
                "old text".to_string(),
            )))
        });
        comment_writer
            .expect_upsert()
            .withf(|comment| comment.body == "Great pacing")
            .returning(|comment| Ok(comment.id));
        db_session.expect_commit().returning(|| Ok(()));

        let interactor = UpsertCommentInteractor::new(
            Arc::new(db_session),
            Arc::new(media_file_reader),
            Arc::new(comment_reader),
            Arc::new(comment_writer),
        );
        assert!(interactor.execute(upsert_dto).await.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn test_upsert_unknown_media_file(upsert_dto: UpsertCommentDTO) {
        let mut media_file_reader = MockMediaFileReaderMock::new();
        media_file_reader.expect_find_by_id().returning(|_| Ok(None));

        let interactor = UpsertCommentInteractor::new(
            Arc::new(MockDBSessionMock::new()),
            Arc::new(media_file_reader),
            Arc::new(MockCommentReaderMock::new()),
            Arc::new(MockCommentWriterMock::new()),
        );
        let result = interactor.execute(upsert_dto).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }
}

use std::sync::Arc;

use tracing::info;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::collection::{
    CollectionListDTO, CreateCollectionDTO, DeleteCollectionDTO, ListCollectionsDTO, UpdateCollectionDTO,
};
use crate::application::dto::id::IdDTO;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::collection::{CollectionReader, CollectionWriter};
use crate::application::interface::gateway::user::UserReader;
use crate::domain::entities::collection::Collection;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

/// Collection writes are staff-only; reads are open to any authenticated user.
async fn require_staff(user_reader: &Arc<dyn UserReader>, actor_id: String) -> AppResult<()> {
    let actor_id: Id<User> = actor_id.try_into()?;
    let actor = user_reader
        .find_by_id(&actor_id)
        .await?
        .ok_or(AppError::InvalidCredentials)?;
    if !actor.is_staff {
        return Err(AppError::PermissionDenied);
    }
    Ok(())
}

#[derive(Clone)]
pub struct CreateCollectionInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    collection_reader: Arc<dyn CollectionReader>,
    collection_writer: Arc<dyn CollectionWriter>,
}

impl CreateCollectionInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        collection_reader: Arc<dyn CollectionReader>,
        collection_writer: Arc<dyn CollectionWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            collection_reader,
            collection_writer,
        }
    }

    pub async fn execute(&self, dto: CreateCollectionDTO) -> AppResult<IdDTO> {
        require_staff(&self.user_reader, dto.actor_id).await?;
        if self.collection_reader.find_by_name(&dto.name).await?.is_some() {
            return Err(AppError::Conflict("Collection name already exists".to_string()));
        }
        let collection = Collection::new(dto.name);
        let collection_id = self.collection_writer.insert(collection).await?;
        self.db_session.commit().await?;
        info!("Created collection {}", collection_id.value);
        Ok(IdDTO {
            id: collection_id.value.to_string(),
        })
    }
}

#[derive(Clone)]
pub struct GetCollectionInteractor {
    collection_reader: Arc<dyn CollectionReader>,
}

impl GetCollectionInteractor {
    pub fn new(collection_reader: Arc<dyn CollectionReader>) -> Self {
        Self { collection_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<Collection> {
        let collection_id: Id<Collection> = dto.id.try_into()?;
        self.collection_reader
            .find_by_id(&collection_id)
            .await?
            .ok_or(AppError::NotFound("collection"))
    }
}

#[derive(Clone)]
pub struct ListCollectionsInteractor {
    collection_reader: Arc<dyn CollectionReader>,
}

impl ListCollectionsInteractor {
    pub fn new(collection_reader: Arc<dyn CollectionReader>) -> Self {
        Self { collection_reader }
    }

    pub async fn execute(&self, dto: ListCollectionsDTO) -> AppResult<CollectionListDTO> {
        let offset = (dto.page - 1) * dto.per_page;
        let collections = self.collection_reader.list(dto.per_page, offset).await?;
        let total = self.collection_reader.count().await?;
        Ok(CollectionListDTO { collections, total })
    }
}

#[derive(Clone)]
pub struct UpdateCollectionInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    collection_reader: Arc<dyn CollectionReader>,
    collection_writer: Arc<dyn CollectionWriter>,
}

impl UpdateCollectionInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        collection_reader: Arc<dyn CollectionReader>,
        collection_writer: Arc<dyn CollectionWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            collection_reader,
            collection_writer,
        }
    }

    pub async fn execute(&self, dto: UpdateCollectionDTO) -> AppResult<IdDTO> {
        require_staff(&self.user_reader, dto.actor_id).await?;
        let collection_id: Id<Collection> = dto.collection_id.try_into()?;
        let mut collection = self
            .collection_reader
            .find_by_id(&collection_id)
            .await?
            .ok_or(AppError::NotFound("collection"))?;
        if let Some(existing) = self.collection_reader.find_by_name(&dto.name).await? {
            if existing.id != collection.id {
                return Err(AppError::Conflict("Collection name already exists".to_string()));
            }
        }
        collection.name = dto.name;
        let collection_id = self.collection_writer.update(collection).await?;
        self.db_session.commit().await?;
        Ok(IdDTO {
            id: collection_id.value.to_string(),
        })
    }
}

#[derive(Clone)]
pub struct DeleteCollectionInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    collection_reader: Arc<dyn CollectionReader>,
    collection_writer: Arc<dyn CollectionWriter>,
}

impl DeleteCollectionInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        collection_reader: Arc<dyn CollectionReader>,
        collection_writer: Arc<dyn CollectionWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            collection_reader,
            collection_writer,
        }
    }

    pub async fn execute(&self, dto: DeleteCollectionDTO) -> AppResult<()> {
        require_staff(&self.user_reader, dto.actor_id).await?;
        let collection_id: Id<Collection> = dto.collection_id.try_into()?;
        if self.collection_reader.find_by_id(&collection_id).await?.is_none() {
            return Err(AppError::NotFound("collection"));
        }
        self.collection_writer.delete(&collection_id).await?;
        self.db_session.commit().await?;
        info!("Deleted collection {}", collection_id.value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use mockall::mock;
    use rstest::rstest;

    use crate::application::app_error::{AppError, AppResult};
    use crate::application::dto::collection::{CreateCollectionDTO, ListCollectionsDTO};
    use crate::application::interactors::collection::{CreateCollectionInteractor, ListCollectionsInteractor};
    use crate::application::interface::db::DBSession;
    use crate::application::interface::gateway::collection::{CollectionReader, CollectionWriter};
    use crate::application::interface::gateway::user::UserReader;
    use crate::domain::entities::collection::Collection;
    use crate::domain::entities::id::Id;
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
        pub UserReaderMock {}

        #[async_trait]
        impl UserReader for UserReaderMock {
            async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<User>>;
            async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
            async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
            async fn list_all(&self) -> AppResult<Vec<User>>;
        }
    }

    mock! {
        pub CollectionReaderMock {}

        #[async_trait]
        impl CollectionReader for CollectionReaderMock {
            async fn find_by_id(&self, collection_id: &Id<Collection>) -> AppResult<Option<Collection>>;
            async fn find_by_name(&self, name: &str) -> AppResult<Option<Collection>>;
            async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<Collection>>;
            async fn count(&self) -> AppResult<i64>;
        }
    }

    mock! {
        pub CollectionWriterMock {}

        #[async_trait]
        impl CollectionWriter for CollectionWriterMock {
            async fn insert(&self, collection: Collection) -> AppResult<Id<Collection>>;
            async fn update(&self, collection: Collection) -> AppResult<Id<Collection>>;
            async fn delete(&self, collection_id: &Id<Collection>) -> AppResult<()>;
        }
    }

    fn staff_user() -> User {
        let mut user = User::new(
            "admin".to_string(),
            "admin@example.com".to_string(),
            "hash".to_string(),
        );
        user.is_staff = true;
        user
    }

    fn regular_user() -> User {
        User::new(
            "viewer".to_string(),
            "viewer@example.com".to_string(),
            "hash".to_string(),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_collection_as_staff() {
        let mut db_session = MockDBSessionMock::new();
        let mut user_reader = MockUserReaderMock::new();
        let mut collection_reader = MockCollectionReaderMock::new();
        let mut collection_writer = MockCollectionWriterMock::new();

        user_reader.expect_find_by_id().returning(|_| Ok(Some(staff_user())));
        collection_reader.expect_find_by_name().returning(|_| Ok(None));
        collection_writer
            .expect_insert()
            .returning(|collection| Ok(collection.id));
        db_session.expect_commit().returning(|| Ok(()));

        let interactor = CreateCollectionInteractor::new(
            Arc::new(db_session),
            Arc::new(user_reader),
            Arc::new(collection_reader),
            Arc::new(collection_writer),
        );
        let dto = CreateCollectionDTO {
            actor_id: Id::<User>::generate().value.to_string(),
            name: "Film Noir".to_string(),
        };
        assert!(interactor.execute(dto).await.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_collection_requires_staff() {
        let db_session = MockDBSessionMock::new();
        let mut user_reader = MockUserReaderMock::new();
        let collection_reader = MockCollectionReaderMock::new();
        let collection_writer = MockCollectionWriterMock::new();

        user_reader.expect_find_by_id().returning(|_| Ok(Some(regular_user())));

        let interactor = CreateCollectionInteractor::new(
            Arc::new(db_session),
            Arc::new(user_reader),
            Arc::new(collection_reader),
            Arc::new(collection_writer),
        );
        let dto = CreateCollectionDTO {
            actor_id: Id::<User>::generate().value.to_string(),
            name: "Film Noir".to_string(),
        };
        let result = interactor.execute(dto).await;
        assert!(matches!(result.unwrap_err(), AppError::PermissionDenied));
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_collection_duplicate_name() {
        let db_session = MockDBSessionMock::new();
        let mut user_reader = MockUserReaderMock::new();
        let mut collection_reader = MockCollectionReaderMock::new();
        let collection_writer = MockCollectionWriterMock::new();

        user_reader.expect_find_by_id().returning(|_| Ok(Some(staff_user())));
        collection_reader
            .expect_find_by_name()
            .returning(|name| Ok(Some(Collection::new(name.to_string()))));

        let interactor = CreateCollectionInteractor::new(
            Arc::new(db_session),
            Arc::new(user_reader),
            Arc::new(collection_reader),
            Arc::new(collection_writer),
        );
        let dto = CreateCollectionDTO {
            actor_id: Id::<User>::generate().value.to_string(),
            name: "Film Noir".to_string(),
        };
        let result = interactor.execute(dto).await;
        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_list_collections_paginates() {
        let mut collection_reader = MockCollectionReaderMock::new();
        collection_reader
            .expect_list()
            .withf(|limit, offset| *limit == 20 && *offset == 20)
            .returning(|_, _| Ok(vec![Collection::new("Westerns".to_string())]));
        collection_reader.expect_count().returning(|| Ok(21));

        let interactor = ListCollectionsInteractor::new(Arc::new(collection_reader));
        let result = interactor
            .execute(ListCollectionsDTO { page: 2, per_page: 20 })
            .await
            .unwrap();
        assert_eq!(result.collections.len(), 1);
        assert_eq!(result.total, 21);
    }
}

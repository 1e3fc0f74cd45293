use std::sync::Arc;

use tracing::info;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::user::{CreateUserDTO, GetUserDTO};
use crate::application::interface::crypto::CredentialsHasher;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct CreateUserInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    user_writer: Arc<dyn UserWriter>,
    hasher: Arc<dyn CredentialsHasher>,
}

impl CreateUserInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        user_writer: Arc<dyn UserWriter>,
        hasher: Arc<dyn CredentialsHasher>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            user_writer,
            hasher,
        }
    }

    pub async fn execute(&self, dto: CreateUserDTO) -> AppResult<IdDTO> {
        let username = dto.username.to_lowercase().trim().to_string();
        let email = dto.email.to_lowercase().trim().to_string();
        if self.user_reader.find_by_username(&username).await?.is_some() {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }
        if self.user_reader.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }
        let hashed = self.hasher.hash_password(&dto.password).await?;
        let user = User::new(username, email, hashed);
        let user_id = self.user_writer.insert(user).await?;
        self.db_session.commit().await?;
        info!("Created user {}", user_id.value);
        Ok(IdDTO {
            id: user_id.value.to_string(),
        })
    }
}

#[derive(Clone)]
pub struct GetMeInteractor {
    user_reader: Arc<dyn UserReader>,
}

impl GetMeInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>) -> Self {
        Self { user_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<GetUserDTO> {
        let user_id: Id<User> = dto.id.try_into()?;
        let user = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::NotFound("user"))?;
        Ok(GetUserDTO { user })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use mockall::mock;
    use rstest::{fixture, rstest};

    use crate::application::app_error::{AppError, AppResult};
    use crate::application::dto::id::IdDTO;
    use crate::application::dto::user::CreateUserDTO;
    use crate::application::interactors::users::{CreateUserInteractor, GetMeInteractor};
    use crate::application::interface::crypto::CredentialsHasher;
    use crate::application::interface::db::DBSession;
    use crate::application::interface::gateway::user::{UserReader, UserWriter};
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
        pub UserWriterMock {}

        #[async_trait]
        impl UserWriter for UserWriterMock {
            async fn insert(&self, user: User) -> AppResult<Id<User>>;
            async fn update_password(&self, user_id: &Id<User>, password: &str) -> AppResult<()>;
        }
    }

    mock! {
        pub HasherMock {}

        #[async_trait]
        impl CredentialsHasher for HasherMock {
            async fn hash_password(&self, password: &str) -> AppResult<String>;
            async fn verify_password(&self, password: &str, hashed: &str) -> AppResult<bool>;
        }
    }

    #[fixture]
    fn create_dto() -> CreateUserDTO {
        CreateUserDTO {
            username: "Tester".to_string(),
            email: "Tester@Example.com".to_string(),
            password: "Password123!".to_string(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_user_normalizes_and_hashes(create_dto: CreateUserDTO) {
        let mut db_session = MockDBSessionMock::new();
        let mut user_reader = MockUserReaderMock::new();
        let mut user_writer = MockUserWriterMock::new();
        let mut hasher = MockHasherMock::new();

        user_reader.expect_find_by_username().returning(|_| Ok(None));
        user_reader.expect_find_by_email().returning(|_| Ok(None));
        hasher
            .expect_hash_password()
            .returning(|_| Ok("$argon2$hash".to_string()));
        user_writer
            .expect_insert()
            .withf(|user| {
                user.username == "tester" && user.email == "tester@example.com" && user.password == "$argon2$hash"
            })
            .returning(|user| Ok(user.id));
        db_session.expect_commit().returning(|| Ok(()));

        let interactor = CreateUserInteractor::new(
            Arc::new(db_session),
            Arc::new(user_reader),
            Arc::new(user_writer),
            Arc::new(hasher),
        );
        assert!(interactor.execute(create_dto).await.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_user_duplicate_username(create_dto: CreateUserDTO) {
        let db_session = MockDBSessionMock::new();
        let mut user_reader = MockUserReaderMock::new();
        let user_writer = MockUserWriterMock::new();
        let hasher = MockHasherMock::new();

        user_reader.expect_find_by_username().returning(|_| {
            Ok(Some(User::new(
                "tester".to_string(),
                "other@example.com".to_string(),
                "hash".to_string(),
            )))
        });

        let interactor = CreateUserInteractor::new(
            Arc::new(db_session),
            Arc::new(user_reader),
            Arc::new(user_writer),
            Arc::new(hasher),
        );
        let result = interactor.execute(create_dto).await;
        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_me_not_found() {
        let mut user_reader = MockUserReaderMock::new();
        user_reader.expect_find_by_id().returning(|_| Ok(None));

        let interactor = GetMeInteractor::new(Arc::new(user_reader));
        let result = interactor
            .execute(IdDTO {
                id: Id::<User>::generate().value.to_string(),
            })
            .await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }
}

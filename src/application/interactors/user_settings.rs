use std::str::FromStr;
use std::sync::Arc;

use crate::application::app_error::AppResult;
use crate::application::dto::user_settings::{GetSettingsDTO, SettingsDTO, UpdateSettingsDTO};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::user_settings::{UserSettingsReader, UserSettingsWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;
use crate::domain::entities::user_settings::{SortOrder, Theme, UserSettings};

/// Settings rows are created lazily: the first read for a user persists the
/// defaults, so every later update has a row to patch.
#[derive(Clone)]
pub struct GetSettingsInteractor {
    db_session: Arc<dyn DBSession>,
    settings_reader: Arc<dyn UserSettingsReader>,
    settings_writer: Arc<dyn UserSettingsWriter>,
}

impl GetSettingsInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        settings_reader: Arc<dyn UserSettingsReader>,
        settings_writer: Arc<dyn UserSettingsWriter>,
    ) -> Self {
        Self {
            db_session,
            settings_reader,
            settings_writer,
        }
    }

    pub async fn execute(&self, dto: GetSettingsDTO) -> AppResult<SettingsDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let settings = match self.settings_reader.find_by_user_id(&user_id).await? {
            Some(settings) => settings,
            None => {
                let settings = UserSettings::defaults(user_id);
                self.settings_writer.insert(settings.clone()).await?;
                self.db_session.commit().await?;
                settings
            }
        };
        Ok(SettingsDTO { settings })
    }
}

#[derive(Clone)]
pub struct UpdateSettingsInteractor {
    db_session: Arc<dyn DBSession>,
    settings_reader: Arc<dyn UserSettingsReader>,
    settings_writer: Arc<dyn UserSettingsWriter>,
}

impl UpdateSettingsInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        settings_reader: Arc<dyn UserSettingsReader>,
        settings_writer: Arc<dyn UserSettingsWriter>,
    ) -> Self {
        Self {
            db_session,
            settings_reader,
            settings_writer,
        }
    }

    pub async fn execute(&self, dto: UpdateSettingsDTO) -> AppResult<SettingsDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let mut settings = match self.settings_reader.find_by_user_id(&user_id).await? {
            Some(settings) => settings,
            None => {
                let settings = UserSettings::defaults(user_id);
                self.settings_writer.insert(settings.clone()).await?;
                settings
            }
        };
        if let Some(theme) = dto.theme {
            settings.theme = Theme::from_str(&theme)?;
        }
        if let Some(default_sort) = dto.default_sort {
            settings.default_sort = SortOrder::from_str(&default_sort)?;
        }
        if let Some(binge_mode) = dto.binge_mode {
            settings.binge_mode = binge_mode;
        }
        if let Some(jump) = dto.jump_to_last_watched {
            settings.jump_to_last_watched = jump;
        }
        self.settings_writer.update(settings.clone()).await?;
        self.db_session.commit().await?;
        Ok(SettingsDTO { settings })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use mockall::mock;
    use rstest::rstest;

    use crate::application::app_error::{AppError, AppResult};
    use crate::application::dto::user_settings::{GetSettingsDTO, UpdateSettingsDTO};
    use crate::application::interactors::user_settings::{GetSettingsInteractor, UpdateSettingsInteractor};
    use crate::application::interface::db::DBSession;
    use crate::application::interface::gateway::user_settings::{UserSettingsReader, UserSettingsWriter};
    use crate::domain::entities::id::Id;
    use crate::domain::entities::user::User;
    use crate::domain::entities::user_settings::{Theme, UserSettings};

    mock! {
        pub DBSessionMock {}

        #[async_trait]
        impl DBSession for DBSessionMock {
            async fn commit(&self) -> AppResult<()>;
            async fn rollback(&self) -> AppResult<()>;
        }
    }

    mock! {
        pub SettingsReaderMock {}

        #[async_trait]
        impl UserSettingsReader for SettingsReaderMock {
            async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<UserSettings>>;
        }
    }

    mock! {
        pub SettingsWriterMock {}

        #[async_trait]
        impl UserSettingsWriter for SettingsWriterMock {
            async fn insert(&self, settings: UserSettings) -> AppResult<Id<UserSettings>>;
            async fn update(&self, settings: UserSettings) -> AppResult<Id<UserSettings>>;
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_settings_creates_defaults_on_first_read() {
        let mut db_session = MockDBSessionMock::new();
        let mut settings_reader = MockSettingsReaderMock::new();
        let mut settings_writer = MockSettingsWriterMock::new();

        settings_reader.expect_find_by_user_id().returning(|_| Ok(None));
        settings_writer
            .expect_insert()
            .times(1)
            .returning(|settings| Ok(settings.id));
        db_session.expect_commit().returning(|| Ok(()));

        let interactor = GetSettingsInteractor::new(
            Arc::new(db_session),
            Arc::new(settings_reader),
            Arc::new(settings_writer),
        );
        let dto = GetSettingsDTO {
            user_id: Id::<User>::generate().value.to_string(),
        };
        let result = interactor.execute(dto).await.unwrap();
        assert_eq!(result.settings.theme, Theme::Auto);
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_settings_patches_theme() {
        let mut db_session = MockDBSessionMock::new();
        let mut settings_reader = MockSettingsReaderMock::new();
        let mut settings_writer = MockSettingsWriterMock::new();

        settings_reader
            .expect_find_by_user_id()
            .returning(|user_id| Ok(Some(UserSettings::defaults(user_id.clone()))));
        settings_writer
            .expect_update()
            .withf(|settings| settings.theme == Theme::Dark && settings.binge_mode)
            .returning(|settings| Ok(settings.id));
        db_session.expect_commit().returning(|| Ok(()));

        let interactor = UpdateSettingsInteractor::new(
            Arc::new(db_session),
            Arc::new(settings_reader),
            Arc::new(settings_writer),
        );
        let dto = UpdateSettingsDTO {
            user_id: Id::<User>::generate().value.to_string(),
            theme: Some("dark".to_string()),
            default_sort: None,
            binge_mode: None,
            jump_to_last_watched: None,
        };
        let result = interactor.execute(dto).await.unwrap();
        assert_eq!(result.settings.theme, Theme::Dark);
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_settings_rejects_unknown_theme() {
        let db_session = MockDBSessionMock::new();
        let mut settings_reader = MockSettingsReaderMock::new();
        let settings_writer = MockSettingsWriterMock::new();

        settings_reader
            .expect_find_by_user_id()
            .returning(|user_id| Ok(Some(UserSettings::defaults(user_id.clone()))));

        let interactor = UpdateSettingsInteractor::new(
            Arc::new(db_session),
            Arc::new(settings_reader),
            Arc::new(settings_writer),
        );
        let dto = UpdateSettingsDTO {
            user_id: Id::<User>::generate().value.to_string(),
            theme: Some("sepia".to_string()),
            default_sort: None,
            binge_mode: None,
            jump_to_last_watched: None,
        };
        let result = interactor.execute(dto).await;
        assert!(matches!(result.unwrap_err(), AppError::InvalidTheme(_)));
    }
}

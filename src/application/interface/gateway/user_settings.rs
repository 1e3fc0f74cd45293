use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;
use crate::domain::entities::user_settings::UserSettings;
use async_trait::async_trait;

#[async_trait]
pub trait UserSettingsWriter: Send + Sync {
    async fn insert(&self, settings: UserSettings) -> AppResult<Id<UserSettings>>;
    async fn update(&self, settings: UserSettings) -> AppResult<Id<UserSettings>>;
}

#[async_trait]
pub trait UserSettingsReader: Send + Sync {
    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<UserSettings>>;
}

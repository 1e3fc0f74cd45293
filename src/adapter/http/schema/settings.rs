use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::user_settings::UserSettings;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSettingsRequest {
    #[schema(example = "dark")]
    pub theme: Option<String>,
    #[schema(example = "filename")]
    pub default_sort: Option<String>,
    pub binge_mode: Option<bool>,
    pub jump_to_last_watched: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SettingsResponse {
    pub theme: String,
    pub default_sort: String,
    pub can_download: bool,
    pub binge_mode: bool,
    pub jump_to_last_watched: bool,
}

impl From<UserSettings> for SettingsResponse {
    fn from(settings: UserSettings) -> Self {
        Self {
            theme: settings.theme.as_str().to_string(),
            default_sort: settings.default_sort.as_str().to_string(),
            can_download: settings.can_download,
            binge_mode: settings.binge_mode,
            jump_to_last_watched: settings.jump_to_last_watched,
        }
    }
}

use crate::domain::entities::user_settings::UserSettings;

#[derive(Debug)]
pub struct GetSettingsDTO {
    pub user_id: String,
}

#[derive(Debug)]
pub struct UpdateSettingsDTO {
    pub user_id: String,
    pub theme: Option<String>,
    pub default_sort: Option<String>,
    pub binge_mode: Option<bool>,
    pub jump_to_last_watched: Option<bool>,
}

#[derive(Debug)]
pub struct SettingsDTO {
    pub settings: UserSettings,
}

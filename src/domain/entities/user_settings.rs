use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::application::app_error::AppError;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Theme {
    Light,
    Dark,
    Auto,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "auto" => Ok(Theme::Auto),
            other => Err(AppError::InvalidTheme(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortOrder {
    Filename,
    Timestamp,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Filename => "filename",
            SortOrder::Timestamp => "timestamp",
        }
    }
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "filename" => Ok(SortOrder::Filename),
            "timestamp" => Ok(SortOrder::Timestamp),
            other => Err(AppError::InvalidSortOrder(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserSettings {
    pub id: Id<UserSettings>,
    pub user_id: Id<User>,
    pub theme: Theme,
    pub default_sort: SortOrder,
    pub can_download: bool,
    pub binge_mode: bool,
    pub jump_to_last_watched: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserSettings {
    /// Defaults used when a user touches settings for the first time.
    pub fn defaults(user_id: Id<User>) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            user_id,
            theme: Theme::Auto,
            default_sort: SortOrder::Filename,
            can_download: true,
            binge_mode: true,
            jump_to_last_watched: true,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::domain::entities::id::Id;
    use crate::domain::entities::user_settings::{SortOrder, Theme, UserSettings};

    #[test]
    fn test_theme_round_trip() {
        for theme in [Theme::Light, Theme::Dark, Theme::Auto] {
            assert_eq!(Theme::from_str(theme.as_str()).unwrap(), theme);
        }
    }

    #[test]
    fn test_sort_order_invalid() {
        assert!(SortOrder::from_str("shuffled").is_err());
    }

    #[test]
    fn test_defaults() {
        let settings = UserSettings::defaults(Id::generate());
        assert_eq!(settings.theme, Theme::Auto);
        assert_eq!(settings.default_sort, SortOrder::Filename);
        assert!(settings.can_download);
        assert!(settings.binge_mode);
    }
}

use std::str::FromStr;

use async_trait::async_trait;
use futures::FutureExt;
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::user_settings::{UserSettingsReader, UserSettingsWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;
use crate::domain::entities::user_settings::{SortOrder, Theme, UserSettings};

#[derive(Clone)]
pub struct UserSettingsGateway {
    session: SqlxSession,
}

impl UserSettingsGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_settings(row: &PgRow) -> AppResult<UserSettings> {
        let theme: String = row.try_get("theme")?;
        let default_sort: String = row.try_get("default_sort")?;
        Ok(UserSettings {
            id: Id::new(row.try_get("id")?),
            user_id: Id::new(row.try_get("user_id")?),
            theme: Theme::from_str(&theme)?,
            default_sort: SortOrder::from_str(&default_sort)?,
            can_download: row.try_get("can_download")?,
            binge_mode: row.try_get("binge_mode")?,
            jump_to_last_watched: row.try_get("jump_to_last_watched")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl UserSettingsWriter for UserSettingsGateway {
    async fn insert(&self, settings: UserSettings) -> AppResult<Id<UserSettings>> {
        self.session
            .with_tx(|tx| {
                let settings = settings.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO user_settings
                                (id, user_id, theme, default_sort, can_download, binge_mode,
                                 jump_to_last_watched, created_at, updated_at)
                            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                            RETURNING id
                        "#,
                    )
                    .bind(settings.id.value)
                    .bind(settings.user_id.value)
                    .bind(settings.theme.as_str())
                    .bind(settings.default_sort.as_str())
                    .bind(settings.can_download)
                    .bind(settings.binge_mode)
                    .bind(settings.jump_to_last_watched)
                    .bind(settings.created_at)
                    .bind(settings.updated_at)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn update(&self, settings: UserSettings) -> AppResult<Id<UserSettings>> {
        self.session
            .with_tx(|tx| {
                let settings = settings.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            UPDATE user_settings
                            SET theme = $2, default_sort = $3, can_download = $4,
                                binge_mode = $5, jump_to_last_watched = $6, updated_at = now()
                            WHERE id = $1
                            RETURNING id
                        "#,
                    )
                    .bind(settings.id.value)
                    .bind(settings.theme.as_str())
                    .bind(settings.default_sort.as_str())
                    .bind(settings.can_download)
                    .bind(settings.binge_mode)
                    .bind(settings.jump_to_last_watched)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl UserSettingsReader for UserSettingsGateway {
    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<UserSettings>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT id, user_id, theme, default_sort, can_download, binge_mode,
                                   jump_to_last_watched, created_at, updated_at
                            FROM user_settings
                            WHERE user_id = $1
                        "#,
                    )
                    .bind(user_id)
                    .fetch_optional(tx.as_mut())
                    .await?;
                    match result {
                        Some(row) => Ok(Some(Self::map_settings(&row)?)),
                        None => Ok(None),
                    }
                }
                .boxed()
            })
            .await
    }
}

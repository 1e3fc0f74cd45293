use async_trait::async_trait;
use futures::FutureExt;
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct UserGateway {
    session: SqlxSession,
}

impl UserGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_user(row: &PgRow) -> AppResult<User> {
        Ok(User {
            id: Id::new(row.try_get("id")?),
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            is_staff: row.try_get("is_staff")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn find_user(result: Option<PgRow>) -> AppResult<Option<User>> {
        match result {
            Some(row) => Ok(Some(Self::map_user(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserWriter for UserGateway {
    async fn insert(&self, user: User) -> AppResult<Id<User>> {
        self.session
            .with_tx(|tx| {
                let user = user.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO users
                                (id, username, email, password, is_staff, created_at, updated_at)
                            VALUES
                                ($1, $2, $3, $4, $5, $6, $7)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(user.id.value)
                    .bind(&user.username)
                    .bind(&user.email)
                    .bind(&user.password)
                    .bind(user.is_staff)
                    .bind(user.created_at)
                    .bind(user.updated_at)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn update_password(&self, user_id: &Id<User>, password: &str) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                let password = password.to_owned();
                async move {
                    sqlx::query(
                        r#"
                            UPDATE users
                            SET password = $2, updated_at = now()
                            WHERE id = $1
                        "#,
                    )
                    .bind(user_id)
                    .bind(&password)
                    .execute(tx.as_mut())
                    .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl UserReader for UserGateway {
    async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<User>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, username, email, password, is_staff, created_at, updated_at
                            FROM
                                users
                            WHERE id = $1
                        "#,
                    )
                    .bind(user_id)
                    .fetch_optional(tx.as_mut())
                    .await?;
                    Self::find_user(result)
                }
                .boxed()
            })
            .await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.session
            .with_tx(|tx| {
                let username = username.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, username, email, password, is_staff, created_at, updated_at
                            FROM
                                users
                            WHERE lower(username) = lower($1)
                        "#,
                    )
                    .bind(&username)
                    .fetch_optional(tx.as_mut())
                    .await?;
                    Self::find_user(result)
                }
                .boxed()
            })
            .await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.session
            .with_tx(|tx| {
                let email = email.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, username, email, password, is_staff, created_at, updated_at
                            FROM
                                users
                            WHERE lower(email) = lower($1)
                        "#,
                    )
                    .bind(&email)
                    .fetch_optional(tx.as_mut())
                    .await?;
                    Self::find_user(result)
                }
                .boxed()
            })
            .await
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                id, username, email, password, is_staff, created_at, updated_at
                            FROM
                                users
                            ORDER BY id
                        "#,
                    )
                    .fetch_all(tx.as_mut())
                    .await?;
                    rows.iter().map(Self::map_user).collect()
                }
                .boxed()
            })
            .await
    }
}

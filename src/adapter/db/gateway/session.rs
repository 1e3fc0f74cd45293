use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use futures::FutureExt;
use sqlx::Row;
use tracing::debug;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::session::{SessionReader, SessionWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::session::Session;
use crate::domain::entities::user::User;

pub struct SessionGateway {
    session: SqlxSession,
}

impl SessionGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }
}

/// `last_touch` is stored as ISO-8601 text. A value that does not parse is
/// reported as absent rather than an error: stale or mangled bookkeeping
/// must never lock a user out, the idle check simply starts over.
fn parse_last_touch(raw: Option<String>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(e) => {
            debug!("Discarding unparseable last_touch value {:?}: {}", raw, e);
            None
        }
    }
}

#[async_trait]
impl SessionWriter for SessionGateway {
    async fn insert(&self, session: Session) -> AppResult<Id<Session>> {
        self.session
            .with_tx(|tx| {
                let session = session.clone();
                async move {
                    let last_touch = session
                        .last_touch
                        .map(|t| t.to_rfc3339_opts(SecondsFormat::Micros, true));
                    let result = sqlx::query(
                        r#"
                            INSERT INTO sessions
                                (id, user_id, created_at, last_touch)
                            VALUES ($1, $2, $3, $4)
                            RETURNING id
                        "#,
                    )
                    .bind(session.id.value)
                    .bind(session.user_id.value)
                    .bind(session.created_at)
                    .bind(last_touch)
                    .fetch_one(tx.as_mut())
                    .await?;

                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn touch(&self, session_id: &Id<Session>, now: DateTime<Utc>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let session_id = session_id.value;
                async move {
                    sqlx::query(
                        r#"
                            UPDATE sessions
                            SET last_touch = $2
                            WHERE id = $1
                        "#,
                    )
                    .bind(session_id)
                    .bind(now.to_rfc3339_opts(SecondsFormat::Micros, true))
                    .execute(tx.as_mut())
                    .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete(&self, session_id: &Id<Session>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let session_id = session_id.value;
                async move {
                    sqlx::query("DELETE FROM sessions WHERE id = $1")
                        .bind(session_id)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete_by_user_id(&self, user_id: &Id<User>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    sqlx::query("DELETE FROM sessions WHERE user_id = $1")
                        .bind(user_id)
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
impl SessionReader for SessionGateway {
    async fn find_by_id(&self, session_id: &Id<Session>) -> AppResult<Option<Session>> {
        self.session
            .with_tx(|tx| {
                let session_id = session_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, user_id, created_at, last_touch
                            FROM
                                sessions
                            WHERE
                                id = $1
                        "#,
                    )
                    .bind(session_id)
                    .fetch_optional(tx.as_mut())
                    .await?;
                    match result {
                        Some(row) => Ok(Some(Session {
                            id: Id::new(row.try_get("id")?),
                            user_id: Id::new(row.try_get("user_id")?),
                            created_at: row.try_get("created_at")?,
                            last_touch: parse_last_touch(row.try_get("last_touch")?),
                        })),
                        None => Ok(None),
                    }
                }
                .boxed()
            })
            .await
    }
}

use async_trait::async_trait;
use futures::FutureExt;
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::collection::{CollectionReader, CollectionWriter};
use crate::domain::entities::collection::Collection;
use crate::domain::entities::id::Id;

#[derive(Clone)]
pub struct CollectionGateway {
    session: SqlxSession,
}

impl CollectionGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_collection(row: &PgRow) -> AppResult<Collection> {
        Ok(Collection {
            id: Id::new(row.try_get("id")?),
            name: row.try_get("name")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl CollectionWriter for CollectionGateway {
    async fn insert(&self, collection: Collection) -> AppResult<Id<Collection>> {
        self.session
            .with_tx(|tx| {
                let collection = collection.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO collections
                                (id, name, created_at, updated_at)
                            VALUES ($1, $2, $3, $4)
                            RETURNING id
                        "#,
                    )
                    .bind(collection.id.value)
                    .bind(&collection.name)
                    .bind(collection.created_at)
                    .bind(collection.updated_at)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn update(&self, collection: Collection) -> AppResult<Id<Collection>> {
        self.session
            .with_tx(|tx| {
                let collection = collection.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            UPDATE collections
                            SET name = $2, updated_at = now()
                            WHERE id = $1
                            RETURNING id
                        "#,
                    )
                    .bind(collection.id.value)
                    .bind(&collection.name)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn delete(&self, collection_id: &Id<Collection>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let collection_id = collection_id.value;
                async move {
                    sqlx::query("DELETE FROM collections WHERE id = $1")
                        .bind(collection_id)
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
impl CollectionReader for CollectionGateway {
    async fn find_by_id(&self, collection_id: &Id<Collection>) -> AppResult<Option<Collection>> {
        self.session
            .with_tx(|tx| {
                let collection_id = collection_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT id, name, created_at, updated_at
                            FROM collections
                            WHERE id = $1
                        "#,
                    )
                    .bind(collection_id)
                    .fetch_optional(tx.as_mut())
                    .await?;
                    match result {
                        Some(row) => Ok(Some(Self::map_collection(&row)?)),
                        None => Ok(None),
                    }
                }
                .boxed()
            })
            .await
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Collection>> {
        self.session
            .with_tx(|tx| {
                let name = name.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT id, name, created_at, updated_at
                            FROM collections
                            WHERE lower(name) = lower($1)
                        "#,
                    )
                    .bind(&name)
                    .fetch_optional(tx.as_mut())
                    .await?;
                    match result {
                        Some(row) => Ok(Some(Self::map_collection(&row)?)),
                        None => Ok(None),
                    }
                }
                .boxed()
            })
            .await
    }

    async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<Collection>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT id, name, created_at, updated_at
                            FROM collections
                            ORDER BY name
                            LIMIT $1 OFFSET $2
                        "#,
                    )
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(tx.as_mut())
                    .await?;
                    rows.iter().map(Self::map_collection).collect()
                }
                .boxed()
            })
            .await
    }

    async fn count(&self) -> AppResult<i64> {
        self.session
            .with_tx(|tx| {
                async move {
                    let row = sqlx::query("SELECT count(*) AS total FROM collections")
                        .fetch_one(tx.as_mut())
                        .await?;
                    Ok(row.try_get("total")?)
                }
                .boxed()
            })
            .await
    }
}

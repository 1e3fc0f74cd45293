use async_trait::async_trait;
use futures::FutureExt;
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::media::{
    MediaFileReader, MediaFileWriter, MediaPathReader, MediaPathWriter, MovieReader, MovieWriter, TvReader, TvWriter,
};
use crate::domain::entities::id::Id;
use crate::domain::entities::media::{MediaType, Movie, Tv};
use crate::domain::entities::media_file::MediaFile;
use crate::domain::entities::media_path::MediaPath;

#[derive(Clone)]
pub struct MovieGateway {
    session: SqlxSession,
}

impl MovieGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl MovieWriter for MovieGateway {
    async fn insert(&self, movie: Movie) -> AppResult<Id<Movie>> {
        self.session
            .with_tx(|tx| {
                let movie = movie.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO movies (id, name, finished, created_at, updated_at)
                            VALUES ($1, $2, $3, $4, $5)
                            RETURNING id
                        "#,
                    )
                    .bind(movie.id.value)
                    .bind(&movie.name)
                    .bind(movie.finished)
                    .bind(movie.created_at)
                    .bind(movie.updated_at)
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
impl MovieReader for MovieGateway {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Movie>> {
        self.session
            .with_tx(|tx| {
                let name = name.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT id, name, finished, created_at, updated_at
                            FROM movies
                            WHERE lower(name) = lower($1)
                        "#,
                    )
                    .bind(&name)
                    .fetch_optional(tx.as_mut())
                    .await?;
                    match result {
                        Some(row) => Ok(Some(Movie {
                            id: Id::new(row.try_get("id")?),
                            name: row.try_get("name")?,
                            finished: row.try_get("finished")?,
                            created_at: row.try_get("created_at")?,
                            updated_at: row.try_get("updated_at")?,
                        })),
                        None => Ok(None),
                    }
                }
                .boxed()
            })
            .await
    }
}

#[derive(Clone)]
pub struct TvGateway {
    session: SqlxSession,
}

impl TvGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl TvWriter for TvGateway {
    async fn insert(&self, tv: Tv) -> AppResult<Id<Tv>> {
        self.session
            .with_tx(|tx| {
                let tv = tv.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO tv_shows (id, name, finished, created_at, updated_at)
                            VALUES ($1, $2, $3, $4, $5)
                            RETURNING id
                        "#,
                    )
                    .bind(tv.id.value)
                    .bind(&tv.name)
                    .bind(tv.finished)
                    .bind(tv.created_at)
                    .bind(tv.updated_at)
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
impl TvReader for TvGateway {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Tv>> {
        self.session
            .with_tx(|tx| {
                let name = name.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT id, name, finished, created_at, updated_at
                            FROM tv_shows
                            WHERE lower(name) = lower($1)
                        "#,
                    )
                    .bind(&name)
                    .fetch_optional(tx.as_mut())
                    .await?;
                    match result {
                        Some(row) => Ok(Some(Tv {
                            id: Id::new(row.try_get("id")?),
                            name: row.try_get("name")?,
                            finished: row.try_get("finished")?,
                            created_at: row.try_get("created_at")?,
                            updated_at: row.try_get("updated_at")?,
                        })),
                        None => Ok(None),
                    }
                }
                .boxed()
            })
            .await
    }
}

#[derive(Clone)]
pub struct MediaPathGateway {
    session: SqlxSession,
}

impl MediaPathGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_media_path(row: &PgRow) -> AppResult<MediaPath> {
        let movie_id: Option<Uuid> = row.try_get("movie_id")?;
        let tv_id: Option<Uuid> = row.try_get("tv_id")?;
        Ok(MediaPath {
            id: Id::new(row.try_get("id")?),
            path: row.try_get("path")?,
            skip: row.try_get("skip")?,
            movie_id: movie_id.map(Id::new),
            tv_id: tv_id.map(Id::new),
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl MediaPathWriter for MediaPathGateway {
    async fn insert(&self, media_path: MediaPath) -> AppResult<Id<MediaPath>> {
        self.session
            .with_tx(|tx| {
                let media_path = media_path.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO media_paths
                                (id, path, skip, movie_id, tv_id, created_at, updated_at)
                            VALUES ($1, $2, $3, $4, $5, $6, $7)
                            RETURNING id
                        "#,
                    )
                    .bind(media_path.id.value)
                    .bind(&media_path.path)
                    .bind(media_path.skip)
                    .bind(media_path.movie_id.map(|id| id.value))
                    .bind(media_path.tv_id.map(|id| id.value))
                    .bind(media_path.created_at)
                    .bind(media_path.updated_at)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn delete(&self, media_path_id: &Id<MediaPath>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let media_path_id = media_path_id.value;
                async move {
                    sqlx::query("DELETE FROM media_paths WHERE id = $1")
                        .bind(media_path_id)
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
impl MediaPathReader for MediaPathGateway {
    async fn find_by_id(&self, media_path_id: &Id<MediaPath>) -> AppResult<Option<MediaPath>> {
        self.session
            .with_tx(|tx| {
                let media_path_id = media_path_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT id, path, skip, movie_id, tv_id, created_at, updated_at
                            FROM media_paths
                            WHERE id = $1
                        "#,
                    )
                    .bind(media_path_id)
                    .fetch_optional(tx.as_mut())
                    .await?;
                    match result {
                        Some(row) => Ok(Some(Self::map_media_path(&row)?)),
                        None => Ok(None),
                    }
                }
                .boxed()
            })
            .await
    }

    async fn find_by_path(&self, path: &str) -> AppResult<Option<MediaPath>> {
        self.session
            .with_tx(|tx| {
                let path = path.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT id, path, skip, movie_id, tv_id, created_at, updated_at
                            FROM media_paths
                            WHERE path = $1
                        "#,
                    )
                    .bind(&path)
                    .fetch_optional(tx.as_mut())
                    .await?;
                    match result {
                        Some(row) => Ok(Some(Self::map_media_path(&row)?)),
                        None => Ok(None),
                    }
                }
                .boxed()
            })
            .await
    }

    async fn list(&self, media_type: Option<MediaType>, limit: i64, offset: i64) -> AppResult<Vec<MediaPath>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let filter = match media_type {
                        Some(MediaType::Movie) => "WHERE movie_id IS NOT NULL",
                        Some(MediaType::Tv) => "WHERE tv_id IS NOT NULL",
                        None => "",
                    };
                    let query = format!(
                        r#"
                            SELECT id, path, skip, movie_id, tv_id, created_at, updated_at
                            FROM media_paths
                            {filter}
                            ORDER BY path
                            LIMIT $1 OFFSET $2
                        "#
                    );
                    let rows = sqlx::query(&query)
                        .bind(limit)
                        .bind(offset)
                        .fetch_all(tx.as_mut())
                        .await?;
                    rows.iter().map(Self::map_media_path).collect()
                }
                .boxed()
            })
            .await
    }

    async fn count(&self, media_type: Option<MediaType>) -> AppResult<i64> {
        self.session
            .with_tx(|tx| {
                async move {
                    let filter = match media_type {
                        Some(MediaType::Movie) => "WHERE movie_id IS NOT NULL",
                        Some(MediaType::Tv) => "WHERE tv_id IS NOT NULL",
                        None => "",
                    };
                    let query = format!("SELECT count(*) AS total FROM media_paths {filter}");
                    let row = sqlx::query(&query).fetch_one(tx.as_mut()).await?;
                    Ok(row.try_get("total")?)
                }
                .boxed()
            })
            .await
    }
}

#[derive(Clone)]
pub struct MediaFileGateway {
    session: SqlxSession,
}

impl MediaFileGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_media_file(row: &PgRow) -> AppResult<MediaFile> {
        Ok(MediaFile {
            id: Id::new(row.try_get("id")?),
            media_path_id: Id::new(row.try_get("media_path_id")?),
            filename: row.try_get("filename")?,
            display_name: row.try_get("display_name")?,
            season: row.try_get("season")?,
            episode: row.try_get("episode")?,
            skip: row.try_get("skip")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl MediaFileWriter for MediaFileGateway {
    async fn insert(&self, media_file: MediaFile) -> AppResult<Id<MediaFile>> {
        self.session
            .with_tx(|tx| {
                let media_file = media_file.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO media_files
                                (id, media_path_id, filename, display_name, season, episode, skip,
                                 created_at, updated_at)
                            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                            RETURNING id
                        "#,
                    )
                    .bind(media_file.id.value)
                    .bind(media_file.media_path_id.value)
                    .bind(&media_file.filename)
                    .bind(&media_file.display_name)
                    .bind(media_file.season)
                    .bind(media_file.episode)
                    .bind(media_file.skip)
                    .bind(media_file.created_at)
                    .bind(media_file.updated_at)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn update(&self, media_file: MediaFile) -> AppResult<Id<MediaFile>> {
        self.session
            .with_tx(|tx| {
                let media_file = media_file.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            UPDATE media_files
                            SET display_name = $2, season = $3, episode = $4, skip = $5,
                                updated_at = now()
                            WHERE id = $1
                            RETURNING id
                        "#,
                    )
                    .bind(media_file.id.value)
                    .bind(&media_file.display_name)
                    .bind(media_file.season)
                    .bind(media_file.episode)
                    .bind(media_file.skip)
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
impl MediaFileReader for MediaFileGateway {
    async fn find_by_id(&self, media_file_id: &Id<MediaFile>) -> AppResult<Option<MediaFile>> {
        self.session
            .with_tx(|tx| {
                let media_file_id = media_file_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT id, media_path_id, filename, display_name, season, episode, skip,
                                   created_at, updated_at
                            FROM media_files
                            WHERE id = $1
                        "#,
                    )
                    .bind(media_file_id)
                    .fetch_optional(tx.as_mut())
                    .await?;
                    match result {
                        Some(row) => Ok(Some(Self::map_media_file(&row)?)),
                        None => Ok(None),
                    }
                }
                .boxed()
            })
            .await
    }

    async fn list_by_media_path(&self, media_path_id: &Id<MediaPath>) -> AppResult<Vec<MediaFile>> {
        self.session
            .with_tx(|tx| {
                let media_path_id = media_path_id.value;
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT id, media_path_id, filename, display_name, season, episode, skip,
                                   created_at, updated_at
                            FROM media_files
                            WHERE media_path_id = $1
                            ORDER BY filename
                        "#,
                    )
                    .bind(media_path_id)
                    .fetch_all(tx.as_mut())
                    .await?;
                    rows.iter().map(Self::map_media_file).collect()
                }
                .boxed()
            })
            .await
    }
}

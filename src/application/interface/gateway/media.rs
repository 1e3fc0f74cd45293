use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::media::{MediaType, Movie, Tv};
use crate::domain::entities::media_file::MediaFile;
use crate::domain::entities::media_path::MediaPath;
use async_trait::async_trait;

#[async_trait]
pub trait MovieWriter: Send + Sync {
    async fn insert(&self, movie: Movie) -> AppResult<Id<Movie>>;
}

#[async_trait]
pub trait MovieReader: Send + Sync {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Movie>>;
}

#[async_trait]
pub trait TvWriter: Send + Sync {
    async fn insert(&self, tv: Tv) -> AppResult<Id<Tv>>;
}

#[async_trait]
pub trait TvReader: Send + Sync {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Tv>>;
}

#[async_trait]
pub trait MediaPathWriter: Send + Sync {
    async fn insert(&self, media_path: MediaPath) -> AppResult<Id<MediaPath>>;
    async fn delete(&self, media_path_id: &Id<MediaPath>) -> AppResult<()>;
}

#[async_trait]
pub trait MediaPathReader: Send + Sync {
    async fn find_by_id(&self, media_path_id: &Id<MediaPath>) -> AppResult<Option<MediaPath>>;
    async fn find_by_path(&self, path: &str) -> AppResult<Option<MediaPath>>;
    async fn list(&self, media_type: Option<MediaType>, limit: i64, offset: i64) -> AppResult<Vec<MediaPath>>;
    async fn count(&self, media_type: Option<MediaType>) -> AppResult<i64>;
}

#[async_trait]
pub trait MediaFileWriter: Send + Sync {
    async fn insert(&self, media_file: MediaFile) -> AppResult<Id<MediaFile>>;
    async fn update(&self, media_file: MediaFile) -> AppResult<Id<MediaFile>>;
}

#[async_trait]
pub trait MediaFileReader: Send + Sync {
    async fn find_by_id(&self, media_file_id: &Id<MediaFile>) -> AppResult<Option<MediaFile>>;
    async fn list_by_media_path(&self, media_path_id: &Id<MediaPath>) -> AppResult<Vec<MediaFile>>;
}

use crate::application::app_error::AppResult;
use crate::domain::entities::collection::Collection;
use crate::domain::entities::id::Id;
use async_trait::async_trait;

#[async_trait]
pub trait CollectionWriter: Send + Sync {
    async fn insert(&self, collection: Collection) -> AppResult<Id<Collection>>;
    async fn update(&self, collection: Collection) -> AppResult<Id<Collection>>;
    async fn delete(&self, collection_id: &Id<Collection>) -> AppResult<()>;
}

#[async_trait]
pub trait CollectionReader: Send + Sync {
    async fn find_by_id(&self, collection_id: &Id<Collection>) -> AppResult<Option<Collection>>;
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Collection>>;
    async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<Collection>>;
    async fn count(&self) -> AppResult<i64>;
}

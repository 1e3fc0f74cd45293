use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::collection::Collection;

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateCollectionRequest {
    #[validate(length(min = 1, max = 128, message = "Collection name must be between 1 and 128 characters"))]
    pub name: String,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct UpdateCollectionRequest {
    #[validate(length(min = 1, max = 128, message = "Collection name must be between 1 and 128 characters"))]
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionResponse {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Collection> for CollectionResponse {
    fn from(collection: Collection) -> Self {
        Self {
            id: collection.id.value.to_string(),
            name: collection.name,
            created_at: collection.created_at,
            updated_at: collection.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionListResponse {
    pub collections: Vec<CollectionResponse>,
    pub total: i64,
}

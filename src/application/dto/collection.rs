use crate::domain::entities::collection::Collection;

#[derive(Debug)]
pub struct CreateCollectionDTO {
    pub actor_id: String,
    pub name: String,
}

#[derive(Debug)]
pub struct UpdateCollectionDTO {
    pub actor_id: String,
    pub collection_id: String,
    pub name: String,
}

#[derive(Debug)]
pub struct DeleteCollectionDTO {
    pub actor_id: String,
    pub collection_id: String,
}

#[derive(Debug)]
pub struct ListCollectionsDTO {
    pub page: i64,
    pub per_page: i64,
}

#[derive(Debug)]
pub struct CollectionListDTO {
    pub collections: Vec<Collection>,
    pub total: i64,
}

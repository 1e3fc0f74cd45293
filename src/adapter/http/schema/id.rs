use serde::Serialize;
use utoipa::ToSchema;

/// Standard body for create and update operations.
#[derive(Debug, Serialize, ToSchema)]
pub struct IdResponse {
    pub id: String,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_email::Email;
use utoipa::ToSchema;
use validator::Validate;

use crate::adapter::http::schema::ValidPassword;

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 64, message = "Username must be between 3 and 64 characters"))]
    pub username: String,
    #[schema(value_type = String, format = "email")]
    pub email: Email,
    #[validate(nested)]
    pub password: ValidPassword,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GetUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::comment::Comment;

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct UpsertCommentRequest {
    #[validate(length(min = 1, max = 4096, message = "Comment must be between 1 and 4096 characters"))]
    pub body: String,
    #[serde(default)]
    pub viewed: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    pub id: String,
    pub user_id: String,
    pub media_file_id: String,
    pub body: String,
    pub viewed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.value.to_string(),
            user_id: comment.user_id.value.to_string(),
            media_file_id: comment.media_file_id.value.to_string(),
            body: comment.body,
            viewed: comment.viewed,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
}

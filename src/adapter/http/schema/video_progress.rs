use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::video_progress::VideoProgress;

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct UpsertProgressRequest {
    #[validate(length(min = 1, message = "Filename must not be empty"))]
    pub filename: String,
    #[validate(range(min = 0.0, message = "Offset must not be negative"))]
    pub offset: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProgressResponse {
    pub filename: String,
    pub offset: f64,
    pub date_edited: DateTime<Utc>,
}

impl From<VideoProgress> for ProgressResponse {
    fn from(progress: VideoProgress) -> Self {
        Self {
            filename: progress.filename,
            offset: progress.offset,
            date_edited: progress.date_edited,
        }
    }
}

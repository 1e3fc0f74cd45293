use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::adapter::http::schema::pagination::PaginationQuery;
use crate::domain::entities::media_file::MediaFile;
use crate::domain::entities::media_path::MediaPath;

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateMediaPathRequest {
    #[validate(length(min = 1, message = "Path must not be empty"))]
    pub path: String,
    #[schema(example = "movie")]
    pub media_type: String,
    #[validate(length(min = 1, max = 256, message = "Media name must be between 1 and 256 characters"))]
    pub media_name: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct MediaPathsQuery {
    /// Restrict the listing to `movie` or `tv` paths.
    pub media_type: Option<String>,
    #[param(minimum = 1, default = 1)]
    pub page: Option<i64>,
    #[param(minimum = 1, maximum = 100, default = 20)]
    pub per_page: Option<i64>,
}

impl MediaPathsQuery {
    fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page,
            per_page: self.per_page,
        }
    }

    pub fn page(&self) -> i64 {
        self.pagination().page()
    }

    pub fn per_page(&self) -> i64 {
        self.pagination().per_page()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MediaPathResponse {
    pub id: String,
    pub path: String,
    pub media_type: String,
    pub skip: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MediaPath> for MediaPathResponse {
    fn from(media_path: MediaPath) -> Self {
        Self {
            id: media_path.id.value.to_string(),
            media_type: media_path.media_type().as_str().to_string(),
            path: media_path.path,
            skip: media_path.skip,
            created_at: media_path.created_at,
            updated_at: media_path.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MediaPathListResponse {
    pub media_paths: Vec<MediaPathResponse>,
    pub total: i64,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateMediaFileRequest {
    #[validate(length(min = 1, message = "Filename must not be empty"))]
    pub filename: String,
    pub display_name: Option<String>,
    pub season: Option<i16>,
    pub episode: Option<i16>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMediaFileRequest {
    pub display_name: Option<String>,
    pub season: Option<i16>,
    pub episode: Option<i16>,
    pub skip: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MediaFileResponse {
    pub id: String,
    pub media_path_id: String,
    pub filename: String,
    pub display_name: String,
    pub season: Option<i16>,
    pub episode: Option<i16>,
    pub skip: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MediaFile> for MediaFileResponse {
    fn from(media_file: MediaFile) -> Self {
        Self {
            id: media_file.id.value.to_string(),
            media_path_id: media_file.media_path_id.value.to_string(),
            filename: media_file.filename,
            display_name: media_file.display_name,
            season: media_file.season,
            episode: media_file.episode,
            skip: media_file.skip,
            created_at: media_file.created_at,
            updated_at: media_file.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MediaFileListResponse {
    pub media_files: Vec<MediaFileResponse>,
}

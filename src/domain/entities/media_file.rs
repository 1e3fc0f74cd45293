use chrono::{DateTime, Utc};

use crate::domain::entities::id::Id;
use crate::domain::entities::media_path::MediaPath;

#[derive(Debug, Clone)]
pub struct MediaFile {
    pub id: Id<MediaFile>,
    pub media_path_id: Id<MediaPath>,
    pub filename: String,
    pub display_name: String,
    pub season: Option<i16>,
    pub episode: Option<i16>,
    pub skip: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MediaFile {
    pub fn new(media_path_id: Id<MediaPath>, filename: String, display_name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            media_path_id,
            filename,
            display_name,
            season: None,
            episode: None,
            skip: false,
            created_at: now,
            updated_at: now,
        }
    }
}

use chrono::{DateTime, Utc};

use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

/// Per-user playback offset, keyed by filename rather than file id so that
/// progress survives re-scans of the media tree.
#[derive(Debug, Clone)]
pub struct VideoProgress {
    pub id: Id<VideoProgress>,
    pub user_id: Id<User>,
    pub filename: String,
    pub offset: f64,
    pub date_edited: DateTime<Utc>,
}

impl VideoProgress {
    pub fn new(user_id: Id<User>, filename: String, offset: f64) -> Self {
        Self {
            id: Id::generate(),
            user_id,
            filename,
            offset,
            date_edited: Utc::now(),
        }
    }
}

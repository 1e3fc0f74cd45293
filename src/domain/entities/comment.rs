use chrono::{DateTime, Utc};

use crate::domain::entities::id::Id;
use crate::domain::entities::media_file::MediaFile;
use crate::domain::entities::user::User;

/// One comment per (user, media file); writes are upserts.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: Id<Comment>,
    pub user_id: Id<User>,
    pub media_file_id: Id<MediaFile>,
    pub body: String,
    pub viewed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(user_id: Id<User>, media_file_id: Id<MediaFile>, body: String) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            user_id,
            media_file_id,
            body,
            viewed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

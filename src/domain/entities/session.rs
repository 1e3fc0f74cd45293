use chrono::{DateTime, Utc};

use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

/// A server-side session row. `last_touch` is absent until the idle guard
/// observes the first authenticated request for the session.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Id<Session>,
    pub user_id: Id<User>,
    pub created_at: DateTime<Utc>,
    pub last_touch: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(user_id: Id<User>) -> Self {
        Self {
            id: Id::generate(),
            user_id,
            created_at: Utc::now(),
            last_touch: None,
        }
    }
}

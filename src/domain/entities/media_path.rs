use chrono::{DateTime, Utc};

use crate::domain::entities::id::Id;
use crate::domain::entities::media::{MediaType, Movie, Tv};

/// A filesystem location holding files for exactly one movie or TV show.
#[derive(Debug, Clone)]
pub struct MediaPath {
    pub id: Id<MediaPath>,
    pub path: String,
    pub skip: bool,
    pub movie_id: Option<Id<Movie>>,
    pub tv_id: Option<Id<Tv>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MediaPath {
    pub fn for_movie(path: String, movie_id: Id<Movie>) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            path,
            skip: false,
            movie_id: Some(movie_id),
            tv_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn for_tv(path: String, tv_id: Id<Tv>) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            path,
            skip: false,
            movie_id: None,
            tv_id: Some(tv_id),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn media_type(&self) -> MediaType {
        if self.movie_id.is_some() {
            MediaType::Movie
        } else {
            MediaType::Tv
        }
    }
}

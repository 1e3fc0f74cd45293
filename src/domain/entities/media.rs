use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::application::app_error::AppError;
use crate::domain::entities::id::Id;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }
}

impl FromStr for MediaType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" => Ok(MediaType::Movie),
            "tv" => Ok(MediaType::Tv),
            other => Err(AppError::InvalidMediaType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Movie {
    pub id: Id<Movie>,
    pub name: String,
    pub finished: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            name,
            finished: false,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tv {
    pub id: Id<Tv>,
    pub name: String,
    pub finished: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tv {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            name,
            finished: false,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::application::app_error::AppError;
    use crate::domain::entities::media::MediaType;

    #[test]
    fn test_media_type_from_str() {
        assert_eq!(MediaType::from_str("movie").unwrap(), MediaType::Movie);
        assert_eq!(MediaType::from_str("TV").unwrap(), MediaType::Tv);
    }

    #[test]
    fn test_media_type_from_str_invalid() {
        let result = MediaType::from_str("music");
        assert!(matches!(result, Err(AppError::InvalidMediaType(_))));
    }
}

pub mod auth;
pub mod collection;
pub mod comment;
pub mod media;
pub mod settings;
pub mod user;
pub mod video_progress;

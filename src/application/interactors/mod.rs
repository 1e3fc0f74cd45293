pub mod admin;
pub mod auth;
pub mod collection;
pub mod comment;
pub mod media;
pub mod session;
pub mod user_settings;
pub mod users;
pub mod video_progress;

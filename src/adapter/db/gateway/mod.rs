pub mod collection;
pub mod comment;
pub mod media;
pub mod session;
pub mod user;
pub mod user_settings;
pub mod video_progress;

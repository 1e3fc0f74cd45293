pub mod collection;
pub mod comment;
pub mod id;
pub mod media;
pub mod media_file;
pub mod media_path;
pub mod session;
pub mod user;
pub mod user_settings;
pub mod video_progress;

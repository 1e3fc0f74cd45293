use crate::domain::entities::video_progress::VideoProgress;

#[derive(Debug)]
pub struct UpsertProgressDTO {
    pub user_id: String,
    pub filename: String,
    pub offset: f64,
}

#[derive(Debug)]
pub struct GetProgressDTO {
    pub user_id: String,
    pub filename: String,
}

#[derive(Debug)]
pub struct DeleteProgressDTO {
    pub user_id: String,
    pub filename: String,
}

#[derive(Debug)]
pub struct ProgressDTO {
    pub progress: VideoProgress,
}

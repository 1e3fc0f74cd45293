use crate::domain::entities::media_file::MediaFile;
use crate::domain::entities::media_path::MediaPath;

#[derive(Debug)]
pub struct CreateMediaPathDTO {
    pub actor_id: String,
    pub path: String,
    pub media_type: String,
    pub media_name: String,
}

#[derive(Debug)]
pub struct ListMediaPathsDTO {
    pub media_type: Option<String>,
    pub page: i64,
    pub per_page: i64,
}

#[derive(Debug)]
pub struct MediaPathListDTO {
    pub media_paths: Vec<MediaPath>,
    pub total: i64,
}

#[derive(Debug)]
pub struct DeleteMediaPathDTO {
    pub actor_id: String,
    pub media_path_id: String,
}

#[derive(Debug)]
pub struct CreateMediaFileDTO {
    pub actor_id: String,
    pub media_path_id: String,
    pub filename: String,
    pub display_name: Option<String>,
    pub season: Option<i16>,
    pub episode: Option<i16>,
}

#[derive(Debug)]
pub struct UpdateMediaFileDTO {
    pub actor_id: String,
    pub media_file_id: String,
    pub display_name: Option<String>,
    pub season: Option<i16>,
    pub episode: Option<i16>,
    pub skip: Option<bool>,
}

#[derive(Debug)]
pub struct MediaFileListDTO {
    pub media_files: Vec<MediaFile>,
}

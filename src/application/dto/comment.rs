use crate::domain::entities::comment::Comment;

#[derive(Debug)]
pub struct UpsertCommentDTO {
    pub user_id: String,
    pub media_file_id: String,
    pub body: String,
    pub viewed: bool,
}

#[derive(Debug)]
pub struct ListCommentsDTO {
    pub media_file_id: String,
}

#[derive(Debug)]
pub struct CommentListDTO {
    pub comments: Vec<Comment>,
}

#[derive(Debug)]
pub struct LoginDTO {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct GetSessionIdDTO {
    pub session_id: String,
}

use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Debug)]
pub struct SessionDTO {
    pub id: String,
    pub idle_timeout_minutes: i64,
}

#[derive(Debug, Clone)]
pub struct GetSessionStatusDTO {
    pub status: SessionValidationResult,
}

#[derive(Debug, Clone)]
pub enum SessionValidationResult {
    Valid(Id<User>),
    Expired,
    Invalid,
}

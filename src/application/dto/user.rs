use crate::domain::entities::user::User;

#[derive(Debug)]
pub struct CreateUserDTO {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct GetUserDTO {
    pub user: User,
}

#[derive(Debug)]
pub struct ScrubPasswordsDTO {
    pub password: String,
}

#[derive(Debug)]
pub struct ScrubbedCountDTO {
    pub users_updated: usize,
}

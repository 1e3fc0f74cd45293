use crate::application::app_error::AppResult;
use async_trait::async_trait;

/// Password hashing seam. Implementations may block, so both operations are
/// async and expected to run off the request thread.
#[async_trait]
pub trait CredentialsHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> AppResult<String>;
    async fn verify_password(&self, password: &str, hashed: &str) -> AppResult<bool>;
}

use std::sync::Arc;

use tracing::info;

use crate::application::app_error::AppResult;
use crate::application::dto::user::{ScrubPasswordsDTO, ScrubbedCountDTO};
use crate::application::interface::crypto::CredentialsHasher;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::user::{UserReader, UserWriter};

/// Bulk password reset for every account, driven by the `scrub` CLI
/// subcommand. Intended for wiping credentials on non-production copies of
/// the database.
#[derive(Clone)]
pub struct ScrubPasswordsInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    user_writer: Arc<dyn UserWriter>,
    hasher: Arc<dyn CredentialsHasher>,
}

impl ScrubPasswordsInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        user_writer: Arc<dyn UserWriter>,
        hasher: Arc<dyn CredentialsHasher>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            user_writer,
            hasher,
        }
    }

    pub async fn execute(&self, dto: ScrubPasswordsDTO) -> AppResult<ScrubbedCountDTO> {
        let hashed = self.hasher.hash_password(&dto.password).await?;
        let users = self.user_reader.list_all().await?;
        let mut users_updated = 0;
        for user in &users {
            info!("Resetting password for {}", user.username);
            self.user_writer.update_password(&user.id, &hashed).await?;
            users_updated += 1;
        }
        self.db_session.commit().await?;
        Ok(ScrubbedCountDTO { users_updated })
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::{Pool, Postgres};

use crate::adapter::db::gateway::collection::CollectionGateway;
use crate::adapter::db::gateway::comment::CommentGateway;
use crate::adapter::db::gateway::media::{MediaFileGateway, MediaPathGateway, MovieGateway, TvGateway};
use crate::adapter::db::gateway::session::SessionGateway;
use crate::adapter::db::gateway::user::UserGateway;
use crate::adapter::db::gateway::user_settings::UserSettingsGateway;
use crate::adapter::db::gateway::video_progress::VideoProgressGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interactors::admin::ScrubPasswordsInteractor;
use crate::application::interactors::auth::{LoginInteractor, LogoutInteractor};
use crate::application::interactors::collection::{
    CreateCollectionInteractor, DeleteCollectionInteractor, GetCollectionInteractor, ListCollectionsInteractor,
    UpdateCollectionInteractor,
};
use crate::application::interactors::comment::{ListCommentsInteractor, UpsertCommentInteractor};
use crate::application::interactors::media::{
    CreateMediaFileInteractor, CreateMediaPathInteractor, DeleteMediaPathInteractor, GetMediaPathInteractor,
    ListMediaFilesInteractor, ListMediaPathsInteractor, UpdateMediaFileInteractor,
};
use crate::application::interactors::session::ValidateSessionInteractor;
use crate::application::interactors::user_settings::{GetSettingsInteractor, UpdateSettingsInteractor};
use crate::application::interactors::users::{CreateUserInteractor, GetMeInteractor};
use crate::application::interactors::video_progress::{
    DeleteProgressInteractor, GetProgressInteractor, UpsertProgressInteractor,
};
use crate::application::interface::clock::Clock;
use crate::application::interface::crypto::CredentialsHasher;
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Postgres>,
    pub hasher: Arc<dyn CredentialsHasher>,
    pub config: Arc<AppConfig>,
    pub clock: Arc<dyn Clock>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

/// Each request gets its own lazily-begun transaction; the interactor decides
/// when it commits.
#[async_trait]
pub trait FromAppState: Sized {
    async fn from_app_state(state: &AppState) -> AppResult<Self>;
}

macro_rules! extract_from_app_state {
    ($($interactor:ty),* $(,)?) => {$(
        impl<S> FromRequestParts<S> for $interactor
        where
            S: Send + Sync,
            AppState: FromRef<S>,
        {
            type Rejection = AppError;

            async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
                let app_state = AppState::from_ref(state);
                <$interactor>::from_app_state(&app_state).await
            }
        }
    )*};
}

extract_from_app_state!(
    LoginInteractor,
    LogoutInteractor,
    ValidateSessionInteractor,
    CreateUserInteractor,
    GetMeInteractor,
    CreateCollectionInteractor,
    GetCollectionInteractor,
    ListCollectionsInteractor,
    UpdateCollectionInteractor,
    DeleteCollectionInteractor,
    CreateMediaPathInteractor,
    GetMediaPathInteractor,
    ListMediaPathsInteractor,
    DeleteMediaPathInteractor,
    CreateMediaFileInteractor,
    ListMediaFilesInteractor,
    UpdateMediaFileInteractor,
    UpsertCommentInteractor,
    ListCommentsInteractor,
    UpsertProgressInteractor,
    GetProgressInteractor,
    DeleteProgressInteractor,
    GetSettingsInteractor,
    UpdateSettingsInteractor,
);

#[async_trait]
impl FromAppState for LoginInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());
        let session_gateway = SessionGateway::new(session.clone());

        Ok(LoginInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway),
            Arc::new(session_gateway),
            state.hasher.clone(),
        ))
    }
}

#[async_trait]
impl FromAppState for LogoutInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let session_gateway = Arc::new(SessionGateway::new(session.clone()));

        Ok(LogoutInteractor::new(Arc::new(session), session_gateway))
    }
}

#[async_trait]
impl FromAppState for ValidateSessionInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let session_gateway = Arc::new(SessionGateway::new(session.clone()));

        Ok(ValidateSessionInteractor::new(
            Arc::new(session),
            session_gateway.clone(),
            session_gateway,
            state.clock.clone(),
        ))
    }
}

#[async_trait]
impl FromAppState for CreateUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session.clone()));

        Ok(CreateUserInteractor::new(
            Arc::new(session),
            user_gateway.clone(),
            user_gateway,
            state.hasher.clone(),
        ))
    }
}

#[async_trait]
impl FromAppState for GetMeInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session));

        Ok(GetMeInteractor::new(user_gateway))
    }
}

#[async_trait]
impl FromAppState for CreateCollectionInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session.clone()));
        let collection_gateway = Arc::new(CollectionGateway::new(session.clone()));

        Ok(CreateCollectionInteractor::new(
            Arc::new(session),
            user_gateway,
            collection_gateway.clone(),
            collection_gateway,
        ))
    }
}

#[async_trait]
impl FromAppState for GetCollectionInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let collection_gateway = Arc::new(CollectionGateway::new(session));

        Ok(GetCollectionInteractor::new(collection_gateway))
    }
}

#[async_trait]
impl FromAppState for ListCollectionsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let collection_gateway = Arc::new(CollectionGateway::new(session));

        Ok(ListCollectionsInteractor::new(collection_gateway))
    }
}

#[async_trait]
impl FromAppState for UpdateCollectionInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session.clone()));
        let collection_gateway = Arc::new(CollectionGateway::new(session.clone()));

        Ok(UpdateCollectionInteractor::new(
            Arc::new(session),
            user_gateway,
            collection_gateway.clone(),
            collection_gateway,
        ))
    }
}

#[async_trait]
impl FromAppState for DeleteCollectionInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session.clone()));
        let collection_gateway = Arc::new(CollectionGateway::new(session.clone()));

        Ok(DeleteCollectionInteractor::new(
            Arc::new(session),
            user_gateway,
            collection_gateway.clone(),
            collection_gateway,
        ))
    }
}

#[async_trait]
impl FromAppState for CreateMediaPathInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session.clone()));
        let media_path_gateway = Arc::new(MediaPathGateway::new(session.clone()));
        let movie_gateway = Arc::new(MovieGateway::new(session.clone()));
        let tv_gateway = Arc::new(TvGateway::new(session.clone()));

        Ok(CreateMediaPathInteractor::new(
            Arc::new(session),
            user_gateway,
            media_path_gateway.clone(),
            media_path_gateway,
            movie_gateway.clone(),
            movie_gateway,
            tv_gateway.clone(),
            tv_gateway,
        ))
    }
}

#[async_trait]
impl FromAppState for GetMediaPathInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let media_path_gateway = Arc::new(MediaPathGateway::new(session));

        Ok(GetMediaPathInteractor::new(media_path_gateway))
    }
}

#[async_trait]
impl FromAppState for ListMediaPathsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let media_path_gateway = Arc::new(MediaPathGateway::new(session));

        Ok(ListMediaPathsInteractor::new(media_path_gateway))
    }
}

#[async_trait]
impl FromAppState for DeleteMediaPathInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session.clone()));
        let media_path_gateway = Arc::new(MediaPathGateway::new(session.clone()));

        Ok(DeleteMediaPathInteractor::new(
            Arc::new(session),
            user_gateway,
            media_path_gateway.clone(),
            media_path_gateway,
        ))
    }
}

#[async_trait]
impl FromAppState for CreateMediaFileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session.clone()));
        let media_path_gateway = Arc::new(MediaPathGateway::new(session.clone()));
        let media_file_gateway = Arc::new(MediaFileGateway::new(session.clone()));

        Ok(CreateMediaFileInteractor::new(
            Arc::new(session),
            user_gateway,
            media_path_gateway,
            media_file_gateway,
        ))
    }
}

#[async_trait]
impl FromAppState for ListMediaFilesInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let media_path_gateway = Arc::new(MediaPathGateway::new(session.clone()));
        let media_file_gateway = Arc::new(MediaFileGateway::new(session));

        Ok(ListMediaFilesInteractor::new(media_path_gateway, media_file_gateway))
    }
}

#[async_trait]
impl FromAppState for UpdateMediaFileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session.clone()));
        let media_file_gateway = Arc::new(MediaFileGateway::new(session.clone()));

        Ok(UpdateMediaFileInteractor::new(
            Arc::new(session),
            user_gateway,
            media_file_gateway.clone(),
            media_file_gateway,
        ))
    }
}

#[async_trait]
impl FromAppState for UpsertCommentInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let media_file_gateway = Arc::new(MediaFileGateway::new(session.clone()));
        let comment_gateway = Arc::new(CommentGateway::new(session.clone()));

        Ok(UpsertCommentInteractor::new(
            Arc::new(session),
            media_file_gateway,
            comment_gateway.clone(),
            comment_gateway,
        ))
    }
}

#[async_trait]
impl FromAppState for ListCommentsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let comment_gateway = Arc::new(CommentGateway::new(session));

        Ok(ListCommentsInteractor::new(comment_gateway))
    }
}

#[async_trait]
impl FromAppState for UpsertProgressInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let progress_gateway = Arc::new(VideoProgressGateway::new(session.clone()));

        Ok(UpsertProgressInteractor::new(
            Arc::new(session),
            progress_gateway.clone(),
            progress_gateway,
        ))
    }
}

#[async_trait]
impl FromAppState for GetProgressInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let progress_gateway = Arc::new(VideoProgressGateway::new(session));

        Ok(GetProgressInteractor::new(progress_gateway))
    }
}

#[async_trait]
impl FromAppState for DeleteProgressInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let progress_gateway = Arc::new(VideoProgressGateway::new(session.clone()));

        Ok(DeleteProgressInteractor::new(Arc::new(session), progress_gateway))
    }
}

#[async_trait]
impl FromAppState for GetSettingsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let settings_gateway = Arc::new(UserSettingsGateway::new(session.clone()));

        Ok(GetSettingsInteractor::new(
            Arc::new(session),
            settings_gateway.clone(),
            settings_gateway,
        ))
    }
}

#[async_trait]
impl FromAppState for UpdateSettingsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let settings_gateway = Arc::new(UserSettingsGateway::new(session.clone()));

        Ok(UpdateSettingsInteractor::new(
            Arc::new(session),
            settings_gateway.clone(),
            settings_gateway,
        ))
    }
}

#[async_trait]
impl FromAppState for ScrubPasswordsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session.clone()));

        Ok(ScrubPasswordsInteractor::new(
            Arc::new(session),
            user_gateway.clone(),
            user_gateway,
            state.hasher.clone(),
        ))
    }
}

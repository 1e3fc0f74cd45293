use std::str::FromStr;
use std::sync::Arc;

use tracing::info;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::media::{
    CreateMediaFileDTO, CreateMediaPathDTO, DeleteMediaPathDTO, ListMediaPathsDTO, MediaFileListDTO,
    MediaPathListDTO, UpdateMediaFileDTO,
};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::media::{
    MediaFileReader, MediaFileWriter, MediaPathReader, MediaPathWriter, MovieReader, MovieWriter, TvReader, TvWriter,
};
use crate::application::interface::gateway::user::UserReader;
use crate::domain::entities::id::Id;
use crate::domain::entities::media::{MediaType, Movie, Tv};
use crate::domain::entities::media_file::MediaFile;
use crate::domain::entities::media_path::MediaPath;
use crate::domain::entities::user::User;

async fn require_staff(user_reader: &Arc<dyn UserReader>, actor_id: String) -> AppResult<()> {
    let actor_id: Id<User> = actor_id.try_into()?;
    let actor = user_reader
        .find_by_id(&actor_id)
        .await?
        .ok_or(AppError::InvalidCredentials)?;
    if !actor.is_staff {
        return Err(AppError::PermissionDenied);
    }
    Ok(())
}

/// Creates a media path, reusing an existing row for the same path and
/// creating the referenced movie or TV show by name when it does not exist
/// yet.
#[derive(Clone)]
pub struct CreateMediaPathInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    media_path_reader: Arc<dyn MediaPathReader>,
    media_path_writer: Arc<dyn MediaPathWriter>,
    movie_reader: Arc<dyn MovieReader>,
    movie_writer: Arc<dyn MovieWriter>,
    tv_reader: Arc<dyn TvReader>,
    tv_writer: Arc<dyn TvWriter>,
}

impl CreateMediaPathInteractor {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        media_path_reader: Arc<dyn MediaPathReader>,
        media_path_writer: Arc<dyn MediaPathWriter>,
        movie_reader: Arc<dyn MovieReader>,
        movie_writer: Arc<dyn MovieWriter>,
        tv_reader: Arc<dyn TvReader>,
        tv_writer: Arc<dyn TvWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            media_path_reader,
            media_path_writer,
            movie_reader,
            movie_writer,
            tv_reader,
            tv_writer,
        }
    }

    pub async fn execute(&self, dto: CreateMediaPathDTO) -> AppResult<IdDTO> {
        require_staff(&self.user_reader, dto.actor_id).await?;
        let media_type = MediaType::from_str(&dto.media_type)?;

        if let Some(existing) = self.media_path_reader.find_by_path(&dto.path).await? {
            if existing.media_type() != media_type {
                return Err(AppError::InvalidMediaReference(format!(
                    "path {} already belongs to a {}",
                    existing.path,
                    existing.media_type().as_str()
                )));
            }
            return Ok(IdDTO {
                id: existing.id.value.to_string(),
            });
        }

        let media_path = match media_type {
            MediaType::Movie => {
                let movie_id = match self.movie_reader.find_by_name(&dto.media_name).await? {
                    Some(movie) => movie.id,
                    None => self.movie_writer.insert(Movie::new(dto.media_name)).await?,
                };
                MediaPath::for_movie(dto.path, movie_id)
            }
            MediaType::Tv => {
                let tv_id = match self.tv_reader.find_by_name(&dto.media_name).await? {
                    Some(tv) => tv.id,
                    None => self.tv_writer.insert(Tv::new(dto.media_name)).await?,
                };
                MediaPath::for_tv(dto.path, tv_id)
            }
        };
        let media_path_id = self.media_path_writer.insert(media_path).await?;
        self.db_session.commit().await?;
        info!("Created media path {}", media_path_id.value);
        Ok(IdDTO {
            id: media_path_id.value.to_string(),
        })
    }
}

#[derive(Clone)]
pub struct GetMediaPathInteractor {
    media_path_reader: Arc<dyn MediaPathReader>,
}

impl GetMediaPathInteractor {
    pub fn new(media_path_reader: Arc<dyn MediaPathReader>) -> Self {
        Self { media_path_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<MediaPath> {
        let media_path_id: Id<MediaPath> = dto.id.try_into()?;
        self.media_path_reader
            .find_by_id(&media_path_id)
            .await?
            .ok_or(AppError::NotFound("media path"))
    }
}

#[derive(Clone)]
pub struct ListMediaPathsInteractor {
    media_path_reader: Arc<dyn MediaPathReader>,
}

impl ListMediaPathsInteractor {
    pub fn new(media_path_reader: Arc<dyn MediaPathReader>) -> Self {
        Self { media_path_reader }
    }

    pub async fn execute(&self, dto: ListMediaPathsDTO) -> AppResult<MediaPathListDTO> {
        let media_type = match dto.media_type {
            Some(raw) => Some(MediaType::from_str(&raw)?),
            None => None,
        };
        let offset = (dto.page - 1) * dto.per_page;
        let media_paths = self.media_path_reader.list(media_type, dto.per_page, offset).await?;
        let total = self.media_path_reader.count(media_type).await?;
        Ok(MediaPathListDTO { media_paths, total })
    }
}

#[derive(Clone)]
pub struct DeleteMediaPathInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    media_path_reader: Arc<dyn MediaPathReader>,
    media_path_writer: Arc<dyn MediaPathWriter>,
}

impl DeleteMediaPathInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        media_path_reader: Arc<dyn MediaPathReader>,
        media_path_writer: Arc<dyn MediaPathWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            media_path_reader,
            media_path_writer,
        }
    }

    pub async fn execute(&self, dto: DeleteMediaPathDTO) -> AppResult<()> {
        require_staff(&self.user_reader, dto.actor_id).await?;
        let media_path_id: Id<MediaPath> = dto.media_path_id.try_into()?;
        if self.media_path_reader.find_by_id(&media_path_id).await?.is_none() {
            return Err(AppError::NotFound("media path"));
        }
        self.media_path_writer.delete(&media_path_id).await?;
        self.db_session.commit().await?;
        info!("Deleted media path {}", media_path_id.value);
        Ok(())
    }
}

#[derive(Clone)]
pub struct CreateMediaFileInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    media_path_reader: Arc<dyn MediaPathReader>,
    media_file_writer: Arc<dyn MediaFileWriter>,
}

impl CreateMediaFileInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        media_path_reader: Arc<dyn MediaPathReader>,
        media_file_writer: Arc<dyn MediaFileWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            media_path_reader,
            media_file_writer,
        }
    }

    pub async fn execute(&self, dto: CreateMediaFileDTO) -> AppResult<IdDTO> {
        require_staff(&self.user_reader, dto.actor_id).await?;
        let media_path_id: Id<MediaPath> = dto.media_path_id.try_into()?;
        if self.media_path_reader.find_by_id(&media_path_id).await?.is_none() {
            return Err(AppError::NotFound("media path"));
        }
        let display_name = dto.display_name.unwrap_or_else(|| dto.filename.clone());
        let mut media_file = MediaFile::new(media_path_id, dto.filename, display_name);
        media_file.season = dto.season;
        media_file.episode = dto.episode;
        let media_file_id = self.media_file_writer.insert(media_file).await?;
        self.db_session.commit().await?;
        Ok(IdDTO {
            id: media_file_id.value.to_string(),
        })
    }
}

#[derive(Clone)]
pub struct ListMediaFilesInteractor {
    media_path_reader: Arc<dyn MediaPathReader>,
    media_file_reader: Arc<dyn MediaFileReader>,
}

impl ListMediaFilesInteractor {
    pub fn new(media_path_reader: Arc<dyn MediaPathReader>, media_file_reader: Arc<dyn MediaFileReader>) -> Self {
        Self {
            media_path_reader,
            media_file_reader,
        }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<MediaFileListDTO> {
        let media_path_id: Id<MediaPath> = dto.id.try_into()?;
        if self.media_path_reader.find_by_id(&media_path_id).await?.is_none() {
            return Err(AppError::NotFound("media path"));
        }
        let media_files = self.media_file_reader.list_by_media_path(&media_path_id).await?;
        Ok(MediaFileListDTO { media_files })
    }
}

#[derive(Clone)]
pub struct UpdateMediaFileInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    media_file_reader: Arc<dyn MediaFileReader>,
    media_file_writer: Arc<dyn MediaFileWriter>,
}

impl UpdateMediaFileInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        media_file_reader: Arc<dyn MediaFileReader>,
        media_file_writer: Arc<dyn MediaFileWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            media_file_reader,
            media_file_writer,
        }
    }

    pub async fn execute(&self, dto: UpdateMediaFileDTO) -> AppResult<IdDTO> {
        require_staff(&self.user_reader, dto.actor_id).await?;
        let media_file_id: Id<MediaFile> = dto.media_file_id.try_into()?;
        let mut media_file = self
            .media_file_reader
            .find_by_id(&media_file_id)
            .await?
            .ok_or(AppError::NotFound("media file"))?;
        if let Some(display_name) = dto.display_name {
            media_file.display_name = display_name;
        }
        if dto.season.is_some() {
            media_file.season = dto.season;
        }
        if dto.episode.is_some() {
            media_file.episode = dto.episode;
        }
        if let Some(skip) = dto.skip {
            media_file.skip = skip;
        }
        let media_file_id = self.media_file_writer.update(media_file).await?;
        self.db_session.commit().await?;
        Ok(IdDTO {
            id: media_file_id.value.to_string(),
        })
    }
}

mod adapter;
mod application;
mod domain;
mod infra;
#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::application::dto::user::ScrubPasswordsDTO;
use crate::application::interactors::admin::ScrubPasswordsInteractor;
use crate::infra::app::create_app;
use crate::infra::config::AppConfig;
use crate::infra::init_app_state;
use crate::infra::setup::init_tracing;
use crate::infra::state::{AppState, FromAppState};

#[derive(Parser)]
#[command(name = "medialib", about = "Media library backend")]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, env = "BASE_CONFIG")]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (the default when no subcommand is given).
    Serve,
    /// Reset every stored password to the given value. For anonymizing a
    /// copied production database before handing it to a dev environment.
    Scrub {
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_file(&cli.config)?;
    let _guards = init_tracing(&config);
    let state = init_app_state(&config).await?;
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, state).await,
        Command::Scrub { password } => scrub(state, password).await,
    }
}

async fn serve(config: &AppConfig, state: AppState) -> anyhow::Result<()> {
    info!("Start server...");
    let app = create_app(config, state);
    let listener = tokio::net::TcpListener::bind(&config.application.address).await?;
    info!("Backend listening at {}", &listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn scrub(state: AppState, password: String) -> anyhow::Result<()> {
    let interactor = ScrubPasswordsInteractor::from_app_state(&state).await?;
    let result = interactor.execute(ScrubPasswordsDTO { password }).await?;
    info!("Scrubbed passwords for {} users", result.users_updated);
    Ok(())
}

use clap::Parser;
use tracing::info;

use getajob::store::{JsonFileStore, SplitFileStore, Store};
use getajob::{AppState, Cli, Config, JobBoard, StoreLayout, routes};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_config();

    info!(
        bind_address = config.bind_address.as_str(),
        layout = ?config.layout,
        "Starting getajob service"
    );

    match config.layout.clone() {
        StoreLayout::Combined { db_file } => serve(JsonFileStore::new(db_file), &config).await,
        StoreLayout::Split {
            jobs_file,
            skills_file,
        } => serve(SplitFileStore::new(jobs_file, skills_file), &config).await,
    }
}

async fn serve<S: Store>(store: S, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let board = JobBoard::load(store)?;
    let state = AppState::new(board);
    let app = routes().with_state(state);

    info!("Listening on {}", config.bind_address);
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

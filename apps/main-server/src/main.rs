//! StudyDesk server binary.

use std::net::SocketAddr;

use identity::{FileSessionStore, Session};
use main_server::{
    config::{Config, StoreBackend},
    create_app, create_state, init_tracing,
};
use record_store::{DocumentStore, MemoryDocumentStore, SqliteDocumentStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.log_level);

    tracing::info!(
        session_file = %config.session_file.display(),
        "Starting StudyDesk server"
    );

    // Restore the persisted session identity
    let session = Session::restore(FileSessionStore::new(config.session_file.clone())).await?;

    // Create the document store and serve
    match config.store_backend()? {
        StoreBackend::Memory => {
            tracing::warn!("DATABASE_URL not set, records will not survive a restart");
            serve(config, MemoryDocumentStore::new(), session).await
        }
        StoreBackend::Sqlite(url) => {
            let store = SqliteDocumentStore::connect(&url).await?;
            tracing::info!("Using SQLite document store");
            serve(config, store, session).await
        }
    }
}

async fn serve<S: DocumentStore + 'static>(
    config: Config,
    store: S,
    session: Session,
) -> anyhow::Result<()> {
    // Create application state
    let state = create_state(config, store, session);

    // Parse server address
    let addr: SocketAddr = state.config.server_addr().parse()?;

    let app = create_app(state);

    tracing::info!(addr = %addr, "Server listening");

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

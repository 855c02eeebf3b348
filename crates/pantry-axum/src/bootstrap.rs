//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. The storage backend is chosen here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use pantry_core::ItemService;
use pantry_core::paths::{data_root, database_path};
use pantry_db::CoreFactory;
use tracing::info;

use crate::routes::create_router;

/// Environment variable overriding the HTTP port.
pub const PORT_ENV: &str = "PANTRY_PORT";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default cap on request bodies, uploads included (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Where items are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// `SQLite` database file at the given path.
    Sqlite(PathBuf),
    /// Process memory; contents are lost on exit.
    InMemory,
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Storage backend for items.
    pub storage: StorageBackend,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Maximum accepted request body size in bytes.
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Create config with the default database path and the port taken from
    /// `PANTRY_PORT` when set.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            port: port_from_env()?,
            storage: StorageBackend::Sqlite(database_path()?),
            cors: CorsConfig::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        })
    }

    /// Config backed by in-memory storage; nothing touches the filesystem.
    pub fn in_memory() -> Self {
        Self {
            port: DEFAULT_PORT,
            storage: StorageBackend::InMemory,
            cors: CorsConfig::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_storage(mut self, storage: StorageBackend) -> Self {
        self.storage = storage;
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    #[must_use]
    pub const fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }
}

/// The port from `PANTRY_PORT`, or [`DEFAULT_PORT`] when unset.
pub fn port_from_env() -> Result<u16> {
    resolve_port(std::env::var(PORT_ENV).ok().as_deref())
}

/// Parse a port override, falling back to [`DEFAULT_PORT`] when unset.
pub fn resolve_port(raw: Option<&str>) -> Result<u16> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .with_context(|| format!("{PORT_ENV} must be a port number, got '{value}'")),
    }
}

/// Application context for the Axum adapter.
///
/// This struct holds all initialized services for the web server.
pub struct AxumContext {
    /// Item operations over the configured storage backend.
    pub items: Arc<ItemService>,
}

impl AxumContext {
    pub fn new(items: ItemService) -> Self {
        Self {
            items: Arc::new(items),
        }
    }
}

/// Bootstrap the Axum server with all services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let items = match &config.storage {
        StorageBackend::Sqlite(db_path) => {
            // Log resolved paths at startup for diagnostics
            if let Ok(root) = data_root() {
                info!("Data root: {}", root.display());
            }
            info!("Database: {}", db_path.display());

            let pool = CoreFactory::create_pool(db_path)
                .await
                .with_context(|| format!("failed to open database at {}", db_path.display()))?;
            CoreFactory::build_item_service(pool)
        }
        StorageBackend::InMemory => {
            info!("Using in-memory storage; items are lost on exit");
            CoreFactory::build_memory_item_service()
        }
    };

    Ok(AxumContext::new(items))
}

/// Start the Axum server and serve until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config).await?;
    let app = create_router(ctx, &config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("pantry web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("pantry web server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

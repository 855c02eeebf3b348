//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the offline CLI commands. The HTTP server has its own composition
//! root in `pantry-axum`.

use std::path::PathBuf;

use anyhow::Result;
use pantry_core::ItemService;
use pantry_core::paths::database_path;
use pantry_db::CoreFactory;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// `SQLite` database file.
    pub database: PathBuf,
}

impl CliConfig {
    /// Create config with the default database path.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            database: database_path()?,
        })
    }

    /// Use `database` when given, otherwise the default path.
    pub fn resolve(database: Option<PathBuf>) -> Result<Self> {
        match database {
            Some(database) => Ok(Self { database }),
            None => Self::with_defaults(),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    items: ItemService,
}

impl CliContext {
    pub const fn new(items: ItemService) -> Self {
        Self { items }
    }

    /// Access the item service.
    pub const fn items(&self) -> &ItemService {
        &self.items
    }
}

/// Open the database and build the CLI context.
pub async fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    tracing::debug!("Opening database at {}", config.database.display());
    let pool = CoreFactory::create_pool(&config.database).await?;
    Ok(CliContext::new(CoreFactory::build_item_service(pool)))
}

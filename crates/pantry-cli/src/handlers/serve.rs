//! Serve command handler.

use std::path::PathBuf;

use anyhow::{Result, bail};
use pantry_axum::bootstrap::port_from_env;
use pantry_axum::{ServerConfig, StorageBackend, start_server};

/// Options for `pantry serve`.
#[derive(Debug, Clone, Default)]
pub struct ServeOptions {
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub in_memory: bool,
    pub allow_origins: Vec<String>,
}

/// Apply command-line overrides on top of the default server config.
pub fn apply_options(mut config: ServerConfig, options: ServeOptions) -> Result<ServerConfig> {
    if options.in_memory && options.database.is_some() {
        bail!("--in-memory cannot be combined with --database");
    }

    if let Some(port) = options.port {
        config = config.with_port(port);
    }
    if options.in_memory {
        config = config.with_storage(StorageBackend::InMemory);
    } else if let Some(database) = options.database {
        config = config.with_storage(StorageBackend::Sqlite(database));
    }
    if !options.allow_origins.is_empty() {
        config = config.with_allowed_origins(options.allow_origins);
    }

    Ok(config)
}

/// Execute the serve command. Runs until Ctrl-C.
pub async fn execute(options: ServeOptions) -> Result<()> {
    // In-memory serving must not depend on a resolvable data directory
    let config = if options.in_memory {
        ServerConfig::in_memory().with_port(port_from_env()?)
    } else {
        ServerConfig::with_defaults()?
    };
    let config = apply_options(config, options)?;

    println!();
    println!("  pantry API listening on http://localhost:{}/api", config.port);
    match &config.storage {
        StorageBackend::Sqlite(path) => println!("  Database: {}", path.display()),
        StorageBackend::InMemory => println!("  Storage: in-memory (data is lost on exit)"),
    }
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    start_server(config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_axum::CorsConfig;

    #[test]
    fn test_apply_options_overrides() {
        let config = apply_options(
            ServerConfig::in_memory(),
            ServeOptions {
                port: Some(9100),
                database: Some(PathBuf::from("/tmp/pantry.db")),
                in_memory: false,
                allow_origins: vec!["http://localhost:5173".to_string()],
            },
        )
        .unwrap();

        assert_eq!(config.port, 9100);
        assert_eq!(
            config.storage,
            StorageBackend::Sqlite(PathBuf::from("/tmp/pantry.db"))
        );
        assert!(matches!(config.cors, CorsConfig::AllowOrigins(_)));
    }

    #[test]
    fn test_apply_options_keeps_defaults() {
        let config = apply_options(ServerConfig::in_memory(), ServeOptions::default()).unwrap();
        assert_eq!(config.storage, StorageBackend::InMemory);
        assert!(matches!(config.cors, CorsConfig::AllowAll));
    }

    #[test]
    fn test_in_memory_conflicts_with_database() {
        let result = apply_options(
            ServerConfig::in_memory(),
            ServeOptions {
                database: Some(PathBuf::from("x.db")),
                in_memory: true,
                ..ServeOptions::default()
            },
        );
        assert!(result.is_err());
    }
}

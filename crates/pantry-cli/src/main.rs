//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to `ItemService`.

use clap::Parser;

use pantry_cli::handlers::serve::ServeOptions;
use pantry_cli::{Cli, CliConfig, Commands, bootstrap, handlers, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    logging::init(cli.verbose);

    match cli.command {
        Commands::Serve {
            port,
            in_memory,
            allow_origins,
        } => {
            handlers::serve::execute(ServeOptions {
                port,
                database: cli.database,
                in_memory,
                allow_origins,
            })
            .await?;
        }
        Commands::Import { file } => {
            let ctx = bootstrap(&CliConfig::resolve(cli.database)?).await?;
            handlers::import::execute(&ctx, &file).await?;
        }
        Commands::List { item_type, unit } => {
            let ctx = bootstrap(&CliConfig::resolve(cli.database)?).await?;
            handlers::list::execute(&ctx, item_type, unit).await?;
        }
        Commands::Paths => {
            handlers::paths::execute(&CliConfig::resolve(cli.database)?)?;
        }
    }

    Ok(())
}

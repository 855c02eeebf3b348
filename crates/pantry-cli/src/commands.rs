//! Subcommand definitions.

use std::path::PathBuf;

use clap::Subcommand;
use pantry_core::{ItemType, Unit};

/// Available pantry commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port to listen on (defaults to PANTRY_PORT, then 8000)
        #[arg(short, long)]
        port: Option<u16>,
        /// Keep items in memory only; nothing is written to disk
        #[arg(long)]
        in_memory: bool,
        /// Allowed CORS origin (repeatable). All origins are allowed when omitted
        #[arg(long = "allow-origin", value_name = "ORIGIN")]
        allow_origins: Vec<String>,
    },

    /// Import items from a JSON file containing an array of items
    Import {
        /// Path to a `.json` file
        file: PathBuf,
    },

    /// List stored items
    List {
        /// Only show items of this type (fruit or vegetable)
        #[arg(long = "type", value_parser = parse_item_type)]
        item_type: Option<ItemType>,
        /// Unit to report quantities in (g or kg)
        #[arg(long, value_parser = parse_unit, default_value = "g")]
        unit: Unit,
    },

    /// Show resolved data paths
    Paths,
}

fn parse_item_type(s: &str) -> Result<ItemType, String> {
    ItemType::parse(s).ok_or_else(|| format!("expected 'fruit' or 'vegetable', got '{s}'"))
}

fn parse_unit(s: &str) -> Result<Unit, String> {
    Unit::parse(s).ok_or_else(|| format!("expected 'g' or 'kg', got '{s}'"))
}

#[cfg(test)]
mod tests {
    use crate::parser::Cli;
    use clap::Parser;

    use super::*;

    #[test]
    fn test_list_parses_type_and_unit() {
        let cli = Cli::parse_from(["pantry", "list", "--type", "fruit", "--unit", "kg"]);
        match cli.command {
            Commands::List { item_type, unit } => {
                assert_eq!(item_type, Some(ItemType::Fruit));
                assert_eq!(unit, Unit::Kilograms);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_list_rejects_unknown_type() {
        assert!(Cli::try_parse_from(["pantry", "list", "--type", "mineral"]).is_err());
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::parse_from([
            "pantry",
            "serve",
            "--port",
            "9000",
            "--allow-origin",
            "http://a.test",
            "--allow-origin",
            "http://b.test",
        ]);
        match cli.command {
            Commands::Serve {
                port,
                in_memory,
                allow_origins,
            } => {
                assert_eq!(port, Some(9000));
                assert!(!in_memory);
                assert_eq!(allow_origins.len(), 2);
            }
            _ => panic!("expected serve"),
        }
    }
}

//! Command-line argument definitions.

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Record shops and their product prices in a local store.
#[derive(Parser, Debug)]
#[command(name = "shops", version, about, long_about = None)]
pub struct Cli {
    /// Absolute directory for rotated log files; logging is off when unset
    #[arg(long, env = "SHOPS_LOG_DIR", global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SHOPS_LOG_LEVEL", global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Store file shared by every subcommand.
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct StoreArgs {
    /// The data file name
    #[arg(long, value_name = "PATH")]
    pub filename: PathBuf,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a new product
    Add {
        #[command(flatten)]
        store: StoreArgs,

        /// The shop's name
        #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
        name: String,

        /// The shop's product
        #[arg(short, long)]
        product: Option<String>,

        /// The price of product
        #[arg(long, alias = "pr", allow_negative_numbers = true)]
        price: i64,
    },
    /// Display all products
    Display {
        #[command(flatten)]
        store: StoreArgs,
    },
    /// Select the shops
    Select {
        #[command(flatten)]
        store: StoreArgs,

        /// The selected shop name
        #[arg(short, long = "selected_shop", alias = "selected-shop")]
        selected_shop: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, StoreArgs};
    use clap::error::ErrorKind;
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    fn store(path: &str) -> StoreArgs {
        StoreArgs {
            filename: PathBuf::from(path),
        }
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_all_options() {
        let cli = Cli::try_parse_from([
            "shops", "add", "--filename", "s.db", "-n", "Acme", "-p", "Widget", "--price", "10",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Commands::Add {
                store: store("s.db"),
                name: "Acme".to_string(),
                product: Some("Widget".to_string()),
                price: 10,
            }
        );
    }

    #[test]
    fn add_product_is_optional_and_price_accepts_short_alias() {
        let cli =
            Cli::try_parse_from(["shops", "add", "--filename", "s.db", "--name", "Acme", "--pr", "-3"])
                .unwrap();

        assert_eq!(
            cli.command,
            Commands::Add {
                store: store("s.db"),
                name: "Acme".to_string(),
                product: None,
                price: -3,
            }
        );
    }

    #[test]
    fn add_rejects_non_integer_price() {
        let err = Cli::try_parse_from([
            "shops", "add", "--filename", "s.db", "-n", "Acme", "--price", "ten",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn add_rejects_empty_shop_name() {
        let err =
            Cli::try_parse_from(["shops", "add", "--filename", "s.db", "-n", "", "--price", "1"])
                .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn add_accepts_whitespace_shop_name() {
        let cli = Cli::try_parse_from([
            "shops", "add", "--filename", "s.db", "-n", " ", "--price", "1",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Add { ref name, .. } if name == " "));
    }

    #[test]
    fn every_subcommand_requires_filename() {
        for argv in [
            vec!["shops", "add", "-n", "Acme", "--price", "1"],
            vec!["shops", "display"],
            vec!["shops", "select", "-s", "Acme"],
        ] {
            let err = Cli::try_parse_from(argv).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        }
    }

    #[test]
    fn parses_select_with_underscore_long_flag() {
        let cli =
            Cli::try_parse_from(["shops", "select", "--filename", "s.db", "--selected_shop", "ShopB"])
                .unwrap();

        assert_eq!(
            cli.command,
            Commands::Select {
                store: store("s.db"),
                selected_shop: "ShopB".to_string(),
            }
        );
    }

    #[test]
    fn missing_subcommand_is_a_usage_error() {
        assert!(Cli::try_parse_from(["shops"]).is_err());
    }

    #[test]
    fn version_flag_reports_program_name() {
        let err = Cli::try_parse_from(["shops", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(err.to_string().starts_with("shops "));
    }

    #[test]
    fn log_options_are_global() {
        let cli = Cli::try_parse_from([
            "shops",
            "display",
            "--filename",
            "s.db",
            "--log-level",
            "warn",
        ])
        .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("warn"));
    }
}

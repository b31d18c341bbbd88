use clap::{Parser, Subcommand};
use grocify::model::Price;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "grocify", bin_name = "grocify", version)]
#[command(about = "Keep a grocery list as a plain text receipt", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Ledger file to use (overrides GROCIFY_LEDGER and the config file)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub ledger: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an item, merging it into an existing entry with the same name
    #[command(alias = "a")]
    Add {
        /// Item name (up to 28 characters)
        name: String,

        /// Price, rounded to cents (e.g. 2.50)
        #[arg(value_parser = parse_price)]
        price: Price,

        /// Quantity (at least 1)
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        quantity: u64,
    },

    /// Show the grocery list and its totals
    #[command(alias = "ls")]
    View {
        /// Print the ledger file as stored
        #[arg(long)]
        raw: bool,
    },

    /// Empty the grocery list
    Reset,

    /// Create the ledger file
    Init {
        /// Overwrite an existing ledger with an empty one
        #[arg(long)]
        force: bool,
    },

    /// Print where the ledger and config live
    Paths,

    /// Get or set configuration
    Config {
        /// Configuration key (ledger-path, currency-symbol)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

fn parse_price(s: &str) -> Result<Price, String> {
    s.parse::<Price>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add() {
        let cli = Cli::try_parse_from(["grocify", "add", "Milk", "2.50", "3"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                name,
                price,
                quantity,
            }) => {
                assert_eq!(name, "Milk");
                assert_eq!(price.to_string(), "2.5");
                assert_eq!(quantity, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_quantity_and_bad_prices() {
        assert!(Cli::try_parse_from(["grocify", "add", "Milk", "2.50", "0"]).is_err());
        assert!(Cli::try_parse_from(["grocify", "add", "Milk", "cheap", "1"]).is_err());
    }

    #[test]
    fn global_ledger_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["grocify", "view", "--ledger", "/tmp/x.txt"]).unwrap();
        assert_eq!(cli.ledger, Some(PathBuf::from("/tmp/x.txt")));
        assert!(matches!(cli.command, Some(Commands::View { raw: false })));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["grocify"]).unwrap();
        assert!(cli.command.is_none());
    }
}

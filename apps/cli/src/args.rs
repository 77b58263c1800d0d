//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Look up credit card tiers by code or name.
#[derive(Debug, Parser)]
#[command(name = "cards")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
pub(crate) struct Cli {
    /// Configuration file (TOML/JSON/YAML); `SMENUM__*` variables override it
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Log at debug level regardless of the configured level
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List every tier with its code and discount
    List,
    /// Look up a tier by numeric code
    Code {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
    /// Look up a tier by exact (case-sensitive) name
    Name { name: String },
    /// Price an amount for a tier given by code or name
    Quote {
        /// Tier code or name
        card: String,
        amount: f64,
    },
}

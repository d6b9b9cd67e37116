use clap::Parser;

use crate::application::data::{ColorChoice, LogLevel};

/// A tiny TempleOS-flavoured shell over an in-memory file tree.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// When to colour the output
    #[clap(long, short, default_value = "auto", value_enum)]
    pub color: ColorChoice,

    /// Never clear the screen or wait for Enter; useful with piped input
    #[clap(long, short)]
    pub batch: bool,

    /// Seed for verse and colour selection
    #[clap(long, short)]
    pub seed: Option<u64>,
}

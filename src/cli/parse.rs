use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::constants::{DEFAULT_DATA_PATH, DEFAULT_TOP_N};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "netflix-eda",
    about = "Descriptive charts for a Netflix catalog CSV, drawn in the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Command>,

    #[command(flatten)]
    pub opts: Options,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the dataset shape and column types
    Info,
}

/// Without a subcommand every chart is shown in turn.
#[derive(Args, Debug)]
pub struct Options {
    /// Catalog CSV path
    #[arg(long, value_name = "FILE", default_value = DEFAULT_DATA_PATH, global = true)]
    pub data: PathBuf,

    /// Actors in the ranking chart
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Series color: black, red, green, yellow, blue, magenta, cyan, white,
    /// steel, crimson, or `#RRGGBB`
    #[arg(long, default_value = "steel")]
    pub color: String,

    /// Plot on the terminal background instead of the shaded grid
    #[arg(long)]
    pub plain: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

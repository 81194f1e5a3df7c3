use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", version)]
#[command(about = "Interactive in-memory library desk for books, magazines and clients", long_about = None)]
pub struct Cli {
    /// Path to the config file (defaults to the platform config dir)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Give up on a prompt after this many invalid answers
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<NonZeroUsize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Raise the log level one step per flag (logs go to stderr)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

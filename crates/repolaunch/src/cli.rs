use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "repolaunch",
    version,
    about = "List your GitHub repositories as launcher items"
)]
pub struct Cli {
    /// Text to filter repositories by (matches owner/name and description)
    #[arg(default_value = "")]
    pub query: String,

    /// Path to a TOML config file
    #[arg(long, env = "REPOLAUNCH_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// GitHub account whose starred repositories are listed (overrides config file)
    #[arg(long)]
    pub user: Option<String>,

    /// API token (overrides config file)
    #[arg(long)]
    pub token: Option<String>,

    /// Seconds the launcher may cache the result (overrides config file)
    #[arg(long, value_name = "SECONDS")]
    pub cache_seconds: Option<u64>,

    /// GitHub API base URL (overrides config file)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Pretty-print the JSON envelope
    #[arg(long)]
    pub pretty: bool,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// When to colorize error output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stderr is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dt2",
    about = "DataType2 contract REST facade",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with `[server]` and `[chain]` tables
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Use a process-local contract instead of a node
    #[arg(long, global = true)]
    pub in_memory: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP facade
    Serve(ServeArgs),
    /// Show the message, or set it first
    Message(MessageArgs),
    /// List the stored numbers
    Numbers,
    /// List the stored names
    Names,
    /// Show every contract field at once
    Details,
    /// Show the resolved configuration
    Config,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Listen address, overrides config and BIND_ADDR
    #[arg(long)]
    pub bind: Option<SocketAddr>,
}

#[derive(Args)]
pub struct MessageArgs {
    pub message: Option<String>,
}

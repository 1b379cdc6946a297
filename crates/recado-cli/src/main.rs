//! recado CLI - WhatsApp gateway bridge over JSON-RPC.

use clap::{Parser, Subcommand};

mod commands;
mod shared;

/// recado - expose a messaging gateway to RPC callers over SSE or stdio.
#[derive(Debug, Parser)]
#[command(name = "recado", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, global = true, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the RPC server over stdio or SSE.
    Serve(commands::serve::ServeArgs),
    /// Send one message directly through the gateway.
    Send(commands::send::SendArgs),
    /// List the registered tools.
    Tools(commands::tools::ToolsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagnostics always go to stderr: with the stdio transport,
    // stdout carries nothing but response envelopes.
    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    match cli.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    };

    tracing::debug!(config = ?cli.config, "recado starting");

    match &cli.command {
        Commands::Serve(args) => commands::serve::execute(args, cli.config.as_deref()).await,
        Commands::Send(args) => commands::send::execute(args, cli.config.as_deref()).await,
        Commands::Tools(args) => commands::tools::execute(args, cli.config.as_deref()),
    }
}

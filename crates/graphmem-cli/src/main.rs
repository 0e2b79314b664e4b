//! GraphMem CLI
//!
//! Serves a flat-file knowledge graph of entities, relations, and free-text
//! observations over an HTTP API.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use graphmem_core::GraphStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "graphmem", version, about = "Persistent knowledge graph HTTP server")]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "3030")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Path to the memory record file
    #[arg(long, env = "MEMORY_FILE_PATH", default_value = "memory.json")]
    memory_file: PathBuf,
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "graphmem=info,graphmem_web=debug,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    println!();
    println!(
        "  {} {}",
        "GraphMem".cyan().bold(),
        "Knowledge Graph Server".bold()
    );
    println!();
    println!("  {}     http://{}:{}/api", "API".green(), cli.host, cli.port);
    println!("  {}  {}", "Memory".green(), cli.memory_file.display());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    let store = Arc::new(GraphStore::new(cli.memory_file));
    graphmem_web::run_server(store, &cli.host, cli.port).await
}

use std::path::PathBuf;

use clap::Parser;
use jotter::http::{self, AppState};
use jotter::storage::JsonStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(version, about = "A minimal file-backed note-taking HTTP API")]
struct Cli {
    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Path of the JSON data file
    #[arg(long, env = "JOTTER_DATA_FILE", default_value = "data.json")]
    data_file: PathBuf,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jotter=info,tower_http=info")),
        )
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> jotter::Result<()> {
    let store = JsonStore::new(&cli.data_file);
    store.seed()?;
    info!(data_file = %store.path().display(), "data file ready");

    http::serve(AppState::new(store), cli.port).await
}

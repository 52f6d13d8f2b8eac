//! Vocabula server CLI.
//!
//! Run with: `cargo run -p vocabula-server -- --help`

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};

use vocabula_server::state::AppState;
use vocabula_transfero::{Synonyms, WordNetDb};

/// Vocabula HTTP server.
#[derive(Parser, Debug)]
#[command(name = "vocabula-server")]
#[command(about = "HTTP server for Latin vocabulary test sessions")]
struct Args {
    /// Port to listen on.
    #[arg(long, default_value = "5000", env = "VOCABULA_PORT")]
    port: u16,

    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1", env = "VOCABULA_HOST")]
    host: IpAddr,

    /// Path to the compressed synonym database; synonym expansion is
    /// disabled when absent.
    #[arg(long, env = "VOCABULA_SYNONYMS_DB")]
    synonyms_db: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vocabula_server=info,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();

    let synonyms: Arc<dyn Synonyms> = match &args.synonyms_db {
        Some(path) => match WordNetDb::open(path) {
            Ok(db) => Arc::new(db),
            Err(err) => {
                // A missing database degrades to empty synonym sets.
                warn!(%err, path = %path.display(), "synonym database unavailable");
                Arc::new(WordNetDb::empty())
            }
        },
        None => Arc::new(WordNetDb::empty()),
    };

    let state = Arc::new(AppState::from_env(synonyms));
    let app = vocabula_server::router(state);

    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        %addr,
        "starting vocabula server"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

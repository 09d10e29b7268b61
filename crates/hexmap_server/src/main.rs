#![forbid(unsafe_code)]
//! HTTP transport for the hexmap grid store.
//!
//! Exposes two endpoints: `POST /locations` resolves a batch of axial
//! coordinates to locations through a shared [`hexmap::prelude::HexMap`],
//! and `GET /` serves the static UI page. The core map carries all the
//! semantics; this binary only decodes, delegates and encodes.
mod error;
mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::routes::AppState;

#[derive(Debug, Parser)]
#[command(name = "hexmap_server", about = "Serve hexmap locations over HTTP")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:24999")]
    addr: SocketAddr,

    /// World seed fixing all generated locations.
    #[arg(long, default_value_t = 0)]
    seed: i64,

    /// Path to the static UI page served at `/`.
    #[arg(long, default_value = "web/ui.html")]
    ui: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let state = AppState::new(args.seed, args.ui);
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    info!(addr = %args.addr, seed = args.seed, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

//! Local development server for the image API and a matching image host.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use tokio::sync::RwLock;

use gallery::logging::{self, LogTarget};
use gallery::model::{ImageId, ImageRecord, NewImage, Page};

#[path = "gallery_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "gallery_server/store.rs"]
mod store;
use self::store::*;
#[path = "gallery_server/handlers.rs"]
mod handlers;
use self::handlers::*;

#[derive(Parser)]
#[command(name = "gallery-server")]
#[command(about = "In-memory image API for local development and tests", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Write the bound address to this file once listening
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Records per list page
    #[arg(long, default_value_t = 6)]
    page_size: usize,
}

struct AppState {
    /// Public base URL used to build hosted file links.
    base_url: String,
    page_size: usize,

    /// Newest first.
    images: RwLock<Vec<ImageRecord>>,
    files: RwLock<HashMap<String, StoredFile>>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    logging::init(LogTarget::Stderr)?;
    if args.page_size == 0 {
        anyhow::bail!("--page-size must be >= 1");
    }

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;
    let local_addr = listener.local_addr().context("read listener local addr")?;

    let state = Arc::new(AppState {
        base_url: format!("http://{}", local_addr),
        page_size: args.page_size,
        images: RwLock::new(Vec::new()),
        files: RwLock::new(HashMap::new()),
    });

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/api/images", get(list_images).post(create_image))
        .route("/api/upload", post(host_image))
        .route("/files/:hash", get(get_file))
        .with_state(state);

    eprintln!("gallery-server listening on {}", local_addr);

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

mod config;
mod errors;
mod form;
mod models;
mod persistence;
mod render;
mod routes;
mod session;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StoreBackend};
use crate::form::{IdSource, UuidIds};
use crate::models::default_document;
use crate::persistence::Persistence;
use crate::render::HtmlRenderer;
use crate::routes::build_router;
use crate::session::Session;
use crate::state::AppState;
use crate::store::{FileStore, KeyValueStore, MemoryStore, RedisStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed or missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Builder v{}", env!("CARGO_PKG_VERSION"));

    let store = open_store(&config)?;
    info!("Store backend: {}", store.backend());

    let ids: Arc<dyn IdSource> = Arc::new(UuidIds);
    let persistence = Persistence::new(store, config.storage_key.clone(), ids.clone());

    // Last saved document, or the built-in sample on first run
    let document = match persistence.load().await {
        Some(document) => document,
        None => {
            info!("Starting from the sample document");
            default_document()
        }
    };

    let html = HtmlRenderer::new().context("Failed to compile page templates")?;

    let state = AppState {
        session: Session::new(document).shared(),
        persistence,
        ids,
        html: Arc::new(html),
        config: config.clone(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("127.0.0.1:{}", config.port).parse()?;
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn open_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.store_backend {
        StoreBackend::File => Arc::new(FileStore::new(config.data_dir.clone())),
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is required for the redis store backend")?;
            Arc::new(RedisStore::open(url).context("Invalid REDIS_URL")?)
        }
    };
    Ok(store)
}

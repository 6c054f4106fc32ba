use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::form::IdSource;
use crate::persistence::Persistence;
use crate::render::HtmlRenderer;
use crate::session::SharedSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub session: SharedSession,
    pub persistence: Persistence,
    /// Source of ids for newly added entries. UUIDv4 in production.
    pub ids: Arc<dyn IdSource>,
    pub html: Arc<HtmlRenderer>,
    pub config: Config,
}

impl AppState {
    pub fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.config.saved_flash_ms)
    }
}

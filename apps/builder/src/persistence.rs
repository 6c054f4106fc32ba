//! Loads and saves the whole document as one JSON blob under a fixed key.
//!
//! Neither direction surfaces an error to the caller: a blob that cannot be
//! read or decoded means "start from the built-in default", and a failed
//! save is logged and reported as `false`.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::form::IdSource;
use crate::models::Document;
use crate::store::KeyValueStore;

#[derive(Clone)]
pub struct Persistence {
    store: Arc<dyn KeyValueStore>,
    key: String,
    ids: Arc<dyn IdSource>,
}

impl Persistence {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>, ids: Arc<dyn IdSource>) -> Self {
        Self {
            store,
            key: key.into(),
            ids,
        }
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    /// The last saved document, or `None` when nothing usable is stored.
    pub async fn load(&self) -> Option<Document> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No saved document under '{}'", self.key);
                return None;
            }
            Err(e) => {
                warn!("Failed to read saved document '{}': {e}", self.key);
                return None;
            }
        };

        match decode(&raw, self.ids.as_ref()) {
            Ok(doc) => {
                info!("Loaded saved document from {} store", self.backend());
                Some(doc)
            }
            Err(e) => {
                warn!("Ignoring unreadable saved document '{}': {e}", self.key);
                None
            }
        }
    }

    /// Overwrites the stored document. Returns whether the write succeeded.
    pub async fn save(&self, doc: &Document) -> bool {
        let raw = match serde_json::to_string(doc) {
            Ok(raw) => raw,
            Err(e) => {
                error!("Failed to encode document: {e}");
                return false;
            }
        };

        match self.store.set(&self.key, &raw).await {
            Ok(()) => {
                debug!("Saved document under '{}' ({} bytes)", self.key, raw.len());
                true
            }
            Err(e) => {
                error!("Failed to save document '{}': {e}", self.key);
                false
            }
        }
    }
}

/// Decodes a stored blob. Optional sections missing from older blobs come
/// back empty, and broken entry ids are replaced so every id is unique
/// within its list.
pub fn decode(raw: &str, ids: &dyn IdSource) -> Result<Document, serde_json::Error> {
    let mut doc: Document = serde_json::from_str(raw)?;
    let repaired = doc.repair_ids(ids);
    if repaired > 0 {
        warn!("Replaced {repaired} missing or duplicate entry ids in saved document");
    }
    Ok(doc)
}

// View Orchestrator: which screen is showing, the live document snapshot,
// the accordion, and the save/flash cycle.

pub mod flash;

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::form::{apply, Accordion, Edit, EditError, IdSource, Panel};
use crate::models::Document;
use crate::persistence::Persistence;
use crate::render::Template;

pub use flash::SavedFlash;

/// One writer at a time: every request holds the lock for its whole update.
pub type SharedSession = Arc<Mutex<Session>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    SelectingTemplate,
    Editing(Template),
}

#[derive(Debug, Clone)]
pub struct Session {
    document: Document,
    view: View,
    accordion: Accordion,
    flash: SavedFlash,
}

/// Wire shape of `GET /api/session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub view: &'static str,
    pub template: Option<Template>,
    pub active_panel: Option<&'static str>,
    pub saved: bool,
}

impl Session {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            view: View::SelectingTemplate,
            accordion: Accordion::default(),
            flash: SavedFlash::default(),
        }
    }

    pub fn shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    pub fn template(&self) -> Option<Template> {
        match self.view {
            View::SelectingTemplate => None,
            View::Editing(template) => Some(template),
        }
    }

    pub fn choose_template(&mut self, template: Template) {
        debug!("Editing with {} template", template.key());
        self.view = View::Editing(template);
    }

    /// Back to the gallery. The document and open panel are kept.
    pub fn back(&mut self) {
        self.view = View::SelectingTemplate;
    }

    pub fn apply(&mut self, edit: Edit, ids: &dyn IdSource) -> Result<(), EditError> {
        self.document = apply(&self.document, edit, ids)?;
        Ok(())
    }

    pub fn toggle_panel(&mut self, panel: Panel) {
        self.accordion.toggle(panel);
    }

    pub fn saved(&self) -> bool {
        self.flash.is_visible()
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            view: match self.view {
                View::SelectingTemplate => "selecting_template",
                View::Editing(_) => "editing",
            },
            template: self.template(),
            active_panel: self.accordion.active().map(Panel::key),
            saved: self.saved(),
        }
    }
}

/// Persists the current document. On success the flash is raised and a
/// task is spawned to hide it again after `flash_for`.
pub async fn save(session: &SharedSession, persistence: &Persistence, flash_for: Duration) -> bool {
    let generation = {
        let mut guard = session.lock().await;
        if !persistence.save(&guard.document).await {
            return false;
        }
        guard.flash.raise()
    };
    info!("Document saved");

    let session = Arc::clone(session);
    tokio::spawn(async move {
        tokio::time::sleep(flash_for).await;
        if session.lock().await.flash.clear(generation) {
            debug!("Saved flash cleared");
        }
    });
    true
}

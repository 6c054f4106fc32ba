//! Browser-facing handlers: pages, form edits and the save/print actions.
//!
//! Structural actions (template choice, panels, add/remove, save) answer
//! with `303 See Other` back to `/`. Field edits answer with the refreshed
//! résumé fragment so the page can swap the preview in place.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::form::{Edit, Panel, Section};
use crate::models::EntryId;
use crate::render::Template;
use crate::session::{self, Session, View};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FieldUpdate {
    pub field: String,
    #[serde(default)]
    pub value: String,
}

/// `303 See Other` back to the main page.
fn home() -> Redirect {
    Redirect::to("/")
}

/// Live preview after a field edit. Without a chosen template the Classic
/// layout is used.
fn preview(state: &AppState, session: &Session) -> Result<Html<String>, AppError> {
    let template = session.template().unwrap_or(Template::Classic);
    Ok(Html(state.html.resume(template, session.document())?))
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let session = state.session.lock().await;
    let page = match session.view() {
        View::SelectingTemplate => state.html.selection_page()?,
        View::Editing(template) => state.html.editor_page(
            template,
            session.document(),
            session.accordion(),
            session.saved(),
            state.config.saved_flash_ms,
        )?,
    };
    Ok(Html(page))
}

/// POST /template/:name
pub async fn handle_choose_template(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Redirect, AppError> {
    let template: Template = name.parse()?;
    state.session.lock().await.choose_template(template);
    Ok(home())
}

/// POST /back
pub async fn handle_back(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.back();
    home()
}

/// POST /panel/:panel
pub async fn handle_toggle_panel(
    State(state): State<AppState>,
    Path(panel): Path<String>,
) -> Result<Redirect, AppError> {
    let panel: Panel = panel.parse()?;
    state.session.lock().await.toggle_panel(panel);
    Ok(home())
}

/// POST /personal
pub async fn handle_update_personal(
    State(state): State<AppState>,
    Form(update): Form<FieldUpdate>,
) -> Result<Html<String>, AppError> {
    let mut session = state.session.lock().await;
    session.apply(
        Edit::Personal {
            field: update.field,
            value: update.value,
        },
        state.ids.as_ref(),
    )?;
    preview(&state, &session)
}

/// POST /sections/:section
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Redirect, AppError> {
    let section: Section = section.parse()?;
    let mut session = state.session.lock().await;
    session.apply(Edit::Add { section }, state.ids.as_ref())?;
    Ok(home())
}

/// POST /sections/:section/:id
pub async fn handle_update_entry(
    State(state): State<AppState>,
    Path((section, id)): Path<(String, String)>,
    Form(update): Form<FieldUpdate>,
) -> Result<Html<String>, AppError> {
    let section: Section = section.parse()?;
    let mut session = state.session.lock().await;
    session.apply(
        Edit::Update {
            section,
            id: EntryId::from(id),
            field: update.field,
            value: update.value,
        },
        state.ids.as_ref(),
    )?;
    preview(&state, &session)
}

/// POST /sections/:section/:id/remove
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path((section, id)): Path<(String, String)>,
) -> Result<Redirect, AppError> {
    let section: Section = section.parse()?;
    let mut session = state.session.lock().await;
    session.apply(
        Edit::Remove {
            section,
            id: EntryId::from(id),
        },
        state.ids.as_ref(),
    )?;
    Ok(home())
}

/// POST /save
pub async fn handle_save(State(state): State<AppState>) -> Redirect {
    if !session::save(&state.session, &state.persistence, state.flash_duration()).await {
        warn!("Save requested but the document could not be written");
    }
    home()
}

/// GET /print
pub async fn handle_print(State(state): State<AppState>) -> Result<Response, AppError> {
    let session = state.session.lock().await;
    let Some(template) = session.template() else {
        debug!("Print requested with no template chosen");
        return Ok(home().into_response());
    };
    let page = state.html.print_page(template, session.document())?;
    Ok(Html(page).into_response())
}

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::Document;
use crate::render::{Layout, Template};
use crate::session::SessionStatus;
use crate::state::AppState;

/// GET /api/document
pub async fn handle_get_document(State(state): State<AppState>) -> Json<Document> {
    Json(state.session.lock().await.document().clone())
}

/// GET /api/preview/:template
/// Layout model of the current document, independent of the chosen view.
pub async fn handle_get_preview(
    State(state): State<AppState>,
    Path(template): Path<String>,
) -> Result<Json<Layout>, AppError> {
    let template: Template = template.parse()?;
    let session = state.session.lock().await;
    Ok(Json(template.layout(session.document())))
}

/// GET /api/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionStatus> {
    Json(state.session.lock().await.status())
}

pub mod api;
pub mod editor;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages and form actions
        .route("/", get(editor::handle_index))
        .route("/template/:name", post(editor::handle_choose_template))
        .route("/back", post(editor::handle_back))
        .route("/panel/:panel", post(editor::handle_toggle_panel))
        .route("/personal", post(editor::handle_update_personal))
        .route("/sections/:section", post(editor::handle_add_entry))
        .route("/sections/:section/:id", post(editor::handle_update_entry))
        .route(
            "/sections/:section/:id/remove",
            post(editor::handle_remove_entry),
        )
        .route("/save", post(editor::handle_save))
        .route("/print", get(editor::handle_print))
        // JSON views
        .route("/api/document", get(api::handle_get_document))
        .route("/api/preview/:template", get(api::handle_get_preview))
        .route("/api/session", get(api::handle_get_session))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, StoreBackend};
    use crate::form::ids::SequentialIds;
    use crate::models::default_document;
    use crate::persistence::Persistence;
    use crate::render::HtmlRenderer;
    use crate::session::Session;
    use crate::store::{KeyValueStore, MemoryStore};

    fn test_state() -> (AppState, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let ids = Arc::new(SequentialIds::new("t"));
        let state = AppState {
            session: Session::new(default_document()).shared(),
            persistence: Persistence::new(store.clone(), "cv-builder-data", ids.clone()),
            ids,
            html: Arc::new(HtmlRenderer::new().unwrap()),
            config: Config {
                store_backend: StoreBackend::Memory,
                ..Config::default()
            },
        };
        (state, store)
    }

    async fn send(app: &Router, method: &str, uri: &str, form: Option<&str>) -> Response {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match form {
            Some(form) => {
                request = request.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(form.to_string())
            }
            None => Body::empty(),
        };
        app.clone().oneshot(request.body(body).unwrap()).await.unwrap()
    }

    async fn text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn json(app: &Router, uri: &str) -> Value {
        let response = send(app, "GET", uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        serde_json::from_str(&text(response).await).unwrap()
    }

    fn assert_see_other(response: &Response) {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_health_reports_store() {
        let (state, _) = test_state();
        let app = build_router(state);
        let body = json(&app, "/health").await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["store"], "memory");
    }

    #[tokio::test]
    async fn test_index_follows_view() {
        let (state, _) = test_state();
        let app = build_router(state);

        let page = text(send(&app, "GET", "/", None).await).await;
        assert!(page.contains("Choose a template"));

        assert_see_other(&send(&app, "POST", "/template/modern", None).await);
        let page = text(send(&app, "GET", "/", None).await).await;
        assert!(page.contains("id=\"resume-preview\""));
        assert!(page.contains("Modern Professional"));

        assert_see_other(&send(&app, "POST", "/back", None).await);
        let status = json(&app, "/api/session").await;
        assert_eq!(status["view"], "selecting_template");
        assert_eq!(status["template"], Value::Null);
    }

    #[tokio::test]
    async fn test_unknown_names_are_not_found() {
        let (state, _) = test_state();
        let app = build_router(state);

        for uri in ["/template/fancy", "/panel/hobbies", "/sections/hobbies"] {
            let response = send(&app, "POST", uri, None).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
            let body: Value = serde_json::from_str(&text(response).await).unwrap();
            assert_eq!(body["error"]["code"], "NOT_FOUND");
        }
        let response = send(&app, "GET", "/api/preview/fancy", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_personal_edit_returns_fresh_preview() {
        let (state, _) = test_state();
        let app = build_router(state);
        send(&app, "POST", "/template/classic", None).await;

        let response = send(&app, "POST", "/personal", Some("field=fullName&value=Jane+Roe")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let fragment = text(response).await;
        assert!(fragment.contains("Jane Roe"));
        assert!(fragment.contains("resume classic"));

        let doc = json(&app, "/api/document").await;
        assert_eq!(doc["personalInfo"]["fullName"], "Jane Roe");
    }

    #[tokio::test]
    async fn test_unknown_field_is_bad_request() {
        let (state, _) = test_state();
        let app = build_router(state);
        let response = send(&app, "POST", "/personal", Some("field=nickname&value=J")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&text(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_entry_lifecycle() {
        let (state, _) = test_state();
        let app = build_router(state);
        send(&app, "POST", "/template/modern", None).await;

        assert_see_other(&send(&app, "POST", "/sections/projects", None).await);
        let doc = json(&app, "/api/document").await;
        assert_eq!(doc["projects"][0]["id"], "t-1");

        let response = send(
            &app,
            "POST",
            "/sections/projects/t-1",
            Some("field=name&value=Ledger"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("Ledger"));

        assert_see_other(&send(&app, "POST", "/sections/projects/t-1/remove", None).await);
        let doc = json(&app, "/api/document").await;
        assert_eq!(doc["projects"].as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn test_unknown_entry_id_leaves_document_alone() {
        let (state, _) = test_state();
        let app = build_router(state);
        let before = json(&app, "/api/document").await;

        let response = send(
            &app,
            "POST",
            "/sections/skills/missing",
            Some("field=items&value=Rust"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_see_other(&send(&app, "POST", "/sections/skills/missing/remove", None).await);

        assert_eq!(json(&app, "/api/document").await, before);
    }

    #[tokio::test]
    async fn test_encoded_slash_id_addresses_one_entry() {
        let (mut state, _) = test_state();
        let doc = crate::form::ops::add_education(&default_document(), "x/remove".into());
        state.session = Session::new(doc).shared();
        let app = build_router(state);

        let response = send(
            &app,
            "POST",
            "/sections/education/x%2Fremove",
            Some("field=school&value=Slash+College"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let doc = json(&app, "/api/document").await;
        assert_eq!(doc["education"][1]["id"], "x/remove");
        assert_eq!(doc["education"][1]["school"], "Slash College");

        assert_see_other(&send(&app, "POST", "/sections/education/x%2Fremove/remove", None).await);
        let doc = json(&app, "/api/document").await;
        assert_eq!(doc["education"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_panel_toggle_is_exclusive() {
        let (state, _) = test_state();
        let app = build_router(state);
        send(&app, "POST", "/panel/skills", None).await;
        assert_eq!(json(&app, "/api/session").await["activePanel"], "skills");
        send(&app, "POST", "/panel/skills", None).await;
        assert_eq!(json(&app, "/api/session").await["activePanel"], Value::Null);
    }

    #[tokio::test]
    async fn test_save_persists_and_raises_flash() {
        let (state, store) = test_state();
        let app = build_router(state);
        send(&app, "POST", "/personal", Some("field=jobTitle&value=Analyst")).await;

        assert_see_other(&send(&app, "POST", "/save", None).await);
        assert_eq!(json(&app, "/api/session").await["saved"], true);

        let raw = store.get("cv-builder-data").await.unwrap().unwrap();
        let saved: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(saved["personalInfo"]["jobTitle"], "Analyst");
    }

    #[tokio::test]
    async fn test_print_requires_template() {
        let (state, _) = test_state();
        let app = build_router(state);
        assert_see_other(&send(&app, "GET", "/print", None).await);

        send(&app, "POST", "/template/classic", None).await;
        let response = send(&app, "GET", "/print", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("window.print()"));
    }

    #[tokio::test]
    async fn test_preview_api_returns_layout_model() {
        let (state, _) = test_state();
        let app = build_router(state);
        let modern = json(&app, "/api/preview/modern").await;
        assert_eq!(modern["job_title"], "Finance Graduate");
        assert_eq!(modern["skills"][0]["items"][1], "SAP");
        let classic = json(&app, "/api/preview/classic").await;
        assert_eq!(classic["skills"][0]["items"], "Advanced MS Excel, SAP, Xero");
    }
}

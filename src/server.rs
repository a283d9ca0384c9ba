//! HTTP surface of the site.
//!
//! Three routes: `GET /` renders the whole page from query parameters,
//! `POST /consult` forwards a consultation request to the spreadsheet
//! endpoint and re-renders with the outcome, and `GET /health` answers
//! liveness probes. Every request builds its own [`UiState`]; no state is
//! shared between requests.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::consult::{self, ConsultForm, ConsultRequest};
use crate::i18n::{Language, UiStrings};
use crate::render;
use crate::state::UiState;

/// Shared handler state: configuration plus one reused HTTP client.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> AppState {
        AppState {
            config: Arc::new(config),
            client: reqwest::Client::new(),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/consult", post(submit_consult))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until shutdown.
pub async fn serve(config: Config) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Query parameters accepted by the page route.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// Language code ("en"/"hi"); anything else falls back to canonical
    lang: Option<String>,
    /// Checklist search query
    q: Option<String>,
    /// "1" opens the consultation modal
    consult: Option<String>,
}

/// Build the view state a request describes.
fn view_state(lang: Option<&str>, query: Option<String>, consult: bool) -> UiState {
    let mut state = UiState::new();

    if let Some(code) = lang {
        if let Ok(language) = Language::from_code(code) {
            state.set_language(language);
        }
    }
    if let Some(q) = query {
        state.set_query(q);
    }
    if consult {
        state.open_consult();
    }

    state
}

async fn index(Query(params): Query<PageQuery>) -> Html<String> {
    let state = view_state(
        params.lang.as_deref(),
        params.q,
        params.consult.as_deref() == Some("1"),
    );
    Html(render::render_page(&state, None))
}

/// Form body of `POST /consult`.
#[derive(Debug, Deserialize)]
pub struct ConsultSubmission {
    lang: Option<String>,
    q: Option<String>,
    name: String,
    age: String,
    gender: String,
    phone: String,
    email: String,
}

/// Forward one consultation request and re-render the page.
///
/// Success clears the form and closes the modal behind the thank-you
/// notice; a transport failure keeps the typed values and shows the generic
/// retry message instead. The response of the external endpoint is never
/// inspected either way.
async fn submit_consult(
    State(app): State<AppState>,
    Form(submission): Form<ConsultSubmission>,
) -> Html<String> {
    let mut state = view_state(submission.lang.as_deref(), submission.q.clone(), true);
    state.form = ConsultForm {
        name: submission.name,
        age: submission.age,
        gender: submission.gender,
        phone: submission.phone,
        email: submission.email,
    };
    let t = UiStrings::for_language(state.language());

    if !state.begin_submit() {
        return Html(render::render_page(&state, None));
    }

    let request = ConsultRequest::from_form(&state.form);
    let notice = match consult::submit_request(&app.client, &app.config.sheets_script_url, &request)
        .await
    {
        Ok(()) => {
            state.finish_submit(true);
            t.consult_success
        }
        Err(err) => {
            warn!("Consultation submission failed: {:#}", err);
            state.finish_submit(false);
            t.consult_error
        }
    };

    Html(render::render_page(&state, Some(notice)))
}

async fn health() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== View-State Mapping Tests ====================

    #[test]
    fn test_view_state_defaults() {
        let state = view_state(None, None, false);

        assert_eq!(state.language(), Language::ENGLISH);
        assert_eq!(state.query(), "");
        assert!(!state.consult_open());
    }

    #[test]
    fn test_view_state_applies_language_and_query() {
        let state = view_state(Some("hi"), Some("EPF".to_string()), false);

        assert_eq!(state.language(), Language::HINDI);
        assert_eq!(state.query(), "EPF");
    }

    #[test]
    fn test_view_state_unknown_language_falls_back() {
        let state = view_state(Some("xx"), None, false);
        assert_eq!(state.language(), Language::ENGLISH);
    }

    #[test]
    fn test_view_state_opens_consult_modal() {
        let state = view_state(None, None, true);
        assert!(state.consult_open());
    }
}

//! HTTP routes for the dashboard
//!
//! Every dashboard request reloads both logs, then renders the session's
//! view. Control actions update the session and redirect back to `/`.

use crate::html;
use crate::session::{session_cookie, session_id, Event, SessionState, SessionStore};
use crate::view::{self, ViewContext};
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::{Deserialize, Serialize};
use smsdash_charts::{ChartStyle, LineChartRenderer};
use smsdash_common::{DashError, Result};
use smsdash_config::Settings;
use smsdash_data::DashboardData;
use smsdash_i18n::{LabelKey, Locale, Translations};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// Shared application state for the dashboard routes
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub translations: Arc<Translations>,
    pub sessions: Arc<SessionStore>,
    pub renderer: Arc<LineChartRenderer>,
}

impl AppState {
    pub fn new(settings: Settings, translations: Translations) -> Self {
        let default_language =
            Locale::from_code(&settings.i18n.default_language).unwrap_or_default();
        let renderer = LineChartRenderer::new(ChartStyle::from(&settings.charts));
        let idle_timeout = Duration::from_secs(settings.server.session_idle_minutes * 60);

        Self {
            settings: Arc::new(settings),
            translations: Arc::new(translations),
            sessions: Arc::new(SessionStore::with_idle_timeout(default_language, idle_timeout)),
            renderer: Arc::new(renderer),
        }
    }

    fn cookie_name(&self) -> &str {
        &self.settings.server.session_cookie
    }

    /// Load, aggregate, filter and render. Blocking.
    fn build_page(&self, session: &SessionState) -> Result<String> {
        let data = DashboardData::load(&self.settings.data)?;
        let ctx = ViewContext {
            criteria_url: &self.settings.links.criteria_url,
            renderer: self.renderer.as_ref(),
        };
        let page = view::render(session, &data, &self.translations, &ctx)?;
        html::render_page(&page)
    }
}

/// Form posted by the language buttons
#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub lang: String,
}

/// Form posted by the sector dropdown
#[derive(Debug, Deserialize)]
pub struct SectorForm {
    pub sector: String,
}

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub sessions: usize,
}

/// Create the dashboard router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/language", post(set_language))
        .route("/sector", post(select_sector))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn with_session_cookie(state: &AppState, id: Uuid, response: impl IntoResponse) -> Response {
    (
        [(header::SET_COOKIE, session_cookie(state.cookie_name(), id))],
        response,
    )
        .into_response()
}

#[instrument(skip_all)]
async fn dashboard(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (id, session) = state
        .sessions
        .get_or_create(session_id(&headers, state.cookie_name()));
    let language = session.language;

    let worker = state.clone();
    let result = tokio::task::spawn_blocking(move || worker.build_page(&session))
        .await
        .map_err(|e| DashError::with_source("Dashboard render task failed", e))
        .and_then(|page| page);

    match result {
        Ok(page) => with_session_cookie(&state, id, Html(page)),
        Err(e) => {
            error!("Failed to build dashboard: {}", e);
            let title = state.translations.get(language, LabelKey::ErrorTitle);
            with_session_cookie(
                &state,
                id,
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(html::render_error(language, title, &e.to_string())),
                ),
            )
        }
    }
}

async fn set_language(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LanguageForm>,
) -> Response {
    let (id, _) = state
        .sessions
        .get_or_create(session_id(&headers, state.cookie_name()));

    match Locale::from_code(&form.lang) {
        Some(locale) => {
            state.sessions.update(id, Event::SetLanguage(locale));
        }
        None => warn!("Ignoring unsupported language '{}'", form.lang),
    }

    with_session_cookie(&state, id, Redirect::to("/"))
}

async fn select_sector(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SectorForm>,
) -> Response {
    let (id, _) = state
        .sessions
        .get_or_create(session_id(&headers, state.cookie_name()));
    state.sessions.update(id, Event::SelectSector(form.sector));

    with_session_cookie(&state, id, Redirect::to("/"))
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        sessions: state.sessions.len(),
    })
}

/// Bind the configured address and serve until the process stops
pub async fn serve(state: AppState) -> Result<()> {
    let addr: SocketAddr = state
        .settings
        .server
        .bind_address
        .parse()
        .map_err(|e| DashError::config_with_source("Invalid bind address", e))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

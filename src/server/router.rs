use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use crate::modules::highlight::application::HighlightService;
use crate::modules::team::application::TeamService;

pub struct AppState {
    pub team_service: Arc<TeamService>,
    /// `None` when no search API key is configured; only the highlights
    /// route needs it.
    pub highlight_service: Option<Arc<HighlightService>>,
}

impl AppState {
    pub fn new(team_service: Arc<TeamService>, highlight_service: Option<Arc<HighlightService>>) -> Self {
        Self {
            team_service,
            highlight_service,
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/teams", get(handlers::list_teams))
        .route("/teams/:abbrev", get(handlers::get_team))
        .route("/teams/:abbrev/favorite", put(handlers::set_favorite))
        .route("/teams/:abbrev/highlights", get(handlers::team_highlights))
        .route("/resolve", get(handlers::resolve_team))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state)
}

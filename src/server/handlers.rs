use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use super::router::AppState;
use crate::modules::highlight::domain::{entities::Highlight, value_objects::GameDate};
use crate::modules::team::domain::entities::TeamRecord;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub is_favorited: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct HighlightParams {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    pub q: String,
    #[serde(default)]
    pub fuzzy: bool,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn list_teams(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<TeamRecord>>> {
    let teams = state.team_service.list_teams().await?;
    Ok(Json(teams))
}

pub async fn get_team(
    State(state): State<Arc<AppState>>,
    Path(abbrev): Path<String>,
) -> AppResult<Json<TeamRecord>> {
    let team = state.team_service.get_team(&abbrev).await?;
    Ok(Json(team))
}

pub async fn set_favorite(
    State(state): State<Arc<AppState>>,
    Path(abbrev): Path<String>,
    Json(request): Json<FavoriteRequest>,
) -> AppResult<Json<TeamRecord>> {
    let team = state
        .team_service
        .set_favorite(&abbrev, request.is_favorited)
        .await?;
    Ok(Json(team))
}

pub async fn team_highlights(
    State(state): State<Arc<AppState>>,
    Path(abbrev): Path<String>,
    Query(params): Query<HighlightParams>,
) -> AppResult<Json<Vec<Highlight>>> {
    let highlight_service = state.highlight_service.as_ref().ok_or_else(|| {
        AppError::SearchUnavailable("Video search is not configured".to_string())
    })?;

    let team = state.team_service.get_team(&abbrev).await?;
    let date = match params.date.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(GameDate::parse(raw, GameDate::today().date())?.date()),
        _ => None,
    };

    let highlights = highlight_service
        .get_highlights(std::slice::from_ref(&team), date)
        .await?;
    Ok(Json(highlights))
}

pub async fn resolve_team(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResolveParams>,
) -> AppResult<Json<TeamRecord>> {
    state
        .team_service
        .resolve(&params.q, params.fuzzy)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No team matches '{}'", params.q)))
}

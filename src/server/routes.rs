use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use crate::dashboard::{self, Panel, Question, Tab, TabView};
use crate::ingest::LoadReport;
use crate::model::Table;
use crate::query::{ProviderContact, ResultSet};
use crate::server::AppState;
use crate::storage::DbStats;
use crate::Error;

#[derive(Debug, Default, Deserialize)]
pub struct CityParams {
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct TabEntry {
    pub tab: Tab,
    pub slug: &'static str,
    pub title: &'static str,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, err: Error) -> ApiError {
    (status, Json(ErrorResponse { error: err.to_string() }))
}

fn internal(err: Error) -> ApiError {
    api_error(StatusCode::INTERNAL_SERVER_ERROR, err)
}

pub async fn get_summary(State(state): State<Arc<AppState>>) -> Result<Json<DbStats>, ApiError> {
    let session = state.session.lock().await;
    let counts = session.catalog().summary_counts().map_err(internal)?;
    Ok(Json(counts))
}

pub async fn list_tabs() -> Json<Vec<TabEntry>> {
    Json(
        Tab::all()
            .iter()
            .map(|t| TabEntry {
                tab: *t,
                slug: t.as_str(),
                title: t.title(),
            })
            .collect(),
    )
}

pub async fn get_tab(
    State(state): State<Arc<AppState>>,
    Path(tab): Path<String>,
    Query(params): Query<CityParams>,
) -> Result<Json<TabView>, ApiError> {
    let tab = Tab::from_str(&tab).map_err(|e| api_error(StatusCode::NOT_FOUND, e))?;
    let session = state.session.lock().await;
    let view = dashboard::render_tab(&session.catalog(), tab, params.city.as_deref());
    Ok(Json(view))
}

pub async fn get_question(
    State(state): State<Arc<AppState>>,
    Path(question): Path<String>,
    Query(params): Query<CityParams>,
) -> Result<Json<Panel>, ApiError> {
    let question = Question::from_str(&question).map_err(|e| api_error(StatusCode::NOT_FOUND, e))?;
    let session = state.session.lock().await;
    Ok(Json(question.panel(&session.catalog(), params.city.as_deref())))
}

pub async fn get_contacts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CityParams>,
) -> Result<Json<Vec<ProviderContact>>, ApiError> {
    let city = params.city.unwrap_or_default();
    let session = state.session.lock().await;
    let contacts = session
        .catalog()
        .provider_contacts(&city)
        .map_err(internal)?;
    Ok(Json(contacts))
}

pub async fn get_table(
    State(state): State<Arc<AppState>>,
    Path(table): Path<String>,
) -> Result<Json<ResultSet>, ApiError> {
    let table = Table::from_str(&table).map_err(|e| api_error(StatusCode::NOT_FOUND, e))?;
    let session = state.session.lock().await;
    match dashboard::snapshot(session.store(), table) {
        Ok(rs) => Ok(Json(rs)),
        Err(e @ Error::NoData(_)) => Err(api_error(StatusCode::NOT_FOUND, e)),
        Err(e) => Err(internal(e)),
    }
}

pub async fn get_load_report(State(state): State<Arc<AppState>>) -> Json<LoadReport> {
    let session = state.session.lock().await;
    Json(session.report().clone())
}

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use super::domain::{SalaryBand, UnknownSalaryBand, UnknownWorkMode, WorkMode};
use super::filter::FilterSelection;
use super::view::JobBoard;

/// Router builder exposing the browse endpoints over a loaded board snapshot.
pub fn board_router(board: Arc<JobBoard>) -> Router {
    Router::new()
        .route("/api/v1/jobs", get(list_handler))
        .route("/api/v1/jobs/:job_id", get(detail_handler))
        .with_state(board)
}

/// Query-string form of a filter selection plus the requested page.
/// `types` and `modes` are comma-separated lists.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub band: Option<String>,
    #[serde(default)]
    pub types: Option<String>,
    #[serde(default)]
    pub modes: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
}

/// Rejection for unrecognized band or mode labels in the query string.
#[derive(Debug, thiserror::Error)]
pub enum SelectionParseError {
    #[error(transparent)]
    Band(#[from] UnknownSalaryBand),
    #[error(transparent)]
    Mode(#[from] UnknownWorkMode),
}

impl BrowseQuery {
    pub fn selection(&self) -> Result<FilterSelection, SelectionParseError> {
        let salary_band = self
            .band
            .as_deref()
            .map(SalaryBand::from_str)
            .transpose()?;

        let job_types: BTreeSet<String> = self
            .types
            .as_deref()
            .map(|types| {
                types
                    .split(',')
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let work_modes: BTreeSet<WorkMode> = self
            .modes
            .as_deref()
            .map(|modes| {
                modes
                    .split(',')
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(WorkMode::from_str)
                    .collect::<Result<_, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(FilterSelection {
            search_term: self.search.clone().unwrap_or_default(),
            location: self.location.clone(),
            salary_band,
            job_types,
            work_modes,
        })
    }
}

pub(crate) async fn list_handler(
    State(board): State<Arc<JobBoard>>,
    Query(query): Query<BrowseQuery>,
) -> Response {
    match query.selection() {
        Ok(selection) => {
            let view = board.browse(&selection, query.page.unwrap_or(1));
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn detail_handler(
    State(board): State<Arc<JobBoard>>,
    Path(job_id): Path<String>,
) -> Response {
    match board.detail(&job_id) {
        Some(view) => (StatusCode::OK, Json(view)).into_response(),
        None => {
            let payload = json!({
                "error": "job not found",
                "job_id": job_id,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::AppState;
use crate::entities::status::{TrialStatus, statuses};
use crate::entities::trial::{self, TrialPage, TrialQuery};
use crate::error::TrialsError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Server-side failure. Query strings never produce one; only the source can.
pub(super) struct ApiError(TrialsError);

impl From<TrialsError> for ApiError {
    fn from(err: TrialsError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Failed to list trials: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// GET /api/trials
///
/// Query parameters (all optional): `page`, `limit`, `status`, `search`,
/// `sort_by`, `sort_direction`. Values that do not parse fall back to their
/// defaults, so every query string yields a 200.
pub(super) async fn list_trials(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<TrialPage>, ApiError> {
    let query = TrialQuery::from_pairs(&pairs);
    let page = trial::list(state.source.as_ref(), &query)?;
    Ok(Json(page))
}

/// GET /api/trials/statuses
pub(super) async fn list_statuses() -> Json<Vec<TrialStatus>> {
    Json(statuses())
}

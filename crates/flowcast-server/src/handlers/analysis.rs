//! Analysis handlers

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;
use tracing::{debug, warn};

use crate::{AppError, AppState};
use flowcast_core::{Analysis, AnalysisRequest};

/// POST /api/analyze - Forecast the next six months for a company
///
/// Net flows in the request are ignored and recomputed from income and
/// expense. Forecast month labels count forward from `as_of`, or from
/// today (UTC) when the request omits it.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<Analysis>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected analysis request body");
        AppError::bad_request(&format!("Invalid JSON: {}", rejection.body_text()))
    })?;

    request.validate().map_err(|e| {
        warn!(error = %e, company = %request.company.id, "Invalid analysis request");
        AppError::from_core(e)
    })?;

    let request = request.with_recomputed_net_flow();
    let anchor = request.as_of.unwrap_or_else(|| Utc::now().date_naive());

    debug!(
        company = %request.company.id,
        months = request.historical_data.len(),
        %anchor,
        "Analyzing"
    );

    Ok(Json(state.analyzer.analyze(&request, anchor)))
}

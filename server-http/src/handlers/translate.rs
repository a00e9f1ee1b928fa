use crate::models::{
    BulkTranslateRequest, BulkTranslateResponse, ErrorResponse, TranslateRequest,
    TranslateResponse,
};
use crate::state::AppState;
use crate::validation;
use axum::{extract::State, http::StatusCode, Json};
use std::time::Instant;
use tracing::info;

/// POST /translate
///
/// Always answers 200 once validation passes: a degraded translation still
/// returns the caller's text.
pub async fn translate(
    State(state): State<AppState>,
    Json(req): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let start = Instant::now();

    validation::validate_translate(&req).map_err(unprocessable)?;

    let result = state
        .translation
        .translate(&req.text, &req.dest, &req.src, req.user_id.as_deref())
        .await;

    info!(
        "translation completed in {:.2}s",
        start.elapsed().as_secs_f64()
    );

    Ok(Json(TranslateResponse {
        translated: result.text,
    }))
}

/// POST /bulk_translate
pub async fn bulk_translate(
    State(state): State<AppState>,
    Json(req): Json<BulkTranslateRequest>,
) -> Result<Json<BulkTranslateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let start = Instant::now();

    let texts = validation::validate_bulk(&req).map_err(unprocessable)?;

    let results = state
        .translation
        .translate_bulk(&texts, &req.dest, &req.src, req.user_id.as_deref())
        .await;

    let duration = start.elapsed().as_secs_f64();

    info!(
        "bulk translation of {} texts completed in {:.2}s",
        results.len(),
        duration
    );

    Ok(Json(BulkTranslateResponse {
        translated: results.into_iter().map(|r| r.text).collect(),
        duration,
    }))
}

fn unprocessable(err: validation::ValidationError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse::new(err.to_string())),
    )
}

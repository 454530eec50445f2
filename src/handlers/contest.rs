// src/handlers/contest.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    analysis::SwotAnalyzer, config::Config, error::AppError,
    models::contest_result::SubmitContestRequest, store::DynStore,
};

/// Submits a finished contest attempt and returns its SWOT analysis.
///
/// * Loads the user's most recent prior results (newest first).
/// * Derives the analysis from the submission and that history.
/// * Stores the result, then the analysis.
///
/// If storing fails after the analysis was derived, the analysis is still
/// returned inside the error body.
pub async fn submit_result(
    State(store): State<DynStore>,
    State(analyzer): State<Arc<SwotAnalyzer>>,
    State(config): State<Config>,
    Json(req): Json<SubmitContestRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let result = req.into_result(Utc::now());

    let history = store
        .recent_results(&result.user_id, config.history_limit)
        .await?;

    let analysis = analyzer.analyze(&result, &history, Utc::now());

    let persisted = match store.save_result(&result).await {
        Ok(()) => store.save_analysis(&analysis).await,
        Err(e) => Err(e),
    };

    if let Err(e) = persisted {
        return Err(AppError::PersistenceFailed {
            analysis: Box::new(analysis),
            reason: e.to_string(),
        });
    }

    tracing::info!(
        user_id = %result.user_id,
        contest_id = %result.contest_id,
        score = result.score,
        history = history.len(),
        "Contest result analysed"
    );

    Ok((StatusCode::CREATED, Json(analysis)))
}

/// Lists the user's most recent contest results.
pub async fn list_results(
    State(store): State<DynStore>,
    State(config): State<Config>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let results = store.recent_results(&user_id, config.history_limit).await?;
    Ok(Json(results))
}

/// Lists every SWOT analysis of a user, newest first.
pub async fn list_analyses(
    State(store): State<DynStore>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let analyses = store.analyses_for_user(&user_id).await?;
    Ok(Json(analyses))
}

/// Returns the newest analysis for one contest of a user.
pub async fn get_analysis(
    State(store): State<DynStore>,
    Path((user_id, contest_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let analysis = store
        .latest_analysis(&user_id, &contest_id)
        .await?
        .ok_or(AppError::NotFound("Analysis not found".to_string()))?;

    Ok(Json(analysis))
}

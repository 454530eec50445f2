// src/handlers/questions.rs

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::question::{
        CategorySummary, CreateQuestionRequest, Question, QuestionFilter, QuestionListParams,
    },
    store::DynStore,
};

/// Lists questions from the bank, narrowed by the optional filters.
pub async fn list_questions(
    State(store): State<DynStore>,
    Query(params): Query<QuestionListParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = QuestionFilter::try_from(params).map_err(AppError::BadRequest)?;

    let questions: Vec<Question> = store
        .list_questions()
        .await?
        .into_iter()
        .filter(|q| filter.matches(q))
        .collect();

    Ok(Json(questions))
}

/// Number of questions per category, sorted by category name.
pub async fn list_categories(State(store): State<DynStore>) -> Result<impl IntoResponse, AppError> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for question in store.list_questions().await? {
        *counts.entry(question.category).or_default() += 1;
    }

    let summary: Vec<CategorySummary> = counts
        .into_iter()
        .map(|(category, question_count)| CategorySummary {
            category,
            question_count,
        })
        .collect();

    Ok(Json(summary))
}

pub async fn get_question(
    State(store): State<DynStore>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let question = store
        .get_question(id)
        .await?
        .ok_or(AppError::NotFound("Question not found".to_string()))?;

    Ok(Json(question))
}

/// Adds a question to the bank.
pub async fn create_question(
    State(store): State<DynStore>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let question = store.create_question(payload).await?;
    tracing::info!(id = question.id, category = %question.category, "Question created");

    Ok((StatusCode::CREATED, Json(question)))
}

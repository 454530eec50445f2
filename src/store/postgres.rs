// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::{PgPool, types::Json};

use crate::{
    error::AppError,
    models::{
        contest_result::{ContestResult, ContestResultRow},
        question::{CreateQuestionRequest, Question, QuestionRow},
        swot::SwotAnalysis,
    },
    store::ContestStore,
};

const QUESTION_COLUMNS: &str =
    "id, category, difficulty, type, content, sample_answer, tips, tags";

/// Postgres-backed store. Reports are kept whole as JSONB.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_question(row: QuestionRow) -> Result<Question, AppError> {
    Question::try_from(row).map_err(|e| {
        tracing::error!("Corrupt question row: {}", e);
        AppError::InternalServerError(e)
    })
}

#[async_trait]
impl ContestStore for PgStore {
    async fn recent_results(&self, user_id: &str, limit: i64) -> Result<Vec<ContestResult>, AppError> {
        let rows = sqlx::query_as::<_, ContestResultRow>(
            r#"
            SELECT
                user_id, contest_id, score,
                total_questions, correct_answers, wrong_answers,
                time_taken, time_limit, category_performance, submitted_at
            FROM contest_results
            WHERE user_id = $1
            ORDER BY submitted_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch contest history: {:?}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(ContestResult::from).collect())
    }

    async fn save_result(&self, result: &ContestResult) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO contest_results (
                user_id, contest_id, score,
                total_questions, correct_answers, wrong_answers,
                time_taken, time_limit, category_performance, submitted_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(&result.user_id)
        .bind(&result.contest_id)
        .bind(result.score)
        .bind(result.total_questions)
        .bind(result.correct_answers)
        .bind(result.wrong_answers)
        .bind(result.time_taken)
        .bind(result.time_limit)
        .bind(Json(&result.category_performance))
        .bind(result.submitted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert contest result: {:?}", e);
            AppError::from(e)
        })?;

        Ok(())
    }

    async fn save_analysis(&self, analysis: &SwotAnalysis) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO swot_analyses (user_id, contest_id, report, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&analysis.user_id)
        .bind(&analysis.contest_id)
        .bind(Json(analysis))
        .bind(analysis.timestamp)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert SWOT analysis: {:?}", e);
            AppError::from(e)
        })?;

        Ok(())
    }

    async fn latest_analysis(
        &self,
        user_id: &str,
        contest_id: &str,
    ) -> Result<Option<SwotAnalysis>, AppError> {
        let report = sqlx::query_scalar::<_, Json<SwotAnalysis>>(
            r#"
            SELECT report
            FROM swot_analyses
            WHERE user_id = $1 AND contest_id = $2
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(contest_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(report.map(|r| r.0))
    }

    async fn analyses_for_user(&self, user_id: &str) -> Result<Vec<SwotAnalysis>, AppError> {
        let reports = sqlx::query_scalar::<_, Json<SwotAnalysis>>(
            r#"
            SELECT report
            FROM swot_analyses
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reports.into_iter().map(|r| r.0).collect())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, AppError> {
        let rows = sqlx::query_as::<_, QuestionRow>(&format!(
            "SELECT {} FROM questions ORDER BY id",
            QUESTION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(to_question).collect()
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>, AppError> {
        let row = sqlx::query_as::<_, QuestionRow>(&format!(
            "SELECT {} FROM questions WHERE id = $1",
            QUESTION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(to_question).transpose()
    }

    async fn create_question(&self, new: CreateQuestionRequest) -> Result<Question, AppError> {
        let row = sqlx::query_as::<_, QuestionRow>(&format!(
            r#"
            INSERT INTO questions (category, difficulty, type, content, sample_answer, tips, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            QUESTION_COLUMNS
        ))
        .bind(&new.category)
        .bind(new.difficulty.as_str())
        .bind(new.question_type.as_str())
        .bind(&new.content)
        .bind(&new.sample_answer)
        .bind(Json(&new.tips))
        .bind(Json(&new.tags))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create question: {:?}", e);
            AppError::from(e)
        })?;

        to_question(row)
    }
}

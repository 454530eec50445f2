// src/store/mod.rs

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        contest_result::ContestResult,
        question::{CreateQuestionRequest, Question},
        swot::SwotAnalysis,
    },
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Persistence collaborator for results, reports and the question bank.
#[async_trait]
pub trait ContestStore: Send + Sync {
    /// At most `limit` results of `user_id`, newest first.
    async fn recent_results(&self, user_id: &str, limit: i64) -> Result<Vec<ContestResult>, AppError>;

    async fn save_result(&self, result: &ContestResult) -> Result<(), AppError>;

    async fn save_analysis(&self, analysis: &SwotAnalysis) -> Result<(), AppError>;

    /// Newest analysis for one contest attempt of a user.
    async fn latest_analysis(
        &self,
        user_id: &str,
        contest_id: &str,
    ) -> Result<Option<SwotAnalysis>, AppError>;

    /// Every analysis of a user, newest first.
    async fn analyses_for_user(&self, user_id: &str) -> Result<Vec<SwotAnalysis>, AppError>;

    /// The whole bank, ordered by id.
    async fn list_questions(&self) -> Result<Vec<Question>, AppError>;

    async fn get_question(&self, id: i64) -> Result<Option<Question>, AppError>;

    async fn create_question(&self, new: CreateQuestionRequest) -> Result<Question, AppError>;
}

pub type DynStore = Arc<dyn ContestStore>;

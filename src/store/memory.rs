// src/store/memory.rs

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::{
        contest_result::ContestResult,
        question::{CreateQuestionRequest, Question},
        swot::SwotAnalysis,
    },
    store::ContestStore,
};

#[derive(Debug, Default)]
struct Inner {
    // Insertion order breaks timestamp ties.
    results: Vec<ContestResult>,
    analyses: Vec<SwotAnalysis>,
    questions: Vec<Question>,
    next_question_id: i64,
}

/// Process-local store used when no database is configured, and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the bank. Ids are reassigned sequentially.
    pub fn with_questions(questions: Vec<CreateQuestionRequest>) -> Self {
        let mut inner = Inner::default();
        for q in questions {
            let question = build_question(&mut inner, q);
            inner.questions.push(question);
        }
        Self {
            inner: RwLock::new(inner),
        }
    }
}

fn build_question(inner: &mut Inner, new: CreateQuestionRequest) -> Question {
    inner.next_question_id += 1;
    Question {
        id: inner.next_question_id,
        category: new.category,
        difficulty: new.difficulty,
        question_type: new.question_type,
        content: new.content,
        sample_answer: new.sample_answer,
        tips: new.tips,
        tags: new.tags,
    }
}

/// Newest first by timestamp; later inserts win ties.
fn newest_first<T: Clone>(items: &[T], key: impl Fn(&T) -> chrono::DateTime<chrono::Utc>) -> Vec<T> {
    let mut indexed: Vec<(usize, &T)> = items.iter().enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| key(*b).cmp(&key(*a)).then(ib.cmp(ia)));
    indexed.into_iter().map(|(_, item)| item.clone()).collect()
}

#[async_trait]
impl ContestStore for MemoryStore {
    async fn recent_results(&self, user_id: &str, limit: i64) -> Result<Vec<ContestResult>, AppError> {
        let inner = self.inner.read().await;
        let mine: Vec<ContestResult> = inner
            .results
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        let limit = usize::try_from(limit.max(0)).unwrap_or(0);
        Ok(newest_first(&mine, |r| r.submitted_at)
            .into_iter()
            .take(limit)
            .collect())
    }

    async fn save_result(&self, result: &ContestResult) -> Result<(), AppError> {
        self.inner.write().await.results.push(result.clone());
        Ok(())
    }

    async fn save_analysis(&self, analysis: &SwotAnalysis) -> Result<(), AppError> {
        self.inner.write().await.analyses.push(analysis.clone());
        Ok(())
    }

    async fn latest_analysis(
        &self,
        user_id: &str,
        contest_id: &str,
    ) -> Result<Option<SwotAnalysis>, AppError> {
        let inner = self.inner.read().await;
        let matching: Vec<SwotAnalysis> = inner
            .analyses
            .iter()
            .filter(|a| a.user_id == user_id && a.contest_id == contest_id)
            .cloned()
            .collect();
        Ok(newest_first(&matching, |a| a.timestamp).into_iter().next())
    }

    async fn analyses_for_user(&self, user_id: &str) -> Result<Vec<SwotAnalysis>, AppError> {
        let inner = self.inner.read().await;
        let mine: Vec<SwotAnalysis> = inner
            .analyses
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(&mine, |a| a.timestamp))
    }

    async fn list_questions(&self) -> Result<Vec<Question>, AppError> {
        Ok(self.inner.read().await.questions.clone())
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn create_question(&self, new: CreateQuestionRequest) -> Result<Question, AppError> {
        let mut inner = self.inner.write().await;
        let question = build_question(&mut inner, new);
        inner.questions.push(question.clone());
        Ok(question)
    }
}

// src/models/contest_result.rs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use validator::{Validate, ValidationError};

/// Correct/total tally for one category within a single attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTally {
    pub correct: i64,
    pub total: i64,
}

impl CategoryTally {
    pub fn new(correct: i64, total: i64) -> Self {
        Self { correct, total }
    }
}

/// One completed contest attempt.
///
/// Categories live in a `BTreeMap`, so every rule that walks them sees the
/// category names in lexicographic order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestResult {
    pub user_id: String,
    pub contest_id: String,
    /// Percentage score reported by the contest (0-100).
    pub score: f64,
    pub total_questions: i64,
    pub correct_answers: i64,
    pub wrong_answers: i64,
    /// Seconds spent on the attempt.
    pub time_taken: i64,
    /// Seconds allowed for the attempt.
    pub time_limit: i64,
    pub category_performance: BTreeMap<String, CategoryTally>,
    pub submitted_at: DateTime<Utc>,
}

/// Represents the 'contest_results' table in the database.
#[derive(Debug, FromRow)]
pub struct ContestResultRow {
    pub user_id: String,
    pub contest_id: String,
    pub score: f64,
    pub total_questions: i64,
    pub correct_answers: i64,
    pub wrong_answers: i64,
    pub time_taken: i64,
    pub time_limit: i64,
    pub category_performance: Json<BTreeMap<String, CategoryTally>>,
    pub submitted_at: DateTime<Utc>,
}

impl From<ContestResultRow> for ContestResult {
    fn from(row: ContestResultRow) -> Self {
        Self {
            user_id: row.user_id,
            contest_id: row.contest_id,
            score: row.score,
            total_questions: row.total_questions,
            correct_answers: row.correct_answers,
            wrong_answers: row.wrong_answers,
            time_taken: row.time_taken,
            time_limit: row.time_limit,
            category_performance: row.category_performance.0,
            submitted_at: row.submitted_at,
        }
    }
}

/// DTO for submitting a finished contest attempt.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = validate_answer_counts))]
pub struct SubmitContestRequest {
    #[validate(length(min = 1, max = 100))]
    pub user_id: String,
    #[validate(length(min = 1, max = 100))]
    pub contest_id: String,
    #[validate(range(min = 0.0, max = 100.0))]
    pub score: f64,
    #[validate(range(min = 0))]
    pub total_questions: i64,
    #[validate(range(min = 0))]
    pub correct_answers: i64,
    #[validate(range(min = 0))]
    pub wrong_answers: i64,
    #[validate(range(min = 0))]
    pub time_taken: i64,
    #[validate(range(min = 0))]
    pub time_limit: i64,
    #[serde(default)]
    #[validate(custom(function = validate_categories))]
    pub category_performance: BTreeMap<String, CategoryTally>,
}

impl SubmitContestRequest {
    /// Stamps the request into an immutable result record.
    pub fn into_result(self, submitted_at: DateTime<Utc>) -> ContestResult {
        ContestResult {
            user_id: self.user_id,
            contest_id: self.contest_id,
            score: self.score,
            total_questions: self.total_questions,
            correct_answers: self.correct_answers,
            wrong_answers: self.wrong_answers,
            time_taken: self.time_taken,
            time_limit: self.time_limit,
            category_performance: self.category_performance,
            submitted_at,
        }
    }
}

fn validate_answer_counts(req: &SubmitContestRequest) -> Result<(), ValidationError> {
    if req.correct_answers.saturating_add(req.wrong_answers) > req.total_questions {
        return Err(ValidationError::new("answers_exceed_total_questions"));
    }
    Ok(())
}

fn validate_categories(categories: &BTreeMap<String, CategoryTally>) -> Result<(), ValidationError> {
    for (name, tally) in categories {
        if name.is_empty() || name.len() > 100 {
            return Err(ValidationError::new("invalid_category_name"));
        }
        if tally.correct < 0 || tally.total < 0 {
            return Err(ValidationError::new("negative_category_count"));
        }
        if tally.correct > tally.total {
            return Err(ValidationError::new("category_correct_exceeds_total"));
        }
    }
    Ok(())
}

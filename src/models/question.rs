// src/models/question.rs

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Unknown difficulty: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Behavioral,
    Technical,
    Situational,
    General,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Behavioral => "behavioral",
            QuestionType::Technical => "technical",
            QuestionType::Situational => "situational",
            QuestionType::General => "general",
        }
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "behavioral" => Ok(QuestionType::Behavioral),
            "technical" => Ok(QuestionType::Technical),
            "situational" => Ok(QuestionType::Situational),
            "general" => Ok(QuestionType::General),
            _ => Err(format!("Unknown question type: {}", s)),
        }
    }
}

/// An interview question from the bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub category: String,
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub content: String,
    pub sample_answer: Option<String>,
    pub tips: Vec<String>,
    pub tags: Vec<String>,
}

/// Represents the 'questions' table in the database.
/// `difficulty` and `type` are stored as plain text.
#[derive(Debug, FromRow)]
pub struct QuestionRow {
    pub id: i64,
    pub category: String,
    pub difficulty: String,
    #[sqlx(rename = "type")]
    pub question_type: String,
    pub content: String,
    pub sample_answer: Option<String>,
    pub tips: Json<Vec<String>>,
    pub tags: Json<Vec<String>>,
}

impl TryFrom<QuestionRow> for Question {
    type Error = String;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            category: row.category,
            difficulty: row.difficulty.parse()?,
            question_type: row.question_type.parse()?,
            content: row.content,
            sample_answer: row.sample_answer,
            tips: row.tips.0,
            tags: row.tags.0,
        })
    }
}

/// Query parameters for browsing the bank. Absent or `"all"` means no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionListParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    #[serde(rename = "type")]
    pub question_type: Option<String>,
}

/// Parsed form of [`QuestionListParams`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionFilter {
    search: Option<String>,
    category: Option<String>,
    difficulty: Option<Difficulty>,
    question_type: Option<QuestionType>,
}

fn constraint(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

impl TryFrom<QuestionListParams> for QuestionFilter {
    type Error = String;

    fn try_from(params: QuestionListParams) -> Result<Self, Self::Error> {
        Ok(Self {
            search: constraint(params.search).map(|s| s.to_lowercase()),
            category: constraint(params.category),
            difficulty: constraint(params.difficulty)
                .map(|d| d.parse())
                .transpose()?,
            question_type: constraint(params.question_type)
                .map(|t| t.parse())
                .transpose()?,
        })
    }
}

impl QuestionFilter {
    /// All constraints are AND-ed; the search term matches the text or any tag.
    pub fn matches(&self, question: &Question) -> bool {
        let matches_search = match &self.search {
            None => true,
            Some(term) => {
                question.content.to_lowercase().contains(term.as_str())
                    || question
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(term.as_str()))
            }
        };
        let matches_category = self
            .category
            .as_ref()
            .is_none_or(|c| &question.category == c);
        let matches_difficulty = self.difficulty.is_none_or(|d| question.difficulty == d);
        let matches_type = self.question_type.is_none_or(|t| question.question_type == t);

        matches_search && matches_category && matches_difficulty && matches_type
    }
}

/// Number of questions in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub question_count: usize,
}

/// DTO for creating a new question.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
    #[validate(length(max = 5000))]
    pub sample_answer: Option<String>,
    #[serde(default)]
    #[validate(custom(function = validate_short_list))]
    pub tips: Vec<String>,
    #[serde(default)]
    #[validate(custom(function = validate_short_list))]
    pub tags: Vec<String>,
}

fn validate_short_list(items: &[String]) -> Result<(), validator::ValidationError> {
    if items.len() > 20 {
        return Err(validator::ValidationError::new("too_many_items"));
    }
    for item in items {
        if item.is_empty() || item.len() > 500 {
            return Err(validator::ValidationError::new("invalid_item_length"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, category: &str, difficulty: Difficulty, question_type: QuestionType) -> Question {
        Question {
            id,
            category: category.to_string(),
            difficulty,
            question_type,
            content: format!("Question {} about {}", id, category),
            sample_answer: None,
            tips: vec![],
            tags: vec!["teamwork".to_string()],
        }
    }

    fn filter(search: Option<&str>, category: Option<&str>, difficulty: Option<&str>, question_type: Option<&str>) -> QuestionFilter {
        QuestionListParams {
            search: search.map(str::to_string),
            category: category.map(str::to_string),
            difficulty: difficulty.map(str::to_string),
            question_type: question_type.map(str::to_string),
        }
        .try_into()
        .unwrap()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let q = question(1, "behavioral", Difficulty::Easy, QuestionType::Behavioral);
        assert!(QuestionFilter::default().matches(&q));
        assert!(filter(Some(""), Some("all"), Some("ALL"), Some("all")).matches(&q));
    }

    #[test]
    fn test_search_is_case_insensitive_over_text_and_tags() {
        let q = question(7, "technical", Difficulty::Hard, QuestionType::Technical);
        assert!(filter(Some("ABOUT TECH"), None, None, None).matches(&q));
        assert!(filter(Some("TeamWork"), None, None, None).matches(&q));
        assert!(!filter(Some("recursion"), None, None, None).matches(&q));
    }

    #[test]
    fn test_constraints_are_combined() {
        let q = question(2, "leadership", Difficulty::Medium, QuestionType::Situational);
        assert!(filter(None, Some("leadership"), Some("medium"), Some("situational")).matches(&q));
        assert!(!filter(None, Some("leadership"), Some("hard"), Some("situational")).matches(&q));
        assert!(!filter(None, Some("technical"), Some("medium"), None).matches(&q));
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let params = QuestionListParams {
            difficulty: Some("impossible".to_string()),
            ..Default::default()
        };
        assert!(QuestionFilter::try_from(params).is_err());
    }
}

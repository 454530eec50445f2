// src/analysis/mod.rs

//! Post-contest SWOT analysis.
//!
//! Everything here is synchronous and free of I/O: a report is a pure function
//! of the result, the prior history and the timestamp handed in by the caller.

pub mod metrics;
pub mod recommendations;
pub mod resources;
pub mod swot;

use chrono::{DateTime, Utc};

use crate::models::{contest_result::ContestResult, swot::SwotAnalysis};

pub use resources::ResourceCatalog;

#[derive(Debug, Clone, Default)]
pub struct SwotAnalyzer {
    catalog: ResourceCatalog,
}

impl SwotAnalyzer {
    pub fn new(catalog: ResourceCatalog) -> Self {
        Self { catalog }
    }

    /// Derives a report for `result`.
    ///
    /// `history` holds the same user's earlier results, newest first.
    pub fn analyze(
        &self,
        result: &ContestResult,
        history: &[ContestResult],
        timestamp: DateTime<Utc>,
    ) -> SwotAnalysis {
        let mut analysis = SwotAnalysis {
            user_id: result.user_id.clone(),
            contest_id: result.contest_id.clone(),
            timestamp,
            strengths: swot::strengths(result, history),
            weaknesses: swot::weaknesses(result, history),
            opportunities: swot::opportunities(result, history),
            threats: swot::threats(result, history),
            overall_score: result.score,
            performance_metrics: metrics::compute_metrics(result, history),
            recommendations: Vec::new(),
        };

        analysis.recommendations =
            recommendations::generate_recommendations(&analysis, result, &self.catalog);

        tracing::debug!(
            user_id = %analysis.user_id,
            contest_id = %analysis.contest_id,
            history = history.len(),
            recommendations = analysis.recommendations.len(),
            "SWOT analysis derived"
        );

        analysis
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::BTreeMap;

    use chrono::{TimeZone, Utc};

    use crate::models::contest_result::{CategoryTally, ContestResult};

    /// A result whose score equals its accuracy.
    pub fn result(correct: i64, wrong: i64, total: i64, time_taken: i64, time_limit: i64) -> ContestResult {
        let score = if total > 0 {
            correct as f64 * 100.0 / total as f64
        } else {
            0.0
        };
        ContestResult {
            user_id: "user-1".to_string(),
            contest_id: "contest-1".to_string(),
            score,
            total_questions: total,
            correct_answers: correct,
            wrong_answers: wrong,
            time_taken,
            time_limit,
            category_performance: BTreeMap::new(),
            submitted_at: Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    pub fn with_score(score: f64) -> ContestResult {
        let mut r = result(5, 5, 10, 10, 30);
        r.score = score;
        r
    }

    pub fn with_categories(mut r: ContestResult, categories: &[(&str, i64, i64)]) -> ContestResult {
        for (name, correct, total) in categories {
            r.category_performance
                .insert(name.to_string(), CategoryTally::new(*correct, *total));
        }
        r
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::test_support::{result, with_categories, with_score};
    use super::*;
    use crate::models::swot::RecommendationType;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_report_copies_identity_and_score() {
        let r = result(9, 1, 10, 20, 30);
        let analysis = SwotAnalyzer::default().analyze(&r, &[], now());
        assert_eq!(analysis.user_id, "user-1");
        assert_eq!(analysis.contest_id, "contest-1");
        assert_eq!(analysis.overall_score, 90.0);
        assert_eq!(analysis.timestamp, now());
        assert_eq!(analysis.performance_metrics.accuracy, 90.0);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let r = with_categories(
            result(4, 5, 10, 29, 30),
            &[("Algorithms", 1, 4), ("Graphs", 3, 5), ("Arrays", 9, 10)],
        );
        let history = vec![with_score(70.0), with_score(20.0), with_score(90.0)];
        let analyzer = SwotAnalyzer::default();

        let first = serde_json::to_string(&analyzer.analyze(&r, &history, now())).unwrap();
        let second = serde_json::to_string(&analyzer.analyze(&r, &history, now())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_history_is_not_altered() {
        let history = vec![with_score(70.0), with_score(20.0), with_score(90.0)];
        let snapshot = history.clone();
        SwotAnalyzer::default().analyze(&with_score(50.0), &history, now());
        assert_eq!(history, snapshot);
    }

    #[test]
    fn test_recommendations_order_and_cap() {
        // Four weak categories, time pressure, low score.
        let r = with_categories(
            result(3, 7, 10, 28, 30),
            &[
                ("Algorithms", 1, 4),
                ("Graphs", 0, 4),
                ("Heaps", 2, 4),
                ("Strings", 1, 5),
                ("Trees", 5, 5),
            ],
        );
        let analysis = SwotAnalyzer::default().analyze(&r, &[], now());
        let kinds: Vec<RecommendationType> = analysis
            .recommendations
            .iter()
            .map(|rec| rec.recommendation_type)
            .collect();
        assert_eq!(
            kinds,
            vec![
                RecommendationType::SkillDevelopment,
                RecommendationType::SkillDevelopment,
                RecommendationType::SkillDevelopment,
                RecommendationType::Practice,
                RecommendationType::LearningPath,
            ]
        );
        let titles: Vec<&str> = analysis.recommendations[..3]
            .iter()
            .map(|rec| rec.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Improve Graphs skills", "Improve Strings skills", "Improve Algorithms skills"]
        );
        assert!(analysis.recommendations.len() <= 6);
    }

    #[test]
    fn test_known_category_resources_are_used() {
        let r = with_categories(result(3, 7, 10, 10, 30), &[("Algorithms", 1, 4)]);
        let analysis = SwotAnalyzer::default().analyze(&r, &[], now());
        let skill = &analysis.recommendations[0];
        assert_eq!(skill.description, "Your performance in Algorithms is at 25%. Focus on strengthening fundamentals.");
        assert_eq!(skill.resources, ResourceCatalog::default().resources_for("Algorithms"));
    }

    #[test]
    fn test_career_recommendation_for_strong_candidates() {
        let r = with_categories(result(9, 1, 10, 10, 30), &[("Data Structures", 9, 10), ("SQL", 4, 5)]);
        let analysis = SwotAnalyzer::default().analyze(&r, &[], now());
        assert_eq!(analysis.recommendations.len(), 1);
        let career = &analysis.recommendations[0];
        assert_eq!(career.recommendation_type, RecommendationType::Career);
        assert_eq!(
            career.description,
            "Your strong performance in Data Structures, SQL makes you suitable for related roles."
        );
    }

    #[test]
    fn test_no_recommendations_for_solid_middle_result() {
        let r = result(7, 3, 10, 10, 30);
        let analysis = SwotAnalyzer::default().analyze(&r, &[], now());
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn test_empty_categories_produce_no_category_statements() {
        let r = result(3, 7, 10, 10, 30);
        let analysis = SwotAnalyzer::default().analyze(&r, &[], now());
        assert!(analysis.performance_metrics.category_scores.is_empty());
        assert_eq!(analysis.opportunities.len(), 2);
        assert!(
            analysis
                .recommendations
                .iter()
                .all(|rec| rec.recommendation_type != RecommendationType::SkillDevelopment)
        );
    }

    #[test]
    fn test_zero_question_contest_is_no_data() {
        let r = result(0, 0, 0, 0, 0);
        let analysis = SwotAnalyzer::default().analyze(&r, &[], now());
        assert_eq!(analysis.performance_metrics.accuracy, 0.0);
        assert_eq!(analysis.performance_metrics.speed, 0.0);
        assert_eq!(analysis.strengths.len(), 1);
        assert!(analysis.weaknesses.is_empty());
        assert!(analysis.threats.is_empty());
    }
}

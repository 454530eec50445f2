// src/analysis/swot.rs

//! Threshold rules that turn a contest result into SWOT statements.
//! Every list is built in a fixed rule order so reports are reproducible.

use crate::{
    analysis::metrics::{
        accuracy, history_scores, mean, percent_label, recent_trend, scored_categories, variance,
    },
    config::MIN_HISTORY_FOR_TREND,
    models::contest_result::ContestResult,
};

const HIGH_ACCURACY: f64 = 80.0;
const LOW_ACCURACY: f64 = 50.0;
const MOTIVATION_RISK_ACCURACY: f64 = 40.0;
const FAST_TIME_PERCENT: f64 = 70.0;
const TIME_PRESSURE_PERCENT: f64 = 95.0;
const STRONG_CATEGORY: f64 = 85.0;
const WEAK_CATEGORY: f64 = 50.0;
const GROWTH_CATEGORY_CEILING: f64 = 75.0;
const CRITICAL_CATEGORY: f64 = 40.0;
const IMPROVEMENT_FACTOR: f64 = 1.2;
const INCONSISTENT_VARIANCE: f64 = 200.0;
const ADVANCED_ELIGIBLE_SCORE: f64 = 60.0;
const DECLINE_TREND: f64 = -5.0;

/// Whether `time_taken` is under `percent` of the limit. `false` without a limit.
fn finished_before(result: &ContestResult, percent: f64) -> bool {
    result.time_limit > 0
        && (result.time_taken as f64) * 100.0 < result.time_limit as f64 * percent
}

/// Whether `time_taken` reached `percent` of the limit. `false` without a limit.
pub(crate) fn used_at_least(result: &ContestResult, percent: f64) -> bool {
    result.time_limit > 0
        && (result.time_taken as f64) * 100.0 >= result.time_limit as f64 * percent
}

pub fn strengths(result: &ContestResult, history: &[ContestResult]) -> Vec<String> {
    let mut strengths = Vec::new();

    if accuracy(result).is_some_and(|acc| acc >= HIGH_ACCURACY) {
        strengths.push("Excellent problem-solving accuracy (>80%)".to_string());
    }

    if finished_before(result, FAST_TIME_PERCENT) {
        strengths.push(
            "Fast problem-solving speed - completed 30% faster than time limit".to_string(),
        );
    }

    for (category, acc) in scored_categories(result) {
        if acc >= STRONG_CATEGORY {
            strengths.push(format!(
                "Strong proficiency in {} ({}% accuracy)",
                category,
                percent_label(acc)
            ));
        }
    }

    if history.len() >= 2 {
        let previous_average = mean(&history_scores(history));
        if result.score > previous_average * IMPROVEMENT_FACTOR {
            strengths.push("Significant improvement trend - 20%+ score increase".to_string());
        }
    }

    if strengths.is_empty() {
        strengths.push("Completed the contest and gained valuable experience".to_string());
    }

    strengths
}

pub fn weaknesses(result: &ContestResult, history: &[ContestResult]) -> Vec<String> {
    let mut weaknesses = Vec::new();

    if accuracy(result).is_some_and(|acc| acc < LOW_ACCURACY) {
        weaknesses.push("Low accuracy rate - need to focus on fundamentals".to_string());
    }

    if used_at_least(result, TIME_PRESSURE_PERCENT) {
        weaknesses.push("Time management - used 95%+ of available time".to_string());
    }

    for (category, acc) in scored_categories(result) {
        if acc < WEAK_CATEGORY {
            weaknesses.push(format!(
                "Needs improvement in {} ({}% accuracy)",
                category,
                percent_label(acc)
            ));
        }
    }

    if history.len() >= MIN_HISTORY_FOR_TREND
        && variance(&history_scores(history)) > INCONSISTENT_VARIANCE
    {
        weaknesses.push("Inconsistent performance across contests".to_string());
    }

    weaknesses
}

pub fn opportunities(result: &ContestResult, history: &[ContestResult]) -> Vec<String> {
    let mut opportunities = Vec::new();

    for (category, acc) in scored_categories(result) {
        if (WEAK_CATEGORY..GROWTH_CATEGORY_CEILING).contains(&acc) {
            opportunities.push(format!(
                "High potential for growth in {} - currently at {}%",
                category,
                percent_label(acc)
            ));
        }
    }

    if result.score >= ADVANCED_ELIGIBLE_SCORE {
        opportunities.push("Eligible for advanced-level contests and challenges".to_string());
    }

    if history.len() >= MIN_HISTORY_FOR_TREND && recent_trend(history) > 0.0 {
        opportunities.push("Positive learning curve - capitalize on momentum".to_string());
    }

    opportunities.push("Access to peer study groups and mentorship programs".to_string());
    opportunities
        .push("Opportunity to participate in coding competitions and hackathons".to_string());

    opportunities
}

pub fn threats(result: &ContestResult, history: &[ContestResult]) -> Vec<String> {
    let mut threats = Vec::new();

    if history.len() >= MIN_HISTORY_FOR_TREND && recent_trend(history) < DECLINE_TREND {
        threats.push("Declining performance trend - need to address learning gaps".to_string());
    }

    if result.wrong_answers > result.correct_answers {
        threats.push("High error rate may indicate foundational knowledge gaps".to_string());
    }

    if accuracy(result).is_some_and(|acc| acc < MOTIVATION_RISK_ACCURACY) {
        threats.push(
            "Risk of losing motivation - recommend targeted practice sessions".to_string(),
        );
    }

    let critical_categories = scored_categories(result)
        .filter(|(_, acc)| *acc < CRITICAL_CATEGORY)
        .count();
    if critical_categories >= 2 {
        threats.push("Multiple weak areas may require structured learning plan".to_string());
    }

    threats
}

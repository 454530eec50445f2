// src/analysis/metrics.rs

use std::collections::BTreeMap;

use crate::{
    config::{BASELINE_CONSISTENCY, MIN_HISTORY_FOR_TREND},
    models::{
        contest_result::{CategoryTally, ContestResult},
        swot::PerformanceMetrics,
    },
};

/// Overall accuracy in percent, or `None` when the contest had no questions.
pub fn accuracy(result: &ContestResult) -> Option<f64> {
    ratio(result.correct_answers, result.total_questions)
}

/// Per-category accuracy in percent, or `None` for an empty category.
pub fn category_accuracy(tally: &CategoryTally) -> Option<f64> {
    ratio(tally.correct, tally.total)
}

/// Share of the time limit left unused, in percent, never negative.
/// `None` when the contest had no time limit.
pub fn speed(result: &ContestResult) -> Option<f64> {
    if result.time_limit <= 0 {
        return None;
    }
    let limit = result.time_limit as f64;
    let raw = (limit - result.time_taken as f64) * 100.0 / limit;
    Some(raw.max(0.0))
}

fn ratio(part: i64, whole: i64) -> Option<f64> {
    if whole <= 0 {
        return None;
    }
    Some(part as f64 * 100.0 / whole as f64)
}

/// Categories with data, paired with their accuracy, in key order.
pub fn scored_categories(result: &ContestResult) -> impl Iterator<Item = (&str, f64)> {
    result
        .category_performance
        .iter()
        .filter_map(|(name, tally)| category_accuracy(tally).map(|acc| (name.as_str(), acc)))
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64
}

/// Newest minus oldest score of a newest-first window.
pub fn trend(newest_first: &[f64]) -> f64 {
    match (newest_first.first(), newest_first.last()) {
        (Some(newest), Some(oldest)) if newest_first.len() >= 2 => newest - oldest,
        _ => 0.0,
    }
}

/// Trend over the most recent historical results.
pub fn recent_trend(history: &[ContestResult]) -> f64 {
    let window: Vec<f64> = history
        .iter()
        .take(MIN_HISTORY_FOR_TREND)
        .map(|h| h.score)
        .collect();
    trend(&window)
}

pub fn history_scores(history: &[ContestResult]) -> Vec<f64> {
    history.iter().map(|h| h.score).collect()
}

/// 100 minus the standard deviation of the current and historical scores.
/// Falls back to the baseline until enough history exists.
pub fn consistency(result: &ContestResult, history: &[ContestResult]) -> f64 {
    if history.len() < MIN_HISTORY_FOR_TREND {
        return BASELINE_CONSISTENCY;
    }
    let mut scores = Vec::with_capacity(history.len() + 1);
    scores.push(result.score);
    scores.extend(history.iter().map(|h| h.score));
    (100.0 - variance(&scores).sqrt()).clamp(0.0, 100.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Whole-number percentage label, rounding half away from zero.
pub fn percent_label(value: f64) -> String {
    format!("{}", value.round() as i64)
}

pub fn compute_metrics(result: &ContestResult, history: &[ContestResult]) -> PerformanceMetrics {
    let category_scores: BTreeMap<String, f64> = result
        .category_performance
        .iter()
        .map(|(name, tally)| (name.clone(), round2(category_accuracy(tally).unwrap_or(0.0))))
        .collect();

    PerformanceMetrics {
        accuracy: round2(accuracy(result).unwrap_or(0.0)),
        speed: round2(speed(result).unwrap_or(0.0)),
        consistency: round2(consistency(result, history)),
        category_scores,
    }
}

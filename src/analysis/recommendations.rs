// src/analysis/recommendations.rs

use crate::{
    analysis::{
        metrics::{percent_label, scored_categories},
        resources::ResourceCatalog,
        swot::used_at_least,
    },
    models::{
        contest_result::ContestResult,
        swot::{Priority, Recommendation, RecommendationType, Resource, ResourceType, SwotAnalysis},
    },
};

const WEAK_CATEGORY_CEILING: f64 = 60.0;
const MAX_WEAK_CATEGORY_RECOMMENDATIONS: usize = 3;
const TIME_MANAGEMENT_PERCENT: f64 = 90.0;
const CAREER_CATEGORY: f64 = 80.0;
const CAREER_SCORE: f64 = 70.0;
const LEARNING_PATH_SCORE: f64 = 60.0;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Builds the ordered recommendation list: weak categories, time management,
/// career, learning path. Each rule contributes independently.
pub fn generate_recommendations(
    analysis: &SwotAnalysis,
    result: &ContestResult,
    catalog: &ResourceCatalog,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let mut weak: Vec<(&str, f64)> = scored_categories(result)
        .filter(|(_, acc)| *acc < WEAK_CATEGORY_CEILING)
        .collect();
    // Stable sort keeps key order among equal accuracies.
    weak.sort_by(|a, b| a.1.total_cmp(&b.1));

    for (category, acc) in weak.into_iter().take(MAX_WEAK_CATEGORY_RECOMMENDATIONS) {
        recommendations.push(skill_development(category, acc, catalog));
    }

    if used_at_least(result, TIME_MANAGEMENT_PERCENT) {
        recommendations.push(time_management());
    }

    let strong: Vec<&str> = scored_categories(result)
        .filter(|(_, acc)| *acc >= CAREER_CATEGORY)
        .map(|(category, _)| category)
        .collect();
    if !strong.is_empty() && analysis.overall_score >= CAREER_SCORE {
        recommendations.push(career(&strong));
    }

    if analysis.overall_score < LEARNING_PATH_SCORE {
        recommendations.push(learning_path());
    }

    recommendations
}

fn skill_development(category: &str, accuracy: f64, catalog: &ResourceCatalog) -> Recommendation {
    Recommendation {
        recommendation_type: RecommendationType::SkillDevelopment,
        priority: Priority::High,
        title: format!("Improve {} skills", category),
        description: format!(
            "Your performance in {} is at {}%. Focus on strengthening fundamentals.",
            category,
            percent_label(accuracy)
        ),
        action_items: vec![
            format!("Complete 10 practice problems in {}", category),
            "Review key concepts and best practices".to_string(),
            format!("Join study group focused on {}", category),
        ],
        resources: catalog.resources_for(category),
        estimated_time: "2-3 weeks".to_string(),
    }
}

fn time_management() -> Recommendation {
    Recommendation {
        recommendation_type: RecommendationType::Practice,
        priority: Priority::Medium,
        title: "Improve time management skills".to_string(),
        description: "You used most of the available time. Practice solving problems faster."
            .to_string(),
        action_items: strings(&[
            "Practice with timed mock tests",
            "Learn to identify and skip difficult questions initially",
            "Master quick problem-solving techniques",
        ]),
        resources: vec![
            Resource::new("Effective Time Management for Coding Tests", "#", ResourceType::Article),
            Resource::new("Speed Coding Techniques", "#", ResourceType::Video),
        ],
        estimated_time: "1-2 weeks".to_string(),
    }
}

fn career(strong_categories: &[&str]) -> Recommendation {
    Recommendation {
        recommendation_type: RecommendationType::Career,
        priority: Priority::Medium,
        title: "Explore career opportunities".to_string(),
        description: format!(
            "Your strong performance in {} makes you suitable for related roles.",
            strong_categories.join(", ")
        ),
        action_items: strings(&[
            "Build portfolio projects showcasing these skills",
            "Apply for internships or jobs in these domains",
            "Connect with professionals in the field",
        ]),
        resources: vec![
            Resource::new("Career Paths in Tech", "#", ResourceType::Article),
            Resource::new("Building a Strong Portfolio", "#", ResourceType::Course),
        ],
        estimated_time: "Ongoing".to_string(),
    }
}

fn learning_path() -> Recommendation {
    Recommendation {
        recommendation_type: RecommendationType::LearningPath,
        priority: Priority::High,
        title: "Follow structured learning path".to_string(),
        description: "Consider enrolling in comprehensive courses to build strong foundation."
            .to_string(),
        action_items: strings(&[
            "Complete beginner-friendly online courses",
            "Practice daily with coding challenges",
            "Participate in study groups and peer learning",
        ]),
        resources: vec![
            Resource::new("Complete DSA Course", "#", ResourceType::Course),
            Resource::new("Problem Solving Masterclass", "#", ResourceType::Course),
            Resource::new("Daily Coding Practice Platform", "#", ResourceType::Practice),
        ],
        estimated_time: "3-6 months".to_string(),
    }
}

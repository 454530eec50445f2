// tests/question_tests.rs

use std::sync::Arc;

use backend::{
    analysis::SwotAnalyzer,
    config::Config,
    models::question::{CreateQuestionRequest, Difficulty, QuestionType},
    routes,
    state::AppState,
    store::MemoryStore,
};
use serde_json::{Value, json};

fn seed(category: &str, difficulty: Difficulty, question_type: QuestionType, content: &str, tags: &[&str]) -> CreateQuestionRequest {
    CreateQuestionRequest {
        category: category.to_string(),
        difficulty,
        question_type,
        content: content.to_string(),
        sample_answer: None,
        tips: vec![],
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

async fn spawn_app() -> String {
    let store = MemoryStore::with_questions(vec![
        seed("behavioral", Difficulty::Easy, QuestionType::Behavioral, "Tell me about yourself.", &["introduction"]),
        seed("behavioral", Difficulty::Medium, QuestionType::Behavioral, "Describe a conflict with a teammate.", &["conflict", "teamwork"]),
        seed("technical", Difficulty::Hard, QuestionType::Technical, "Design a URL shortener.", &["system design"]),
        seed("technical", Difficulty::Medium, QuestionType::Technical, "Explain process vs thread.", &["concurrency"]),
    ]);

    let state = AppState::new(Arc::new(store), SwotAnalyzer::default(), Config::default());
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

async fn list(client: &reqwest::Client, address: &str, query: &str) -> Vec<Value> {
    client
        .get(format!("{}/api/questions{}", address, query))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn list_without_filters_returns_everything() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let all = list(&client, &address, "").await;
    assert_eq!(all.len(), 4);
    assert_eq!(all[0]["id"], 1);

    let all = list(&client, &address, "?category=all&difficulty=all&type=all").await;
    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn filters_are_combined() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let technical = list(&client, &address, "?category=technical").await;
    assert_eq!(technical.len(), 2);

    let hard_technical = list(&client, &address, "?category=technical&difficulty=hard").await;
    assert_eq!(hard_technical.len(), 1);
    assert_eq!(hard_technical[0]["content"], "Design a URL shortener.");

    let by_tag = list(&client, &address, "?search=TEAMWORK").await;
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0]["type"], "behavioral");

    let none = list(&client, &address, "?search=teamwork&type=technical").await;
    assert!(none.is_empty());
}

#[tokio::test]
async fn unknown_filter_value_is_bad_request() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/questions?difficulty=legendary", address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn categories_are_counted() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let categories: Vec<Value> = client
        .get(format!("{}/api/questions/categories", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        categories,
        vec![
            json!({ "category": "behavioral", "question_count": 2 }),
            json!({ "category": "technical", "question_count": 2 }),
        ]
    );
}

#[tokio::test]
async fn create_then_fetch_question() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/questions", address))
        .json(&json!({
            "category": "aptitude",
            "difficulty": "easy",
            "type": "general",
            "content": "What is 15% of 200?",
            "sample_answer": "30",
            "tags": ["percentages"]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let created: Value = response.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(id, 5);

    let fetched: Value = client
        .get(format!("{}/api/questions/{}", address, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["sample_answer"], "30");
    assert_eq!(fetched["tags"][0], "percentages");

    let missing = client
        .get(format!("{}/api/questions/999", address))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status().as_u16(), 404);
}

#[tokio::test]
async fn create_question_validates_payload() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/questions", address))
        .json(&json!({
            "category": "aptitude",
            "difficulty": "easy",
            "type": "general",
            "content": ""
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

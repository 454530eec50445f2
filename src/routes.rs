// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
    routing::post,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{contest, questions},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (contests, users, questions).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (store, analyzer, config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        HeaderValue::from_static("http://localhost:3000"),
        HeaderValue::from_static("http://127.0.0.1:3000"),
        HeaderValue::from_static("http://localhost:5173"),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let contest_routes = Router::new().route("/results", post(contest::submit_result));

    let user_routes = Router::new()
        .route("/{user_id}/results", get(contest::list_results))
        .route("/{user_id}/analyses", get(contest::list_analyses))
        .route(
            "/{user_id}/contests/{contest_id}/analysis",
            get(contest::get_analysis),
        );

    let question_routes = Router::new()
        .route(
            "/",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/categories", get(questions::list_categories))
        .route("/{id}", get(questions::get_question));

    Router::new()
        .nest("/api/contests", contest_routes)
        .nest("/api/users", user_routes)
        .nest("/api/questions", question_routes)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

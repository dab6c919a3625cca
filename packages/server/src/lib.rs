pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod judging;
pub mod leaderboard;
pub mod ledger;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

use std::time::Duration;

use axum::Json;
use axum::http::HeaderValue;
use axum::routing::get;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AlgoQuest Judge API",
        version = "1.0.0",
        description = "API for the AlgoQuest online judge"
    ),
    paths(
        handlers::problem::create_problem,
        handlers::problem::list_problems,
        handlers::problem::get_problem,
        handlers::submission::create_submission,
        handlers::submission::get_submission,
        handlers::execute::execute_code,
        handlers::user::create_user,
        handlers::user::get_user,
        handlers::user::list_user_submissions,
        handlers::user::list_user_activities,
        handlers::leaderboard::get_leaderboard,
        handlers::activity::list_activities,
        handlers::contest::list_contests,
        handlers::contest::get_active_contest,
        handlers::contest::join_contest,
    ),
    components(schemas(
        error::ErrorBody,
        common::SubmissionStatus,
        common::TestCase,
        store::Difficulty,
        store::Example,
        store::ActivityKind,
        models::problem::CreateProblemRequest,
        models::problem::ProblemSummary,
        models::problem::ProblemListResponse,
        models::problem::ProblemResponse,
        models::submission::CreateSubmissionRequest,
        models::submission::SubmissionResponse,
        models::execute::ExecuteRequest,
        models::execute::ExecuteResponse,
        models::user::CreateUserRequest,
        models::user::UserResponse,
        models::activity::ActivityResponse,
        models::contest::JoinContestRequest,
        models::contest::ContestResponse,
        models::leaderboard::LeaderboardEntry,
    )),
    tags(
        (name = "Problems", description = "Problem catalog"),
        (name = "Submissions", description = "Code submission and judging"),
        (name = "Execution", description = "Ad-hoc code runs"),
        (name = "Users", description = "User registration and history"),
        (name = "Leaderboard", description = "Score ranking"),
        (name = "Activities", description = "Activity feed"),
        (name = "Contests", description = "Contest listing and registration"),
    ),
)]
struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let cors = &state.config.server.cors;
    let origin = if cors.allow_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            cors.allow_origins
                .iter()
                .filter_map(|o| HeaderValue::from_str(o).ok()),
        )
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(cors.max_age))
}

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = cors_layer(&state);
    axum::Router::new()
        .nest("/api", routes::api_routes())
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(cors)
        .with_state(state)
}

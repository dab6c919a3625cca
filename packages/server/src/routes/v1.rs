use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/problems", problem_routes())
        .nest("/submissions", submission_routes())
        .nest("/users", user_routes())
        .nest("/contests", contest_routes())
        .route("/execute", post(handlers::execute::execute_code))
        .route("/leaderboard", get(handlers::leaderboard::get_leaderboard))
        .route("/activities", get(handlers::activity::list_activities))
}

fn problem_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::problem::list_problems).post(handlers::problem::create_problem),
        )
        .route("/{id}", get(handlers::problem::get_problem))
}

fn submission_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::submission::create_submission))
        .route("/{id}", get(handlers::submission::get_submission))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::user::create_user))
        .route("/{id}", get(handlers::user::get_user))
        .route("/{id}/submissions", get(handlers::user::list_user_submissions))
        .route("/{id}/activities", get(handlers::user::list_user_activities))
}

fn contest_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::contest::list_contests))
        .route("/active", get(handlers::contest::get_active_contest))
        .route("/{id}/join", post(handlers::contest::join_contest))
}

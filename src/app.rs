use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/login", post(handlers::login_form))
        .route("/logout", post(handlers::logout_form))
        .route("/entries", post(handlers::submit_form))
        .route("/entries/clear", post(handlers::clear_form))
        .route("/nav/output", post(handlers::nav_output))
        .route("/nav/input", post(handlers::nav_input))
        .route("/api/session", get(handlers::get_session))
        .route("/api/login", post(handlers::login))
        .route("/api/logout", post(handlers::logout))
        .route("/api/page", post(handlers::set_page))
        .route(
            "/api/entries",
            get(handlers::list_entries)
                .post(handlers::add_entry)
                .delete(handlers::clear_entries),
        )
        .route("/api/rankings", get(handlers::get_rankings))
        .route("/api/suggestions", get(handlers::get_suggestions))
        .with_state(state)
}

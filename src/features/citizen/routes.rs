use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::features::citizen::handlers::{self, CitizenState};
use crate::modules::storage::MAX_IMAGE_SIZE;

/// Server-rendered pages for citizens
pub fn routes(state: CitizenState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/reports/submit",
            post(handlers::submit_report)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024 * 1024)),
        )
        .route("/login", get(handlers::login_page).post(handlers::login))
        .route("/signup", get(handlers::signup_page).post(handlers::signup))
        .route("/logout", get(handlers::logout).post(handlers::logout))
        .with_state(state)
}

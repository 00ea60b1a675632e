// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

pub fn build_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.storage.static_dir);

    Router::new()
        .route("/", get(crate::handlers::root::root_handler))
        .route("/health", get(crate::handlers::health::health_handler))

        // Activities
        .route("/activities", get(crate::handlers::activities::list_activities_handler))
        .route(
            "/activities/{activity_name}/signup",
            post(crate::handlers::activities::signup_handler),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(crate::handlers::activities::unregister_handler),
        )

        // Authentication
        .route("/auth/login", post(crate::handlers::auth::login_handler))

        .nest_service("/static", static_files)

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}

use axum::response::Redirect;

/// GET /
pub async fn root_handler() -> Redirect {
    Redirect::temporary("/static/index.html")
}

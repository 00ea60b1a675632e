use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::api::{LoginQuery, LoginResponse};
use crate::security::credentials::check_credentials;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Check a teacher's email and password and return their profile
///
/// POST /auth/login?email=<email>&password=<password>
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LoginQuery>, QueryRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Query(params) = query?;
    let teachers = state.teachers.load()?;

    let teacher = check_credentials(&teachers, &params.email, &params.password).map_err(|reason| {
        warn!(email = %params.email, reason = %reason, "Login failed");
        ApiError::InvalidCredentials
    })?;

    info!(email = %teacher.email, role = %teacher.role, "Teacher logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        teacher,
    }))
}

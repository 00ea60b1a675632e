use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::teacher::TeacherProfile;
use crate::security::credentials::{verify_token, CredentialError};
use crate::utils::auth::extract_bearer_token;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;
use tracing::warn;

/// A teacher whose bearer token checked out against the teachers file
///
/// Rejects with `ApiError::InvalidCredentials` for any credential problem.
/// A teachers file that can't be read is a server fault instead.
#[derive(Debug, Clone)]
pub struct AuthenticatedTeacher(pub TeacherProfile);

impl FromRequestParts<Arc<AppState>> for AuthenticatedTeacher {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let result = match extract_bearer_token(&parts.headers) {
            Some(token) => {
                let teachers = state.teachers.load()?;
                verify_token(&teachers, token)
            }
            None => Err(CredentialError::MalformedToken),
        };

        result.map(AuthenticatedTeacher).map_err(|reason| {
            warn!(
                path = %parts.uri.path(),
                reason = %reason,
                "Rejected teacher credentials"
            );
            ApiError::InvalidCredentials
        })
    }
}

use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::activity::ActivityMap;
use crate::models::api::{EmailQuery, MessageResponse};
use crate::security::extractor::AuthenticatedTeacher;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Json,
};
use std::sync::Arc;
use tracing::{info, warn};

/// List every activity with its participants
///
/// GET /activities
pub async fn list_activities_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ActivityMap>, ApiError> {
    let activities = state.activities.load()?;
    Ok(Json(activities))
}

/// Sign a student up for an activity (teachers only)
///
/// POST /activities/{activity_name}/signup?email=<email>
///
/// An unknown activity is reported before credentials are looked at.
pub async fn signup_handler(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    teacher: Result<AuthenticatedTeacher, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(params) = query?;

    state.activities.update(|activities| -> Result<(), ApiError> {
        let activity = activities
            .get_mut(&activity_name)
            .ok_or(ApiError::ActivityNotFound)?;
        let AuthenticatedTeacher(teacher) = teacher?;

        if !activity.add_participant(&params.email) {
            warn!(
                activity = %activity_name,
                email = %params.email,
                "Student is already signed up"
            );
            return Err(ApiError::AlreadySignedUp);
        }

        info!(
            activity = %activity_name,
            email = %params.email,
            teacher = %teacher.email,
            participants = activity.participants.len(),
            "Student signed up"
        );
        Ok(())
    })?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", params.email, activity_name),
    }))
}

/// Remove a student from an activity (teachers only)
///
/// DELETE /activities/{activity_name}/unregister?email=<email>
pub async fn unregister_handler(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    teacher: Result<AuthenticatedTeacher, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(params) = query?;

    state.activities.update(|activities| -> Result<(), ApiError> {
        let activity = activities
            .get_mut(&activity_name)
            .ok_or(ApiError::ActivityNotFound)?;
        let AuthenticatedTeacher(teacher) = teacher?;

        if !activity.remove_participant(&params.email) {
            warn!(
                activity = %activity_name,
                email = %params.email,
                "Student is not signed up"
            );
            return Err(ApiError::NotSignedUp);
        }

        info!(
            activity = %activity_name,
            email = %params.email,
            teacher = %teacher.email,
            participants = activity.participants.len(),
            "Student unregistered"
        );
        Ok(())
    })?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", params.email, activity_name),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::test_state;
    use crate::models::teacher::TeacherProfile;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn teacher() -> Result<AuthenticatedTeacher, ApiError> {
        Ok(AuthenticatedTeacher(TeacherProfile {
            email: "t@school.edu".to_string(),
            name: "Ms. Turing".to_string(),
            role: "teacher".to_string(),
        }))
    }

    fn email(value: &str) -> Result<Query<EmailQuery>, QueryRejection> {
        Ok(Query(EmailQuery {
            email: value.to_string(),
        }))
    }

    #[tokio::test]
    async fn test_list_activities() {
        let (_dir, state) = test_state();

        let Json(activities) = list_activities_handler(State(state)).await.unwrap();

        assert!(activities.contains_key("Chess Club"));
        assert!(activities["Chess Club"].participants.is_empty());
    }

    #[tokio::test]
    async fn test_signup_success() {
        let (_dir, state) = test_state();

        let Json(response) = signup_handler(
            State(state.clone()),
            Path("Chess Club".to_string()),
            email("student@school.edu"),
            teacher(),
        )
        .await
        .unwrap();

        assert_eq!(response.message, "Signed up student@school.edu for Chess Club");
        let activities = state.activities.load().unwrap();
        assert_eq!(activities["Chess Club"].participants, vec!["student@school.edu"]);
    }

    #[tokio::test]
    async fn test_signup_twice_is_rejected() {
        let (_dir, state) = test_state();

        signup_handler(
            State(state.clone()),
            Path("Chess Club".to_string()),
            email("student@school.edu"),
            teacher(),
        )
        .await
        .unwrap();

        let err = signup_handler(
            State(state.clone()),
            Path("Chess Club".to_string()),
            email("student@school.edu"),
            teacher(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::AlreadySignedUp));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        let activities = state.activities.load().unwrap();
        assert_eq!(activities["Chess Club"].participants.len(), 1);
    }

    #[tokio::test]
    async fn test_signup_unknown_activity() {
        let (_dir, state) = test_state();

        let err = signup_handler(
            State(state),
            Path("Underwater Basket Weaving".to_string()),
            email("student@school.edu"),
            teacher(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::ActivityNotFound));
    }

    #[tokio::test]
    async fn test_signup_unknown_activity_beats_bad_credentials() {
        let (_dir, state) = test_state();

        let err = signup_handler(
            State(state),
            Path("Underwater Basket Weaving".to_string()),
            email("student@school.edu"),
            Err(ApiError::InvalidCredentials),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::ActivityNotFound));
    }

    #[tokio::test]
    async fn test_signup_bad_credentials_leaves_file_alone() {
        let (_dir, state) = test_state();
        let before = std::fs::read_to_string(state.activities.path()).unwrap();

        let err = signup_handler(
            State(state.clone()),
            Path("Chess Club".to_string()),
            email("student@school.edu"),
            Err(ApiError::InvalidCredentials),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::InvalidCredentials));
        assert_eq!(std::fs::read_to_string(state.activities.path()).unwrap(), before);
    }

    #[tokio::test]
    async fn test_unregister_success() {
        let (_dir, state) = test_state();
        signup_handler(
            State(state.clone()),
            Path("Chess Club".to_string()),
            email("student@school.edu"),
            teacher(),
        )
        .await
        .unwrap();

        let Json(response) = unregister_handler(
            State(state.clone()),
            Path("Chess Club".to_string()),
            email("student@school.edu"),
            teacher(),
        )
        .await
        .unwrap();

        assert_eq!(response.message, "Unregistered student@school.edu from Chess Club");
        assert!(state.activities.load().unwrap()["Chess Club"].participants.is_empty());
    }

    #[tokio::test]
    async fn test_unregister_not_signed_up() {
        let (_dir, state) = test_state();

        let err = unregister_handler(
            State(state.clone()),
            Path("Chess Club".to_string()),
            email("ghost@school.edu"),
            teacher(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::NotSignedUp));
        assert!(state.activities.load().unwrap()["Chess Club"].participants.is_empty());
    }

    #[tokio::test]
    async fn test_unregister_unknown_activity() {
        let (_dir, state) = test_state();

        let err = unregister_handler(
            State(state),
            Path("Nope".to_string()),
            email("student@school.edu"),
            Err(ApiError::InvalidCredentials),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::ActivityNotFound));
    }
}

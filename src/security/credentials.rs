use crate::models::teacher::{TeacherMap, TeacherProfile};
use crate::utils::auth::constant_time_eq;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Why a credential check failed
///
/// Only ever logged. Clients see the same "Invalid credentials" response for
/// every variant so they can't tell an unknown email from a bad password.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    #[error("token is not in email:password form")]
    MalformedToken,

    #[error("no teacher with this email")]
    UnknownTeacher,

    #[error("password does not match")]
    PasswordMismatch,
}

/// Hex-encoded SHA-256 of a password, as stored in the teachers file
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Split a bearer token on the first `:` into (email, password)
pub fn parse_token(token: &str) -> Result<(&str, &str), CredentialError> {
    match token.split_once(':') {
        Some((email, password)) if !email.is_empty() => Ok((email, password)),
        _ => Err(CredentialError::MalformedToken),
    }
}

/// Check an email/password pair against the loaded teachers
///
/// Shared by bearer-token verification and the login endpoint.
pub fn check_credentials(
    teachers: &TeacherMap,
    email: &str,
    password: &str,
) -> Result<TeacherProfile, CredentialError> {
    let teacher = teachers.get(email).ok_or(CredentialError::UnknownTeacher)?;

    if !constant_time_eq(&hash_password(password), &teacher.password_hash) {
        return Err(CredentialError::PasswordMismatch);
    }

    Ok(TeacherProfile::new(email, teacher))
}

/// Verify a raw bearer token
pub fn verify_token(teachers: &TeacherMap, token: &str) -> Result<TeacherProfile, CredentialError> {
    let (email, password) = parse_token(token)?;
    check_credentials(teachers, email, password)
}

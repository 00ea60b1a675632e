use axum::http::{header::AUTHORIZATION, HeaderMap};

/// Compare two strings in constant time
///
/// Used for password hash comparison so response timing doesn't reveal how
/// many leading characters of a guess were right.
pub fn constant_time_eq(provided: &str, expected: &str) -> bool {
    provided.as_bytes().len() == expected.as_bytes().len()
        && provided
            .as_bytes()
            .iter()
            .zip(expected.as_bytes().iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}

/// Pull the token out of an `Authorization: Bearer <token>` header
///
/// The scheme name is matched case-insensitively. Only the spaces separating
/// the scheme from the token are dropped; the token itself is returned as sent.
/// Returns `None` for a missing header, a different scheme, or an empty token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim_start();
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim_start_matches(' ');
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

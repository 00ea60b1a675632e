use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All teachers, keyed by email
pub type TeacherMap = BTreeMap<String, Teacher>;

/// Stored teacher record
#[derive(Clone, Debug, Deserialize)]
pub struct Teacher {
    pub name: String,
    pub role: String,
    /// Lowercase hex SHA-256 of the password
    pub password_hash: String,
}

/// Public view of a teacher, safe to return to clients
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeacherProfile {
    pub email: String,
    pub name: String,
    pub role: String,
}

impl TeacherProfile {
    pub fn new(email: &str, teacher: &Teacher) -> Self {
        Self {
            email: email.to_string(),
            name: teacher.name.clone(),
            role: teacher.role.clone(),
        }
    }
}

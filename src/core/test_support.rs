// Shared fixtures for handler and router tests

use crate::core::config::{Config, LoggingConfig, ServerConfig, StorageConfig};
use crate::core::state::AppState;
use crate::security::credentials::hash_password;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

pub const GOOD_TOKEN: &str = "t@school.edu:pw123";
pub const BAD_TOKEN: &str = "t@school.edu:wrong";

pub fn create_test_config(temp_dir: &TempDir) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            num_threads: 1,
        },
        storage: StorageConfig {
            data_dir: temp_dir.path().to_path_buf(),
            activities_file: "activities.json".to_string(),
            teachers_file: "teachers.json".to_string(),
            static_dir: temp_dir.path().join("static"),
        },
        logging: LoggingConfig::default(),
    }
}

/// State backed by freshly seeded files: one empty "Chess Club" and one
/// teacher `t@school.edu` with password `pw123`.
///
/// Keep the `TempDir` alive for as long as the state is used.
pub fn test_state() -> (TempDir, Arc<AppState>) {
    let temp_dir = TempDir::new().unwrap();

    fs::write(
        temp_dir.path().join("activities.json"),
        r#"{"Chess Club": {"description": "...", "schedule": "Mon", "max_participants": 10, "participants": []}}"#,
    )
    .unwrap();

    let teachers = serde_json::json!({
        "t@school.edu": {
            "name": "Ms. Turing",
            "role": "teacher",
            "password_hash": hash_password("pw123"),
        }
    });
    fs::write(temp_dir.path().join("teachers.json"), teachers.to_string()).unwrap();

    fs::create_dir_all(temp_dir.path().join("static")).unwrap();
    fs::write(
        temp_dir.path().join("static").join("index.html"),
        "<h1>Activities</h1>",
    )
    .unwrap();

    let state = Arc::new(AppState::new(create_test_config(&temp_dir)));
    (temp_dir, state)
}

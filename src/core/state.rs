// Application state (AppState)

use crate::core::config::Config;
use crate::stores::{activity_store::ActivityStore, teacher_store::TeacherStore};
use std::sync::Arc;

/// Shared application state
///
/// Holds no request data; the stores are thin handles over the JSON files.
#[derive(Clone)]
pub struct AppState {
    /// Activities and their participants
    pub activities: Arc<ActivityStore>,

    /// Teacher accounts used for authentication
    pub teachers: Arc<TeacherStore>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let activities = Arc::new(ActivityStore::new(config.storage.activities_path()));
        let teachers = Arc::new(TeacherStore::new(config.storage.teachers_path()));

        Self {
            activities,
            teachers,
            config: Arc::new(config),
        }
    }
}

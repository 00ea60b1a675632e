use crate::models::teacher::{Teacher, TeacherMap};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Read-only, file-backed store of teacher accounts
pub struct TeacherStore {
    path: PathBuf,
}

impl TeacherStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<TeacherMap> {
        let content = std::fs::read_to_string(&self.path)
            .context(format!("Failed to read teachers file: {}", self.path.display()))?;

        serde_json::from_str(&content)
            .context(format!("Failed to parse teachers file: {}", self.path.display()))
    }

    /// Look up a single teacher by email
    pub fn get(&self, email: &str) -> Result<Option<Teacher>> {
        Ok(self.load()?.remove(email))
    }
}

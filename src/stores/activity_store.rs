use crate::models::activity::ActivityMap;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// File-backed store for all activities
///
/// The whole collection is read and written as one JSON document. Mutations go
/// through `update`, which holds a lock across load, mutate and save so that
/// concurrent signups in this process can't overwrite each other.
pub struct ActivityStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ActivityStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every activity from disk
    pub fn load(&self) -> Result<ActivityMap> {
        let content = fs::read_to_string(&self.path)
            .context(format!("Failed to read activities file: {}", self.path.display()))?;

        serde_json::from_str(&content)
            .context(format!("Failed to parse activities file: {}", self.path.display()))
    }

    /// Overwrite the file with the given collection
    ///
    /// The document is written to a sibling temp file first and renamed into
    /// place, so readers never see a half-written file.
    pub fn save(&self, activities: &ActivityMap) -> Result<()> {
        let json = serde_json::to_string_pretty(activities)
            .context("Failed to serialize activities")?;

        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp_path)
                .context(format!("Failed to create {}", tmp_path.display()))?;
            file.write_all(json.as_bytes())
                .context("Failed to write activities")?;
            file.sync_all().context("Failed to sync activities")?;
        }

        fs::rename(&tmp_path, &self.path)
            .context(format!("Failed to replace activities file: {}", self.path.display()))?;

        Ok(())
    }

    /// Load, apply `f`, and save if `f` succeeds. Nothing is written on error.
    pub fn update<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut ActivityMap) -> Result<T, E>,
        E: From<anyhow::Error>,
    {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow!("Activity store lock poisoned"))?;

        let mut activities = self.load()?;
        let value = f(&mut activities)?;
        self.save(&activities)?;

        Ok(value)
    }
}

use anyhow::{Context, Result};
use tracing::info;

use crate::core::state::AppState;

// Runs once at boot so a missing or broken data file fails fast
pub fn check_data_files(state: &AppState) -> Result<()> {
    let activities = state.activities.load()
        .context("Activities data is not usable")?;
    let teachers = state.teachers.load()
        .context("Teachers data is not usable")?;

    let participants: usize = activities.values().map(|a| a.participants.len()).sum();

    info!(
        activities_path = %state.activities.path().display(),
        teachers_path = %state.teachers.path().display(),
        activities = activities.len(),
        participants,
        teachers = teachers.len(),
        "Data files loaded"
    );

    Ok(())
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// All activities, keyed by activity name
pub type ActivityMap = BTreeMap<String, Activity>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Descriptive fields are optional so one sparse record can't make the
    /// whole file unreadable. Absent fields stay absent on save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    /// Student emails in signup order
    #[serde(default)]
    pub participants: Vec<String>,
    /// Fields we don't model are written back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: Some(description.to_string()),
            schedule: Some(schedule.to_string()),
            max_participants: Some(max_participants),
            participants: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Append a participant. Returns false if the email is already present.
    pub fn add_participant(&mut self, email: &str) -> bool {
        if self.is_signed_up(email) {
            return false;
        }
        self.participants.push(email.to_string());
        true
    }

    /// Remove a participant. Returns false if the email was not present.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }
}

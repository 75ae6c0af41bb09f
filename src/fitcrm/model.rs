use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Goal categories offered when adding a client. Each has its own fallback
/// exercise list; any other goal text falls back to "General Fitness".
pub const KNOWN_GOALS: [&str; 3] = ["Weight Loss", "Muscle Gain", "General Fitness"];

pub const DEFAULT_GOAL: &str = "General Fitness";

/// Format used for `lastUpdated` stamps.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stable identifier of a client record.
///
/// Freshly minted ids are UUID v4 strings, but any string found in storage is
/// accepted as-is so older rosters keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn mint() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ClientId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Raw form input, exactly as typed. Nothing here has been checked yet;
/// see [`crate::validation`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientForm {
    pub full_name: String,
    pub age: String,
    pub gender: String,
    pub email: String,
    pub phone: String,
    pub goal: String,
    pub start_date: String,
}

impl From<&ClientRecord> for ClientForm {
    fn from(record: &ClientRecord) -> Self {
        let f = &record.fields;
        Self {
            full_name: f.full_name.clone(),
            age: f.age.to_string(),
            gender: f.gender.clone(),
            email: f.email.clone(),
            phone: f.phone.clone(),
            goal: f.goal.clone(),
            start_date: f.start_date.clone(),
        }
    }
}

/// Validated client data: everything a record holds except its identity and
/// update stamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientFields {
    pub full_name: String,
    pub age: u8,
    pub gender: String,
    pub email: String,
    /// Empty when the client gave no phone number.
    #[serde(default)]
    pub phone: String,
    pub goal: String,
    pub start_date: String,
}

/// A persisted client. Serializes to the flat
/// `id, fullName, age, gender, email, phone, goal, startDate, lastUpdated` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: ClientId,
    #[serde(flatten)]
    pub fields: ClientFields,
    pub last_updated: String,
}

impl ClientRecord {
    /// Builds a brand new record with a freshly minted id.
    pub fn new(fields: ClientFields) -> Self {
        Self {
            id: ClientId::mint(),
            fields,
            last_updated: today(),
        }
    }

    /// Replaces every field but the id and refreshes the stamp.
    pub fn replace_fields(&mut self, fields: ClientFields) {
        self.fields = fields;
        self.last_updated = today();
    }

    pub fn name_matches(&self, needle_lower: &str) -> bool {
        self.fields.full_name.to_lowercase().contains(needle_lower)
    }
}

/// Current local date in [`DATE_FORMAT`].
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// One exercise recommendation shown on a client's detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseSuggestion {
    pub name: String,
    pub description: String,
}

impl ExerciseSuggestion {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

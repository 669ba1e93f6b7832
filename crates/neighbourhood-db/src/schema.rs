//! Schema definitions for the Neighbourhood profile store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

/// Format a Thing ID as "table:key" without backtick escaping.
pub fn thing_to_raw(t: &Thing) -> String {
    format!("{}:{}", t.tb, t.id)
}

/// Profile record keyed by the authenticated subject's identifier.
///
/// The `role` attribute stays a raw string: the store is an external
/// collaborator and may hold values this application doesn't recognize.
/// Interpretation (defaulting, rejection) happens in the login flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Option<Thing>,
    pub subject_id: String,
    pub display_name: String,
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(subject_id: String, display_name: String, role: Option<String>) -> Self {
        Self {
            id: None,
            subject_id,
            display_name,
            role,
            created_at: Utc::now(),
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(thing_to_raw)
    }
}

use serde::{Deserialize, Serialize};

/// Lifecycle metadata carried by every aggregate instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// When the record was created
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// When the record was last updated
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Revision counter, bumped on every edit
    pub version: i32,
}

impl EntityMetadata {
    /// Fresh metadata for a newly created aggregate
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    /// Metadata for a seeded record created `days_back` days before `now`.
    ///
    /// Demo fixtures use this so date-range filters have something to bite on.
    pub fn seeded_days_back(now: chrono::DateTime<chrono::Utc>, days_back: i64) -> Self {
        let created = now - chrono::Duration::days(days_back);
        Self {
            created_at: created,
            updated_at: created,
            version: 0,
        }
    }

    /// Refresh the updated timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }

    /// Bump the revision counter
    pub fn increment_version(&mut self) {
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

use async_trait::async_trait;

use crate::error::DbResult;
use crate::schema::Profile;

/// Profile store abstraction for the Neighbourhood portal.
///
/// Uses `async-trait` for object safety (`dyn ProfileStore`).
///
/// Absence of a profile is `Ok(None)`, never an error — whether a missing
/// profile is fatal is the caller's decision, not the store's.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Connect to the database backend.
    async fn connect(&self) -> DbResult<()>;

    /// Initialize schema (tables, indexes).
    async fn init_schema(&self) -> DbResult<()>;

    async fn create_profile(&self, profile: Profile) -> DbResult<Profile>;

    /// Keyed lookup by the authenticated subject's identifier.
    async fn get_profile(&self, subject_id: &str) -> DbResult<Option<Profile>>;

    async fn list_profiles(&self) -> DbResult<Vec<Profile>>;

    /// Remove the profile of a subject. Errors with `DbError::NotFound`
    /// when no profile matched.
    async fn delete_profile(&self, subject_id: &str) -> DbResult<()>;
}

//! In-memory mock implementation of ProfileStore for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use surrealdb::sql::Thing;

use crate::error::{DbError, DbResult};
use crate::schema::Profile;
use crate::traits::ProfileStore;

/// In-memory ProfileStore implementation for unit testing and memory mode.
pub struct MockProfileStore {
    profiles: RwLock<HashMap<String, Profile>>,
    next_id: AtomicU64,
}

impl MockProfileStore {
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn next_key(&self) -> String {
        self.next_id.fetch_add(1, Ordering::Relaxed).to_string()
    }

    fn make_thing(key: &str) -> Thing {
        Thing::from(("profile".to_string(), key.to_string()))
    }
}

impl Default for MockProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileStore for MockProfileStore {
    async fn connect(&self) -> DbResult<()> {
        Ok(())
    }

    async fn init_schema(&self) -> DbResult<()> {
        Ok(())
    }

    async fn create_profile(&self, mut profile: Profile) -> DbResult<Profile> {
        let key = self.next_key();
        profile.id = Some(Self::make_thing(&key));
        self.profiles
            .write()
            .unwrap()
            .insert(profile.subject_id.clone(), profile.clone());
        Ok(profile)
    }

    async fn get_profile(&self, subject_id: &str) -> DbResult<Option<Profile>> {
        Ok(self.profiles.read().unwrap().get(subject_id).cloned())
    }

    async fn list_profiles(&self) -> DbResult<Vec<Profile>> {
        let profiles = self.profiles.read().unwrap();
        let mut result: Vec<Profile> = profiles.values().cloned().collect();
        result.sort_by(|a, b| a.subject_id.cmp(&b.subject_id));
        Ok(result)
    }

    async fn delete_profile(&self, subject_id: &str) -> DbResult<()> {
        self.profiles
            .write()
            .unwrap()
            .remove(subject_id)
            .map(|_| ())
            .ok_or_else(|| DbError::NotFound(subject_id.to_string()))
    }
}

use async_trait::async_trait;
use surrealdb::engine::local::{Db, Mem, RocksDb};
use surrealdb::Surreal;

use crate::error::{DbError, DbResult};
use crate::schema::Profile;
use crate::traits::ProfileStore;

/// Storage mode for SurrealDB
pub enum StorageMode {
    Memory,
    Persistent(String),
}

/// SurrealDB implementation of the ProfileStore trait
pub struct SurrealProfileStore {
    db: Surreal<Db>,
}

impl SurrealProfileStore {
    /// Create a new SurrealProfileStore with the given storage mode.
    pub async fn new(mode: StorageMode) -> DbResult<Self> {
        let db = match mode {
            StorageMode::Memory => Surreal::new::<Mem>(()).await?,
            StorageMode::Persistent(ref path) => Surreal::new::<RocksDb>(path).await?,
        };
        Ok(Self { db })
    }
}

#[async_trait]
impl ProfileStore for SurrealProfileStore {
    async fn connect(&self) -> DbResult<()> {
        self.db
            .use_ns("neighbourhood")
            .use_db("main")
            .await
            .map_err(|e| DbError::Connection(e.to_string()))
    }

    async fn init_schema(&self) -> DbResult<()> {
        let queries = [
            "DEFINE INDEX idx_profile_subject ON profile FIELDS subject_id UNIQUE",
            "DEFINE INDEX idx_profile_created ON profile FIELDS created_at",
        ];
        for q in queries {
            self.db
                .query(q)
                .await
                .map_err(|e| DbError::SchemaInit(e.to_string()))?;
        }
        Ok(())
    }

    async fn create_profile(&self, profile: Profile) -> DbResult<Profile> {
        let created: Option<Profile> = self.db.create("profile").content(profile).await?;
        created.ok_or_else(|| DbError::Query("Failed to create profile".into()))
    }

    async fn get_profile(&self, subject_id: &str) -> DbResult<Option<Profile>> {
        let sid = subject_id.to_string();
        let mut result = self
            .db
            .query("SELECT * FROM profile WHERE subject_id = $sid LIMIT 1")
            .bind(("sid", sid))
            .await?;
        let profiles: Vec<Profile> = result.take(0)?;
        Ok(profiles.into_iter().next())
    }

    async fn list_profiles(&self) -> DbResult<Vec<Profile>> {
        let profiles: Vec<Profile> = self.db.select("profile").await?;
        Ok(profiles)
    }

    async fn delete_profile(&self, subject_id: &str) -> DbResult<()> {
        let sid = subject_id.to_string();
        let mut result = self
            .db
            .query("DELETE FROM profile WHERE subject_id = $sid RETURN BEFORE")
            .bind(("sid", sid))
            .await?;
        let deleted: Vec<Profile> = result.take(0)?;
        if deleted.is_empty() {
            return Err(DbError::NotFound(subject_id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_store() -> SurrealProfileStore {
        let store = SurrealProfileStore::new(StorageMode::Memory).await.unwrap();
        store.connect().await.unwrap();
        store.init_schema().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_create_and_get_profile() {
        let store = setup_store().await;
        let p = Profile::new("u1".into(), "Ada".into(), Some("Resident".into()));
        let created = store.create_profile(p).await.unwrap();
        assert!(created.id.is_some());

        let fetched = store.get_profile("u1").await.unwrap();
        let fetched = fetched.expect("profile should exist");
        assert_eq!(fetched.display_name, "Ada");
        assert_eq!(fetched.role.as_deref(), Some("Resident"));
    }

    #[tokio::test]
    async fn test_get_absent_profile_is_none() {
        let store = setup_store().await;
        let fetched = store.get_profile("nobody").await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_profile_without_role_roundtrips() {
        let store = setup_store().await;
        let p = Profile::new("u2".into(), "Grace".into(), None);
        store.create_profile(p).await.unwrap();

        let fetched = store.get_profile("u2").await.unwrap().unwrap();
        assert!(fetched.role.is_none());
    }

    #[tokio::test]
    async fn test_list_profiles() {
        let store = setup_store().await;
        for i in 0..3 {
            let p = Profile::new(format!("u{i}"), format!("User {i}"), None);
            store.create_profile(p).await.unwrap();
        }
        let all = store.list_profiles().await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_profile() {
        let store = setup_store().await;
        let p = Profile::new("u1".into(), "Ada".into(), None);
        store.create_profile(p).await.unwrap();

        store.delete_profile("u1").await.unwrap();
        assert!(store.get_profile("u1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_profile_is_not_found() {
        let store = setup_store().await;
        match store.delete_profile("ghost").await.unwrap_err() {
            DbError::NotFound(sid) => assert_eq!(sid, "ghost"),
            other => panic!("Expected NotFound, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_persistent_mode_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.db");
        let path_str = path.to_string_lossy().to_string();

        {
            let store = SurrealProfileStore::new(StorageMode::Persistent(path_str.clone()))
                .await
                .unwrap();
            store.connect().await.unwrap();
            store.init_schema().await.unwrap();
            let p = Profile::new("u9".into(), "Marta".into(), Some("Committee Member".into()));
            store.create_profile(p).await.unwrap();
        }

        let store = SurrealProfileStore::new(StorageMode::Persistent(path_str))
            .await
            .unwrap();
        store.connect().await.unwrap();
        let fetched = store.get_profile("u9").await.unwrap().unwrap();
        assert_eq!(fetched.role.as_deref(), Some("Committee Member"));
    }
}

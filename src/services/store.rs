use crate::models::Profile;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur when loading the profile snapshot
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate profile id: {0}")]
    DuplicateProfile(String),
}

/// In-memory profile snapshot shared by all handlers
///
/// Readers take an `Arc` of the current snapshot, so a feed is always built
/// against one consistent population even while a visibility recompute swaps
/// in a new one.
pub struct ProfileStore {
    profiles: RwLock<Arc<Vec<Profile>>>,
}

impl ProfileStore {
    pub fn new(profiles: Vec<Profile>) -> Result<Self, StoreError> {
        ensure_unique_ids(&profiles)?;
        Ok(Self {
            profiles: RwLock::new(Arc::new(profiles)),
        })
    }

    /// Load a JSON array of profiles from disk
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        let profiles: Vec<Profile> = serde_json::from_str(&raw)?;

        tracing::debug!(
            "Parsed {} profiles from {}",
            profiles.len(),
            path.as_ref().display()
        );

        Self::new(profiles)
    }

    /// Current snapshot
    pub async fn snapshot(&self) -> Arc<Vec<Profile>> {
        self.profiles.read().await.clone()
    }

    pub async fn get(&self, user_id: &str) -> Option<Profile> {
        self.profiles
            .read()
            .await
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Atomically replace the whole snapshot
    pub async fn replace_all(&self, profiles: Vec<Profile>) -> Result<(), StoreError> {
        ensure_unique_ids(&profiles)?;
        *self.profiles.write().await = Arc::new(profiles);
        Ok(())
    }
}

fn ensure_unique_ids(profiles: &[Profile]) -> Result<(), StoreError> {
    let mut seen = HashSet::with_capacity(profiles.len());
    for profile in profiles {
        if !seen.insert(profile.user_id.as_str()) {
            return Err(StoreError::DuplicateProfile(profile.user_id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str) -> Profile {
        serde_json::from_value(serde_json::json!({
            "userId": id,
            "age": 30,
            "gender": "female",
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_lookup_and_replace() {
        let store = ProfileStore::new(vec![profile("a"), profile("b")]).unwrap();

        assert_eq!(store.len().await, 2);
        assert!(store.get("b").await.is_some());
        assert!(store.get("zz").await.is_none());

        let before = store.snapshot().await;
        store.replace_all(vec![profile("c")]).await.unwrap();

        // Earlier snapshots stay intact
        assert_eq!(before.len(), 2);
        assert_eq!(store.len().await, 1);
        assert!(store.get("a").await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_ids_rejected() {
        let result = ProfileStore::new(vec![profile("a"), profile("a")]);
        assert!(matches!(result, Err(StoreError::DuplicateProfile(id)) if id == "a"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = ProfileStore::load("/nonexistent/profiles.json").await;
        assert!(matches!(result, Err(StoreError::Io(_))));
    }
}

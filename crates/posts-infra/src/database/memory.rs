//! In-memory post repository - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use posts_core::domain::Post;
use posts_core::error::RepoError;
use posts_core::ports::{BaseRepository, PostRepository};

/// In-memory post store using a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn insert(&self, entity: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&entity.id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let slot = store.get_mut(&entity.id).ok_or(RepoError::NotFound)?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_latest(&self) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        // Ties on creation time resolve to the highest id.
        Ok(store.values().max_by_key(|p| (p.created_at, p.id)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn post(name: &str, age_secs: i64) -> Post {
        Post {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now() - Duration::seconds(age_secs),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_find_latest_orders_by_creation() {
        let repo = InMemoryPostRepository::new();
        repo.insert(post("old", 60)).await.unwrap();
        repo.insert(post("new", 0)).await.unwrap();
        repo.insert(post("middle", 30)).await.unwrap();

        let latest = repo.find_latest().await.unwrap().unwrap();
        assert_eq!(latest.name, "new");
    }

    #[tokio::test]
    async fn test_find_latest_breaks_ties_on_id() {
        let created_at = Utc::now();
        let repo = InMemoryPostRepository::new();
        for (id, name) in [(2u128, "second"), (9, "ninth"), (5, "fifth")] {
            repo.insert(Post {
                id: Uuid::from_u128(id),
                name: name.to_string(),
                created_at,
                updated_at: None,
            })
            .await
            .unwrap();
        }

        for _ in 0..5 {
            let latest = repo.find_latest().await.unwrap().unwrap();
            assert_eq!(latest.id, Uuid::from_u128(9));
        }
    }

    #[tokio::test]
    async fn test_find_latest_empty() {
        let repo = InMemoryPostRepository::new();
        assert!(repo.find_latest().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let result = repo.update(post("ghost", 0)).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_falls_back_to_previous_latest() {
        let repo = InMemoryPostRepository::new();
        let older = repo.insert(post("older", 10)).await.unwrap();
        let newer = repo.insert(post("newer", 0)).await.unwrap();

        repo.delete(newer.id).await.unwrap();

        assert_eq!(repo.find_latest().await.unwrap(), Some(older));
        assert!(matches!(repo.delete(newer.id).await, Err(RepoError::NotFound)));
    }
}

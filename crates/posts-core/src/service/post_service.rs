//! Post lifecycle: find-latest, create, update, delete.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

/// Persistence handle for the Post resource.
///
/// Built once by the process entry point and cloned into request handlers.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// The most recently created post.
    pub async fn latest(&self) -> Result<Option<Post>, DomainError> {
        Ok(self.repo.find_latest().await?)
    }

    /// Create a post with a server-assigned ID and creation time.
    pub async fn create(&self, new_post: NewPost) -> Result<Post, DomainError> {
        let post = Post::new(new_post);
        tracing::debug!(post_id = %post.id, "Creating post");
        Ok(self.repo.insert(post).await?)
    }

    /// Apply an allow-listed patch to an existing post.
    pub async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, DomainError> {
        let mut post = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })?;

        post.apply(patch, Utc::now());

        self.repo.update(post).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "Post",
                id,
            },
            other => other.into(),
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "Post",
                id,
            },
            other => other.into(),
        })
    }
}

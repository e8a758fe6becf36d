use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - the single record the service manages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Absent until the first update.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new post with a generated ID and creation timestamp.
    pub fn new(new_post: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new_post.name,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Apply a patch and stamp `updated_at`.
    ///
    /// The stamp is clamped so it never precedes `created_at`.
    pub fn apply(&mut self, patch: PostPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self.updated_at = Some(now.max(self.created_at));
    }
}

/// Fields required to create a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    name: String,
}

impl NewPost {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::Validation("Name is required".to_string()));
        }
        Ok(Self { name })
    }
}

/// Allow-listed mutable fields of a post.
///
/// `id`, `created_at` and `updated_at` are owned by the service and are
/// never patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    name: Option<String>,
}

impl PostPatch {
    pub fn new(name: Option<String>) -> Result<Self, DomainError> {
        if let Some(name) = &name
            && name.trim().is_empty()
        {
            return Err(DomainError::Validation("Name cannot be empty".to_string()));
        }
        Ok(Self { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_post_requires_name() {
        assert!(NewPost::new("").is_err());
        assert!(NewPost::new("   ").is_err());
        assert_eq!(NewPost::new("hello").unwrap().name, "hello");
    }

    #[test]
    fn test_new_post_has_no_update_stamp() {
        let post = Post::new(NewPost::new("hello").unwrap());
        assert_eq!(post.name, "hello");
        assert!(post.updated_at.is_none());
    }

    #[test]
    fn test_apply_changes_name_and_stamps_update() {
        let mut post = Post::new(NewPost::new("hello").unwrap());
        let id = post.id;
        let created_at = post.created_at;
        let now = created_at + Duration::seconds(5);

        post.apply(PostPatch::new(Some("hello2".to_string())).unwrap(), now);

        assert_eq!(post.name, "hello2");
        assert_eq!(post.id, id);
        assert_eq!(post.created_at, created_at);
        assert_eq!(post.updated_at, Some(now));
    }

    #[test]
    fn test_apply_never_stamps_before_creation() {
        let mut post = Post::new(NewPost::new("hello").unwrap());
        let skewed = post.created_at - Duration::minutes(1);

        post.apply(PostPatch::default(), skewed);

        assert_eq!(post.name, "hello");
        assert_eq!(post.updated_at, Some(post.created_at));
    }

    #[test]
    fn test_patch_rejects_blank_name() {
        assert!(PostPatch::new(Some(" ".to_string())).is_err());
        assert!(PostPatch::new(None).is_ok());
    }
}

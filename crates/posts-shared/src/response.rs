//! Response bodies that are not a post.

use serde::{Deserialize, Serialize};

use crate::dto::PostResponse;

/// Error body: `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Informational body: `{ "message": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Placeholder returned by GET when the table is empty.
    pub fn no_posts() -> Self {
        Self::new("No posts available")
    }

    pub fn deleted() -> Self {
        Self::new("Post deleted successfully")
    }
}

/// GET body: either the latest post or the "no posts" placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LatestPostResponse {
    Post(PostResponse),
    Empty(MessageResponse),
}

impl From<Option<PostResponse>> for LatestPostResponse {
    fn from(post: Option<PostResponse>) -> Self {
        match post {
            Some(post) => Self::Post(post),
            None => Self::Empty(MessageResponse::no_posts()),
        }
    }
}

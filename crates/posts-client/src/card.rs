//! The latest-post card: view state plus the create/edit/delete actions.
//!
//! Every action issues exactly one request and replaces the state with
//! the outcome. There is no caching, retry or optimistic update.

use chrono::{DateTime, Local, Utc};

use posts_shared::PostResponse;

use crate::api::PostsApi;
use crate::error::ClientError;

/// What the card is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardState {
    Loading,
    /// `None` when the server has no posts (or the shown post was deleted).
    Loaded(Option<PostResponse>),
    Failed(String),
}

pub struct LatestPostCard<A> {
    api: A,
    state: CardState,
    edit_name: String,
}

impl<A: PostsApi> LatestPostCard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: CardState::Loading,
            edit_name: String::new(),
        }
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn post(&self) -> Option<&PostResponse> {
        match &self.state {
            CardState::Loaded(Some(post)) => Some(post),
            _ => None,
        }
    }

    pub fn edit_name(&self) -> &str {
        &self.edit_name
    }

    pub fn set_edit_name(&mut self, name: impl Into<String>) {
        self.edit_name = name.into();
    }

    /// Fetch the latest post. Issues a single GET.
    pub async fn mount(&mut self) {
        self.state = CardState::Loading;

        match self.api.latest().await {
            Ok(post) => {
                if let Some(post) = &post {
                    self.edit_name = post.name.clone();
                }
                self.state = CardState::Loaded(post);
            }
            Err(e) => self.fail("Failed to fetch latest post", e),
        }
    }

    /// Create a post and show it.
    pub async fn create(&mut self, name: &str) {
        match self.api.create(name).await {
            Ok(post) => {
                self.edit_name = post.name.clone();
                self.state = CardState::Loaded(Some(post));
            }
            Err(e) => self.fail("Failed to create post", e),
        }
    }

    /// Rename the shown post to the current edit value.
    pub async fn update(&mut self) {
        let Some(id) = self.post().map(|p| p.id) else {
            return;
        };

        match self.api.update(id, &self.edit_name).await {
            Ok(post) => self.state = CardState::Loaded(Some(post)),
            Err(e) => self.fail("Failed to update post", e),
        }
    }

    /// Delete the shown post.
    pub async fn delete(&mut self) {
        let Some(id) = self.post().map(|p| p.id) else {
            return;
        };

        match self.api.delete(id).await {
            Ok(message) => {
                tracing::debug!(post_id = %id, %message, "Post deleted");
                self.state = CardState::Loaded(None);
            }
            Err(e) => self.fail("Failed to delete post", e),
        }
    }

    /// Non-2xx responses collapse to `action_message`; transport and decode
    /// failures keep their own text.
    fn fail(&mut self, action_message: &str, err: ClientError) {
        tracing::warn!(error = %err, "{}", action_message);
        let message = match err {
            ClientError::Status { .. } => action_message.to_string(),
            other => other.to_string(),
        };
        self.state = CardState::Failed(message);
    }

    /// Render the card as text lines.
    pub fn render(&self) -> Vec<String> {
        match &self.state {
            CardState::Loading => vec!["Loading...".to_string()],
            CardState::Failed(message) => vec![format!("Error: {message}")],
            CardState::Loaded(None) => vec!["No posts found.".to_string()],
            CardState::Loaded(Some(post)) => {
                let mut lines = vec![
                    post.name.clone(),
                    format!("Created at: {}", local_time(post.created_at)),
                ];
                if let Some(updated_at) = post.updated_at {
                    lines.push(format!("Updated at: {}", local_time(updated_at)));
                }
                lines.push(format!("Edit Post Name: {}", self.edit_name));
                lines
            }
        }
    }
}

fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use uuid::Uuid;

    /// Serves a single optional post; `fail_with` makes every call fail.
    struct FakeApi {
        post: Mutex<Option<PostResponse>>,
        fail_with: Option<u16>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl FakeApi {
        fn with_post(post: Option<PostResponse>) -> Self {
            Self {
                post: Mutex::new(post),
                fail_with: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                fail_with: Some(status),
                ..Self::with_post(None)
            }
        }

        fn record(&self, call: &'static str) -> Result<(), ClientError> {
            self.calls.lock().unwrap().push(call);
            match self.fail_with {
                Some(status) => Err(ClientError::Status {
                    status,
                    message: "Error".to_string(),
                }),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl PostsApi for FakeApi {
        async fn latest(&self) -> Result<Option<PostResponse>, ClientError> {
            self.record("GET")?;
            Ok(self.post.lock().unwrap().clone())
        }

        async fn create(&self, name: &str) -> Result<PostResponse, ClientError> {
            self.record("POST")?;
            let post = sample(name);
            *self.post.lock().unwrap() = Some(post.clone());
            Ok(post)
        }

        async fn update(&self, id: Uuid, name: &str) -> Result<PostResponse, ClientError> {
            self.record("PUT")?;
            let mut slot = self.post.lock().unwrap();
            let post = slot.as_mut().filter(|p| p.id == id).ok_or(ClientError::Status {
                status: 500,
                message: "Error updating post".to_string(),
            })?;
            post.name = name.to_string();
            post.updated_at = Some(Utc::now());
            Ok(post.clone())
        }

        async fn delete(&self, _id: Uuid) -> Result<String, ClientError> {
            self.record("DELETE")?;
            *self.post.lock().unwrap() = None;
            Ok("Post deleted successfully".to_string())
        }
    }

    fn sample(name: &str) -> PostResponse {
        PostResponse {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_card_starts_loading() {
        let card = LatestPostCard::new(FakeApi::with_post(None));
        assert_eq!(card.state(), &CardState::Loading);
        assert_eq!(card.render(), vec!["Loading...".to_string()]);
    }

    #[tokio::test]
    async fn test_mount_shows_latest_post() {
        let post = sample("hello");
        let mut card = LatestPostCard::new(FakeApi::with_post(Some(post.clone())));

        card.mount().await;

        assert_eq!(card.state(), &CardState::Loaded(Some(post)));
        assert_eq!(card.edit_name(), "hello");
        assert_eq!(*card.api.calls.lock().unwrap(), vec!["GET"]);

        let lines = card.render();
        assert_eq!(lines[0], "hello");
        assert!(lines[1].starts_with("Created at: "));
        assert!(!lines.iter().any(|l| l.starts_with("Updated at: ")));
    }

    #[tokio::test]
    async fn test_mount_without_posts() {
        let mut card = LatestPostCard::new(FakeApi::with_post(None));
        card.mount().await;
        assert_eq!(card.state(), &CardState::Loaded(None));
        assert_eq!(card.render(), vec!["No posts found.".to_string()]);
    }

    #[tokio::test]
    async fn test_mount_failure_sets_error() {
        let mut card = LatestPostCard::new(FakeApi::failing(500));
        card.mount().await;
        assert_eq!(
            card.state(),
            &CardState::Failed("Failed to fetch latest post".to_string())
        );
        assert_eq!(
            card.render(),
            vec!["Error: Failed to fetch latest post".to_string()]
        );
    }

    #[tokio::test]
    async fn test_create_shows_new_post() {
        let mut card = LatestPostCard::new(FakeApi::with_post(None));
        card.mount().await;

        card.create("fresh").await;

        assert_eq!(card.post().unwrap().name, "fresh");
        assert_eq!(card.edit_name(), "fresh");
        assert_eq!(*card.api.calls.lock().unwrap(), vec!["GET", "POST"]);
    }

    #[tokio::test]
    async fn test_create_failure_sets_error() {
        let mut card = LatestPostCard::new(FakeApi::failing(400));

        card.create("").await;

        assert_eq!(
            card.state(),
            &CardState::Failed("Failed to create post".to_string())
        );
    }

    #[tokio::test]
    async fn test_update_replaces_post() {
        let post = sample("hello");
        let mut card = LatestPostCard::new(FakeApi::with_post(Some(post.clone())));
        card.mount().await;

        card.set_edit_name("hello2");
        card.update().await;

        let shown = card.post().unwrap();
        assert_eq!(shown.id, post.id);
        assert_eq!(shown.name, "hello2");
        assert!(shown.updated_at.is_some());
        assert!(card.render().iter().any(|l| l.starts_with("Updated at: ")));
        assert_eq!(*card.api.calls.lock().unwrap(), vec!["GET", "PUT"]);
    }

    #[tokio::test]
    async fn test_delete_clears_post() {
        let mut card = LatestPostCard::new(FakeApi::with_post(Some(sample("hello"))));
        card.mount().await;

        card.delete().await;

        assert_eq!(card.state(), &CardState::Loaded(None));
        assert_eq!(*card.api.calls.lock().unwrap(), vec!["GET", "DELETE"]);
    }

    #[tokio::test]
    async fn test_actions_without_post_issue_no_request() {
        let mut card = LatestPostCard::new(FakeApi::with_post(None));
        card.mount().await;

        card.update().await;
        card.delete().await;

        assert_eq!(*card.api.calls.lock().unwrap(), vec!["GET"]);
    }

    #[tokio::test]
    async fn test_update_failure_sets_error() {
        let api = FakeApi::with_post(Some(sample("hello")));
        let mut card = LatestPostCard::new(api);
        card.mount().await;
        *card.api.post.lock().unwrap() = None;

        card.update().await;

        assert_eq!(
            card.state(),
            &CardState::Failed("Failed to update post".to_string())
        );
    }
}

//! HTTP access to the posts endpoint.

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use posts_shared::dto::{CreatePostRequest, DeletePostRequest, UpdatePostRequest};
use posts_shared::{ErrorResponse, LatestPostResponse, MessageResponse, PostResponse};

use crate::error::ClientError;

/// Operations the card needs from the posts endpoint.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// GET - the latest post, or `None` for the "no posts" placeholder.
    async fn latest(&self) -> Result<Option<PostResponse>, ClientError>;

    /// POST `{name}`.
    async fn create(&self, name: &str) -> Result<PostResponse, ClientError>;

    /// PUT `{id, name}`.
    async fn update(&self, id: Uuid, name: &str) -> Result<PostResponse, ClientError>;

    /// DELETE `{id}`; returns the confirmation message.
    async fn delete(&self, id: Uuid) -> Result<String, ClientError>;
}

/// reqwest-backed [`PostsApi`].
pub struct HttpPostsApi {
    url: String,
    client: reqwest::Client,
}

impl HttpPostsApi {
    /// `url` is the full resource URL, e.g. `http://127.0.0.1:8080/api/trpc/posts`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

/// Decode a successful body, or turn a non-2xx status into `ClientError::Status`.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if !status.is_success() {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
        };
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn latest(&self) -> Result<Option<PostResponse>, ClientError> {
        let response = self.client.get(&self.url).send().await?;

        match read_json::<LatestPostResponse>(response).await? {
            LatestPostResponse::Post(post) => Ok(Some(post)),
            LatestPostResponse::Empty(_) => Ok(None),
        }
    }

    async fn create(&self, name: &str) -> Result<PostResponse, ClientError> {
        let body = CreatePostRequest {
            name: Some(name.to_string()),
        };
        let response = self.client.post(&self.url).json(&body).send().await?;
        read_json(response).await
    }

    async fn update(&self, id: Uuid, name: &str) -> Result<PostResponse, ClientError> {
        let body = UpdatePostRequest {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
        };
        let response = self.client.put(&self.url).json(&body).send().await?;
        read_json(response).await
    }

    async fn delete(&self, id: Uuid) -> Result<String, ClientError> {
        let body = DeletePostRequest {
            id: Some(id.to_string()),
        };
        let response = self.client.delete(&self.url).json(&body).send().await?;
        let confirmation: MessageResponse = read_json(response).await?;
        Ok(confirmation.message)
    }
}

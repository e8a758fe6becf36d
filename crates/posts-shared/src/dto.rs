//! Data Transfer Objects - request/response types for the posts endpoint.
//!
//! Request fields are optional so that presence checks happen in the
//! handler and produce a `{ "error": ... }` body instead of an extractor
//! rejection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// POST body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// PUT body. Keys other than `id` and `name` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// DELETE body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePostRequest {
    #[serde(default)]
    pub id: Option<String>,
}

/// A post as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

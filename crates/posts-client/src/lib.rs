//! # Posts Client
//!
//! The presentation side of the latest-post service: a typed HTTP client
//! for the posts endpoint and the card that renders and edits the latest
//! post through it.

pub mod api;
pub mod card;
pub mod error;

pub use api::{HttpPostsApi, PostsApi};
pub use card::{CardState, LatestPostCard};
pub use error::ClientError;

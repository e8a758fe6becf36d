//! # Posts Shared
//!
//! Wire types shared between the API server and the card client.

pub mod dto;
pub mod response;

pub use dto::PostResponse;
pub use response::{ErrorResponse, LatestPostResponse, MessageResponse};

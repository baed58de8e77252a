pub mod api;
pub mod client;
pub mod error;

pub use client::{create_client, ReviewApi};
pub use error::{is_token_expired_payload, ApiError, BackendError, ErrorBody, EXPIRED_TOKEN_CODE};

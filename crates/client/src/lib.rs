//! # Salon Client
//!
//! REST resource client for the salon admin console.
//!
//! One [`ApiClient`] per application, one [`HttpResourceClient`] per
//! resource schema. Every operation is a single round trip; retries,
//! caching and error presentation are explicitly someone else's job
//! (there are none of the first two anywhere in this system).
//!

pub mod auth;
pub mod client;

// Re-exports for convenience
pub use auth::{LOGIN_PATH, REGISTER_PATH, Session, UserProfile};
pub use client::{
    ApiClient, ApiErrorBody, DEFAULT_BASE_URL, HttpResourceClient, ResourceClient,
    classify_response,
};

// Re-export the error taxonomy alongside the client that produces it
pub use salon_core::{ClientError, ClientResult, FieldError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! # Salon Core
//!
//! Core types for the salon admin console.
//!
//! This crate provides the foundational building blocks shared by every
//! other crate in the workspace:
//!
//! - **Records**: dynamic entity instances (`Record`), the common currency
//!   between the resource client, form drafts and list rows
//! - **Errors**: the client failure taxonomy (`ClientError`, `FieldError`)
//!

pub mod error;
pub mod record;

// Re-export commonly used items at crate root
pub use error::{ClientError, ClientResult, FieldError};
pub use record::{ID_FIELD, Record};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! # Salon Page
//!
//! The resource page lifecycle shared by every admin section.
//!
//! Every section of the console is the same machine: fetch the collection
//! on mount, submit validated drafts through the resource client, refresh
//! from the server after each mutation, map failures to fixed user-facing
//! messages. [`PageModel`] holds that machine as pure synchronous
//! transitions; [`ResourcePage`] drives it over an async
//! [`ResourceClient`](salon_client::ResourceClient).
//!
//! The UI layer uses the same `begin_*` / `finish_*` transitions from its
//! spawned tasks, so the lifecycle rules live here exactly once.
//!

pub mod driver;
pub mod model;

// Re-exports for convenience
pub use driver::{ResourcePage, SubmitOutcome};
pub use model::{NextAction, PageModel, PageStatus, SubmitPlan};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

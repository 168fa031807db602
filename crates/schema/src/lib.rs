//! # Salon Schema
//!
//! Field specifications, validation rules and the resource catalog for the
//! salon admin console.
//!
//! ## Core Concepts
//!
//! - **FieldSpec**: one editable field of a resource (type, label, rules)
//! - **ValidationRule**: declarative checks (length, bounds, email, url,
//!   pattern, cross-field equality)
//! - **ResourceSchema**: one REST collection resource; drives the form
//!   view, the list view and the resource client identically
//! - **catalog**: the nine salon resources
//!

// Module declarations
pub mod catalog;
pub mod field;
pub mod resource;
pub mod rules;

// Re-export commonly used types at crate root
pub use field::{FieldSpec, FieldType};
pub use resource::{ResourceSchema, SortHint, ValidationReport};
pub use rules::ValidationRule;

// Re-export core types that are commonly used with schemas
pub use salon_core::{ClientError, ClientResult, FieldError, Record};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_reachable_from_root() {
        let schema = catalog::banner();
        assert_eq!(schema.key, "banner");
    }
}

//! Resource schemas
//!
//! A [`ResourceSchema`] describes one REST collection resource: its display
//! labels, collection path and the ordered set of [`FieldSpec`]s. The same
//! schema drives the form view (inputs, validation), the list view
//! (columns, masking) and the resource client (payload shape).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field::FieldSpec;
use crate::rules::ValidationRule;
use salon_core::{ClientError, ClientResult, FieldError, Record};

// ============================================================================
// ValidationReport
// ============================================================================

/// Accumulated result of validating a draft against a schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Create an empty (passing) report.
    pub fn ok() -> Self {
        Self::default()
    }

    /// Add a field error.
    pub fn add(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Merge another report into this one.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
    }

    /// Whether the draft passed every check.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any check failed.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All collected errors, in field order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The first error message for a given field, if any.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Convert to a result, failing with `ClientError::Validation`.
    pub fn into_result(self) -> ClientResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ClientError::validation(self.errors))
        }
    }
}

// ============================================================================
// SortHint
// ============================================================================

/// A display-only ordering for list views. This is a rendering rule, not a
/// storage invariant: the collection itself always keeps server order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortHint {
    /// Field to sort by.
    pub field: String,
    /// Ascending (true) or descending (false).
    pub ascending: bool,
}

// ============================================================================
// ResourceSchema
// ============================================================================

/// Schema of one REST collection resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSchema {
    /// Stable resource key (snake_case, e.g. `navbar_item`).
    pub key: String,

    /// Singular display label (e.g. "navbar item").
    pub singular: String,

    /// Plural display label (e.g. "navbar items").
    pub plural: String,

    /// Collection endpoint path (e.g. `/api/navbar-items`).
    pub base_path: String,

    /// Ordered field specifications.
    pub fields: Vec<FieldSpec>,

    /// Optional display-only sort for list views.
    pub display_sort: Option<SortHint>,
}

impl ResourceSchema {
    /// Create a new schema.
    pub fn new(
        key: impl Into<String>,
        singular: impl Into<String>,
        plural: impl Into<String>,
        base_path: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            singular: singular.into(),
            plural: plural.into(),
            base_path: base_path.into(),
            fields: Vec::new(),
            display_sort: None,
        }
    }

    /// Append a field specification.
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Declare a display-only ascending sort on a field.
    pub fn with_display_sort(mut self, field: impl Into<String>, ascending: bool) -> Self {
        self.display_sort = Some(SortHint {
            field: field.into(),
            ascending,
        });
        self
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Find a field specification by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields shown as list-view columns.
    pub fn list_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.show_in_list)
    }

    /// Names of all secret fields.
    pub fn secret_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.secret)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Title-cased singular label for headings.
    pub fn title(&self) -> String {
        let mut chars = self.singular.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().chain(chars).collect(),
        }
    }

    // ========================================================================
    // Drafts
    // ========================================================================

    /// Build an empty draft with every field at its starting value.
    pub fn empty_draft(&self) -> Record {
        let mut draft = Record::new();
        for field in &self.fields {
            draft.set(&field.name, field.empty_value());
        }
        draft
    }

    /// Build an edit draft from an existing record: schema fields only,
    /// missing values replaced by their starting value. The id is not part
    /// of the draft.
    pub fn draft_from(&self, record: &Record) -> Record {
        let mut draft = Record::new();
        for field in &self.fields {
            let value = record
                .get(&field.name)
                .cloned()
                .unwrap_or_else(|| field.empty_value());
            draft.set(&field.name, value);
        }
        draft
    }

    /// Validate a draft against every field specification.
    ///
    /// Field-level rules run first, then cross-field `Matches` rules.
    pub fn validate_draft(&self, draft: &Record) -> ValidationReport {
        let mut report = ValidationReport::ok();

        for field in &self.fields {
            for error in field.validate_value(draft.get(&field.name)) {
                report.add(error);
            }
        }

        // Cross-field equality checks.
        for field in &self.fields {
            for rule in &field.rules {
                if let ValidationRule::Matches { other, message } = rule {
                    let own = draft.get(&field.name).unwrap_or(&Value::Null);
                    let theirs = draft.get(other).unwrap_or(&Value::Null);
                    if own != theirs {
                        report.add(FieldError::new(&field.name, message.clone()));
                    }
                }
            }
        }

        report
    }

    // ========================================================================
    // Display
    // ========================================================================

    /// Apply the display sort hint to a collection copy.
    ///
    /// Returns the rows in display order; the input order (server order) is
    /// left untouched. Without a hint this is the identity.
    pub fn sorted_for_display(&self, rows: &[Record]) -> Vec<Record> {
        let mut sorted: Vec<Record> = rows.to_vec();

        if let Some(hint) = &self.display_sort {
            sorted.sort_by(|a, b| {
                let ordering = compare_values(a.get(&hint.field), b.get(&hint.field));
                if hint.ascending {
                    ordering
                } else {
                    ordering.reverse()
                }
            });
        }

        sorted
    }
}

/// Order two field values: numbers numerically, strings lexically, missing
/// values last.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> std::cmp::Ordering {
    use std::cmp::Ordering;

    match (a, b) {
        (Some(a), Some(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => match (a.as_str(), b.as_str()) {
                (Some(x), Some(y)) => x.cmp(y),
                _ => Ordering::Equal,
            },
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ============================================================================
// Tests
// ============================================================================

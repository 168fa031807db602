//! Field specifications for resource schemas
//!
//! This module contains the `FieldSpec` struct and related types describing
//! one editable field of a resource: its primitive type, display hints and
//! validation rules. The form view and the resource client consume the same
//! specification, so a draft that passes validation here is exactly what
//! goes over the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rules::ValidationRule;
use salon_core::FieldError;

// ============================================================================
// FieldType
// ============================================================================

/// Primitive type of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Single-line text.
    Text,
    /// Multi-line text.
    LongText,
    /// Floating-point number.
    Number,
    /// Whole number.
    Integer,
    /// Boolean flag.
    Bool,
}

impl FieldType {
    /// Whether values of this type are JSON strings.
    pub fn is_textual(&self) -> bool {
        matches!(self, FieldType::Text | FieldType::LongText)
    }

    /// Whether values of this type are JSON numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Number | FieldType::Integer)
    }

    /// The neutral starting value for an empty draft.
    pub fn empty_value(&self) -> Value {
        match self {
            FieldType::Text | FieldType::LongText => Value::String(String::new()),
            FieldType::Number | FieldType::Integer => Value::Null,
            FieldType::Bool => Value::Bool(false),
        }
    }
}

// ============================================================================
// FieldSpec
// ============================================================================

/// Specification of one editable field of a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name as it appears in records and wire bodies (snake_case).
    pub name: String,

    /// Display label (defaults to the title-cased field name).
    pub label: String,

    /// Primitive type of the field value.
    pub field_type: FieldType,

    /// Whether a value must be present and non-empty.
    pub required: bool,

    /// Whether this field is a secret (passwords). Secret fields render
    /// masked in lists and as password inputs in forms.
    pub secret: bool,

    /// Placeholder text for form inputs.
    pub placeholder: Option<String>,

    /// Help text shown below the input.
    pub help_text: Option<String>,

    /// Default value used when building an empty draft.
    pub default: Option<Value>,

    /// Validation rules, checked in declaration order.
    pub rules: Vec<ValidationRule>,

    /// Whether the field appears as a list-view column.
    pub show_in_list: bool,
}

impl FieldSpec {
    /// Create a new field with the given name and type.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        let name = name.into();
        let label = to_title_case(&name);

        Self {
            name,
            label,
            field_type,
            required: false,
            secret: false,
            placeholder: None,
            help_text: None,
            default: None,
            rules: Vec::new(),
            show_in_list: true,
        }
    }

    /// Create a single-line text field.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Text)
    }

    /// Create a multi-line text field.
    pub fn long_text(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::LongText)
    }

    /// Create a floating-point number field.
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Number)
    }

    /// Create a whole-number field.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Integer)
    }

    /// Create a boolean field.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Bool)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the field as secret (passwords).
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help_text = Some(help.into());
        self
    }

    /// Set the default value for empty drafts.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Add a validation rule.
    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Hide the field from list-view columns.
    pub fn hidden_in_list(mut self) -> Self {
        self.show_in_list = false;
        self
    }

    // ========================================================================
    // Utility methods
    // ========================================================================

    /// The HTML input type for form rendering.
    pub fn input_type(&self) -> &'static str {
        if self.secret {
            return "password";
        }
        if self.rules.iter().any(|r| matches!(r, ValidationRule::Email)) {
            return "email";
        }
        if self.rules.iter().any(|r| matches!(r, ValidationRule::Url)) {
            return "url";
        }
        match self.field_type {
            FieldType::Text => "text",
            FieldType::LongText => "textarea",
            FieldType::Number | FieldType::Integer => "number",
            FieldType::Bool => "checkbox",
        }
    }

    /// The starting value for an empty draft: the declared default, or the
    /// type's neutral value.
    pub fn empty_value(&self) -> Value {
        self.default
            .clone()
            .unwrap_or_else(|| self.field_type.empty_value())
    }

    /// Whether a value counts as "missing" for the required check.
    fn is_blank(value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Validate a draft value against this specification.
    ///
    /// Returns every failure, not just the first one. Optional fields with
    /// blank values skip the rule checks entirely.
    pub fn validate_value(&self, value: Option<&Value>) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if Self::is_blank(value) {
            if self.required {
                errors.push(FieldError::new(
                    &self.name,
                    format!("{} is required", self.label),
                ));
            }
            return errors;
        }

        let Some(value) = value else {
            return errors;
        };

        // Type check before rule checks.
        let type_ok = match self.field_type {
            FieldType::Text | FieldType::LongText => value.is_string(),
            FieldType::Number => value.is_number(),
            FieldType::Integer => value.as_i64().is_some(),
            FieldType::Bool => value.is_boolean(),
        };

        if !type_ok {
            errors.push(FieldError::new(
                &self.name,
                format!("{} has the wrong type", self.label),
            ));
            return errors;
        }

        for rule in &self.rules {
            if let Some(message) = rule.check(&self.label, value) {
                errors.push(FieldError::new(&self.name, message));
            }
        }

        errors
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a snake_case name to Title Case for display.
pub(crate) fn to_title_case(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_new_defaults() {
        let field = FieldSpec::text("author_name");
        assert_eq!(field.name, "author_name");
        assert_eq!(field.label, "Author Name");
        assert!(!field.required);
        assert!(!field.secret);
        assert!(field.show_in_list);
    }

    #[test]
    fn test_field_builder() {
        let field = FieldSpec::text("email")
            .required()
            .with_label("Email Address")
            .with_placeholder("user@example.com")
            .with_rule(ValidationRule::Email);

        assert!(field.required);
        assert_eq!(field.label, "Email Address");
        assert_eq!(field.placeholder.as_deref(), Some("user@example.com"));
        assert_eq!(field.input_type(), "email");
    }

    #[test]
    fn test_secret_field_renders_as_password() {
        let field = FieldSpec::text("password").secret();
        assert!(field.secret);
        assert_eq!(field.input_type(), "password");
    }

    #[test]
    fn test_input_type_by_field_type() {
        assert_eq!(FieldSpec::text("a").input_type(), "text");
        assert_eq!(FieldSpec::long_text("a").input_type(), "textarea");
        assert_eq!(FieldSpec::integer("a").input_type(), "number");
        assert_eq!(FieldSpec::number("a").input_type(), "number");
        assert_eq!(FieldSpec::boolean("a").input_type(), "checkbox");
    }

    #[test]
    fn test_empty_value_uses_default() {
        let plain = FieldSpec::boolean("is_active");
        assert_eq!(plain.empty_value(), json!(false));

        let defaulted = FieldSpec::boolean("is_active").with_default(true);
        assert_eq!(defaulted.empty_value(), json!(true));

        assert_eq!(FieldSpec::text("name").empty_value(), json!(""));
        assert_eq!(FieldSpec::number("price").empty_value(), Value::Null);
    }

    #[test]
    fn test_required_check() {
        let field = FieldSpec::text("heading").required();

        assert_eq!(field.validate_value(None).len(), 1);
        assert_eq!(field.validate_value(Some(&json!(null))).len(), 1);
        assert_eq!(field.validate_value(Some(&json!("   "))).len(), 1);
        assert!(field.validate_value(Some(&json!("Hello"))).is_empty());
    }

    #[test]
    fn test_optional_blank_skips_rules() {
        let field = FieldSpec::text("url").with_rule(ValidationRule::Url);
        assert!(field.validate_value(Some(&json!(""))).is_empty());
        assert!(field.validate_value(None).is_empty());
    }

    #[test]
    fn test_type_mismatch() {
        let field = FieldSpec::integer("rating");
        let errors = field.validate_value(Some(&json!("five")));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("wrong type"));

        // A float is not a whole number.
        assert_eq!(field.validate_value(Some(&json!(2.5))).len(), 1);
        assert!(field.validate_value(Some(&json!(3))).is_empty());
    }

    #[test]
    fn test_rules_accumulate() {
        let field = FieldSpec::text("password")
            .with_rule(ValidationRule::MinLen(8))
            .with_rule(ValidationRule::Pattern {
                pattern: r"\d".to_string(),
                message: "must contain a digit".to_string(),
            });

        let errors = field.validate_value(Some(&json!("abc")));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_to_title_case() {
        assert_eq!(to_title_case("author_name"), "Author Name");
        assert_eq!(to_title_case("email"), "Email");
        assert_eq!(to_title_case("cta_button_text"), "Cta Button Text");
    }
}

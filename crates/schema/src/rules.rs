//! Validation rules for field values
//!
//! Single-field rules are checked by [`ValidationRule::check`]; the
//! cross-field [`ValidationRule::Matches`] rule is evaluated at the schema
//! level where both values are in scope. Rule checks return a user-facing
//! message on failure, never raw internals.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

// ============================================================================
// ValidationRule
// ============================================================================

/// A declarative validation rule attached to a field specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "value", rename_all = "snake_case")]
pub enum ValidationRule {
    /// Minimum string length (after trimming).
    MinLen(usize),
    /// Maximum string length.
    MaxLen(usize),
    /// Minimum numeric value (inclusive).
    Min(f64),
    /// Maximum numeric value (inclusive).
    Max(f64),
    /// Must look like an email address.
    Email,
    /// Must be an absolute http(s) URL.
    Url,
    /// Must match a regular expression.
    Pattern {
        /// The pattern source.
        pattern: String,
        /// Message shown when the pattern does not match.
        message: String,
    },
    /// Must equal another field of the same draft (e.g. password
    /// confirmation). Checked at the schema level.
    Matches {
        /// Name of the field this one must equal.
        other: String,
        /// Message shown when the values differ.
        message: String,
    },
}

impl ValidationRule {
    /// Convenience constructor for a pattern rule.
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationRule::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Convenience constructor for a cross-field equality rule.
    pub fn matches(other: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationRule::Matches {
            other: other.into(),
            message: message.into(),
        }
    }

    /// Check a single-field rule against a value.
    ///
    /// Returns a user-facing message on failure, `None` on success. The
    /// cross-field `Matches` rule always passes here.
    pub fn check(&self, label: &str, value: &Value) -> Option<String> {
        match self {
            ValidationRule::MinLen(min) => {
                let text = value.as_str()?;
                if text.trim().chars().count() < *min {
                    Some(format!("{label} must be at least {min} characters"))
                } else {
                    None
                }
            }
            ValidationRule::MaxLen(max) => {
                let text = value.as_str()?;
                if text.chars().count() > *max {
                    Some(format!("{label} must be at most {max} characters"))
                } else {
                    None
                }
            }
            ValidationRule::Min(min) => {
                let number = value.as_f64()?;
                if number < *min {
                    Some(format!("{label} must be at least {min}"))
                } else {
                    None
                }
            }
            ValidationRule::Max(max) => {
                let number = value.as_f64()?;
                if number > *max {
                    Some(format!("{label} must be at most {max}"))
                } else {
                    None
                }
            }
            ValidationRule::Email => {
                let text = value.as_str()?;
                if email_regex().is_match(text) {
                    None
                } else {
                    Some(format!("{label} must be a valid email address"))
                }
            }
            ValidationRule::Url => {
                let text = value.as_str()?;
                if text.starts_with("http://") || text.starts_with("https://") || text.starts_with('/') {
                    None
                } else {
                    Some(format!("{label} must be a URL or an absolute path"))
                }
            }
            ValidationRule::Pattern { pattern, message } => {
                let text = value.as_str()?;
                match Regex::new(pattern) {
                    Ok(re) if re.is_match(text) => None,
                    Ok(_) => Some(message.clone()),
                    // An invalid pattern is a schema bug; fail open rather
                    // than block every submission.
                    Err(_) => None,
                }
            }
            ValidationRule::Matches { .. } => None,
        }
    }
}

/// Shared email pattern: one `@`, a non-empty local part and a dotted domain.
fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_min_len() {
        let rule = ValidationRule::MinLen(8);
        assert!(rule.check("Password", &json!("short")).is_some());
        assert!(rule.check("Password", &json!("long enough")).is_none());
        // Whitespace padding does not count.
        assert!(rule.check("Password", &json!("  ab  ")).is_some());
    }

    #[test]
    fn test_max_len() {
        let rule = ValidationRule::MaxLen(5);
        assert!(rule.check("Name", &json!("abcdef")).is_some());
        assert!(rule.check("Name", &json!("abcde")).is_none());
    }

    #[test]
    fn test_numeric_bounds() {
        assert!(ValidationRule::Min(1.0).check("Rating", &json!(0)).is_some());
        assert!(ValidationRule::Min(1.0).check("Rating", &json!(1)).is_none());
        assert!(ValidationRule::Max(5.0).check("Rating", &json!(6)).is_some());
        assert!(ValidationRule::Max(5.0).check("Rating", &json!(5)).is_none());
    }

    #[test]
    fn test_email() {
        let rule = ValidationRule::Email;
        assert!(rule.check("Email", &json!("a@b.com")).is_none());
        assert!(rule.check("Email", &json!("not-an-email")).is_some());
        assert!(rule.check("Email", &json!("two@@b.com")).is_some());
        assert!(rule.check("Email", &json!("a@b")).is_some());
    }

    #[test]
    fn test_url() {
        let rule = ValidationRule::Url;
        assert!(rule.check("Link", &json!("https://example.com/x")).is_none());
        assert!(rule.check("Link", &json!("http://example.com")).is_none());
        assert!(rule.check("Link", &json!("/images/hero.jpg")).is_none());
        assert!(rule.check("Link", &json!("example.com")).is_some());
    }

    #[test]
    fn test_pattern() {
        let rule = ValidationRule::pattern(r"^\d{3}$", "must be three digits");
        assert!(rule.check("Code", &json!("123")).is_none());
        assert_eq!(
            rule.check("Code", &json!("12")).as_deref(),
            Some("must be three digits")
        );
    }

    #[test]
    fn test_invalid_pattern_fails_open() {
        let rule = ValidationRule::pattern("(unclosed", "never shown");
        assert!(rule.check("Code", &json!("anything")).is_none());
    }

    #[test]
    fn test_matches_passes_single_field_check() {
        let rule = ValidationRule::matches("password", "passwords must match");
        assert!(rule.check("Confirm Password", &json!("x")).is_none());
    }

    #[test]
    fn test_rules_ignore_wrong_value_kinds() {
        // Length rules only apply to strings, bounds only to numbers.
        assert!(ValidationRule::MinLen(3).check("X", &json!(42)).is_none());
        assert!(ValidationRule::Min(3.0).check("X", &json!("abc")).is_none());
    }
}

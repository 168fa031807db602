//! # Input Components
//!
//! Reusable form inputs for the admin console:
//! - **TextInput**: single-line input (text, email, url, password, number)
//! - **TextArea**: multi-line input
//! - **Checkbox**: boolean flag
//!
//! All of them are stateless: value in, change events out.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below input
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Input type (text, email, password, url, number)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<()>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = field_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "field-group",

            if let Some(label) = &props.label {
                label {
                    class: "field-label",
                    "{label}"
                    if props.required {
                        span { class: "field-required", "*" }
                    }
                }
            }

            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        props.on_enter.call(());
                    }
                },
            }

            FieldFooter { error: props.error.clone(), help_text: props.help_text.clone() }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Number of visible rows
    #[props(default = 3)]
    pub rows: usize,

    /// Whether required
    #[props(default = false)]
    pub required: bool,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let area_class = field_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "field-group",

            if let Some(label) = &props.label {
                label {
                    class: "field-label",
                    "{label}"
                    if props.required {
                        span { class: "field-required", "*" }
                    }
                }
            }

            textarea {
                class: "{area_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                "{props.value}"
            }

            FieldFooter { error: props.error.clone(), help_text: props.help_text.clone() }
        }
    }
}

// ============================================================================
// Checkbox Component
// ============================================================================

/// Properties for Checkbox component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    /// Whether checked
    pub checked: bool,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Help text
    #[props(default)]
    pub help_text: Option<String>,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Checkbox input component
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label {
            class: if props.disabled { "field-checkbox field-checkbox-disabled" } else { "field-checkbox" },

            input {
                r#type: "checkbox",
                checked: props.checked,
                disabled: props.disabled,
                onchange: move |_| {
                    if !props.disabled {
                        props.on_change.call(!props.checked);
                    }
                },
            }

            if let Some(label) = &props.label {
                span { class: "field-checkbox-label", "{label}" }
            }

            if let Some(help) = &props.help_text {
                span { class: "field-help", "{help}" }
            }
        }
    }
}

// ============================================================================
// Field Footer
// ============================================================================

/// Error message or help text below an input.
#[component]
fn FieldFooter(
    #[props(default)] error: Option<String>,
    #[props(default)] help_text: Option<String>,
) -> Element {
    rsx! {
        if let Some(error) = &error {
            p { class: "field-error", "{error}" }
        } else if let Some(help) = &help_text {
            p { class: "field-help", "{help}" }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build the class string for an input element.
fn field_class(has_error: bool, disabled: bool) -> String {
    let mut class = String::from("field-input");
    if has_error {
        class.push_str(" field-input-error");
    }
    if disabled {
        class.push_str(" field-input-disabled");
    }
    class
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_class_plain() {
        assert_eq!(field_class(false, false), "field-input");
    }

    #[test]
    fn test_field_class_error() {
        let class = field_class(true, false);
        assert!(class.contains("field-input-error"));
        assert!(!class.contains("disabled"));
    }

    #[test]
    fn test_field_class_disabled() {
        let class = field_class(false, true);
        assert!(class.contains("field-input-disabled"));
    }
}

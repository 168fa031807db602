//! # Resource Form
//!
//! Schema-driven create/edit form. The form is a pure function of its
//! `initial` record: `None` starts empty (create mode), `Some(entity)`
//! starts pre-populated (edit mode). Validation runs on submit against the
//! schema's declared rules; `on_submit` never fires with an invalid draft,
//! and never fires while a previous submission is outstanding.
//!
//! The parent must re-key this component when the edited entity changes so
//! the input buffers reinitialise.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use serde_json::Value;

use salon_core::Record;
use salon_schema::{FieldSpec, FieldType, ResourceSchema, ValidationReport};

use crate::components::inputs::{Checkbox, TextArea, TextInput};

// ============================================================================
// Input buffers
// ============================================================================

/// Raw input buffers, one string per field. Booleans are buffered as
/// `"true"` / `"false"`.
pub type InputBuffers = BTreeMap<String, String>;

/// Render a draft value into its input buffer representation.
pub fn value_to_input(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build the initial buffers for a form: from the edited entity in edit
/// mode, from the schema's starting values in create mode.
pub fn init_inputs(schema: &ResourceSchema, initial: Option<&Record>) -> InputBuffers {
    let base = match initial {
        Some(record) => schema.draft_from(record),
        None => schema.empty_draft(),
    };

    schema
        .fields
        .iter()
        .map(|field| {
            let value = base.get(&field.name).cloned().unwrap_or(Value::Null);
            (field.name.clone(), value_to_input(&value))
        })
        .collect()
}

/// Parse one raw input back into a draft value.
///
/// Unparseable numeric input is kept as the raw string so the schema's type
/// check rejects it with a field error instead of it vanishing silently.
pub fn parse_input(field: &FieldSpec, raw: &str) -> Value {
    match field.field_type {
        FieldType::Text | FieldType::LongText => Value::String(raw.to_string()),
        FieldType::Integer => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Value::Null
            } else {
                match trimmed.parse::<i64>() {
                    Ok(n) => Value::from(n),
                    Err(_) => Value::String(raw.to_string()),
                }
            }
        }
        FieldType::Number => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Value::Null
            } else {
                match trimmed.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
                    Some(n) => Value::Number(n),
                    None => Value::String(raw.to_string()),
                }
            }
        }
        FieldType::Bool => Value::Bool(raw == "true"),
    }
}

/// Assemble a draft record from the input buffers.
pub fn parse_inputs(schema: &ResourceSchema, inputs: &InputBuffers) -> Record {
    let mut draft = Record::new();
    for field in &schema.fields {
        let raw = inputs.get(&field.name).map(String::as_str).unwrap_or("");
        draft.set(&field.name, parse_input(field, raw));
    }
    draft
}

// ============================================================================
// Form Field
// ============================================================================

/// Properties for one rendered form field.
#[derive(Props, Clone, PartialEq)]
struct FormFieldProps {
    /// The field specification.
    spec: FieldSpec,

    /// Current buffer value.
    value: String,

    /// Validation error for this field, if any.
    #[props(default)]
    error: Option<String>,

    /// Whether the whole form is disabled (submission in flight).
    #[props(default = false)]
    disabled: bool,

    /// Buffer change handler.
    on_change: EventHandler<String>,
}

/// One schema field rendered as the matching input widget.
#[component]
fn FormField(props: FormFieldProps) -> Element {
    let spec = props.spec.clone();

    match spec.input_type() {
        "textarea" => rsx! {
            TextArea {
                value: props.value.clone(),
                label: Some(spec.label.clone()),
                placeholder: spec.placeholder.clone(),
                help_text: spec.help_text.clone(),
                error: props.error.clone(),
                required: spec.required,
                disabled: props.disabled,
                on_change: move |v| props.on_change.call(v),
            }
        },
        "checkbox" => rsx! {
            Checkbox {
                checked: props.value == "true",
                label: Some(spec.label.clone()),
                help_text: spec.help_text.clone(),
                disabled: props.disabled,
                on_change: move |checked: bool| props.on_change.call(checked.to_string()),
            }
        },
        input_type => rsx! {
            TextInput {
                value: props.value.clone(),
                label: Some(spec.label.clone()),
                placeholder: spec.placeholder.clone(),
                help_text: spec.help_text.clone(),
                error: props.error.clone(),
                required: spec.required,
                disabled: props.disabled,
                input_type: input_type.to_string(),
                on_change: move |v| props.on_change.call(v),
            }
        },
    }
}

// ============================================================================
// Resource Form
// ============================================================================

/// Properties for the ResourceForm component.
#[derive(Props, Clone, PartialEq)]
pub struct ResourceFormProps {
    /// The resource schema driving the fields.
    pub schema: ResourceSchema,

    /// The entity being edited, or `None` for create mode.
    #[props(default)]
    pub initial: Option<Record>,

    /// Whether a submission is in flight (disables the form).
    #[props(default = false)]
    pub submitting: bool,

    /// Called with the validated draft, once per user-initiated submission.
    #[props(default)]
    pub on_submit: EventHandler<Record>,

    /// Called on explicit cancellation (edit mode only).
    #[props(default)]
    pub on_cancel: EventHandler<()>,
}

/// Schema-driven create/edit form.
#[component]
pub fn ResourceForm(props: ResourceFormProps) -> Element {
    let schema = props.schema.clone();
    let editing = props.initial.is_some();

    let mut inputs = use_signal({
        let schema = schema.clone();
        let initial = props.initial.clone();
        move || init_inputs(&schema, initial.as_ref())
    });
    let mut report = use_signal(ValidationReport::ok);

    let handle_submit = {
        let schema = schema.clone();
        move |_| {
            // Disable-on-submit: no second submission while one is out.
            if props.submitting {
                return;
            }

            let draft = parse_inputs(&schema, &inputs.read());
            let result = schema.validate_draft(&draft);
            if result.has_errors() {
                report.set(result);
                return;
            }

            report.set(ValidationReport::ok());
            props.on_submit.call(draft);
        }
    };

    let submit_label = if editing {
        "Save Changes".to_string()
    } else {
        format!("Create {}", schema.title())
    };

    let heading = if editing {
        format!("Edit {}", schema.title())
    } else {
        format!("New {}", schema.title())
    };

    rsx! {
        div {
            class: "card resource-form",

            h3 { class: "card-title", "{heading}" }

            for field in schema.fields.clone() {
                FormField {
                    key: "{field.name}",
                    value: inputs.read().get(&field.name).cloned().unwrap_or_default(),
                    error: report.read().error_for(&field.name).map(str::to_string),
                    disabled: props.submitting,
                    on_change: {
                        let name = field.name.clone();
                        move |v: String| {
                            inputs.write().insert(name.clone(), v);
                        }
                    },
                    spec: field,
                }
            }

            div {
                class: "form-actions",

                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: props.submitting,
                    onclick: handle_submit,
                    if props.submitting {
                        "Saving…"
                    } else {
                        "{submit_label}"
                    }
                }

                if editing {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: props.submitting,
                        onclick: move |_| props.on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use salon_schema::catalog;
    use serde_json::json;

    #[test]
    fn test_init_inputs_create_mode() {
        let schema = catalog::navbar_item();
        let inputs = init_inputs(&schema, None);

        assert_eq!(inputs.get("name").map(String::as_str), Some(""));
        // Declared default carries through.
        assert_eq!(inputs.get("is_active").map(String::as_str), Some("true"));
        assert_eq!(inputs.get("is_external").map(String::as_str), Some("false"));
        // Numbers start blank, not zero.
        assert_eq!(inputs.get("display_order").map(String::as_str), Some(""));
    }

    #[test]
    fn test_init_inputs_edit_mode() {
        let schema = catalog::navbar_item();
        let record = Record::new()
            .with("id", "4")
            .with("name", "Portfolio")
            .with("display_order", 2)
            .with("is_external", true);

        let inputs = init_inputs(&schema, Some(&record));
        assert_eq!(inputs.get("name").map(String::as_str), Some("Portfolio"));
        assert_eq!(inputs.get("display_order").map(String::as_str), Some("2"));
        assert_eq!(inputs.get("is_external").map(String::as_str), Some("true"));
        // The id never enters the buffers.
        assert!(!inputs.contains_key("id"));
    }

    #[test]
    fn test_parse_input_round_trip() {
        let schema = catalog::service_item();
        let duration = schema.field("duration").unwrap();
        let price = schema.field("price").unwrap();
        let active = schema.field("is_active").unwrap();

        assert_eq!(parse_input(duration, "45"), json!(45));
        assert_eq!(parse_input(price, "19.5"), json!(19.5));
        assert_eq!(parse_input(active, "true"), json!(true));
        assert_eq!(parse_input(duration, ""), Value::Null);
    }

    #[test]
    fn test_unparseable_number_kept_for_type_error() {
        let schema = catalog::service_item();
        let duration = schema.field("duration").unwrap();

        let value = parse_input(duration, "soon");
        assert_eq!(value, json!("soon"));

        // The schema flags it instead of silently dropping the input.
        let mut inputs = init_inputs(&schema, None);
        inputs.insert("name".to_string(), "Manicure".to_string());
        inputs.insert("duration".to_string(), "soon".to_string());
        inputs.insert("price".to_string(), "25".to_string());
        inputs.insert("category".to_string(), "Nails".to_string());

        let draft = parse_inputs(&schema, &inputs);
        let report = schema.validate_draft(&draft);
        assert!(report.error_for("duration").unwrap().contains("wrong type"));
    }

    #[test]
    fn test_parse_inputs_builds_valid_draft() {
        let schema = catalog::advertise();
        let mut inputs = init_inputs(&schema, None);
        inputs.insert("happy_customers".to_string(), "1200".to_string());
        inputs.insert("years_experience".to_string(), "15".to_string());
        inputs.insert("branches".to_string(), "3".to_string());

        let draft = parse_inputs(&schema, &inputs);
        assert!(schema.validate_draft(&draft).is_valid());
        assert_eq!(draft.get_i64("happy_customers"), Some(1200));
    }

    #[test]
    fn test_value_to_input() {
        assert_eq!(value_to_input(&Value::Null), "");
        assert_eq!(value_to_input(&json!(true)), "true");
        assert_eq!(value_to_input(&json!(7)), "7");
        assert_eq!(value_to_input(&json!("hi")), "hi");
    }
}

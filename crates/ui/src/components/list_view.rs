//! # Resource Table
//!
//! Schema-driven list view. Renders one row per record in the order it is
//! given (the page model already applied any display sort), with edit and
//! delete actions per row. The table holds no collection state of its own;
//! re-rendering is a pure function of the `rows` prop.
//!
//! Secret fields render a fixed mask, never their value. Deletes stage a
//! confirmation dialog before the delete callback fires.

use dioxus::prelude::*;
use serde_json::Value;

use salon_core::Record;
use salon_schema::{FieldSpec, ResourceSchema};

/// Fixed placeholder shown instead of secret field values.
pub const SECRET_MASK: &str = "••••••••";

/// Placeholder for missing values.
const EMPTY_CELL: &str = "—";

// ============================================================================
// Cell rendering
// ============================================================================

/// Text shown for one field of one record.
///
/// Secret fields always render the mask, regardless of content.
pub fn cell_text(field: &FieldSpec, record: &Record) -> String {
    if field.secret {
        return SECRET_MASK.to_string();
    }

    match record.get(&field.name) {
        None | Some(Value::Null) => EMPTY_CELL.to_string(),
        Some(Value::Bool(true)) => "Yes".to_string(),
        Some(Value::Bool(false)) => "No".to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// ============================================================================
// Resource Table
// ============================================================================

/// Properties for the ResourceTable component.
#[derive(Props, Clone, PartialEq)]
pub struct ResourceTableProps {
    /// The resource schema driving the columns.
    pub schema: ResourceSchema,

    /// Rows to render, already in display order.
    pub rows: Vec<Record>,

    /// Whether a list fetch is in flight.
    #[props(default = false)]
    pub loading: bool,

    /// Whether a mutation is in flight (disables row actions).
    #[props(default = false)]
    pub busy: bool,

    /// Edit trigger, called with the row id.
    #[props(default)]
    pub on_edit: EventHandler<String>,

    /// Delete trigger, called with the row id after confirmation.
    #[props(default)]
    pub on_delete: EventHandler<String>,
}

/// Schema-driven collection table with per-row actions.
#[component]
pub fn ResourceTable(props: ResourceTableProps) -> Element {
    let mut pending_delete: Signal<Option<String>> = use_signal(|| None);

    let columns: Vec<FieldSpec> = props.schema.list_fields().cloned().collect();
    let plural = props.schema.plural.clone();
    let singular = props.schema.singular.clone();

    rsx! {
        div {
            class: "card resource-table",

            if props.loading && props.rows.is_empty() {
                div {
                    class: "table-loading",
                    div { class: "spinner" }
                    span { "Loading {plural}…" }
                }
            } else if props.rows.is_empty() {
                div {
                    class: "table-empty",
                    "No {plural} yet. Create one to get started."
                }
            } else {
                table {
                    class: "data-table",

                    thead {
                        tr {
                            for column in columns.iter() {
                                th { key: "{column.name}", "{column.label}" }
                            }
                            th { class: "actions-column", "Actions" }
                        }
                    }

                    tbody {
                        for record in props.rows.iter() {
                            {
                                let id = record.id().unwrap_or_default();
                                let edit_id = id.clone();
                                let delete_id = id.clone();
                                rsx! {
                                    tr {
                                        key: "{id}",

                                        for column in columns.iter() {
                                            td { key: "{column.name}", {cell_text(column, record)} }
                                        }

                                        td {
                                            class: "actions-column",

                                            button {
                                                class: "btn btn-ghost btn-sm",
                                                r#type: "button",
                                                disabled: props.busy,
                                                onclick: move |_| props.on_edit.call(edit_id.clone()),
                                                "Edit"
                                            }

                                            button {
                                                class: "btn btn-danger btn-sm",
                                                r#type: "button",
                                                disabled: props.busy,
                                                onclick: move |_| pending_delete.set(Some(delete_id.clone())),
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Delete confirmation overlay
            if let Some(id) = pending_delete.read().clone() {
                DeleteConfirmDialog {
                    item_label: format!("{singular} {id}"),
                    busy: props.busy,
                    on_cancel: move |_| pending_delete.set(None),
                    on_confirm: {
                        let id = id.clone();
                        move |_| {
                            pending_delete.set(None);
                            props.on_delete.call(id.clone());
                        }
                    },
                }
            }
        }
    }
}

// ============================================================================
// Delete Confirmation Dialog
// ============================================================================

/// Properties for the delete confirmation dialog.
#[derive(Props, Clone, PartialEq)]
struct DeleteConfirmDialogProps {
    /// What is being deleted, for the message.
    item_label: String,

    /// Whether another mutation is still in flight.
    #[props(default = false)]
    busy: bool,

    /// Confirmation handler.
    #[props(default)]
    on_confirm: EventHandler<()>,

    /// Cancellation handler.
    #[props(default)]
    on_cancel: EventHandler<()>,
}

/// Confirmation dialog shown before a delete fires.
#[component]
fn DeleteConfirmDialog(props: DeleteConfirmDialogProps) -> Element {
    rsx! {
        div {
            class: "dialog-overlay",

            div {
                class: "dialog",

                div {
                    class: "dialog-header",
                    span { class: "dialog-icon", "⚠" }
                    h3 { "Delete {props.item_label}?" }
                }

                p {
                    class: "dialog-message",
                    "This cannot be undone."
                }

                div {
                    class: "dialog-actions",

                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| props.on_cancel.call(()),
                        "Cancel"
                    }

                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        disabled: props.busy,
                        onclick: move |_| props.on_confirm.call(()),
                        "Delete"
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

    #[test]
    fn test_secret_fields_always_masked() {
        // The password never renders, no matter what the record holds.
        let schema = catalog::login();
        let email = schema.field("email").unwrap();
        let password = schema.field("password").unwrap();

        let record = Record::new()
            .with("email", "a@b.com")
            .with("password", "secret");

        assert_eq!(cell_text(email, &record), "a@b.com");
        assert_eq!(cell_text(password, &record), SECRET_MASK);
        assert!(!cell_text(password, &record).contains("secret"));

        // Even a missing secret value renders the mask, not the
        // empty-cell placeholder.
        let blank = Record::new().with("email", "a@b.com");
        assert_eq!(cell_text(password, &blank), SECRET_MASK);
    }

    #[test]
    fn test_cell_text_primitives() {
        let schema = catalog::navbar_item();
        let name = schema.field("name").unwrap();
        let order = schema.field("display_order").unwrap();
        let active = schema.field("is_active").unwrap();

        let record = Record::new()
            .with("name", "Home")
            .with("display_order", 1)
            .with("is_active", true);

        assert_eq!(cell_text(name, &record), "Home");
        assert_eq!(cell_text(order, &record), "1");
        assert_eq!(cell_text(active, &record), "Yes");
    }

    #[test]
    fn test_cell_text_missing_value() {
        let schema = catalog::navbar_item();
        let url = schema.field("url").unwrap();
        assert_eq!(cell_text(url, &Record::new()), EMPTY_CELL);
    }
}

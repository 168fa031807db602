//! # Resource Panel
//!
//! The one page component behind every resource section: a schema-driven
//! form above a schema-driven table, wired to a [`PageModel`] held in a
//! page-scoped signal. The model makes every lifecycle decision; this
//! component only runs the client round trips in scope-bound tasks.
//!
//! Tasks spawned here die with the component scope, so a response arriving
//! after navigation away can never touch the dead page's state.

use dioxus::prelude::*;

use salon_core::Record;
use salon_page::{NextAction, PageModel, SubmitPlan};
use salon_schema::ResourceSchema;

use crate::components::{Alert, AlertLevel, ResourceForm, ResourceTable};
use crate::state::shell_api_client;

/// Properties for the ResourcePanel component.
#[derive(Props, Clone, PartialEq)]
pub struct ResourcePanelProps {
    /// The resource schema this panel manages.
    pub schema: ResourceSchema,

    /// Optional blurb under the heading.
    #[props(default)]
    pub description: Option<String>,
}

/// Generic CRUD panel for one resource.
#[component]
pub fn ResourcePanel(props: ResourcePanelProps) -> Element {
    let schema = props.schema.clone();

    let mut model = use_signal({
        let schema = schema.clone();
        move || PageModel::new(schema.clone())
    });
    let mut reload_tick = use_signal(|| 0u32);

    let bump_reload = move || {
        let current = *reload_tick.peek();
        reload_tick.set(current.wrapping_add(1));
    };

    // Mount-time fetch, manual refresh and post-mutation resync all go
    // through the tick; the model refuses a load while a mutation is out.
    use_effect({
        let schema = schema.clone();
        move || {
            let _ = *reload_tick.read();
            let client = shell_api_client().resource(&schema);
            spawn(async move {
                if model.write().begin_load() {
                    let result = client.list().await;
                    model.write().finish_load(result);
                }
            });
        }
    });

    let on_submit = {
        let schema = schema.clone();
        move |draft: Record| {
            let plan = model.write().begin_submit(&draft);
            let client = shell_api_client().resource(&schema);
            match plan {
                SubmitPlan::Create(payload) => {
                    spawn(async move {
                        let result = client.create(&payload).await;
                        if model.write().finish_submit(result) == NextAction::Reload {
                            bump_reload();
                        }
                    });
                }
                SubmitPlan::Update { id, draft } => {
                    spawn(async move {
                        let result = client.update(&id, &draft).await;
                        if model.write().finish_submit(result) == NextAction::Reload {
                            bump_reload();
                        }
                    });
                }
                // The form already validated, and it is disabled while a
                // submission is out; nothing to do for either.
                SubmitPlan::Busy | SubmitPlan::Invalid(_) => {}
            }
        }
    };

    let on_delete = {
        let schema = schema.clone();
        move |id: String| {
            if model.write().begin_delete(&id) {
                let client = shell_api_client().resource(&schema);
                spawn(async move {
                    let result = client.remove(&id).await;
                    if model.write().finish_delete(result) == NextAction::Reload {
                        bump_reload();
                    }
                });
            }
        }
    };

    // Snapshot the model once per render.
    let (status, rows, selection, error, flash, busy) = {
        let m = model.read();
        (
            m.status(),
            m.display_rows(),
            m.selection().cloned(),
            m.error().map(str::to_string),
            m.flash().map(str::to_string),
            m.is_busy(),
        )
    };

    let heading = {
        let mut chars = schema.plural.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().chain(chars).collect(),
        }
    };

    // Re-key the form when the edited entity changes so its buffers
    // reinitialise from the new initial values.
    let form_key = selection
        .as_ref()
        .and_then(Record::id)
        .unwrap_or_else(|| "create".to_string());

    rsx! {
        div {
            class: "resource-panel",

            // Panel header
            div {
                class: "panel-header",

                h2 { class: "panel-title", "{heading}" }

                button {
                    class: "btn btn-secondary btn-sm",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| bump_reload(),
                    "↻ Refresh"
                }
            }

            if let Some(desc) = &props.description {
                p { class: "panel-description", "{desc}" }
            }

            // Success flash
            if let Some(msg) = flash.clone() {
                Alert {
                    message: msg,
                    level: AlertLevel::Success,
                    on_dismiss: move |_| model.write().dismiss_flash(),
                }
            }

            // Error banner
            if let Some(msg) = error.clone() {
                Alert {
                    message: msg,
                    level: AlertLevel::Error,
                    on_dismiss: move |_| model.write().dismiss_error(),
                }
            }

            div {
                class: "panel-body",

                ResourceForm {
                    key: "{form_key}",
                    schema: schema.clone(),
                    initial: selection.clone(),
                    submitting: busy,
                    on_submit: on_submit,
                    on_cancel: move |_| model.write().cancel_edit(),
                }

                ResourceTable {
                    schema: schema.clone(),
                    rows: rows,
                    loading: status.is_loading(),
                    busy: busy,
                    on_edit: move |id: String| {
                        model.write().edit(&id);
                    },
                    on_delete: on_delete,
                }
            }
        }
    }
}

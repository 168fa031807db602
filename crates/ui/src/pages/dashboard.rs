//! Dashboard landing page

use dioxus::prelude::*;

use crate::state::{SHELL_STATE, Section};

/// Overview page with a quick-access card per resource section.
#[component]
pub fn DashboardPage() -> Element {
    rsx! {
        div {
            class: "dashboard",

            div {
                class: "panel-header",
                h2 { class: "panel-title", "Dashboard" }
            }

            p {
                class: "panel-description",
                "Manage the marketing site content using the navigation on the left, or the quick links below."
            }

            div {
                class: "card-grid",

                for section in Section::resources() {
                    DashboardCard { key: "{section.display_name()}", section: *section }
                }
            }
        }
    }
}

/// One quick-access card.
#[component]
fn DashboardCard(section: Section) -> Element {
    let field_count = section.schema().map(|s| s.fields.len()).unwrap_or(0);

    rsx! {
        div {
            class: "card",

            div {
                class: "card-header",
                span { class: "card-icon", "{section.icon()}" }
                h3 { class: "card-title", "{section.display_name()}" }
                span { class: "badge", "{field_count} fields" }
            }

            p { class: "card-text", "{section.description()}" }

            button {
                class: "btn btn-primary btn-sm",
                r#type: "button",
                onclick: move |_| SHELL_STATE.write().navigate(section),
                "Open"
            }
        }
    }
}

//! Main application component
//!
//! Root layout of the admin console: header, sidebar navigation and the
//! active section's content. Each resource section mounts its own
//! `ResourcePanel`, which owns its collection and selection; switching
//! sections unmounts the old panel together with its in-flight tasks.

use dioxus::prelude::*;

use crate::pages::{
    AdvertisePage, BannerPage, ContactPage, DashboardPage, LoginPage, NavbarItemPage,
    RegisterPage, ServiceItemPage, ServicePage, SignInPage, TestimonialPage,
};
use crate::state::{SHELL_STATE, Section};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component.
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("salon admin console initialized");
    });

    rsx! {
        div {
            class: "app-container",

            Header {}

            div {
                class: "app-main",

                Sidebar {}
                MainContent {}
            }
        }
    }
}

// ============================================================================
// Header
// ============================================================================

/// Top header with branding and session controls.
#[component]
fn Header() -> Element {
    let shell = SHELL_STATE.read();
    let signed_in = shell.is_signed_in();
    let user_email = shell.user_email().map(str::to_string);
    drop(shell);

    rsx! {
        header {
            class: "app-header",

            div {
                class: "app-brand",
                span { class: "app-brand-icon", "🌸" }
                span { class: "app-brand-name", "Salon Admin" }
            }

            div { class: "app-header-spacer" }

            if signed_in {
                if let Some(email) = user_email {
                    span { class: "session-email", "{email}" }
                }
                button {
                    class: "btn btn-ghost btn-sm",
                    r#type: "button",
                    onclick: move |_| SHELL_STATE.write().sign_out(),
                    "Sign Out"
                }
            } else {
                button {
                    class: "btn btn-primary btn-sm",
                    r#type: "button",
                    onclick: move |_| SHELL_STATE.write().navigate(Section::SignIn),
                    "Sign In"
                }
            }
        }
    }
}

// ============================================================================
// Sidebar
// ============================================================================

/// Left navigation: dashboard plus one entry per resource section.
#[component]
fn Sidebar() -> Element {
    let active = SHELL_STATE.read().active_section;

    rsx! {
        nav {
            class: "app-sidebar",

            SidebarItem { section: Section::Dashboard, active: active == Section::Dashboard }

            div { class: "sidebar-heading", "Content" }

            for section in Section::resources() {
                SidebarItem {
                    key: "{section.display_name()}",
                    section: *section,
                    active: active == *section,
                }
            }
        }
    }
}

/// One sidebar navigation entry.
#[component]
fn SidebarItem(section: Section, active: bool) -> Element {
    rsx! {
        button {
            class: if active { "sidebar-item sidebar-item-active" } else { "sidebar-item" },
            r#type: "button",
            onclick: move |_| SHELL_STATE.write().navigate(section),

            span { class: "sidebar-item-icon", "{section.icon()}" }
            span { class: "sidebar-item-label", "{section.display_name()}" }
        }
    }
}

// ============================================================================
// Main Content
// ============================================================================

/// The active section's content.
#[component]
fn MainContent() -> Element {
    let active = SHELL_STATE.read().active_section;

    rsx! {
        main {
            class: "app-content",

            match active {
                Section::Dashboard => rsx! { DashboardPage {} },
                Section::Banner => rsx! { BannerPage {} },
                Section::Service => rsx! { ServicePage {} },
                Section::ServiceItem => rsx! { ServiceItemPage {} },
                Section::Testimonial => rsx! { TestimonialPage {} },
                Section::NavbarItem => rsx! { NavbarItemPage {} },
                Section::Advertise => rsx! { AdvertisePage {} },
                Section::Contact => rsx! { ContactPage {} },
                Section::Login => rsx! { LoginPage {} },
                Section::Register => rsx! { RegisterPage {} },
                Section::SignIn => rsx! { SignInPage {} },
            }
        }
    }
}

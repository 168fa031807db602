//! # Salon UI
//!
//! Dioxus Desktop UI for the salon admin console.
//!
//! Every resource section is the same pair of stateless views (a
//! schema-driven form and a schema-driven table) wired to a page-scoped
//! lifecycle model. The shell adds navigation, the session and a
//! dashboard.
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use salon_client;
pub use salon_page;
pub use salon_schema;

// Re-export main components
pub use app::App;
pub use components::{
    Alert, AlertLevel, Checkbox, ResourceForm, ResourceTable, SECRET_MASK, TextArea, TextInput,
    cell_text,
};
pub use pages::{DashboardPage, ResourcePanel, SignInPage};
pub use state::{SHELL_STATE, Section, ShellState, shell_api_client};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Salon Admin";

/// Application window title
pub const TITLE: &str = "Salon Admin - Marketing Site Console";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the admin console desktop application.
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     salon_ui::launch();
/// }
/// ```
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 840.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_title_mentions_app() {
        assert!(TITLE.contains(NAME));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".app-container"));
    }
}

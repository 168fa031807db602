//! Dismissible alert banner

use dioxus::prelude::*;

/// Severity of an alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    /// Something succeeded.
    Success,
    /// Something failed.
    Error,
}

impl AlertLevel {
    fn class(&self) -> &'static str {
        match self {
            AlertLevel::Success => "alert alert-success",
            AlertLevel::Error => "alert alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            AlertLevel::Success => "✓",
            AlertLevel::Error => "✗",
        }
    }
}

/// Properties for the Alert component.
#[derive(Props, Clone, PartialEq)]
pub struct AlertProps {
    /// The message to show.
    pub message: String,

    /// Severity.
    pub level: AlertLevel,

    /// Dismiss handler.
    #[props(default)]
    pub on_dismiss: EventHandler<()>,
}

/// Dismissible alert banner for operation outcomes.
#[component]
pub fn Alert(props: AlertProps) -> Element {
    rsx! {
        div {
            class: "{props.level.class()}",

            span { class: "alert-icon", "{props.level.icon()}" }
            span { class: "alert-message", "{props.message}" }

            button {
                class: "alert-dismiss",
                r#type: "button",
                onclick: move |_| props.on_dismiss.call(()),
                "×"
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

    #[test]
    fn test_level_classes() {
        assert!(AlertLevel::Success.class().contains("alert-success"));
        assert!(AlertLevel::Error.class().contains("alert-error"));
    }
}

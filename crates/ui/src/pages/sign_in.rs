//! Session sign-in page
//!
//! The degenerate case of the CRUD pattern: a credential form whose
//! "create" returns a token and a user profile instead of an echoed
//! entity. The resulting session lives in the shell state; the HTTP client
//! attaches it as a bearer token from then on. Nothing is persisted to
//! disk.

use dioxus::prelude::*;

use salon_core::Record;
use salon_schema::{ValidationReport, catalog};

use crate::components::TextInput;
use crate::state::{SHELL_STATE, Section, shell_api_client};

/// Sign-in form for the admin session.
#[component]
pub fn SignInPage() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut report = use_signal(ValidationReport::ok);
    let mut error_msg: Signal<Option<String>> = use_signal(|| None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_: ()| {
        if *submitting.read() {
            return;
        }

        // The login resource schema carries exactly the credential rules.
        let schema = catalog::login();
        let draft = Record::new()
            .with("email", email.read().clone())
            .with("password", password.read().clone());

        let result = schema.validate_draft(&draft);
        if result.has_errors() {
            report.set(result);
            return;
        }
        report.set(ValidationReport::ok());
        error_msg.set(None);
        submitting.set(true);

        let client = shell_api_client();
        spawn(async move {
            match client.login(&draft).await {
                Ok(session) => {
                    let mut shell = SHELL_STATE.write();
                    shell.sign_in(session);
                    shell.navigate(Section::Dashboard);
                }
                Err(error) => {
                    tracing::debug!(%error, "sign-in failed");
                    error_msg.set(Some("Sign-in failed. Check your credentials.".to_string()));
                }
            }
            submitting.set(false);
        });
    };

    let busy = *submitting.read();

    rsx! {
        div {
            class: "sign-in",

            div {
                class: "card sign-in-card",

                h2 { class: "card-title", "Sign In" }
                p { class: "card-text", "Sign in to manage the salon marketing site." }

                if let Some(msg) = error_msg.read().clone() {
                    p { class: "field-error", "{msg}" }
                }

                TextInput {
                    value: email.read().clone(),
                    label: Some("Email".to_string()),
                    placeholder: Some("owner@salon.com".to_string()),
                    input_type: "email".to_string(),
                    required: true,
                    disabled: busy,
                    error: report.read().error_for("email").map(str::to_string),
                    on_change: move |v| email.set(v),
                }

                TextInput {
                    value: password.read().clone(),
                    label: Some("Password".to_string()),
                    input_type: "password".to_string(),
                    required: true,
                    disabled: busy,
                    error: report.read().error_for("password").map(str::to_string),
                    on_change: move |v| password.set(v),
                    on_enter: move |_| handle_submit(()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| handle_submit(()),
                    if busy { "Signing in…" } else { "Sign In" }
                }
            }
        }
    }
}

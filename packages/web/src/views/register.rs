//! Registration page view.

use std::time::Duration;

use api::client::REGISTER_FAILED;
use api::{Backend, Registration};
use dioxus::prelude::*;
use ui::use_backend;

use crate::Route;

const PASSWORD_MISMATCH: &str = "Passwords do not match";
const CONNECT_ERROR: &str = "Something went wrong";
const REDIRECT_DELAY: Duration = Duration::from_secs(2);

fn check_passwords(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password == confirm {
        Ok(())
    } else {
        Err(PASSWORD_MISMATCH)
    }
}

/// Registration page component.
#[component]
pub fn Register() -> Element {
    let backend = use_backend();
    let nav = use_navigator();
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        spawn(async move {
            error.set(None);
            success.set(None);

            if let Err(message) = check_passwords(&password(), &confirm_password()) {
                error.set(Some(message.to_string()));
                return;
            }

            let registration = Registration {
                full_name: full_name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
            };

            loading.set(true);
            let result = backend.register(&registration).await;
            loading.set(false);
            match result {
                Ok(()) => {
                    tracing::info!("Registered {}", registration.email);
                    success.set(Some(
                        "Registration successful! Redirecting to login...".to_string(),
                    ));
                    full_name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    confirm_password.set(String::new());
                    ui::sleep(REDIRECT_DELAY).await;
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {e}");
                    error.set(Some(e.user_message(CONNECT_ERROR, REGISTER_FAILED)));
                }
            }
        });
    };

    rsx! {
        div {
            class: "view-page",

            h1 { class: "view-title", "Create Account" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "view-notice error", "{err}" }
                }
                if let Some(message) = success() {
                    div { class: "view-notice success", "{message}" }
                }

                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Full Name",
                    required: true,
                    value: full_name(),
                    oninput: move |evt: FormEvent| full_name.set(evt.value()),
                }

                input {
                    class: "input",
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Password (min 6 characters)",
                    required: true,
                    minlength: "6",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Confirm password",
                    required: true,
                    minlength: "6",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Register" }
                }
            }

            p {
                class: "view-muted",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}

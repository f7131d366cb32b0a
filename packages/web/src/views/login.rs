//! Login page view.

use api::client::LOGIN_FAILED;
use api::Backend;
use dioxus::prelude::*;
use ui::{use_auth, use_backend, AuthActions};

use crate::Route;

const CONNECT_ERROR: &str = "Something went wrong";

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let backend = use_backend();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Signed in, now or already: go to the resumes.
    use_effect(move || {
        if auth().is_authenticated() {
            nav.replace(Route::Resumes {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let result = backend.login(email().trim(), &password()).await;
            loading.set(false);
            match result {
                Ok(user) => {
                    email.set(String::new());
                    password.set(String::new());
                    // The redirect effect above picks up the new session.
                    auth.login(user);
                }
                Err(e) => {
                    tracing::warn!("Login failed: {e}");
                    error.set(Some(e.user_message(CONNECT_ERROR, LOGIN_FAILED)));
                }
            }
        });
    };

    rsx! {
        div {
            class: "view-page",

            h1 { class: "view-title", "Login" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "view-notice error", "{err}" }
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
                    placeholder: "Password",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Login" }
                }
            }

            p {
                class: "view-muted",
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::use_auth;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Landing page.
#[component]
pub fn HomeView(on_get_started: EventHandler<()>, on_create_resume: EventHandler<()>) -> Element {
    let auth = use_auth();
    let signed_in = auth().is_authenticated();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page hero",
            h1 { class: "view-title", "Build a resume that gets noticed" }
            p {
                class: "view-muted",
                "Write your resume once, let AI sharpen it, and download a polished PDF."
            }
            if signed_in {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_create_resume.call(()),
                    "Create Resume"
                }
            } else {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_get_started.call(()),
                    "Get Started"
                }
            }
        }
    }
}

use api::client::USER_NOT_FOUND;
use api::{Backend, User, UserId};
use dioxus::prelude::*;

use crate::use_backend;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");
const LOAD_ERROR: &str = "Something went wrong";

/// Account details fetched fresh from the backend.
#[component]
pub fn ProfileView(user_id: UserId) -> Element {
    let backend = use_backend();

    let profile = use_resource(use_reactive!(|user_id| {
        let backend = backend.clone();
        async move {
            backend.get_user(user_id).await.map_err(|e| {
                tracing::warn!("Loading profile {user_id} failed: {e}");
                e.user_message(LOAD_ERROR, USER_NOT_FOUND)
            })
        }
    }));

    let body = match &*profile.read() {
        None => rsx! { p { class: "view-muted", "Loading profile..." } },
        Some(Err(message)) => rsx! { div { class: "view-notice error", "{message}" } },
        Some(Ok(user)) => rsx! { ProfileDetails { user: user.clone() } },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page max-w-3xl mx-auto w-full",
            h1 { class: "view-title", "Profile" }
            {body}
        }
    }
}

#[component]
fn ProfileDetails(user: User) -> Element {
    rsx! {
        dl {
            class: "profile-details",
            dt { "Full Name" }
            dd { "{user.display_name()}" }
            dt { "Email" }
            dd { "{user.email}" }
            dt { "Premium" }
            dd { if user.is_premium { "Yes" } else { "No" } }
        }
    }
}

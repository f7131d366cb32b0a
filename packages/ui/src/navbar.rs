use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::icons::FaCrown;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar. `children` are the platform's route links; the premium badge and
/// logout button are added here when a user is signed in.
#[component]
pub fn Navbar(
    children: Element,
    on_go_premium: EventHandler<()>,
    #[props(default)] on_logout: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let signed_in = auth().is_authenticated();
    let premium = auth().is_premium();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            div { class: "navbar-links", {children} }
            if signed_in {
                div {
                    class: "navbar-session",
                    if premium {
                        span {
                            class: "premium-badge",
                            Icon { icon: FaCrown, width: 12, height: 12 }
                            " Premium"
                        }
                    } else {
                        button {
                            class: "btn btn-premium",
                            onclick: move |_| on_go_premium.call(()),
                            "Go Premium"
                        }
                    }
                    LogoutButton { class: "btn btn-outline", on_logout: on_logout }
                }
            }
        }
    }
}

use api::UserId;
use dioxus::prelude::*;
use store::AppConfig;

use ui::{AuthProvider, BackendProvider, Navbar};
use views::{Checkout, CreateResume, Home, Login, Profile, Register, Resumes};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/register")]
    Register {},
    #[route("/login")]
    Login {},
    #[route("/resumes/new")]
    CreateResume {},
    #[route("/resumes")]
    Resumes {},
    #[route("/profile/:id")]
    Profile { id: UserId },
    #[route("/checkout")]
    Checkout {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const APP_TOML: &str = include_str!("../app.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| AppConfig::load(APP_TOML));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        BackendProvider {
            config: config,
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Navbar over every page.
#[component]
fn Shell() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();
    let user_id = auth().user.as_ref().map(|u| u.id);

    rsx! {
        Navbar {
            on_go_premium: move |_| {
                nav.push(Route::Checkout {});
            },
            on_logout: move |_| {
                nav.push(Route::Login {});
            },
            Link { class: "brand", to: Route::Home {}, "BatistAI" }
            Link { to: Route::Home {}, "Home" }
            if let Some(id) = user_id {
                Link { to: Route::CreateResume {}, "Create Resume" }
                Link { to: Route::Resumes {}, "My Resumes" }
                Link { to: Route::Profile { id }, "Profile" }
            } else {
                Link { to: Route::Login {}, "Login" }
                Link { to: Route::Register {}, "Register" }
            }
        }
        Outlet::<Route> {}
    }
}

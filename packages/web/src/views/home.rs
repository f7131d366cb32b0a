use dioxus::prelude::*;
use ui::views::HomeView;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        HomeView {
            on_get_started: move |_| {
                nav.push(Route::Register {});
            },
            on_create_resume: move |_| {
                nav.push(Route::CreateResume {});
            },
        }
    }
}

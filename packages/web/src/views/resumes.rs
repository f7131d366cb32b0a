use dioxus::prelude::*;
use ui::views::{ResumeFormView, ResumeListView};

use crate::Route;

#[component]
pub fn CreateResume() -> Element {
    rsx! {
        ResumeFormView {}
    }
}

#[component]
pub fn Resumes() -> Element {
    let nav = use_navigator();

    rsx! {
        ResumeListView {
            on_upgrade: move |_| {
                nav.push(Route::Checkout {});
            },
        }
    }
}

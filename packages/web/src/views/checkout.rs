use dioxus::prelude::*;
use ui::views::CheckoutView;

use crate::Route;

#[component]
pub fn Checkout() -> Element {
    let nav = use_navigator();

    rsx! {
        CheckoutView {
            on_paid: move |id| {
                nav.push(Route::Profile { id });
            },
        }
    }
}

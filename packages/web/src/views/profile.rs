use api::UserId;
use dioxus::prelude::*;
use ui::views::ProfileView;

#[component]
pub fn Profile(id: UserId) -> Element {
    rsx! {
        ProfileView { user_id: id }
    }
}

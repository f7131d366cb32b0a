//! Shared UI for BatistAI: session and backend contexts, page state, and the
//! views the platform crates route to.
//!
//! Page logic (`resume_list`, `resume_form`, `checkout`) is plain state over
//! [`api::Backend`] and is tested without a renderer; the views only wire it
//! to signals.

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::make_session;

mod platform;
pub use platform::{alert, confirm, sleep};

mod backend;
pub use backend::{use_backend, use_config, BackendProvider};

mod auth;
pub use auth::{use_auth, AuthActions, AuthProvider, AuthState, LogoutButton};

mod navbar;
pub use navbar::Navbar;

mod js;

pub mod checkout;
pub mod export;
pub mod payment;
pub mod resume_form;
pub mod resume_list;

mod resume_card;
pub use resume_card::ResumeCard;

pub mod views;

#[cfg(test)]
mod testing;

//! Authentication context and hooks for the UI.
//!
//! The signed-in [`User`] is held in a `Signal<AuthState>` provided by
//! [`AuthProvider`] and persisted as JSON through [`store::SessionStore`], so a
//! reload restores the session without a network call.

use api::User;
use dioxus::prelude::*;
use store::{KeyValueStore, SessionStore};

use crate::session::make_session;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    /// Restore the persisted user. An unreadable blob is discarded and the
    /// session starts signed out.
    pub fn restore<S: KeyValueStore>(session: &SessionStore<S>) -> Self {
        match session.load::<User>() {
            Ok(user) => Self { user },
            Err(e) => {
                tracing::warn!("Discarding stored session: {e}");
                if let Err(e) = session.clear() {
                    tracing::warn!("Failed to clear stored session: {e}");
                }
                Self::default()
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_premium(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_premium)
    }

    /// Replace the current user and persist it.
    pub fn login<S: KeyValueStore>(&mut self, session: &SessionStore<S>, user: User) {
        if let Err(e) = session.save(&user) {
            tracing::warn!("Failed to persist session: {e}");
        }
        self.user = Some(user);
    }

    /// Clear the current user and the persisted copy.
    pub fn logout<S: KeyValueStore>(&mut self, session: &SessionStore<S>) {
        self.user = None;
        if let Err(e) = session.clear() {
            tracing::warn!("Failed to clear stored session: {e}");
        }
    }

    /// Patch the premium flag on the current user and re-persist. No-op when
    /// signed out.
    pub fn update_premium_status<S: KeyValueStore>(
        &mut self,
        session: &SessionStore<S>,
        is_premium: bool,
    ) {
        let Some(user) = self.user.as_mut() else {
            return;
        };
        user.is_premium = is_premium;
        if let Err(e) = session.save(&*user) {
            tracing::warn!("Failed to persist session: {e}");
        }
    }
}

/// Session mutators bound to the platform session store.
pub trait AuthActions {
    fn login(&mut self, user: User);
    fn logout(&mut self);
    fn update_premium_status(&mut self, is_premium: bool);
}

impl AuthActions for Signal<AuthState> {
    fn login(&mut self, user: User) {
        tracing::info!("Signed in as user {}", user.id);
        self.write().login(&make_session(), user);
    }

    fn logout(&mut self) {
        self.write().logout(&make_session());
    }

    fn update_premium_status(&mut self, is_premium: bool) {
        self.write().update_premium_status(&make_session(), is_premium);
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
///
/// Panics when called outside [`AuthProvider`].
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that restores and shares authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(|| AuthState::restore(&make_session()));

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] on_logout: EventHandler<()>,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| {
        auth_state.logout();
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

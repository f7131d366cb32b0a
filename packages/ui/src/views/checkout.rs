use api::UserId;
use dioxus::prelude::*;

use crate::auth::AuthActions;
use crate::checkout::{create_intent, Checkout, CheckoutPhase, PAYMENT_SUCCESS};
use crate::payment::{confirm_card_payment, mount_card};
use crate::platform::alert;
use crate::{use_auth, use_backend, use_config};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");
const CARD_CONTAINER: &str = "card-element";

/// Premium upgrade. `on_paid` fires with the user's id once the payment is
/// confirmed and the premium flag is set.
#[component]
pub fn CheckoutView(on_paid: EventHandler<UserId>) -> Element {
    let mut auth = use_auth();
    let backend = use_backend();
    let config = use_config();
    let amount = config.payments.amount;
    let publishable_key = config.payments.publishable_key.clone();

    let mut checkout = use_signal(Checkout::default);
    let mut card_error = use_signal(|| Option::<String>::None);

    let user_id = use_memo(move || auth.read().user.as_ref().map(|u| u.id));

    let _intent = use_resource(move || {
        let backend = backend.clone();
        async move {
            let _ = user_id();
            let user = auth.peek().user.clone();
            let mut next = Checkout::default();
            create_intent(&backend, user.as_ref(), amount, &mut next).await;
            checkout.set(next);
        }
    });

    use_effect(move || {
        let key = publishable_key.clone();
        spawn(async move {
            if let Err(message) = mount_card(&key, CARD_CONTAINER).await {
                tracing::warn!("Card element unavailable: {message}");
                card_error.set(Some("The payment form could not be loaded.".to_string()));
            }
        });
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(secret) = checkout.write().submit() else {
            return;
        };
        spawn(async move {
            let outcome = confirm_card_payment(&secret, CARD_CONTAINER).await;
            checkout.write().payment_result(outcome);
            if checkout.read().phase != CheckoutPhase::Succeeded {
                return;
            }
            tracing::info!("Premium purchase confirmed");
            auth.update_premium_status(true);
            alert(PAYMENT_SUCCESS);
            if let Some(id) = user_id() {
                on_paid.call(id);
            }
        });
    };

    let state = checkout.read().clone();
    let already_premium = auth().is_premium() && state.phase != CheckoutPhase::Succeeded;
    let price = format!("${amount:.2}");
    let label = match state.phase {
        CheckoutPhase::AwaitingIntent => "Preparing payment...",
        CheckoutPhase::Processing => "Processing...",
        _ => "Pay",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page checkout",
            h1 { class: "view-title", "Go Premium" }
            p {
                class: "view-muted",
                "Unlock AI optimization of your resumes for {price}."
            }
            if already_premium {
                div { class: "view-notice success", "You are already a Premium member." }
            }

            form {
                class: "checkout-form",
                onsubmit: handle_submit,
                div { id: CARD_CONTAINER, class: "card-element" }
                if let Some(message) = card_error() {
                    div { class: "view-notice error", "{message}" }
                }
                if let Some(message) = state.error() {
                    div { class: "view-notice error", "{message}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: !state.can_submit(),
                    "{label}"
                }
            }
        }
    }
}

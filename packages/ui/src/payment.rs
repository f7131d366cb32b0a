//! Stripe.js card element, driven through `document::eval`.
//!
//! The publishable key and client secret cross into JavaScript as string
//! literals; the card element lives on `window` between the mount and the
//! confirmation so the secret is the only thing passed on submit.

use dioxus::prelude::*;

use crate::checkout::PaymentOutcome;
use crate::js::{js_string, BridgeReply};

pub const STRIPE_JS: &str = "https://js.stripe.com/v3/";
const MISSING_KEY: &str = "No payment processor key configured";

impl From<BridgeReply> for PaymentOutcome {
    fn from(reply: BridgeReply) -> Self {
        if reply.ok {
            PaymentOutcome::Succeeded
        } else {
            PaymentOutcome::Failed(reply.error)
        }
    }
}

/// Load Stripe.js if needed and mount a card element into `container_id`.
/// Resolves to an error message when the processor could not be set up.
pub async fn mount_card(publishable_key: &str, container_id: &str) -> Result<(), String> {
    if publishable_key.trim().is_empty() {
        return Err(MISSING_KEY.to_string());
    }
    let js = format!(
        r#"(function() {{
            function mount() {{
                var container = document.getElementById({id_js});
                if (!container) {{ dioxus.send({{ ok: false, error: 'Card form missing' }}); return; }}
                if (container._card) {{ dioxus.send({{ ok: true }}); return; }}
                try {{
                    var stripe = Stripe({key_js});
                    var card = stripe.elements().create('card');
                    card.mount(container);
                    container._card = card;
                    window.__batistaiStripe = stripe;
                    dioxus.send({{ ok: true }});
                }} catch (e) {{
                    dioxus.send({{ ok: false, error: String(e && e.message || e) }});
                }}
            }}
            if (typeof Stripe !== 'undefined') {{ mount(); return; }}
            var script = document.getElementById('stripe-js');
            if (!script) {{
                script = document.createElement('script');
                script.id = 'stripe-js';
                script.src = {src_js};
                document.head.appendChild(script);
            }}
            script.addEventListener('load', mount);
            script.addEventListener('error', function() {{
                dioxus.send({{ ok: false, error: 'Could not load the payment processor' }});
            }});
        }})();"#,
        id_js = js_string(container_id),
        key_js = js_string(publishable_key),
        src_js = js_string(STRIPE_JS),
    );

    let mut eval = document::eval(&js);
    match eval.recv::<BridgeReply>().await {
        Ok(BridgeReply { ok: true, .. }) => Ok(()),
        Ok(reply) => Err(reply.error.unwrap_or_default()),
        Err(e) => {
            tracing::error!("Stripe bridge failed: {e:?}");
            Err(String::new())
        }
    }
}

/// Confirm the payment intent behind `client_secret` with the card mounted in
/// `container_id`.
pub async fn confirm_card_payment(client_secret: &str, container_id: &str) -> PaymentOutcome {
    let js = format!(
        r#"(function() {{
            var container = document.getElementById({id_js});
            var stripe = window.__batistaiStripe;
            if (!stripe || !container || !container._card) {{ dioxus.send({{ ok: false }}); return; }}
            stripe.confirmCardPayment({secret_js}, {{ payment_method: {{ card: container._card }} }})
                .then(function(result) {{
                    if (result.error) {{
                        dioxus.send({{ ok: false, error: result.error.message || null }});
                    }} else {{
                        var intent = result.paymentIntent;
                        dioxus.send({{ ok: !!intent && intent.status === 'succeeded' }});
                    }}
                }})
                .catch(function() {{ dioxus.send({{ ok: false }}); }});
        }})();"#,
        id_js = js_string(container_id),
        secret_js = js_string(client_secret),
    );

    let mut eval = document::eval(&js);
    match eval.recv::<BridgeReply>().await {
        Ok(reply) => reply.into(),
        Err(e) => {
            tracing::error!("Stripe bridge failed: {e:?}");
            PaymentOutcome::Failed(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_key_fails_without_loading_stripe() {
        assert_eq!(mount_card("", "card-element").await, Err(MISSING_KEY.to_string()));
        assert_eq!(mount_card("   ", "card-element").await, Err(MISSING_KEY.to_string()));
    }

    #[test]
    fn test_reply_to_outcome() {
        let ok = BridgeReply {
            ok: true,
            error: None,
        };
        assert_eq!(PaymentOutcome::from(ok), PaymentOutcome::Succeeded);

        let declined = BridgeReply {
            ok: false,
            error: Some("Your card was declined.".into()),
        };
        assert_eq!(
            PaymentOutcome::from(declined),
            PaymentOutcome::Failed(Some("Your card was declined.".into()))
        );
        assert_eq!(
            PaymentOutcome::from(BridgeReply::default()),
            PaymentOutcome::Failed(None)
        );
    }
}

//! # Checkout state machine
//!
//! ```text
//! AwaitingIntent --intent_created--> Ready --submit--> Processing
//!       |                              ^                   |
//!  intent_failed                       |            payment_result
//!       v                              |                   v
//!  IntentFailed                     Declined <---- Err | Ok ----> Succeeded
//! ```
//!
//! Submission is only possible from `Ready` or `Declined`, so a missing client
//! secret can never reach the payment processor.

use api::{ApiError, Backend, User};

pub const INTENT_ERROR: &str = "Error creating payment intent.";
pub const PAYMENT_ERROR: &str = "Error processing the payment.";
pub const PAYMENT_SUCCESS: &str = "Payment successful! Welcome to Premium Family";

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutPhase {
    AwaitingIntent,
    Ready,
    IntentFailed(String),
    Processing,
    Declined(String),
    Succeeded,
}

/// What the payment processor reported for a card confirmation.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    Succeeded,
    Failed(Option<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Checkout {
    pub phase: CheckoutPhase,
    client_secret: Option<String>,
}

impl Default for Checkout {
    fn default() -> Self {
        Self {
            phase: CheckoutPhase::AwaitingIntent,
            client_secret: None,
        }
    }
}

impl Checkout {
    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        self.client_secret.is_some()
            && matches!(self.phase, CheckoutPhase::Ready | CheckoutPhase::Declined(_))
    }

    pub fn is_processing(&self) -> bool {
        self.phase == CheckoutPhase::Processing
    }

    /// Inline error text, if any.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            CheckoutPhase::IntentFailed(message) | CheckoutPhase::Declined(message) => {
                Some(message)
            }
            _ => None,
        }
    }

    pub fn intent_created(&mut self, client_secret: String) {
        if self.phase == CheckoutPhase::AwaitingIntent {
            self.client_secret = Some(client_secret);
            self.phase = CheckoutPhase::Ready;
        }
    }

    pub fn intent_failed(&mut self, message: impl Into<String>) {
        if self.phase == CheckoutPhase::AwaitingIntent {
            self.phase = CheckoutPhase::IntentFailed(message.into());
        }
    }

    /// Fold the payment-intent call into the machine.
    pub fn apply_intent(&mut self, result: Result<String, ApiError>) {
        match result {
            Ok(secret) => self.intent_created(secret),
            Err(e) => {
                tracing::warn!("Creating payment intent failed: {e}");
                self.intent_failed(INTENT_ERROR);
            }
        }
    }

    /// Start a confirmation. Returns the client secret to confirm with, or
    /// `None` when submission is not allowed right now.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.phase = CheckoutPhase::Processing;
        self.client_secret.clone()
    }

    pub fn payment_result(&mut self, outcome: PaymentOutcome) {
        if self.phase != CheckoutPhase::Processing {
            return;
        }
        self.phase = match outcome {
            PaymentOutcome::Succeeded => CheckoutPhase::Succeeded,
            PaymentOutcome::Failed(message) => CheckoutPhase::Declined(
                message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| PAYMENT_ERROR.to_string()),
            ),
        };
    }
}

/// Request a payment intent for `user` at `amount`. Signed out, nothing is sent
/// and the checkout stays waiting.
pub async fn create_intent<B: Backend>(
    backend: &B,
    user: Option<&User>,
    amount: f64,
    checkout: &mut Checkout,
) {
    let Some(user) = user else {
        return;
    };
    checkout.apply_intent(backend.create_payment_intent(user.id, amount).await);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{user, Call, FakeBackend};

    fn ready() -> Checkout {
        let mut checkout = Checkout::default();
        checkout.intent_created("pi_123_secret_456".into());
        checkout
    }

    #[test]
    fn test_cannot_submit_before_intent() {
        let mut checkout = Checkout::default();
        assert!(!checkout.can_submit());
        assert_eq!(checkout.submit(), None);
        assert_eq!(checkout.phase, CheckoutPhase::AwaitingIntent);
    }

    #[test]
    fn test_intent_failure_disables_submission() {
        let mut checkout = Checkout::default();
        checkout.apply_intent(Err(ApiError::Rejected("nope".into())));
        assert_eq!(checkout.error(), Some(INTENT_ERROR));
        assert_eq!(checkout.submit(), None);
    }

    #[test]
    fn test_successful_payment() {
        let mut checkout = ready();
        assert_eq!(checkout.submit().as_deref(), Some("pi_123_secret_456"));
        assert!(checkout.is_processing());
        assert!(!checkout.can_submit());

        checkout.payment_result(PaymentOutcome::Succeeded);
        assert_eq!(checkout.phase, CheckoutPhase::Succeeded);
        assert_eq!(checkout.submit(), None);
    }

    #[test]
    fn test_declined_payment_can_retry() {
        let mut checkout = ready();
        checkout.submit();
        checkout.payment_result(PaymentOutcome::Failed(Some("Your card was declined.".into())));
        assert_eq!(checkout.error(), Some("Your card was declined."));
        assert!(checkout.can_submit());

        checkout.submit();
        checkout.payment_result(PaymentOutcome::Failed(None));
        assert_eq!(checkout.error(), Some(PAYMENT_ERROR));
    }

    #[test]
    fn test_result_outside_processing_is_ignored() {
        let mut checkout = ready();
        checkout.payment_result(PaymentOutcome::Succeeded);
        assert_eq!(checkout.phase, CheckoutPhase::Ready);
    }

    #[tokio::test]
    async fn test_create_intent_with_configured_amount() {
        let backend = FakeBackend {
            client_secret: Some("secret".into()),
            ..FakeBackend::default()
        };
        let mut checkout = Checkout::default();
        create_intent(&backend, Some(&user(7, false)), 0.99, &mut checkout).await;

        assert_eq!(checkout.phase, CheckoutPhase::Ready);
        assert_eq!(checkout.client_secret(), Some("secret"));
        assert_eq!(
            backend.calls(),
            vec![Call::CreatePaymentIntent {
                user_id: 7,
                amount: 0.99
            }]
        );
    }

    #[tokio::test]
    async fn test_create_intent_signed_out_sends_nothing() {
        let backend = FakeBackend::default();
        let mut checkout = Checkout::default();
        create_intent(&backend, None, 0.99, &mut checkout).await;
        assert_eq!(checkout.phase, CheckoutPhase::AwaitingIntent);
        assert!(backend.calls().is_empty());
    }
}

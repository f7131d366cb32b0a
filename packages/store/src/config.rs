//! # Client configuration: `app.toml`
//!
//! Defines the TOML configuration the web client is built with. The binary
//! embeds its `app.toml` and then applies build-time environment overrides
//! (see [`AppConfig::with_overrides`]).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"   # backend origin, no trailing slash needed
//!
//! [payments]
//! publishable_key = "pk_test_..."      # payment processor publishable key
//! amount = 0.99                        # premium price sent to /payments
//! ```
//!
//! All structs derive `Default` so a missing or empty file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `app.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub payments: PaymentsConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Checkout settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentsConfig {
    /// Publishable key handed to the payment processor's browser library.
    #[serde(default)]
    pub publishable_key: String,
    /// One-time premium price, in the backend's currency unit.
    #[serde(default = "default_amount")]
    pub amount: f64,
}

fn default_amount() -> f64 {
    0.99
}

impl Default for PaymentsConfig {
    fn default() -> Self {
        Self {
            publishable_key: String::new(),
            amount: default_amount(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "app.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Replace the backend URL and publishable key with the given values when
    /// they are present and non-empty.
    pub fn with_overrides(mut self, base_url: Option<&str>, publishable_key: Option<&str>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        if let Some(key) = publishable_key.filter(|k| !k.trim().is_empty()) {
            self.payments.publishable_key = key.trim().to_string();
        }
        self
    }

    /// Load the embedded config text, applying overrides from build-time env
    /// (`BATISTAI_API_URL`, `BATISTAI_STRIPE_KEY`). Falls back to defaults when
    /// the text does not parse.
    pub fn load(embedded: &str) -> Self {
        let base = match Self::from_toml(embedded) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid {}: {e}; using defaults", Self::filename());
                Self::default()
            }
        };
        base.with_overrides(
            option_env!("BATISTAI_API_URL"),
            option_env!("BATISTAI_STRIPE_KEY"),
        )
    }
}

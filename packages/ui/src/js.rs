//! Helpers for building `document::eval` snippets.

use serde::Deserialize;

/// Quote `s` as a JavaScript string literal.
pub(crate) fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Message a bridge script posts back with `dioxus.send`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct BridgeReply {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

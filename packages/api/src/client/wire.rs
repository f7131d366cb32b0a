//! Request and response bodies for the backend's JSON endpoints, and the
//! rules for turning `(status, body)` into a result.
//!
//! Responses share a loose envelope: an optional `success` flag, an optional
//! `error`, and endpoint-specific fields next to them. Two acceptance rules
//! are used:
//!
//! - [`accept`]: 2xx and `success` not explicitly `false`. For endpoints whose
//!   success responses may omit the flag (`/users`, `/users/login`, `/payments`).
//! - [`require_success`]: 2xx and `success == true`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{Feedback, Resume, ResumeId, User, UserId};

#[derive(Debug, Serialize)]
pub struct NewUserBody<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub is_premium: bool,
}

#[derive(Debug, Serialize)]
pub struct CredentialsBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NewResumeBody<'a> {
    pub user_id: UserId,
    pub original_text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct OptimizeBody<'a> {
    pub original_text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PaymentBody {
    pub user_id: UserId,
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(flatten)]
    pub body: T,
}

#[derive(Debug, Default, Deserialize)]
pub struct Empty {}

#[derive(Debug, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub payload: Option<User>,
}

#[derive(Debug, Deserialize)]
pub struct ResumesPayload {
    #[serde(default)]
    pub payload: Option<Vec<Resume>>,
}

#[derive(Debug, Deserialize)]
pub struct CreatedResume {
    #[serde(default)]
    pub resume_id: Option<ResumeId>,
}

#[derive(Debug, Deserialize)]
pub struct Optimized {
    #[serde(default)]
    pub optimized_text: Option<String>,
    #[serde(default)]
    pub feedback: Option<Feedback>,
}

#[derive(Debug, Deserialize)]
pub struct PaymentIntent {
    #[serde(rename = "clientSecret", default)]
    pub client_secret: Option<String>,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Pull a human-readable message out of an `error` field that may be a bare
/// string or an object with a `message`.
fn error_text(error: Option<&serde_json::Value>) -> Option<String> {
    match error? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Object(map) => map
            .get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string),
        _ => None,
    }
}

fn decode<T: DeserializeOwned>(status: u16, body: &str, fallback: &str) -> Result<Envelope<T>, ApiError> {
    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(envelope) => Ok(envelope),
        Err(e) if is_success(status) => Err(ApiError::Decode(e)),
        Err(_) => Err(ApiError::Rejected(fallback.to_string())),
    }
}

fn rejected<T>(envelope: &Envelope<T>, fallback: &str) -> ApiError {
    ApiError::Rejected(error_text(envelope.error.as_ref()).unwrap_or_else(|| fallback.to_string()))
}

pub fn accept<T: DeserializeOwned>(status: u16, body: &str, fallback: &str) -> Result<T, ApiError> {
    let envelope = decode::<T>(status, body, fallback)?;
    if !is_success(status) || envelope.success == Some(false) {
        return Err(rejected(&envelope, fallback));
    }
    Ok(envelope.body)
}

pub fn require_success<T: DeserializeOwned>(
    status: u16,
    body: &str,
    fallback: &str,
) -> Result<T, ApiError> {
    let envelope = decode::<T>(status, body, fallback)?;
    if !is_success(status) || envelope.success != Some(true) {
        return Err(rejected(&envelope, fallback));
    }
    Ok(envelope.body)
}

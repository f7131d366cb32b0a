//! # Backend client
//!
//! [`Backend`] lists every endpoint the client consumes; [`ApiClient`] is the
//! reqwest implementation used in the browser. Pages take `impl Backend` so
//! their logic can be exercised against a fake in tests.
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`register`](Backend::register) | `POST /users` |
//! | [`login`](Backend::login) | `POST /users/login` |
//! | [`get_user`](Backend::get_user) | `GET /users/:id` |
//! | [`create_resume`](Backend::create_resume) | `POST /resumes` |
//! | [`list_resumes`](Backend::list_resumes) | `GET /resumes/user/:id` |
//! | [`delete_resume`](Backend::delete_resume) | `DELETE /resumes/:id` |
//! | [`optimize_resume`](Backend::optimize_resume) | `POST /resumes/:id/optimize` |
//! | [`create_payment_intent`](Backend::create_payment_intent) | `POST /payments` |
//!
//! No call is retried.

use std::future::Future;

use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::models::{Feedback, Resume, ResumeId, User, UserId};

pub mod wire;

use wire::{
    accept, require_success, CreatedResume, CredentialsBody, Empty, NewResumeBody, NewUserBody,
    OptimizeBody, Optimized, PaymentBody, PaymentIntent, ResumesPayload, UserPayload,
};

pub const REGISTER_FAILED: &str = "Registration failed";
pub const LOGIN_FAILED: &str = "Login failed";
pub const USER_NOT_FOUND: &str = "User not found";
pub const SAVE_FAILED: &str = "Failed to save resume.";
pub const FETCH_FAILED: &str = "Could not fetch resumes.";
pub const DELETE_FAILED: &str = "Failed to delete resume.";
pub const OPTIMIZE_FAILED: &str = "Failed to optimize resume.";
pub const INTENT_FAILED: &str = "Failed to create payment intent";

/// Registration form payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Result of an AI optimization round-trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimization {
    pub optimized_text: String,
    pub feedback: Feedback,
}

/// The remote backend, as consumed by the client.
pub trait Backend {
    /// Create an account. New accounts are never premium.
    fn register(&self, registration: &Registration) -> impl Future<Output = Result<(), ApiError>>;

    fn login(&self, email: &str, password: &str) -> impl Future<Output = Result<User, ApiError>>;

    fn get_user(&self, id: UserId) -> impl Future<Output = Result<User, ApiError>>;

    /// Store a resume's free text. Returns the new id when the backend reports one.
    fn create_resume(
        &self,
        user_id: UserId,
        original_text: &str,
    ) -> impl Future<Output = Result<Option<ResumeId>, ApiError>>;

    fn list_resumes(&self, user_id: UserId) -> impl Future<Output = Result<Vec<Resume>, ApiError>>;

    fn delete_resume(&self, id: ResumeId) -> impl Future<Output = Result<(), ApiError>>;

    fn optimize_resume(
        &self,
        id: ResumeId,
        original_text: &str,
    ) -> impl Future<Output = Result<Optimization, ApiError>>;

    /// Returns the payment intent's client secret.
    fn create_payment_intent(
        &self,
        user_id: UserId,
        amount: f64,
    ) -> impl Future<Output = Result<String, ApiError>>;
}

/// HTTP client for the backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path (which starts with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("{method} {path}");
        self.http.request(method, self.url(path))
    }

    fn json<B: Serialize>(&self, method: Method, path: &str, body: &B) -> RequestBuilder {
        self.request(method, path).json(body)
    }

    /// Send and read the body as text; status interpretation is left to [`wire`].
    async fn send(&self, request: RequestBuilder) -> Result<(u16, String), ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!("Request failed: {e}");
            ApiError::Network(e)
        })?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        if !(200..300).contains(&status) {
            warn!("Backend answered {status}");
        }
        Ok((status, body))
    }
}

impl Backend for ApiClient {
    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let body = NewUserBody {
            full_name: &registration.full_name,
            email: &registration.email,
            password: &registration.password,
            is_premium: false,
        };
        let (status, text) = self.send(self.json(Method::POST, "/users", &body)).await?;
        accept::<Empty>(status, &text, REGISTER_FAILED)?;
        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let body = CredentialsBody { email, password };
        let (status, text) = self
            .send(self.json(Method::POST, "/users/login", &body))
            .await?;
        accept::<UserPayload>(status, &text, LOGIN_FAILED)?
            .payload
            .ok_or_else(|| ApiError::Rejected(LOGIN_FAILED.to_string()))
    }

    async fn get_user(&self, id: UserId) -> Result<User, ApiError> {
        let (status, text) = self
            .send(self.request(Method::GET, &format!("/users/{id}")))
            .await?;
        require_success::<UserPayload>(status, &text, USER_NOT_FOUND)?
            .payload
            .ok_or_else(|| ApiError::Rejected(USER_NOT_FOUND.to_string()))
    }

    async fn create_resume(
        &self,
        user_id: UserId,
        original_text: &str,
    ) -> Result<Option<ResumeId>, ApiError> {
        let body = NewResumeBody {
            user_id,
            original_text,
        };
        let (status, text) = self.send(self.json(Method::POST, "/resumes", &body)).await?;
        Ok(require_success::<CreatedResume>(status, &text, SAVE_FAILED)?.resume_id)
    }

    async fn list_resumes(&self, user_id: UserId) -> Result<Vec<Resume>, ApiError> {
        let (status, text) = self
            .send(self.request(Method::GET, &format!("/resumes/user/{user_id}")))
            .await?;
        require_success::<ResumesPayload>(status, &text, FETCH_FAILED)?
            .payload
            .ok_or_else(|| ApiError::Rejected(FETCH_FAILED.to_string()))
    }

    async fn delete_resume(&self, id: ResumeId) -> Result<(), ApiError> {
        let (status, text) = self
            .send(self.request(Method::DELETE, &format!("/resumes/{id}")))
            .await?;
        require_success::<Empty>(status, &text, DELETE_FAILED)?;
        Ok(())
    }

    async fn optimize_resume(
        &self,
        id: ResumeId,
        original_text: &str,
    ) -> Result<Optimization, ApiError> {
        let body = OptimizeBody { original_text };
        let (status, text) = self
            .send(self.json(Method::POST, &format!("/resumes/{id}/optimize"), &body))
            .await?;
        let optimized = require_success::<Optimized>(status, &text, OPTIMIZE_FAILED)?;
        let optimized_text = optimized
            .optimized_text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApiError::Rejected(OPTIMIZE_FAILED.to_string()))?;
        Ok(Optimization {
            optimized_text,
            feedback: optimized.feedback.unwrap_or_default(),
        })
    }

    async fn create_payment_intent(&self, user_id: UserId, amount: f64) -> Result<String, ApiError> {
        let body = PaymentBody { user_id, amount };
        let (status, text) = self.send(self.json(Method::POST, "/payments", &body)).await?;
        accept::<PaymentIntent>(status, &text, INTENT_FAILED)?
            .client_secret
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::Rejected(INTENT_FAILED.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("https://api.example.com/");
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.url("/resumes/user/7"), "https://api.example.com/resumes/user/7");
    }

    #[test]
    fn test_clients_compare_by_base_url() {
        assert_eq!(ApiClient::new("http://a"), ApiClient::new("http://a/"));
        assert_ne!(ApiClient::new("http://a"), ApiClient::new("http://b"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client.list_resumes(7).await.unwrap_err();
        assert!(err.is_network());
    }
}

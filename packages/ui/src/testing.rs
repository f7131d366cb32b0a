//! In-memory [`Backend`] that records every call.

use std::cell::RefCell;

use api::{ApiError, Backend, Optimization, Registration, Resume, ResumeId, User, UserId};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Register(String),
    Login(String),
    GetUser(UserId),
    CreateResume { user_id: UserId, text: String },
    ListResumes(UserId),
    DeleteResume(ResumeId),
    OptimizeResume { id: ResumeId, text: String },
    CreatePaymentIntent { user_id: UserId, amount: f64 },
}

/// Replies with the configured values, or rejects every call when `fail`.
#[derive(Debug, Default)]
pub struct FakeBackend {
    pub calls: RefCell<Vec<Call>>,
    pub fail: bool,
    pub user: Option<User>,
    pub resumes: Vec<Resume>,
    pub created_id: Option<ResumeId>,
    pub optimization: Option<Optimization>,
    pub client_secret: Option<String>,
}

impl FakeBackend {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        if self.fail {
            Err(ApiError::Rejected("backend said no".to_string()))
        } else {
            Ok(())
        }
    }

    fn reply<T: Clone>(&self, value: &Option<T>) -> Result<T, ApiError> {
        value
            .clone()
            .ok_or_else(|| ApiError::Rejected("nothing configured".to_string()))
    }
}

impl Backend for FakeBackend {
    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.record(Call::Register(registration.email.clone()))
    }

    async fn login(&self, email: &str, _password: &str) -> Result<User, ApiError> {
        self.record(Call::Login(email.to_string()))?;
        self.reply(&self.user)
    }

    async fn get_user(&self, id: UserId) -> Result<User, ApiError> {
        self.record(Call::GetUser(id))?;
        self.reply(&self.user)
    }

    async fn create_resume(
        &self,
        user_id: UserId,
        original_text: &str,
    ) -> Result<Option<ResumeId>, ApiError> {
        self.record(Call::CreateResume {
            user_id,
            text: original_text.to_string(),
        })?;
        Ok(self.created_id)
    }

    async fn list_resumes(&self, user_id: UserId) -> Result<Vec<Resume>, ApiError> {
        self.record(Call::ListResumes(user_id))?;
        Ok(self.resumes.clone())
    }

    async fn delete_resume(&self, id: ResumeId) -> Result<(), ApiError> {
        self.record(Call::DeleteResume(id))
    }

    async fn optimize_resume(
        &self,
        id: ResumeId,
        original_text: &str,
    ) -> Result<Optimization, ApiError> {
        self.record(Call::OptimizeResume {
            id,
            text: original_text.to_string(),
        })?;
        self.reply(&self.optimization)
    }

    async fn create_payment_intent(&self, user_id: UserId, amount: f64) -> Result<String, ApiError> {
        self.record(Call::CreatePaymentIntent { user_id, amount })?;
        self.reply(&self.client_secret)
    }
}

pub fn user(id: UserId, is_premium: bool) -> User {
    User {
        id,
        email: format!("user{id}@example.com"),
        full_name: Some("Jane Doe".to_string()),
        is_premium,
        created_at: "2025-03-01T12:00:00Z".to_string(),
    }
}

pub fn resume(id: ResumeId, user_id: UserId, text: &str) -> Resume {
    Resume {
        id,
        user_id,
        original_text: text.to_string(),
        optimized_text: None,
        feedback: None,
        created_at: "2025-03-01T12:00:00Z".to_string(),
    }
}

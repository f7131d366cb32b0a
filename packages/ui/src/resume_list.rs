//! # Resume list state
//!
//! [`ResumeList`] is the page state behind the resume viewer: the fetched
//! resumes, which one (if any) shows its optimized text, and which one has an
//! optimization in flight. Network calls happen in the view; their results are
//! folded in with the `apply_*` methods, in whatever order they arrive.
//!
//! Only one resume is "active" at a time: `active_id` is a single value, not a
//! per-resume flag.

use api::client::{DELETE_FAILED, OPTIMIZE_FAILED};
use api::{parse_sections, ApiError, Backend, Optimization, Resume, ResumeId, ResumeSections, User};

pub const SIGNED_OUT: &str = "Please log in to view your resumes.";
pub const NO_RESUMES: &str = "No resumes found for this user.";
pub const FETCH_FAILED: &str = api::client::FETCH_FAILED;
pub const FETCH_ERROR: &str = "Internal error fetching resumes.";
const CONNECT_ERROR: &str = "Error connecting to server.";

#[derive(Debug, Clone, PartialEq)]
pub enum ListStatus {
    SignedOut,
    Loading,
    Ready,
    Failed(String),
}

/// What the view should do after the user clicks "Optimize".
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizeRequest {
    /// Not premium: go to checkout, issue no call.
    RequiresPremium,
    /// Post this text to the optimize endpoint.
    Send { original_text: String },
    /// The resume is no longer in the list.
    Missing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeList {
    pub status: ListStatus,
    pub resumes: Vec<Resume>,
    /// Resume currently showing its optimized text.
    pub active_id: Option<ResumeId>,
    /// Resume with an optimization request in flight.
    pub optimizing: Option<ResumeId>,
}

impl Default for ResumeList {
    fn default() -> Self {
        Self::with_status(ListStatus::Loading)
    }
}

impl ResumeList {
    fn with_status(status: ListStatus) -> Self {
        Self {
            status,
            resumes: Vec::new(),
            active_id: None,
            optimizing: None,
        }
    }

    pub fn signed_out() -> Self {
        Self::with_status(ListStatus::SignedOut)
    }

    /// Fold a list fetch into page state.
    pub fn from_result(result: Result<Vec<Resume>, ApiError>) -> Self {
        match result {
            Ok(resumes) if resumes.is_empty() => {
                Self::with_status(ListStatus::Failed(NO_RESUMES.to_string()))
            }
            Ok(resumes) => Self {
                resumes,
                ..Self::with_status(ListStatus::Ready)
            },
            Err(e) => {
                tracing::warn!("Fetching resumes failed: {e}");
                let message = if e.is_network() { FETCH_ERROR } else { FETCH_FAILED };
                Self::with_status(ListStatus::Failed(message.to_string()))
            }
        }
    }

    /// Fetch the user's resumes. Without a user no call is made.
    pub async fn load<B: Backend>(backend: &B, user: Option<&User>) -> Self {
        let Some(user) = user else {
            return Self::signed_out();
        };
        Self::from_result(backend.list_resumes(user.id).await)
    }

    pub fn get(&self, id: ResumeId) -> Option<&Resume> {
        self.resumes.iter().find(|r| r.id == id)
    }

    pub fn is_active(&self, id: ResumeId) -> bool {
        self.active_id == Some(id)
    }

    pub fn is_optimizing(&self, id: ResumeId) -> bool {
        self.optimizing == Some(id)
    }

    /// Text currently shown for `resume`: the optimized version when this
    /// resume is the active one and has one, otherwise the original.
    pub fn displayed_text<'a>(&self, resume: &'a Resume) -> &'a str {
        match resume.optimized() {
            Some(optimized) if self.is_active(resume.id) => optimized,
            _ => &resume.original_text,
        }
    }

    /// Sections of the displayed text, placeholders filled in.
    pub fn sections_for(&self, resume: &Resume) -> ResumeSections {
        parse_sections(self.displayed_text(resume)).or_placeholders()
    }

    /// Flip `id` between optimized and original view. Resumes without
    /// optimized text stay on the original.
    pub fn toggle_view(&mut self, id: ResumeId) {
        if self.is_active(id) {
            self.active_id = None;
        } else if self.get(id).and_then(Resume::optimized).is_some() {
            self.active_id = Some(id);
        }
    }

    /// Apply a delete call's result. On failure the list is unchanged and the
    /// alert text is returned.
    pub fn apply_delete(&mut self, id: ResumeId, result: Result<(), ApiError>) -> Result<(), String> {
        match result {
            Ok(()) => {
                self.resumes.retain(|r| r.id != id);
                if self.active_id == Some(id) {
                    self.active_id = None;
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Deleting resume {id} failed: {e}");
                Err(e.user_message(CONNECT_ERROR, DELETE_FAILED))
            }
        }
    }

    /// Gate an optimize click on the premium flag and mark the resume as
    /// optimizing.
    pub fn request_optimize(&mut self, user: Option<&User>, id: ResumeId) -> OptimizeRequest {
        if !user.is_some_and(|u| u.is_premium) {
            return OptimizeRequest::RequiresPremium;
        }
        let Some(resume) = self.get(id) else {
            return OptimizeRequest::Missing;
        };
        let original_text = resume.original_text.clone();
        self.optimizing = Some(id);
        OptimizeRequest::Send { original_text }
    }

    /// Apply an optimize call's result. On success the resume switches to its
    /// optimized view; on failure the optimizing flag is cleared and the alert
    /// text is returned.
    pub fn apply_optimization(
        &mut self,
        id: ResumeId,
        result: Result<Optimization, ApiError>,
    ) -> Result<(), String> {
        if self.optimizing == Some(id) {
            self.optimizing = None;
        }
        match result {
            Ok(optimization) => {
                if let Some(resume) = self.resumes.iter_mut().find(|r| r.id == id) {
                    resume.optimized_text = Some(optimization.optimized_text);
                    resume.feedback = Some(optimization.feedback);
                    self.active_id = Some(id);
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Optimizing resume {id} failed: {e}");
                Err(e.user_message(CONNECT_ERROR, OPTIMIZE_FAILED))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{resume, user, Call, FakeBackend};
    use api::Feedback;

    fn ready(ids: &[ResumeId]) -> ResumeList {
        ResumeList::from_result(Ok(ids
            .iter()
            .map(|&id| resume(id, 7, &format!("Summary: resume {id}")))
            .collect()))
    }

    #[tokio::test]
    async fn test_signed_out_issues_no_call() {
        let backend = FakeBackend::default();
        let list = ResumeList::load(&backend, None).await;
        assert_eq!(list.status, ListStatus::SignedOut);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_load_for_user() {
        let backend = FakeBackend {
            resumes: vec![resume(1, 7, "Summary: a"), resume(2, 7, "Summary: b")],
            ..FakeBackend::default()
        };
        let list = ResumeList::load(&backend, Some(&user(7, false))).await;
        assert_eq!(list.status, ListStatus::Ready);
        assert_eq!(list.resumes.len(), 2);
        assert_eq!(backend.calls(), vec![Call::ListResumes(7)]);
    }

    #[tokio::test]
    async fn test_load_empty_and_rejected() {
        let empty = ResumeList::load(&FakeBackend::default(), Some(&user(7, false))).await;
        assert_eq!(empty.status, ListStatus::Failed(NO_RESUMES.to_string()));

        let rejected = ResumeList::load(&FakeBackend::failing(), Some(&user(7, false))).await;
        assert_eq!(rejected.status, ListStatus::Failed(FETCH_FAILED.to_string()));
    }

    #[tokio::test]
    async fn test_delete_success_removes_only_that_resume() {
        let backend = FakeBackend::default();
        let mut list = ready(&[41, 42, 43]);

        let result = backend.delete_resume(42).await;
        assert!(list.apply_delete(42, result).is_ok());

        let ids: Vec<_> = list.resumes.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![41, 43]);
        assert_eq!(backend.calls(), vec![Call::DeleteResume(42)]);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_list_and_alerts() {
        let backend = FakeBackend::failing();
        let mut list = ready(&[41, 42, 43]);
        let before = list.clone();

        let result = backend.delete_resume(42).await;
        let alert = list.apply_delete(42, result).unwrap_err();

        assert_eq!(alert, "backend said no");
        assert_eq!(list, before);
    }

    #[tokio::test]
    async fn test_optimize_requires_premium() {
        let backend = FakeBackend::default();
        let mut list = ready(&[42]);

        let request = list.request_optimize(Some(&user(7, false)), 42);
        assert_eq!(request, OptimizeRequest::RequiresPremium);
        assert_eq!(list.optimizing, None);
        assert!(backend.calls().is_empty());

        assert_eq!(list.request_optimize(None, 42), OptimizeRequest::RequiresPremium);
    }

    #[tokio::test]
    async fn test_optimize_success_switches_view() {
        let backend = FakeBackend {
            optimization: Some(Optimization {
                optimized_text: "Summary: Sharper\nSkills: Rust".to_string(),
                feedback: Feedback {
                    suggestions: vec!["Quantify impact".to_string()],
                },
            }),
            ..FakeBackend::default()
        };
        let mut list = ready(&[42, 43]);

        let OptimizeRequest::Send { original_text } =
            list.request_optimize(Some(&user(7, true)), 42)
        else {
            panic!("premium user should be allowed to optimize");
        };
        assert!(list.is_optimizing(42));

        let result = backend.optimize_resume(42, &original_text).await;
        assert!(list.apply_optimization(42, result).is_ok());

        assert!(!list.is_optimizing(42));
        assert!(list.is_active(42));
        let resume = list.get(42).unwrap();
        assert_eq!(list.displayed_text(resume), "Summary: Sharper\nSkills: Rust");
        assert_eq!(list.sections_for(resume).summary, "Sharper");
        assert_eq!(
            resume.feedback.as_ref().unwrap().suggestions,
            vec!["Quantify impact".to_string()]
        );
        assert_eq!(
            backend.calls(),
            vec![Call::OptimizeResume {
                id: 42,
                text: "Summary: resume 42".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_feedback_kept_after_switching_back_to_original() {
        let backend = FakeBackend {
            optimization: Some(Optimization {
                optimized_text: "Summary: Sharper".to_string(),
                feedback: Feedback {
                    suggestions: vec!["Quantify impact".to_string()],
                },
            }),
            ..FakeBackend::default()
        };
        let mut list = ready(&[42]);
        list.request_optimize(Some(&user(7, true)), 42);
        let result = backend.optimize_resume(42, "Summary: resume 42").await;
        assert!(list.apply_optimization(42, result).is_ok());

        list.toggle_view(42);
        let resume = list.get(42).unwrap();
        assert!(!list.is_active(42));
        assert_eq!(list.displayed_text(resume), "Summary: resume 42");
        assert_eq!(
            resume.feedback.as_ref().map(|f| f.suggestions.clone()),
            Some(vec!["Quantify impact".to_string()])
        );
    }

    #[tokio::test]
    async fn test_optimize_failure_clears_flag() {
        let backend = FakeBackend::failing();
        let mut list = ready(&[42]);
        list.request_optimize(Some(&user(7, true)), 42);

        let result = backend.optimize_resume(42, "x").await;
        assert!(list.apply_optimization(42, result).is_err());
        assert_eq!(list.optimizing, None);
        assert_eq!(list.active_id, None);
        assert_eq!(list.get(42).unwrap().optimized_text, None);
    }

    #[test]
    fn test_single_active_resume() {
        let mut list = ready(&[1, 2]);
        for resume in &mut list.resumes {
            resume.optimized_text = Some("Summary: better".to_string());
        }

        list.toggle_view(1);
        assert!(list.is_active(1));
        list.toggle_view(2);
        assert!(list.is_active(2));
        assert!(!list.is_active(1));

        let first = list.get(1).unwrap().clone();
        assert_eq!(list.displayed_text(&first), "Summary: resume 1");

        list.toggle_view(2);
        assert_eq!(list.active_id, None);
    }

    #[test]
    fn test_toggle_without_optimized_text_is_noop() {
        let mut list = ready(&[1]);
        list.toggle_view(1);
        assert_eq!(list.active_id, None);
    }

    #[test]
    fn test_sections_use_placeholders() {
        let list = ready(&[1]);
        let sections = list.sections_for(list.get(1).unwrap());
        assert_eq!(sections.summary, "resume 1");
        assert_eq!(sections.skills, api::sections::SKILLS_PLACEHOLDER);
    }
}

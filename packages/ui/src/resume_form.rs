//! Submission of the resume builder form.

use api::client::SAVE_FAILED;
use api::{Backend, ResumeDraft, ResumeId, User};

pub const SIGNED_OUT: &str = "You must be logged in to create a resume.";
const CONNECT_ERROR: &str = "Error connecting to server.";

/// Inputs of the builder form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FullName,
    Location,
    Summary,
    Skills,
    Company,
    Role,
    Duration,
    Description,
    School,
    Degree,
    Year,
}

impl FormField {
    pub const ALL: [FormField; 11] = [
        FormField::FullName,
        FormField::Location,
        FormField::Summary,
        FormField::Skills,
        FormField::Company,
        FormField::Role,
        FormField::Duration,
        FormField::Description,
        FormField::School,
        FormField::Degree,
        FormField::Year,
    ];

    /// Marked `required` in the markup. Entry fields never are, so a draft
    /// without work history or education can still be sent.
    pub fn is_required(self) -> bool {
        matches!(self, FormField::Location | FormField::Summary | FormField::Skills)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved { resume_id: Option<ResumeId> },
    Failed(String),
}

impl SubmitOutcome {
    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::Saved { resume_id: Some(id) } => {
                format!("Resume saved successfully! Resume ID: {id}")
            }
            SubmitOutcome::Saved { resume_id: None } => "Resume saved successfully!".to_string(),
            SubmitOutcome::Failed(message) => message.clone(),
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved { .. })
    }
}

/// Flatten `draft` and store it for `user`. Without a user nothing is sent.
pub async fn submit_draft<B: Backend>(
    backend: &B,
    user: Option<&User>,
    draft: &ResumeDraft,
) -> SubmitOutcome {
    let Some(user) = user else {
        return SubmitOutcome::Failed(SIGNED_OUT.to_string());
    };
    match backend.create_resume(user.id, &draft.to_text()).await {
        Ok(resume_id) => {
            tracing::info!("Saved resume {resume_id:?} for user {}", user.id);
            SubmitOutcome::Saved { resume_id }
        }
        Err(e) => {
            tracing::warn!("Saving resume failed: {e}");
            SubmitOutcome::Failed(e.user_message(CONNECT_ERROR, SAVE_FAILED))
        }
    }
}

/// Reset the form after a successful save; a failure keeps what was typed.
pub fn apply_outcome(draft: &mut ResumeDraft, user: Option<&User>, outcome: &SubmitOutcome) {
    if outcome.is_saved() {
        *draft = ResumeDraft::for_user(user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{user, Call, FakeBackend};

    fn filled(user: &User) -> ResumeDraft {
        let mut draft = ResumeDraft::for_user(Some(user));
        draft.location = "NYC".into();
        draft.summary = "Engineer".into();
        draft.skills = "Go, SQL".into();
        draft.experience[0].company = "Acme".into();
        draft.experience[0].role = "Backend Engineer".into();
        draft.experience[0].duration = "2020 - 2023".into();
        draft.experience[0].description = "Built payment APIs".into();
        draft.education[0].school = "MIT".into();
        draft.education[0].degree = "BSc Computer Science".into();
        draft.education[0].year = "2019".into();
        draft
    }

    #[tokio::test]
    async fn test_submit_sends_one_flattened_resume() {
        let jane = user(7, false);
        let backend = FakeBackend {
            created_id: Some(99),
            ..FakeBackend::default()
        };
        let mut draft = filled(&jane);

        let outcome = submit_draft(&backend, Some(&jane), &draft).await;
        assert_eq!(outcome, SubmitOutcome::Saved { resume_id: Some(99) });
        assert!(outcome.message().contains("99"));

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        let Call::CreateResume { user_id, text } = &calls[0] else {
            panic!("expected a create call, got {calls:?}");
        };
        assert_eq!(*user_id, 7);
        assert!(text.starts_with(
            "Full Name: Jane Doe\nLocation: NYC\nSummary: Engineer\nSkills: Go, SQL"
        ));
        for expected in ["Jane Doe", "NYC", "Engineer", "Go, SQL"] {
            assert!(text.contains(expected), "missing {expected:?} in {text:?}");
        }
        assert!(text.contains("- Backend Engineer at Acme (2020 - 2023)\nBuilt payment APIs"));
        assert!(text.contains("- BSc Computer Science, MIT (2019)"));

        apply_outcome(&mut draft, Some(&jane), &outcome);
        assert!(draft.is_pristine(Some(&jane)));
        assert_eq!(draft.full_name, "Jane Doe");
    }

    #[test]
    fn test_only_headline_fields_are_required() {
        let required: Vec<_> = FormField::ALL
            .into_iter()
            .filter(|f| f.is_required())
            .collect();
        assert_eq!(
            required,
            vec![FormField::Location, FormField::Summary, FormField::Skills]
        );
        for field in [
            FormField::FullName,
            FormField::Company,
            FormField::Role,
            FormField::School,
            FormField::Degree,
        ] {
            assert!(!field.is_required(), "{field:?} should be optional");
        }
    }

    #[tokio::test]
    async fn test_submit_signed_out_sends_nothing() {
        let backend = FakeBackend::default();
        let draft = ResumeDraft::for_user(None);
        let outcome = submit_draft(&backend, None, &draft).await;
        assert_eq!(outcome, SubmitOutcome::Failed(SIGNED_OUT.to_string()));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_draft() {
        let jane = user(7, false);
        let backend = FakeBackend::failing();
        let mut draft = filled(&jane);
        let before = draft.clone();

        let outcome = submit_draft(&backend, Some(&jane), &draft).await;
        assert!(!outcome.is_saved());
        apply_outcome(&mut draft, Some(&jane), &outcome);
        assert_eq!(draft, before);
    }
}

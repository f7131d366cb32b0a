use serde::{Deserialize, Serialize};

use super::UserId;

pub type ResumeId = i64;

/// A stored resume. The backend keeps only the flattened free text; sections
/// are derived on the client with [`crate::parse_sections`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resume {
    pub id: ResumeId,
    pub user_id: UserId,
    pub original_text: String,
    #[serde(default)]
    pub optimized_text: Option<String>,
    #[serde(default)]
    pub feedback: Option<Feedback>,
    #[serde(default)]
    pub created_at: String,
}

impl Resume {
    /// Optimized text when the backend has produced a non-empty one.
    pub fn optimized(&self) -> Option<&str> {
        self.optimized_text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }
}

/// Ordered optimization suggestions.
///
/// Decodes from either `{"suggestions": [...]}` or a bare `[...]` array;
/// always encodes as the object form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "FeedbackRepr")]
pub struct Feedback {
    pub suggestions: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FeedbackRepr {
    Object {
        #[serde(default)]
        suggestions: Vec<String>,
    },
    List(Vec<String>),
}

impl From<FeedbackRepr> for Feedback {
    fn from(repr: FeedbackRepr) -> Self {
        match repr {
            FeedbackRepr::Object { suggestions } | FeedbackRepr::List(suggestions) => {
                Self { suggestions }
            }
        }
    }
}

//! # Sectionizer: free-text resume to named sections
//!
//! The backend stores a resume as one flattened text block. For display the
//! client splits it back into four sections by searching for their headings:
//!
//! | Section | Headings (case-insensitive) |
//! |---------|-----------------------------|
//! | summary | `Summary`, `Profile`, `Objective` |
//! | experience | `Experience` |
//! | education | `Education` |
//! | skills | `Skills` |
//!
//! Each section is an independent search over the original text: the first
//! occurrence of its heading, an optional run of `:` and whitespace, then
//! everything up to the next heading keyword of any section (or the end of
//! the text), trimmed.
//!
//! This is best-effort. Keywords are not word-bounded, so content that merely
//! mentions "experience" ends a capture early, and out-of-order headings can
//! yield empty or overlapping sections. Missing headings give empty strings;
//! [`ResumeSections::or_placeholders`] fills those for display.

use std::sync::LazyLock;

use regex::Regex;

static SUMMARY_HEADING: LazyLock<Regex> = LazyLock::new(|| heading(r"summary|profile|objective"));
static EXPERIENCE_HEADING: LazyLock<Regex> = LazyLock::new(|| heading(r"experience"));
static EDUCATION_HEADING: LazyLock<Regex> = LazyLock::new(|| heading(r"education"));
static SKILLS_HEADING: LazyLock<Regex> = LazyLock::new(|| heading(r"skills"));

/// Any heading keyword; ends a capture.
static NEXT_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)summary|profile|objective|experience|education|skills")
        .expect("heading boundary pattern is valid")
});

fn heading(keywords: &str) -> Regex {
    Regex::new(&format!(r"(?i)(?:{keywords})[:\s]*")).expect("heading pattern is valid")
}

pub const SUMMARY_PLACEHOLDER: &str = "No summary provided.";
pub const EXPERIENCE_PLACEHOLDER: &str = "No experience listed.";
pub const EDUCATION_PLACEHOLDER: &str = "No education listed.";
pub const SKILLS_PLACEHOLDER: &str = "No skills listed.";

/// The four display sections of a resume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeSections {
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
}

impl ResumeSections {
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.skills.is_empty()
    }

    /// Replace empty sections with their human-readable placeholder.
    pub fn or_placeholders(self) -> Self {
        fn fill(value: String, placeholder: &str) -> String {
            if value.is_empty() {
                placeholder.to_string()
            } else {
                value
            }
        }
        Self {
            summary: fill(self.summary, SUMMARY_PLACEHOLDER),
            experience: fill(self.experience, EXPERIENCE_PLACEHOLDER),
            education: fill(self.education, EDUCATION_PLACEHOLDER),
            skills: fill(self.skills, SKILLS_PLACEHOLDER),
        }
    }
}

/// Split resume free text into its four sections.
pub fn parse_sections(text: &str) -> ResumeSections {
    ResumeSections {
        summary: capture(&SUMMARY_HEADING, text),
        experience: capture(&EXPERIENCE_HEADING, text),
        education: capture(&EDUCATION_HEADING, text),
        skills: capture(&SKILLS_HEADING, text),
    }
}

fn capture(heading: &Regex, text: &str) -> String {
    let Some(found) = heading.find(text) else {
        return String::new();
    };
    let rest = &text[found.end()..];
    let end = NEXT_HEADING.find(rest).map_or(rest.len(), |m| m.start());
    rest[..end].trim().to_string()
}

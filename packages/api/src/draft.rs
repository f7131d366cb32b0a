//! # Resume draft: structured form input and its flattened text
//!
//! [`ResumeDraft`] holds what the resume builder form collects. The backend
//! only stores free text, so [`ResumeDraft::to_text`] flattens the draft into
//! a labelled, newline-delimited block:
//!
//! ```text
//! Full Name: Jane Doe
//! Location: NYC
//! Summary: Engineer
//! Skills: Go, SQL
//!
//! Experience:
//! - Developer at Acme (2020 - 2024)
//! Built services
//!
//! Education:
//! - B.S., NYU (2019)
//! ```
//!
//! The headings line up with [`crate::parse_sections`], so a saved draft
//! reads back into the same four sections.

use uuid::Uuid;

use crate::models::User;

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceEntry {
    /// Client-side render key; never sent to the backend.
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            company: String::new(),
            role: String::new(),
            duration: String::new(),
            description: String::new(),
        }
    }

    fn to_text(&self) -> String {
        format!(
            "- {} at {} ({})\n{}",
            self.role, self.company, self.duration, self.description
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationEntry {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub year: String,
}

impl EducationEntry {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            school: String::new(),
            degree: String::new(),
            year: String::new(),
        }
    }

    fn to_text(&self) -> String {
        format!("- {}, {} ({})", self.degree, self.school, self.year)
    }
}

/// Resume builder form state.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeDraft {
    pub full_name: String,
    pub location: String,
    pub summary: String,
    /// Comma separated, kept verbatim.
    pub skills: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

impl ResumeDraft {
    /// Default form values: the user's name prefilled and one blank entry in
    /// each list.
    pub fn for_user(user: Option<&User>) -> Self {
        Self {
            full_name: user
                .and_then(|u| u.full_name.clone())
                .unwrap_or_default(),
            location: String::new(),
            summary: String::new(),
            skills: String::new(),
            experience: vec![ExperienceEntry::blank()],
            education: vec![EducationEntry::blank()],
        }
    }

    pub fn add_experience(&mut self) {
        self.experience.push(ExperienceEntry::blank());
    }

    pub fn add_education(&mut self) {
        self.education.push(EducationEntry::blank());
    }

    /// True when the draft matches the defaults for `user`, ignoring entry ids.
    pub fn is_pristine(&self, user: Option<&User>) -> bool {
        let defaults = Self::for_user(user);
        self.full_name == defaults.full_name
            && self.location.is_empty()
            && self.summary.is_empty()
            && self.skills.is_empty()
            && self.experience.len() == 1
            && self.experience.iter().all(|e| {
                e.company.is_empty()
                    && e.role.is_empty()
                    && e.duration.is_empty()
                    && e.description.is_empty()
            })
            && self.education.len() == 1
            && self
                .education
                .iter()
                .all(|e| e.school.is_empty() && e.degree.is_empty() && e.year.is_empty())
    }

    /// Flatten into the free-text block the backend stores.
    pub fn to_text(&self) -> String {
        let experience = self
            .experience
            .iter()
            .map(ExperienceEntry::to_text)
            .collect::<Vec<_>>()
            .join("\n\n");
        let education = self
            .education
            .iter()
            .map(EducationEntry::to_text)
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Full Name: {}\nLocation: {}\nSummary: {}\nSkills: {}\n\nExperience:\n{}\n\nEducation:\n{}",
            self.full_name, self.location, self.summary, self.skills, experience, education
        )
        .trim()
        .to_string()
    }
}

use api::models::parse_date;
use api::{Resume, ResumeId, ResumeSections};
use dioxus::prelude::*;

use crate::export::card_element_id;
use crate::icons::{FaDownload, FaEye, FaTrashCan, FaWandMagicSparkles};
use crate::Icon;

/// Stored suggestions for `resume`, shown whichever text is displayed.
pub fn feedback_suggestions(resume: &Resume) -> Vec<String> {
    resume
        .feedback
        .as_ref()
        .map(|f| f.suggestions.clone())
        .unwrap_or_default()
}

/// One resume rendered as a CV card with its actions.
///
/// `sections` are those of the text currently displayed, which is the
/// optimized text when `showing_optimized`.
#[component]
pub fn ResumeCard(
    resume: Resume,
    sections: ResumeSections,
    showing_optimized: bool,
    optimizing: bool,
    on_delete: EventHandler<ResumeId>,
    on_optimize: EventHandler<ResumeId>,
    on_toggle: EventHandler<ResumeId>,
    on_download: EventHandler<ResumeId>,
) -> Element {
    let id = resume.id;
    let created = parse_date(&resume.created_at)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| resume.created_at.clone());
    let has_optimized = resume.optimized().is_some();
    let suggestions = feedback_suggestions(&resume);

    rsx! {
        div {
            class: "resume-item",
            div {
                id: card_element_id(id),
                class: "resume-cv",
                div {
                    class: "resume-cv-header",
                    h3 { "Resume #{id}" }
                    if showing_optimized {
                        span { class: "resume-tag", "Optimized" }
                    }
                    if !created.is_empty() {
                        span { class: "view-muted", "Created {created}" }
                    }
                }
                section {
                    h4 { "Summary" }
                    p { class: "resume-text", "{sections.summary}" }
                }
                section {
                    h4 { "Experience" }
                    p { class: "resume-text", "{sections.experience}" }
                }
                section {
                    h4 { "Education" }
                    p { class: "resume-text", "{sections.education}" }
                }
                section {
                    h4 { "Skills" }
                    p { class: "resume-text", "{sections.skills}" }
                }
            }

            if !suggestions.is_empty() {
                div {
                    class: "resume-feedback",
                    h4 { "Suggestions" }
                    ul {
                        for suggestion in suggestions {
                            li { "{suggestion}" }
                        }
                    }
                }
            }

            div {
                class: "resume-actions",
                button {
                    class: "btn btn-primary",
                    disabled: optimizing,
                    onclick: move |_| on_optimize.call(id),
                    Icon { icon: FaWandMagicSparkles, width: 14, height: 14 }
                    if optimizing { " Optimizing..." } else { " Optimize with AI" }
                }
                if has_optimized {
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_toggle.call(id),
                        Icon { icon: FaEye, width: 14, height: 14 }
                        if showing_optimized { " Show original" } else { " Show optimized" }
                    }
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_download.call(id),
                    Icon { icon: FaDownload, width: 14, height: 14 }
                    " Download PDF"
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_delete.call(id),
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                    " Delete"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume_list::ResumeList;
    use crate::testing::resume;
    use api::Feedback;

    #[test]
    fn test_suggestions_listed_in_original_view() {
        let mut stored = resume(42, 7, "Summary: Engineer");
        stored.optimized_text = Some("Summary: Senior engineer".into());
        stored.feedback = Some(Feedback {
            suggestions: vec!["Quantify impact".into()],
        });
        let list = ResumeList::from_result(Ok(vec![stored]));

        let card = list.get(42).unwrap();
        assert!(!list.is_active(42));
        assert_eq!(list.displayed_text(card), "Summary: Engineer");
        assert_eq!(feedback_suggestions(card), vec!["Quantify impact".to_string()]);
    }

    #[test]
    fn test_no_feedback_no_suggestions() {
        assert!(feedback_suggestions(&resume(1, 7, "Summary: x")).is_empty());
    }
}

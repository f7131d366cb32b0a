use api::ResumeDraft;
use dioxus::prelude::*;

use crate::resume_form::{apply_outcome, submit_draft, FormField, SubmitOutcome};
use crate::{use_auth, use_backend};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Resume builder form. Experience and education entries can be appended but
/// not removed.
#[component]
pub fn ResumeFormView() -> Element {
    let auth = use_auth();
    let backend = use_backend();
    let mut draft = use_signal(|| ResumeDraft::for_user(auth.peek().user.as_ref()));
    let mut outcome = use_signal(|| Option::<SubmitOutcome>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        spawn(async move {
            saving.set(true);
            outcome.set(None);
            let user = auth.read().user.clone();
            let snapshot = draft.read().clone();
            let result = submit_draft(&backend, user.as_ref(), &snapshot).await;
            apply_outcome(&mut draft.write(), user.as_ref(), &result);
            outcome.set(Some(result));
            saving.set(false);
        });
    };

    let form = draft.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page max-w-3xl mx-auto w-full",
            h1 { class: "view-title", "Create Resume" }

            if let Some(result) = outcome() {
                div {
                    class: if result.is_saved() { "view-notice success" } else { "view-notice error" },
                    "{result.message()}"
                }
            }

            form {
                class: "resume-form",
                onsubmit: handle_submit,

                h2 { class: "view-section-title", "Personal Information" }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Full Name",
                    required: FormField::FullName.is_required(),
                    value: form.full_name.clone(),
                    oninput: move |evt: FormEvent| draft.write().full_name = evt.value(),
                }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Location",
                    required: FormField::Location.is_required(),
                    value: form.location.clone(),
                    oninput: move |evt: FormEvent| draft.write().location = evt.value(),
                }
                textarea {
                    class: "input",
                    placeholder: "Professional Summary",
                    required: FormField::Summary.is_required(),
                    rows: 4,
                    value: form.summary.clone(),
                    oninput: move |evt: FormEvent| draft.write().summary = evt.value(),
                }

                h2 { class: "view-section-title", "Experience" }
                for (i, entry) in form.experience.iter().enumerate() {
                    div {
                        key: "{entry.id}",
                        class: "resume-entry",
                        input {
                            class: "input",
                            r#type: "text",
                            placeholder: "Company",
                            required: FormField::Company.is_required(),
                                    value: entry.company.clone(),
                            oninput: move |evt: FormEvent| draft.write().experience[i].company = evt.value(),
                        }
                        input {
                            class: "input",
                            r#type: "text",
                            placeholder: "Role",
                            required: FormField::Role.is_required(),
                                    value: entry.role.clone(),
                            oninput: move |evt: FormEvent| draft.write().experience[i].role = evt.value(),
                        }
                        input {
                            class: "input",
                            r#type: "text",
                            placeholder: "Duration (e.g. 2020 - 2023)",
                            required: FormField::Duration.is_required(),
                            value: entry.duration.clone(),
                            oninput: move |evt: FormEvent| draft.write().experience[i].duration = evt.value(),
                        }
                        textarea {
                            class: "input",
                            placeholder: "Description",
                            required: FormField::Description.is_required(),
                            rows: 3,
                            value: entry.description.clone(),
                            oninput: move |evt: FormEvent| draft.write().experience[i].description = evt.value(),
                        }
                    }
                }
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| draft.write().add_experience(),
                    "+ Add Experience"
                }

                h2 { class: "view-section-title", "Education" }
                for (i, entry) in form.education.iter().enumerate() {
                    div {
                        key: "{entry.id}",
                        class: "resume-entry",
                        input {
                            class: "input",
                            r#type: "text",
                            placeholder: "School",
                            required: FormField::School.is_required(),
                                    value: entry.school.clone(),
                            oninput: move |evt: FormEvent| draft.write().education[i].school = evt.value(),
                        }
                        input {
                            class: "input",
                            r#type: "text",
                            placeholder: "Degree",
                            required: FormField::Degree.is_required(),
                                    value: entry.degree.clone(),
                            oninput: move |evt: FormEvent| draft.write().education[i].degree = evt.value(),
                        }
                        input {
                            class: "input",
                            r#type: "text",
                            placeholder: "Year",
                            required: FormField::Year.is_required(),
                            value: entry.year.clone(),
                            oninput: move |evt: FormEvent| draft.write().education[i].year = evt.value(),
                        }
                    }
                }
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| draft.write().add_education(),
                    "+ Add Education"
                }

                h2 { class: "view-section-title", "Skills" }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Comma separated, e.g. Rust, SQL, Leadership",
                    required: FormField::Skills.is_required(),
                    value: form.skills.clone(),
                    oninput: move |evt: FormEvent| draft.write().skills = evt.value(),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save Resume" }
                }
            }
        }
    }
}

use api::{Backend, ResumeId};
use dioxus::prelude::*;

use crate::export::download_resume;
use crate::platform::{alert, confirm};
use crate::resume_card::ResumeCard;
use crate::resume_list::{ListStatus, OptimizeRequest, ResumeList, NO_RESUMES, SIGNED_OUT};
use crate::{use_auth, use_backend};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// The signed-in user's resumes. `on_upgrade` fires when a non-premium user
/// asks for an optimization.
#[component]
pub fn ResumeListView(on_upgrade: EventHandler<()>) -> Element {
    let auth = use_auth();
    let backend = use_backend();
    let mut list = use_signal(ResumeList::default);

    // Keyed on the user id only, so a premium upgrade does not refetch.
    let user_id = use_memo(move || auth.read().user.as_ref().map(|u| u.id));

    let loader_backend = backend.clone();
    let _loader = use_resource(move || {
        let backend = loader_backend.clone();
        async move {
            let _ = user_id();
            let user = auth.peek().user.clone();
            list.set(ResumeList::load(&backend, user.as_ref()).await);
        }
    });

    let delete_backend = backend.clone();
    let handle_delete = use_callback(move |id: ResumeId| {
        if !confirm("Are you sure you want to delete this resume?") {
            return;
        }
        let backend = delete_backend.clone();
        spawn(async move {
            let result = backend.delete_resume(id).await;
            if let Err(message) = list.write().apply_delete(id, result) {
                alert(&message);
            }
        });
    });

    let handle_optimize = use_callback(move |id: ResumeId| {
        let user = auth.read().user.clone();
        let request = list.write().request_optimize(user.as_ref(), id);
        match request {
            OptimizeRequest::RequiresPremium => on_upgrade.call(()),
            OptimizeRequest::Missing => {}
            OptimizeRequest::Send { original_text } => {
                let backend = backend.clone();
                spawn(async move {
                    let result = backend.optimize_resume(id, &original_text).await;
                    if let Err(message) = list.write().apply_optimization(id, result) {
                        alert(&message);
                    }
                });
            }
        }
    });

    let handle_download = use_callback(move |id: ResumeId| {
        spawn(async move {
            if let Err(e) = download_resume(id).await {
                tracing::warn!("PDF export of resume {id} failed: {e}");
                alert("Could not download the resume.");
            }
        });
    });

    let state = list.read().clone();
    let body = match &state.status {
        ListStatus::SignedOut => rsx! {
            p { class: "view-muted", "{SIGNED_OUT}" }
        },
        ListStatus::Loading => rsx! {
            p { class: "view-muted", "Loading resumes..." }
        },
        ListStatus::Failed(message) => rsx! {
            div { class: "view-notice error", "{message}" }
        },
        ListStatus::Ready if state.resumes.is_empty() => rsx! {
            p { class: "view-muted", "{NO_RESUMES}" }
        },
        ListStatus::Ready => rsx! {
            div {
                class: "resume-list",
                for resume in state.resumes.iter() {
                    ResumeCard {
                        key: "{resume.id}",
                        resume: resume.clone(),
                        sections: state.sections_for(resume),
                        showing_optimized: state.is_active(resume.id) && resume.optimized().is_some(),
                        optimizing: state.is_optimizing(resume.id),
                        on_delete: handle_delete,
                        on_optimize: handle_optimize,
                        on_toggle: move |id| list.write().toggle_view(id),
                        on_download: handle_download,
                    }
                }
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page max-w-3xl mx-auto w-full",
            h1 { class: "view-title", "My Resumes" }
            {body}
        }
    }
}

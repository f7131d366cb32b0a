//! # API crate: backend contract and resume domain logic for BatistAI
//!
//! Everything the pages need that does not depend on Dioxus lives here, so it
//! can be tested natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Backend`] trait over the remote HTTP API and its reqwest implementation [`ApiClient`] |
//! | [`draft`] | Resume builder form state and its flattening into free text |
//! | [`error`] | [`ApiError`] taxonomy: network, rejected, malformed |
//! | [`models`] | [`User`], [`Resume`], [`Feedback`] as exchanged with the backend |
//! | [`sections`] | Sectionizer: free text back into summary / experience / education / skills |

pub mod client;
pub mod draft;
pub mod error;
pub mod models;
pub mod sections;

pub use client::{ApiClient, Backend, Optimization, Registration};
pub use draft::{EducationEntry, ExperienceEntry, ResumeDraft};
pub use error::ApiError;
pub use models::{Feedback, Resume, ResumeId, User, UserId};
pub use sections::{parse_sections, ResumeSections};

//! Thin form adapter over the DTI core.
//!
//! Holds raw per-field input state the way a form does, runs the
//! submit pipeline (collect → validate → calculate), keeps the most recent
//! report, and formats results for display. All domain logic lives in
//! `dti-core`; nothing here depends on a rendering framework.

pub mod form;
pub mod format;
pub mod session;

pub use form::ProfileForm;
pub use session::{FormSession, SubmissionOutcome};

//! Input validation for raw form submissions.
//!
//! The presentation layer supplies field values exactly as the user left
//! them (text for amounts, a boolean for the checkbox); [`validate`] coerces
//! and constraint-checks them into a [`crate::models::DebtProfile`], or
//! reports every failing field at once.

pub mod raw;
pub mod schema;

pub use raw::{RawProfile, RawValue};
pub use schema::{FieldError, Violation, ViolationKind, validate};

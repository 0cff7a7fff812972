//! Debt-to-income calculation modules.
//!
//! This module provides the pure computation pipeline that turns a
//! validated [`crate::models::DebtProfile`] into a ratio and its
//! qualitative classification.

pub mod worksheet;

pub use worksheet::{DtiReport, DtiTiers, DtiWorksheet, DtiWorksheetError};

//! Submission lifecycle for the calculator form.
//!
//! A submission is a single synchronous run: collect the raw fields,
//! validate, and calculate on success. The session keeps only the most
//! recent report, overwritten by the next successful submission.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use dti_core::calculations::{DtiReport, DtiWorksheet, DtiWorksheetError};
use dti_core::validation::{FieldError, validate};

use crate::form::ProfileForm;

/// The two terminal states of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    /// The profile validated and the worksheet ran.
    Calculated(DtiReport),

    /// Validation failed and computation was withheld.
    /// Errors are in field declaration order, one per failing field.
    Rejected(Vec<FieldError>),
}

/// Holds the worksheet and the most recent report across submissions.
///
/// A rejected submission leaves the previous report in place, matching a
/// form that keeps the last result rendered while the user corrects input.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    worksheet: DtiWorksheet,
    latest: Option<DtiReport>,
}

impl FormSession {
    pub fn new(worksheet: DtiWorksheet) -> Self {
        Self {
            worksheet,
            latest: None,
        }
    }

    /// Runs one submission to completion: validate, then calculate.
    ///
    /// # Errors
    ///
    /// Returns [`DtiWorksheetError`] only for a misconfigured worksheet;
    /// user input problems come back as [`SubmissionOutcome::Rejected`].
    pub fn submit(
        &mut self,
        form: &ProfileForm,
    ) -> Result<SubmissionOutcome, DtiWorksheetError> {
        let raw = form.to_raw_profile();
        match validate(&raw) {
            Ok(profile) => {
                let report = self.worksheet.calculate(&profile)?;
                info!(
                    total_monthly_debt = %report.total_monthly_debt,
                    ratio_percent = %report.ratio_percent,
                    classification = report.classification.as_str(),
                    "submission calculated"
                );
                self.latest = Some(report.clone());
                Ok(SubmissionOutcome::Calculated(report))
            }
            Err(errors) => {
                debug!(error_count = errors.len(), "submission rejected");
                Ok(SubmissionOutcome::Rejected(errors))
            }
        }
    }

    /// The report from the most recent successful submission, if any.
    pub fn latest(&self) -> Option<&DtiReport> {
        self.latest.as_ref()
    }

    /// Discards the held report, as when the calculator unmounts.
    pub fn clear(&mut self) {
        self.latest = None;
    }
}

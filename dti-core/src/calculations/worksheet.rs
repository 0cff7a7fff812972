//! Debt-to-income ratio worksheet.
//!
//! This module implements the DTI computation as a stateless pipeline over
//! a validated [`DebtProfile`]:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Total monthly debt: rent/mortgage + car + credit cards + student loans + personal loans + other debts, plus the new mortgage payment only when it is flagged for inclusion |
//! | 2    | Ratio: total monthly debt ÷ monthly gross income × 100 |
//! | 3    | Classification: `Good` up to the good ceiling, `Fair` up to the fair ceiling, `Poor` above |
//!
//! No rounding happens anywhere in this pipeline. Classification compares
//! the exact ratio against the tier ceilings, and boundary values belong to
//! the lower (better) tier; presentation rounding is the caller's concern
//! and must stay downstream of classification.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use dti_core::calculations::DtiWorksheet;
//! use dti_core::models::{DebtProfile, RatioClassification};
//!
//! let profile = DebtProfile {
//!     monthly_gross_income: dec!(5000.00),
//!     current_rent_mortgage: dec!(1200.00),
//!     car_payment: dec!(300.00),
//!     credit_cards: dec!(150.00),
//!     student_loans: dec!(200.00),
//!     other_debts: dec!(50.00),
//!     ..Default::default()
//! };
//!
//! let worksheet = DtiWorksheet::default();
//! let report = worksheet.calculate(&profile).unwrap();
//!
//! assert_eq!(report.total_monthly_debt, dec!(1900.00));
//! assert_eq!(report.ratio_percent, dec!(38));
//! assert_eq!(report.classification, RatioClassification::Fair);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::models::{DebtProfile, RatioClassification};

/// Errors that can occur during DTI worksheet calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DtiWorksheetError {
    /// A tier ceiling was zero or negative.
    #[error("tier ceiling must be positive, got {0}")]
    NonPositiveCeiling(Decimal),

    /// The good ceiling must sit strictly below the fair ceiling.
    #[error("good ceiling {good} must be below fair ceiling {fair}")]
    CeilingsOutOfOrder { good: Decimal, fair: Decimal },

    /// Monthly gross income must be positive before a ratio can be formed.
    ///
    /// Unreachable for profiles produced by the validation schema, which
    /// already enforces income positivity.
    #[error("monthly gross income must be greater than 0, got {0}")]
    NonPositiveIncome(Decimal),
}

/// Classification tier ceilings, in ratio percentage points.
///
/// The defaults carry the bands conventionally used in lending
/// underwriting: a ratio up to 36% is `Good`, up to 43% is `Fair`, and
/// anything above is `Poor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtiTiers {
    /// Highest ratio still classified `Good`. Conventionally 36.
    pub good_ceiling: Decimal,

    /// Highest ratio still classified `Fair`. Conventionally 43.
    pub fair_ceiling: Decimal,
}

impl Default for DtiTiers {
    fn default() -> Self {
        Self {
            good_ceiling: Decimal::from(36),
            fair_ceiling: Decimal::from(43),
        }
    }
}

impl DtiTiers {
    /// Validates the tier ceilings.
    ///
    /// # Errors
    ///
    /// Returns [`DtiWorksheetError`] if either ceiling is non-positive or
    /// the good ceiling does not sit strictly below the fair ceiling.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use dti_core::calculations::{DtiTiers, DtiWorksheetError};
    ///
    /// let tiers = DtiTiers {
    ///     good_ceiling: dec!(43),
    ///     fair_ceiling: dec!(36),
    /// };
    ///
    /// let result = tiers.validate();
    /// assert_eq!(
    ///     result,
    ///     Err(DtiWorksheetError::CeilingsOutOfOrder {
    ///         good: dec!(43),
    ///         fair: dec!(36),
    ///     })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), DtiWorksheetError> {
        if self.good_ceiling <= Decimal::ZERO {
            return Err(DtiWorksheetError::NonPositiveCeiling(self.good_ceiling));
        }
        if self.fair_ceiling <= Decimal::ZERO {
            return Err(DtiWorksheetError::NonPositiveCeiling(self.fair_ceiling));
        }
        if self.good_ceiling >= self.fair_ceiling {
            return Err(DtiWorksheetError::CeilingsOutOfOrder {
                good: self.good_ceiling,
                fair: self.fair_ceiling,
            });
        }
        Ok(())
    }
}

/// Result of a DTI worksheet run.
///
/// Derived, never stored: the caller overwrites it on the next submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtiReport {
    /// Sum of the included recurring monthly debt payments.
    pub total_monthly_debt: Decimal,

    /// Total monthly debt as a percentage of gross income, unrounded.
    ///
    /// Rounding to display precision is a presentation concern and must
    /// never feed back into classification.
    pub ratio_percent: Decimal,

    /// Qualitative band for the unrounded ratio.
    pub classification: RatioClassification,

    /// Whether the new mortgage payment was part of the total.
    pub included_new_mortgage: bool,
}

/// Calculator for the DTI worksheet.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use dti_core::calculations::{DtiTiers, DtiWorksheet};
/// use dti_core::models::{DebtProfile, RatioClassification};
///
/// let profile = DebtProfile {
///     monthly_gross_income: dec!(4000.00),
///     current_rent_mortgage: dec!(1000.00),
///     new_mortgage_payment: dec!(500.00),
///     include_new_mortgage: true,
///     ..Default::default()
/// };
///
/// let worksheet = DtiWorksheet::new(DtiTiers::default());
/// let report = worksheet.calculate(&profile).unwrap();
///
/// assert_eq!(report.total_monthly_debt, dec!(1500.00));
/// assert_eq!(report.ratio_percent, dec!(37.5));
/// assert_eq!(report.classification, RatioClassification::Fair);
/// assert!(report.included_new_mortgage);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DtiWorksheet {
    tiers: DtiTiers,
}

impl DtiWorksheet {
    /// Creates a new DTI worksheet calculator with the given tier ceilings.
    pub fn new(tiers: DtiTiers) -> Self {
        Self { tiers }
    }

    /// Calculates the complete DTI worksheet and returns the report.
    ///
    /// This is the main entry point. It validates the tier configuration,
    /// totals the included debts, forms the ratio, and classifies it.
    ///
    /// # Errors
    ///
    /// Returns [`DtiWorksheetError`] if the tier configuration is invalid
    /// or the profile's income is not positive. A profile produced by the
    /// validation schema never triggers the latter.
    pub fn calculate(
        &self,
        profile: &DebtProfile,
    ) -> Result<DtiReport, DtiWorksheetError> {
        self.tiers.validate()?;

        let total_monthly_debt = self.total_monthly_debt(profile);
        let ratio_percent =
            ratio_against_income(total_monthly_debt, profile.monthly_gross_income)?;
        let classification = self.classify(ratio_percent);

        Ok(DtiReport {
            total_monthly_debt,
            ratio_percent,
            classification,
            included_new_mortgage: profile.include_new_mortgage,
        })
    }

    /// Sums the recurring monthly debt payments.
    ///
    /// The new mortgage payment contributes only when the profile flags it
    /// for inclusion; every other debt field always counts.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use dti_core::calculations::DtiWorksheet;
    /// use dti_core::models::DebtProfile;
    ///
    /// let profile = DebtProfile {
    ///     monthly_gross_income: dec!(4000.00),
    ///     current_rent_mortgage: dec!(1000.00),
    ///     new_mortgage_payment: dec!(500.00),
    ///     include_new_mortgage: false,
    ///     ..Default::default()
    /// };
    ///
    /// let worksheet = DtiWorksheet::default();
    ///
    /// // The flag is off, so the new mortgage payment does not count
    /// assert_eq!(worksheet.total_monthly_debt(&profile), dec!(1000.00));
    /// ```
    pub fn total_monthly_debt(&self, profile: &DebtProfile) -> Decimal {
        let new_mortgage = if profile.include_new_mortgage {
            profile.new_mortgage_payment
        } else {
            Decimal::ZERO
        };

        profile.current_rent_mortgage
            + new_mortgage
            + profile.car_payment
            + profile.credit_cards
            + profile.student_loans
            + profile.personal_loans
            + profile.other_debts
    }

    /// Forms the debt-to-income ratio for the profile, as an unrounded
    /// percentage.
    ///
    /// # Errors
    ///
    /// Returns [`DtiWorksheetError::NonPositiveIncome`] if the profile's
    /// income is zero or negative.
    pub fn ratio_percent(
        &self,
        profile: &DebtProfile,
    ) -> Result<Decimal, DtiWorksheetError> {
        ratio_against_income(
            self.total_monthly_debt(profile),
            profile.monthly_gross_income,
        )
    }

    /// Maps an unrounded ratio percentage onto its classification tier.
    ///
    /// Boundary values belong to the lower (better) tier: exactly 36 is
    /// `Good` and exactly 43 is `Fair` under the default ceilings.
    pub fn classify(&self, ratio_percent: Decimal) -> RatioClassification {
        if ratio_percent <= self.tiers.good_ceiling {
            RatioClassification::Good
        } else if ratio_percent <= self.tiers.fair_ceiling {
            RatioClassification::Fair
        } else {
            RatioClassification::Poor
        }
    }
}

/// Divides total debt by income and scales to a percentage.
fn ratio_against_income(
    total_monthly_debt: Decimal,
    monthly_gross_income: Decimal,
) -> Result<Decimal, DtiWorksheetError> {
    if monthly_gross_income <= Decimal::ZERO {
        warn!(
            monthly_gross_income = %monthly_gross_income,
            "cannot form a ratio against non-positive income"
        );
        return Err(DtiWorksheetError::NonPositiveIncome(monthly_gross_income));
    }

    Ok(total_monthly_debt / monthly_gross_income * Decimal::ONE_HUNDRED)
}

//! The validation schema: coercion and constraint checks for raw input.
//!
//! Validation is total and side-effect-free: the same raw mapping always
//! produces the same outcome, the input is never mutated, and failures come
//! back as data rather than panics. Every field is checked independently so
//! the caller can surface all problems in a single pass.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::models::{DebtProfile, FieldId};
use crate::validation::raw::{RawProfile, RawValue};

/// Why a single field failed validation.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// Raw text could not be coerced to a decimal amount.
    #[error("must be a number")]
    NotANumber,

    /// Raw text could not be coerced to the checkbox flag.
    #[error("must be true or false")]
    NotABoolean,

    /// Income must be strictly positive; the ratio divides by it.
    #[error("must be greater than 0")]
    NotPositive,

    /// Debt amounts may not reduce the total.
    #[error("must be 0 or greater")]
    Negative,
}

/// Broad category of a [`Violation`], for callers that branch on whether
/// the raw value was unreadable or merely out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    Coercion,
    Constraint,
}

impl Violation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::NotANumber | Self::NotABoolean => ViolationKind::Coercion,
            Self::NotPositive | Self::Negative => ViolationKind::Constraint,
        }
    }
}

/// A single field's validation failure, ready to render next to the field.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {violation}")]
pub struct FieldError {
    pub field: FieldId,
    pub violation: Violation,
}

/// Validates a raw submission into a [`DebtProfile`].
///
/// Amount fields are coerced from text (whitespace trimmed, comma thousands
/// separators stripped; empty text takes the zero default) and then checked
/// against their minimum bound. The checkbox accepts a boolean directly or
/// the text forms `"true"`/`"false"`. Fields absent from the mapping take
/// their declared defaults.
///
/// On failure, returns one [`FieldError`] per failing field, in field
/// declaration order, with no short-circuiting.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use dti_core::models::FieldId;
/// use dti_core::validation::{RawProfile, validate};
///
/// let mut raw = RawProfile::new();
/// raw.set_text(FieldId::MonthlyGrossIncome, "5,000");
/// raw.set_text(FieldId::CurrentRentMortgage, "1200");
/// raw.set_flag(FieldId::IncludeNewMortgage, false);
///
/// let profile = validate(&raw).unwrap();
///
/// assert_eq!(profile.monthly_gross_income, dec!(5000));
/// assert_eq!(profile.current_rent_mortgage, dec!(1200));
/// // Unset fields fall back to their defaults
/// assert_eq!(profile.car_payment, dec!(0));
/// ```
pub fn validate(raw: &RawProfile) -> Result<DebtProfile, Vec<FieldError>> {
    let mut errors = Vec::new();

    // Field declaration order, which fixes the error ordering
    let monthly_gross_income = amount_field(FieldId::MonthlyGrossIncome, raw, &mut errors);
    let current_rent_mortgage = amount_field(FieldId::CurrentRentMortgage, raw, &mut errors);
    let new_mortgage_payment = amount_field(FieldId::NewMortgagePayment, raw, &mut errors);
    let car_payment = amount_field(FieldId::CarPayment, raw, &mut errors);
    let credit_cards = amount_field(FieldId::CreditCards, raw, &mut errors);
    let student_loans = amount_field(FieldId::StudentLoans, raw, &mut errors);
    let personal_loans = amount_field(FieldId::PersonalLoans, raw, &mut errors);
    let other_debts = amount_field(FieldId::OtherDebts, raw, &mut errors);
    let include_new_mortgage = flag_field(FieldId::IncludeNewMortgage, raw, &mut errors);

    if !errors.is_empty() {
        warn!(error_count = errors.len(), "raw profile failed validation");
        return Err(errors);
    }

    Ok(DebtProfile {
        monthly_gross_income,
        current_rent_mortgage,
        new_mortgage_payment,
        car_payment,
        credit_cards,
        student_loans,
        personal_loans,
        other_debts,
        include_new_mortgage,
    })
}

/// Coerces and bound-checks one amount field, recording any failure.
///
/// Returns the zero default when the field failed, so validation of the
/// remaining fields proceeds unaffected.
fn amount_field(
    field: FieldId,
    raw: &RawProfile,
    errors: &mut Vec<FieldError>,
) -> Decimal {
    let checked = coerce_amount(field, raw.get(field))
        .and_then(|amount| check_minimum_bound(field, amount));
    match checked {
        Ok(amount) => amount,
        Err(error) => {
            errors.push(error);
            Decimal::ZERO
        }
    }
}

fn flag_field(
    field: FieldId,
    raw: &RawProfile,
    errors: &mut Vec<FieldError>,
) -> bool {
    match coerce_flag(field, raw.get(field)) {
        Ok(value) => value,
        Err(error) => {
            errors.push(error);
            false
        }
    }
}

/// Normalizes amount input: trims whitespace and removes commas
/// (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

fn coerce_amount(
    field: FieldId,
    raw: Option<&RawValue>,
) -> Result<Decimal, FieldError> {
    let text = match raw {
        None => return Ok(Decimal::ZERO),
        Some(RawValue::Flag(_)) => {
            warn!(field = field.as_str(), "expected an amount, got a flag");
            return Err(FieldError {
                field,
                violation: Violation::NotANumber,
            });
        }
        Some(RawValue::Text(text)) => text,
    };

    let normalized = normalize_amount_input(text);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        warn!(field = field.as_str(), input = %text, "invalid amount: {}", e);
        FieldError {
            field,
            violation: Violation::NotANumber,
        }
    })
}

fn coerce_flag(
    field: FieldId,
    raw: Option<&RawValue>,
) -> Result<bool, FieldError> {
    let text = match raw {
        None => return Ok(false),
        Some(RawValue::Flag(value)) => return Ok(*value),
        Some(RawValue::Text(text)) => text,
    };

    match text.trim().to_ascii_lowercase().as_str() {
        "" => Ok(false),
        "true" => Ok(true),
        "false" => Ok(false),
        _ => {
            warn!(field = field.as_str(), input = %text, "invalid flag");
            Err(FieldError {
                field,
                violation: Violation::NotABoolean,
            })
        }
    }
}

/// Checks a coerced amount against its field's minimum bound: income must
/// be strictly positive, every debt non-negative.
fn check_minimum_bound(
    field: FieldId,
    amount: Decimal,
) -> Result<Decimal, FieldError> {
    let violation = if field == FieldId::MonthlyGrossIncome {
        (amount <= Decimal::ZERO).then_some(Violation::NotPositive)
    } else {
        (amount < Decimal::ZERO).then_some(Violation::Negative)
    };

    match violation {
        Some(violation) => {
            warn!(
                field = field.as_str(),
                amount = %amount,
                "amount violates its minimum bound"
            );
            Err(FieldError { field, violation })
        }
        None => Ok(amount),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;

    /// A fully populated, valid raw submission.
    fn valid_raw() -> RawProfile {
        let mut raw = RawProfile::new();
        raw.set_text(FieldId::MonthlyGrossIncome, "5000");
        raw.set_text(FieldId::CurrentRentMortgage, "1200");
        raw.set_text(FieldId::NewMortgagePayment, "0");
        raw.set_text(FieldId::CarPayment, "300");
        raw.set_text(FieldId::CreditCards, "150");
        raw.set_text(FieldId::StudentLoans, "200");
        raw.set_text(FieldId::PersonalLoans, "0");
        raw.set_text(FieldId::OtherDebts, "50");
        raw.set_flag(FieldId::IncludeNewMortgage, false);
        raw
    }

    /// Initializes tracing subscriber for tests that verify log output.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // Coercion tests
    // =========================================================================

    #[test]
    fn validate_accepts_fully_populated_profile() {
        let raw = valid_raw();

        let profile = validate(&raw).unwrap();

        assert_eq!(profile.monthly_gross_income, dec!(5000));
        assert_eq!(profile.current_rent_mortgage, dec!(1200));
        assert_eq!(profile.car_payment, dec!(300));
        assert_eq!(profile.credit_cards, dec!(150));
        assert_eq!(profile.student_loans, dec!(200));
        assert_eq!(profile.other_debts, dec!(50));
        assert!(!profile.include_new_mortgage);
    }

    #[test]
    fn validate_accepts_comma_separators_and_padding() {
        let mut raw = RawProfile::new();
        raw.set_text(FieldId::MonthlyGrossIncome, "  5,000.25  ");
        raw.set_text(FieldId::CurrentRentMortgage, "1,234,567.89");

        let profile = validate(&raw).unwrap();

        assert_eq!(profile.monthly_gross_income, dec!(5000.25));
        assert_eq!(profile.current_rent_mortgage, dec!(1234567.89));
    }

    #[test]
    fn validate_applies_defaults_for_missing_fields() {
        let mut raw = RawProfile::new();
        raw.set_text(FieldId::MonthlyGrossIncome, "4000");

        let profile = validate(&raw).unwrap();

        assert_eq!(profile.current_rent_mortgage, dec!(0));
        assert_eq!(profile.new_mortgage_payment, dec!(0));
        assert_eq!(profile.other_debts, dec!(0));
        assert!(!profile.include_new_mortgage);
    }

    #[test]
    fn validate_treats_empty_text_as_default() {
        let mut raw = valid_raw();
        raw.set_text(FieldId::CarPayment, "");
        raw.set_text(FieldId::StudentLoans, "   ");

        let profile = validate(&raw).unwrap();

        assert_eq!(profile.car_payment, dec!(0));
        assert_eq!(profile.student_loans, dec!(0));
    }

    #[test]
    fn validate_rejects_non_numeric_text() {
        let mut raw = valid_raw();
        raw.set_text(FieldId::CreditCards, "abc");

        let errors = validate(&raw).unwrap_err();

        assert_eq!(
            errors,
            vec![FieldError {
                field: FieldId::CreditCards,
                violation: Violation::NotANumber,
            }]
        );
    }

    #[test]
    fn validate_rejects_flag_value_in_amount_field() {
        let mut raw = valid_raw();
        raw.set_flag(FieldId::CarPayment, true);

        let errors = validate(&raw).unwrap_err();

        assert_eq!(
            errors,
            vec![FieldError {
                field: FieldId::CarPayment,
                violation: Violation::NotANumber,
            }]
        );
    }

    #[test]
    fn validate_accepts_textual_flag() {
        let mut raw = valid_raw();
        raw.set_text(FieldId::IncludeNewMortgage, "TRUE");

        let profile = validate(&raw).unwrap();

        assert!(profile.include_new_mortgage);
    }

    #[test]
    fn validate_rejects_flag_text_that_is_not_boolean() {
        let mut raw = valid_raw();
        raw.set_text(FieldId::IncludeNewMortgage, "yes");

        let errors = validate(&raw).unwrap_err();

        assert_eq!(
            errors,
            vec![FieldError {
                field: FieldId::IncludeNewMortgage,
                violation: Violation::NotABoolean,
            }]
        );
    }

    // =========================================================================
    // Constraint tests
    // =========================================================================

    #[test]
    fn validate_rejects_zero_income() {
        let _guard = init_test_tracing();
        let mut raw = valid_raw();
        raw.set_text(FieldId::MonthlyGrossIncome, "0");

        let errors = validate(&raw).unwrap_err();

        assert_eq!(
            errors,
            vec![FieldError {
                field: FieldId::MonthlyGrossIncome,
                violation: Violation::NotPositive,
            }]
        );
    }

    #[test]
    fn validate_rejects_negative_income() {
        let mut raw = valid_raw();
        raw.set_text(FieldId::MonthlyGrossIncome, "-5");

        let errors = validate(&raw).unwrap_err();

        assert_eq!(
            errors,
            vec![FieldError {
                field: FieldId::MonthlyGrossIncome,
                violation: Violation::NotPositive,
            }]
        );
    }

    #[test]
    fn validate_rejects_negative_debt_field_alone() {
        let mut raw = valid_raw();
        raw.set_text(FieldId::PersonalLoans, "-0.01");

        let errors = validate(&raw).unwrap_err();

        // Only the offending field errors; the valid ones pass untouched
        assert_eq!(
            errors,
            vec![FieldError {
                field: FieldId::PersonalLoans,
                violation: Violation::Negative,
            }]
        );
    }

    #[test]
    fn validate_collects_errors_in_field_order() {
        let mut raw = valid_raw();
        raw.set_text(FieldId::PersonalLoans, "-3");
        raw.set_text(FieldId::MonthlyGrossIncome, "0");
        raw.set_text(FieldId::CreditCards, "abc");

        let errors = validate(&raw).unwrap_err();

        assert_eq!(
            errors,
            vec![
                FieldError {
                    field: FieldId::MonthlyGrossIncome,
                    violation: Violation::NotPositive,
                },
                FieldError {
                    field: FieldId::CreditCards,
                    violation: Violation::NotANumber,
                },
                FieldError {
                    field: FieldId::PersonalLoans,
                    violation: Violation::Negative,
                },
            ]
        );
    }

    // =========================================================================
    // Error taxonomy tests
    // =========================================================================

    #[test]
    fn violation_kind_distinguishes_coercion_from_constraint() {
        assert_eq!(Violation::NotANumber.kind(), ViolationKind::Coercion);
        assert_eq!(Violation::NotABoolean.kind(), ViolationKind::Coercion);
        assert_eq!(Violation::NotPositive.kind(), ViolationKind::Constraint);
        assert_eq!(Violation::Negative.kind(), ViolationKind::Constraint);
    }

    #[test]
    fn field_error_renders_field_and_message() {
        let error = FieldError {
            field: FieldId::MonthlyGrossIncome,
            violation: Violation::NotPositive,
        };

        assert_eq!(
            error.to_string(),
            "monthly_gross_income: must be greater than 0"
        );
    }
}

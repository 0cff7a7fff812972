use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A validated set of calculator inputs.
///
/// Instances normally come from [`crate::validation::validate`], which
/// guarantees the invariants: `monthly_gross_income` is strictly positive
/// and every debt amount is non-negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtProfile {
    /// Gross income per month. Must be greater than zero.
    pub monthly_gross_income: Decimal,

    // Recurring monthly debt obligations, all non-negative
    pub current_rent_mortgage: Decimal,
    pub new_mortgage_payment: Decimal,
    pub car_payment: Decimal,
    pub credit_cards: Decimal,
    pub student_loans: Decimal,
    pub personal_loans: Decimal,
    pub other_debts: Decimal,

    /// Whether `new_mortgage_payment` counts toward the total.
    /// Part of the record so the worksheet stays a pure function of it.
    pub include_new_mortgage: bool,
}

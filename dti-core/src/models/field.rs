use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for one of the nine calculator input fields.
///
/// Declaration order is significant: it is the order fields appear on the
/// form, the order the schema validates them, and the order field errors
/// are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldId {
    MonthlyGrossIncome,
    CurrentRentMortgage,
    NewMortgagePayment,
    CarPayment,
    CreditCards,
    StudentLoans,
    PersonalLoans,
    OtherDebts,
    IncludeNewMortgage,
}

impl FieldId {
    /// Every field, in declaration order.
    pub const ALL: [FieldId; 9] = [
        Self::MonthlyGrossIncome,
        Self::CurrentRentMortgage,
        Self::NewMortgagePayment,
        Self::CarPayment,
        Self::CreditCards,
        Self::StudentLoans,
        Self::PersonalLoans,
        Self::OtherDebts,
        Self::IncludeNewMortgage,
    ];

    /// Stable key used in the raw-value mapping and in error payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MonthlyGrossIncome => "monthly_gross_income",
            Self::CurrentRentMortgage => "current_rent_mortgage",
            Self::NewMortgagePayment => "new_mortgage_payment",
            Self::CarPayment => "car_payment",
            Self::CreditCards => "credit_cards",
            Self::StudentLoans => "student_loans",
            Self::PersonalLoans => "personal_loans",
            Self::OtherDebts => "other_debts",
            Self::IncludeNewMortgage => "include_new_mortgage",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "monthly_gross_income" => Some(Self::MonthlyGrossIncome),
            "current_rent_mortgage" => Some(Self::CurrentRentMortgage),
            "new_mortgage_payment" => Some(Self::NewMortgagePayment),
            "car_payment" => Some(Self::CarPayment),
            "credit_cards" => Some(Self::CreditCards),
            "student_loans" => Some(Self::StudentLoans),
            "personal_loans" => Some(Self::PersonalLoans),
            "other_debts" => Some(Self::OtherDebts),
            "include_new_mortgage" => Some(Self::IncludeNewMortgage),
            _ => None,
        }
    }

    /// True for the eight monetary fields; false for the checkbox flag.
    pub fn is_amount(&self) -> bool {
        !matches!(self, Self::IncludeNewMortgage)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

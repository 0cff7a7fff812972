use serde::{Deserialize, Serialize};

use dti_core::models::FieldId;
use dti_core::validation::RawProfile;

/// Per-field form state, exactly as the user left it.
///
/// Amounts stay raw text until submission; coercion belongs to the
/// validation schema, not the form. The default is the untouched form:
/// empty amount fields and the checkbox cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub monthly_gross_income: String,
    pub current_rent_mortgage: String,
    pub new_mortgage_payment: String,
    pub car_payment: String,
    pub credit_cards: String,
    pub student_loans: String,
    pub personal_loans: String,
    pub other_debts: String,
    pub include_new_mortgage: bool,
}

impl ProfileForm {
    /// Collects the current field state into the schema's raw mapping.
    pub fn to_raw_profile(&self) -> RawProfile {
        let mut raw = RawProfile::new();
        raw.set_text(FieldId::MonthlyGrossIncome, self.monthly_gross_income.clone());
        raw.set_text(FieldId::CurrentRentMortgage, self.current_rent_mortgage.clone());
        raw.set_text(FieldId::NewMortgagePayment, self.new_mortgage_payment.clone());
        raw.set_text(FieldId::CarPayment, self.car_payment.clone());
        raw.set_text(FieldId::CreditCards, self.credit_cards.clone());
        raw.set_text(FieldId::StudentLoans, self.student_loans.clone());
        raw.set_text(FieldId::PersonalLoans, self.personal_loans.clone());
        raw.set_text(FieldId::OtherDebts, self.other_debts.clone());
        raw.set_flag(FieldId::IncludeNewMortgage, self.include_new_mortgage);
        raw
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use dti_core::validation::RawValue;

    use super::*;

    #[test]
    fn to_raw_profile_maps_every_field() {
        let form = ProfileForm {
            monthly_gross_income: "5000".into(),
            car_payment: "300".into(),
            include_new_mortgage: true,
            ..Default::default()
        };

        let raw = form.to_raw_profile();

        assert_eq!(
            raw.get(FieldId::MonthlyGrossIncome),
            Some(&RawValue::Text("5000".into()))
        );
        assert_eq!(
            raw.get(FieldId::CarPayment),
            Some(&RawValue::Text("300".into()))
        );
        assert_eq!(
            raw.get(FieldId::IncludeNewMortgage),
            Some(&RawValue::Flag(true))
        );
        // Untouched fields travel as empty text and default to zero downstream
        assert_eq!(
            raw.get(FieldId::OtherDebts),
            Some(&RawValue::Text(String::new()))
        );
    }
}

mod classification;
mod debt_profile;
mod field;

pub use classification::RatioClassification;
pub use debt_profile::DebtProfile;
pub use field::FieldId;

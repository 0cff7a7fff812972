pub mod calculations;
pub mod models;
pub mod validation;

pub use calculations::{DtiReport, DtiTiers, DtiWorksheet, DtiWorksheetError};
pub use models::*;
pub use validation::{FieldError, RawProfile, RawValue, Violation, ViolationKind, validate};

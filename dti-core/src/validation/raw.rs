use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::FieldId;

/// A field value as supplied by the presentation layer, before any
/// coercion: free text for amount inputs, a boolean for the checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawValue {
    Text(String),
    Flag(bool),
}

/// The raw field mapping for one submission.
///
/// Fields that were never set fall back to their declared defaults during
/// validation (zero for amounts, `false` for the flag).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProfile {
    values: BTreeMap<FieldId, RawValue>,
}

impl RawProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(
        &mut self,
        field: FieldId,
        text: impl Into<String>,
    ) {
        self.values.insert(field, RawValue::Text(text.into()));
    }

    pub fn set_flag(
        &mut self,
        field: FieldId,
        value: bool,
    ) {
        self.values.insert(field, RawValue::Flag(value));
    }

    pub fn get(&self, field: FieldId) -> Option<&RawValue> {
        self.values.get(&field)
    }
}

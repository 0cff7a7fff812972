use serde::{Deserialize, Serialize};

/// Qualitative band for a debt-to-income ratio, as used in lending
/// underwriting to gauge borrower risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioClassification {
    Good,
    Fair,
    Poor,
}

impl RatioClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Good" => Some(Self::Good),
            "Fair" => Some(Self::Fair),
            "Poor" => Some(Self::Poor),
            _ => None,
        }
    }
}

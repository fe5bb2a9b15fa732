//! Confidence tier types: ConfidenceTier and its ordinal encoding

use serde::{Deserialize, Serialize};

/// Qualitative rating of how well-supported a sub-probability estimate is
/// by the available evidence.
///
/// Either selected directly by the user or derived from an evidence
/// checklist by the classifier (see `risk_engine::classifier`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    #[default]
    Low,
    Moderate,
    High,
}

impl ConfidenceTier {
    /// Ordinal encoding used for plotting and ordering: Low=1, Moderate=2, High=3.
    pub fn numeric(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Moderate => 2,
            Self::High => 3,
        }
    }

    /// Inverse of [`numeric`](Self::numeric). Returns `None` for anything
    /// outside 1..=3.
    pub fn from_numeric(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Low),
            2 => Some(Self::Moderate),
            3 => Some(Self::High),
            _ => None,
        }
    }

    /// Get display string for the tier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
        }
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

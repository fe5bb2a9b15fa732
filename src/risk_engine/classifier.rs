//! Confidence classification — evidence checklist to tier
//!
//! Tiering is a threshold rule on the count of ticked indicators:
//! fewer than 2 → Low, 2 or 3 → Moderate, 4 or more → High.

use crate::types::{evidence_catalog, ConfidenceTier, EvidenceChecklist, RiskParameter};

/// Indicator counts at or above which the respective tier applies.
pub const MODERATE_INDICATOR_COUNT: usize = 2;
pub const HIGH_INDICATOR_COUNT: usize = 4;

/// Classify a set of boolean evidence indicators into a confidence tier.
///
/// Total over inputs of any size; an empty slice counts zero indicators
/// and classifies Low.
pub fn classify(indicators: &[bool]) -> ConfidenceTier {
    let count = indicators.iter().filter(|&&b| b).count();
    match count {
        c if c >= HIGH_INDICATOR_COUNT => ConfidenceTier::High,
        c if c >= MODERATE_INDICATOR_COUNT => ConfidenceTier::Moderate,
        _ => ConfidenceTier::Low,
    }
}

/// Error returned when a checklist cannot be classified for its parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("no evidence catalog is defined for {0}")]
    NoCatalog(RiskParameter),
    #[error("{parameter} checklist has {got} indicators, catalog defines {expected}")]
    WrongArity {
        parameter: RiskParameter,
        got: usize,
        expected: usize,
    },
}

/// Classify a filled-in checklist, validating it against the parameter's
/// indicator catalog first.
///
/// Only Presence has a catalog today; the other parameters return
/// [`ClassifyError::NoCatalog`] and take a user-selected tier instead.
pub fn classify_checklist(checklist: &EvidenceChecklist) -> Result<ConfidenceTier, ClassifyError> {
    let catalog = evidence_catalog(checklist.parameter)
        .ok_or(ClassifyError::NoCatalog(checklist.parameter))?;

    if checklist.indicators.len() != catalog.len() {
        return Err(ClassifyError::WrongArity {
            parameter: checklist.parameter,
            got: checklist.indicators.len(),
            expected: catalog.len(),
        });
    }

    Ok(classify(&checklist.indicators))
}

//! GPOS aggregation — product of enabled sub-probabilities
//!
//! The aggregate treats the sub-probabilities as independent: the chance of
//! overall success is the product of the chances that each enabled element
//! is favorable. An empty selection yields 0, not the empty-product 1 — no
//! parameters selected means "no assessment", not "certain success".

use serde::{Deserialize, Serialize};

use crate::types::{ParameterEstimate, GposEstimate, RiskParameter};

/// Which parameters participate in the aggregate.
///
/// Exploration wells only risk finding the aquifer and its permeability;
/// fluid, temperature and connectivity only matter once the field reaches a
/// connected doublet stage, so Development multiplies the full chain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentMode {
    /// All five parameters always participate (full chain)
    #[default]
    Development,
    /// Only the user-toggled subset participates
    Selective,
    /// Presence × Permeability only
    Exploration,
}

impl AssessmentMode {
    /// Parameters this mode forces into the product, or `None` when the
    /// per-parameter enable flags decide (Selective).
    pub fn fixed_roster(&self) -> Option<&'static [RiskParameter]> {
        match self {
            Self::Development => Some(&RiskParameter::ALL),
            Self::Exploration => {
                Some(&[RiskParameter::Presence, RiskParameter::Permeability])
            }
            Self::Selective => None,
        }
    }

    /// Formula string shown alongside the result (matches the mode's roster).
    pub fn formula(&self) -> &'static str {
        match self {
            Self::Development => "GPOS = P_aq × P_perm × P_fluid × P_T × P_con",
            Self::Exploration => "GPOS = P_aq × P_perm",
            Self::Selective => "GPOS = ∏ P_i over selected parameters",
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Development => "Development",
            Self::Selective => "Selective",
            Self::Exploration => "Exploration",
        }
    }
}

impl std::fmt::Display for AssessmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Multiply the enabled sub-probabilities into one aggregate value.
///
/// Pure and total over well-formed input. Probabilities outside [0,1] are a
/// caller contract violation, asserted in debug builds rather than clamped
/// so upstream normalization bugs surface instead of being masked.
///
/// Returns 0.0 when no estimate is enabled (explicit guard — see module doc).
pub fn aggregate(estimates: &[ParameterEstimate]) -> f64 {
    let mut product = 1.0;
    let mut any_enabled = false;

    for est in estimates.iter().filter(|e| e.enabled) {
        debug_assert!(
            (0.0..=1.0).contains(&est.probability),
            "{} probability {} outside [0,1]",
            est.parameter,
            est.probability
        );
        product *= est.probability;
        any_enabled = true;
    }

    if any_enabled {
        product
    } else {
        0.0
    }
}

/// Aggregate under a mode, producing the full estimate record.
///
/// For Development and Exploration the mode's roster overrides the
/// per-estimate enable flags; Selective honors them as-is. Estimates for
/// parameters outside a fixed roster are excluded from the product, not
/// defaulted to 1.
pub fn assess(estimates: &[ParameterEstimate], mode: AssessmentMode) -> GposEstimate {
    let effective: Vec<ParameterEstimate> = match mode.fixed_roster() {
        Some(roster) => estimates
            .iter()
            .map(|e| ParameterEstimate {
                enabled: roster.contains(&e.parameter),
                ..*e
            })
            .collect(),
        None => estimates.to_vec(),
    };

    GposEstimate {
        value: aggregate(&effective),
        mode,
        enabled_count: effective.iter().filter(|e| e.enabled).count(),
    }
}

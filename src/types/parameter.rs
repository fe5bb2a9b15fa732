//! Risk parameter types: RiskParameter, ParameterEstimate

use serde::{Deserialize, Serialize};

use super::ConfidenceTier;

/// One of the five independently estimated geologic risk elements that
/// contribute to the overall GPOS (after van Lochem et al., 2021).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskParameter {
    /// P_aq — chance that the target aquifer is present
    Presence,
    /// P_perm — chance that the system is sufficiently permeable
    Permeability,
    /// P_fluid — chance that the fluid is compatible with geothermal extraction
    Fluid,
    /// P_T — chance that the fluid temperature meets requirements
    Temperature,
    /// P_con — chance that the doublet boreholes have a hydraulic connection
    Connectivity,
}

impl RiskParameter {
    /// All five parameters in their canonical display order.
    pub const ALL: [Self; 5] = [
        Self::Presence,
        Self::Permeability,
        Self::Fluid,
        Self::Temperature,
        Self::Connectivity,
    ];

    /// Get display name for UI
    pub fn label(&self) -> &'static str {
        match self {
            Self::Presence => "Presence",
            Self::Permeability => "Permeability",
            Self::Fluid => "Fluid",
            Self::Temperature => "Temperature",
            Self::Connectivity => "Connectivity",
        }
    }

    /// Mathematical symbol used in formula strings (e.g. `P_aq`).
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Presence => "P_aq",
            Self::Permeability => "P_perm",
            Self::Fluid => "P_fluid",
            Self::Temperature => "P_T",
            Self::Connectivity => "P_con",
        }
    }
}

impl std::fmt::Display for RiskParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single parameter's state as seen by the aggregator: a normalized
/// probability, whether it participates in the current product, and the
/// confidence rating behind the estimate.
///
/// `probability` is always in `[0, 1]` — normalization from the raw slider
/// integer happens at the session boundary, never here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ParameterEstimate {
    pub parameter: RiskParameter,
    /// Normalized probability in [0, 1]
    pub probability: f64,
    /// Whether this parameter is included in the aggregate product
    pub enabled: bool,
    /// Confidence rating for the estimate (user-selected or checklist-derived)
    pub confidence: ConfidenceTier,
}

impl ParameterEstimate {
    pub fn new(parameter: RiskParameter, probability: f64, enabled: bool) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&probability),
            "probability {probability} outside [0,1] — normalize before constructing"
        );
        Self {
            parameter,
            probability,
            enabled,
            confidence: ConfidenceTier::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_five_parameters_in_display_order() {
        assert_eq!(RiskParameter::ALL.len(), 5);
        assert_eq!(RiskParameter::ALL[0], RiskParameter::Presence);
        assert_eq!(RiskParameter::ALL[4], RiskParameter::Connectivity);
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&RiskParameter::Permeability).unwrap();
        assert_eq!(json, "\"permeability\"");
    }
}

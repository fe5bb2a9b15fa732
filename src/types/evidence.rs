//! Evidence checklist types: EvidenceIndicator, EvidenceChecklist
//!
//! An evidence checklist is a fixed set of named boolean indicators for one
//! parameter; the number of ticked indicators drives the confidence tier.
//! Only the Presence parameter has a defined indicator catalog — the
//! geologic evidence for the other elements was never specified, so they
//! remain extension points rather than invented lists.

use serde::{Deserialize, Serialize};

use super::RiskParameter;

/// One named boolean evidence indicator in a parameter's checklist.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct EvidenceIndicator {
    /// Stable identifier used in API payloads
    pub id: &'static str,
    /// Short human-readable description for checkbox labels
    pub label: &'static str,
}

/// Indicator catalog for the Presence parameter (P_aq).
pub const PRESENCE_INDICATORS: [EvidenceIndicator; 5] = [
    EvidenceIndicator {
        id: "wells_nearby",
        label: "Wells in the vicinity of the prospect",
    },
    EvidenceIndicator {
        id: "seismic_2d",
        label: "A 2D seismic line crosses the prospect",
    },
    EvidenceIndicator {
        id: "seismic_2d_well_tie",
        label: "The 2D line has a well tie",
    },
    EvidenceIndicator {
        id: "seismic_2d_multiple",
        label: "Multiple 2D lines cross the prospect",
    },
    EvidenceIndicator {
        id: "seismic_3d",
        label: "3D seismic covers the prospect",
    },
];

/// Indicator catalog for a parameter, or `None` where no evidence model is
/// defined. Parameters without a catalog take a directly user-selected tier.
pub fn evidence_catalog(parameter: RiskParameter) -> Option<&'static [EvidenceIndicator]> {
    match parameter {
        RiskParameter::Presence => Some(&PRESENCE_INDICATORS),
        RiskParameter::Permeability
        | RiskParameter::Fluid
        | RiskParameter::Temperature
        | RiskParameter::Connectivity => None,
    }
}

/// A filled-in evidence checklist for one parameter.
///
/// `indicators[i]` answers the i-th entry of the parameter's catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvidenceChecklist {
    pub parameter: RiskParameter,
    pub indicators: Vec<bool>,
}

impl EvidenceChecklist {
    /// Number of ticked indicators.
    pub fn true_count(&self) -> usize {
        self.indicators.iter().filter(|&&b| b).count()
    }
}

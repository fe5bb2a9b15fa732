//! Static reference material shown alongside the calculator
//!
//! The element table (after van Lochem et al., 2021) and the literature
//! citations the original assessment sheet displays. Served verbatim by the
//! API; nothing here feeds the computation.

use serde::Serialize;

use crate::risk_engine::AssessmentMode;
use crate::types::RiskParameter;

/// One row of the risk-element table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RiskElement {
    pub parameter: RiskParameter,
    pub symbol: &'static str,
    pub description: &'static str,
    pub main_risks: &'static str,
}

/// The five GPOS elements with their dominant risks.
pub const RISK_ELEMENTS: [RiskElement; 5] = [
    RiskElement {
        parameter: RiskParameter::Presence,
        symbol: "P_aq",
        description: "Chance that the target aquifer is present",
        main_risks: "Faulting / Erosion / Facies change",
    },
    RiskElement {
        parameter: RiskParameter::Permeability,
        symbol: "P_perm",
        description: "Chance that the system is sufficiently permeable",
        main_risks: "Compaction / Diagenesis / No karst or fractures",
    },
    RiskElement {
        parameter: RiskParameter::Fluid,
        symbol: "P_fluid",
        description: "Chance that the fluid present is compatible for geothermal power extraction",
        main_risks: "Hydrocarbons / Scaling",
    },
    RiskElement {
        parameter: RiskParameter::Temperature,
        symbol: "P_T",
        description: "Chance that the fluid temperature meets requirement",
        main_risks: "Low geothermal gradient",
    },
    RiskElement {
        parameter: RiskParameter::Connectivity,
        symbol: "P_con",
        description: "Chance that two doublet boreholes have a hydraulic connection",
        main_risks: "Sealing fault / Truncation",
    },
];

/// Literature citations displayed under the calculator.
pub const CITATIONS: [&str; 2] = [
    "Niederau, J., Ritzmann, O., Jüstel, A., Wellmann, F., & Kettermann, M. (2023). \
     Green field exploration in the Aachen-Weisweiler region, Germany: Constraints and \
     concepts for uncertainty and risk assessment. In 84th EAGE Annual Conference & \
     Exhibition (Vol. 2023, No. 1, pp. 1-5). European Association of Geoscientists & Engineers.",
    "Van Lochem, H. (2021). GPOS Evaluation For Geothermal Projects in the Netherlands. \
     In 82nd EAGE Annual Conference & Exhibition (Vol. 2021, No. 1, pp. 1-5). EAGE Publications BV.",
];

/// Complete reference payload for `GET /api/v1/reference`.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceSheet {
    pub elements: Vec<RiskElement>,
    pub formulas: Vec<ModeFormula>,
    pub citations: Vec<&'static str>,
}

/// Formula string for one assessment mode.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModeFormula {
    pub mode: AssessmentMode,
    pub formula: &'static str,
}

/// Assemble the full reference sheet.
pub fn reference_sheet() -> ReferenceSheet {
    ReferenceSheet {
        elements: RISK_ELEMENTS.to_vec(),
        formulas: [
            AssessmentMode::Exploration,
            AssessmentMode::Development,
            AssessmentMode::Selective,
        ]
        .iter()
        .map(|&mode| ModeFormula {
            mode,
            formula: mode.formula(),
        })
        .collect(),
        citations: CITATIONS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_table_covers_all_parameters_in_order() {
        let params: Vec<_> = RISK_ELEMENTS.iter().map(|e| e.parameter).collect();
        assert_eq!(params, RiskParameter::ALL.to_vec());
    }

    #[test]
    fn symbols_match_parameter_symbols() {
        for element in &RISK_ELEMENTS {
            assert_eq!(element.symbol, element.parameter.symbol());
        }
    }
}

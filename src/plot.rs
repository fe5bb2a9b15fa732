//! Confidence-vs-probability plot data
//!
//! Builds the point set for the dashboard's scatter view: probability on x
//! in [0, 1], the ordinal confidence encoding on y (Low=1 < Moderate=2 <
//! High=3), one point per enabled parameter. Data only — drawing happens in
//! the front end.

use serde::Serialize;

use crate::types::{ConfidenceTier, ParameterEstimate, RiskParameter};

/// One scatter point for the confidence plot.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ConfidencePoint {
    pub parameter: RiskParameter,
    /// x — normalized probability in [0, 1]
    pub probability: f64,
    /// y — ordinal confidence (1..=3)
    pub confidence_numeric: u8,
    pub confidence: ConfidenceTier,
}

/// Build the scatter points for the enabled estimates.
pub fn confidence_points(estimates: &[ParameterEstimate]) -> Vec<ConfidencePoint> {
    estimates
        .iter()
        .filter(|e| e.enabled)
        .map(|e| ConfidencePoint {
            parameter: e.parameter,
            probability: e.probability,
            confidence_numeric: e.confidence.numeric(),
            confidence: e.confidence,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn est(
        parameter: RiskParameter,
        probability: f64,
        enabled: bool,
        confidence: ConfidenceTier,
    ) -> ParameterEstimate {
        ParameterEstimate {
            parameter,
            probability,
            enabled,
            confidence,
        }
    }

    #[test]
    fn disabled_parameters_get_no_point() {
        let estimates = vec![
            est(RiskParameter::Presence, 0.7, true, ConfidenceTier::High),
            est(RiskParameter::Permeability, 0.4, false, ConfidenceTier::Low),
        ];
        let points = confidence_points(&estimates);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].parameter, RiskParameter::Presence);
        assert_eq!(points[0].confidence_numeric, 3);
    }

    #[test]
    fn ordinal_axis_matches_tier_encoding() {
        let estimates = vec![
            est(RiskParameter::Presence, 0.5, true, ConfidenceTier::Low),
            est(RiskParameter::Fluid, 0.5, true, ConfidenceTier::Moderate),
            est(RiskParameter::Connectivity, 0.5, true, ConfidenceTier::High),
        ];
        let ys: Vec<u8> = confidence_points(&estimates)
            .iter()
            .map(|p| p.confidence_numeric)
            .collect();
        assert_eq!(ys, vec![1, 2, 3]);
    }
}

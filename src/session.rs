//! Assessment session — the mutable input snapshot behind one user's sliders
//!
//! Holds raw slider integers, enable flags, confidence tiers, and the
//! current mode for the lifetime of a session. Each mutation is one atomic
//! read-modify-write; `compute()` re-derives the whole estimate from the
//! current snapshot on every interaction, nothing is cached between calls.
//!
//! The session is owned by the server state and handed into the pure
//! `risk_engine` functions — never ambient global state, so the core stays
//! testable in isolation.

use serde::Serialize;

use crate::config::{SliderConfig, SlidersConfig};
use crate::risk_engine::{self, AssessmentMode, ClassifyError};
use crate::types::{
    ConfidenceTier, EvidenceChecklist, GposEstimate, ParameterEstimate, RiskParameter,
};

/// Errors from session mutations. All map to caller mistakes, never to
/// internal state corruption.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("{parameter} slider value {value} is outside [{min}, {max}]")]
    SliderOutOfRange {
        parameter: RiskParameter,
        value: u8,
        min: u8,
        max: u8,
    },
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

/// Per-parameter input state: the raw slider percent plus flags.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParameterInput {
    pub parameter: RiskParameter,
    /// Raw slider value, integer percent within the configured bounds
    pub raw_percent: u8,
    /// Whether the parameter participates in Selective-mode aggregation
    pub included: bool,
    pub confidence: ConfidenceTier,
    /// True when `confidence` came from an evidence checklist rather than
    /// direct user selection
    pub confidence_derived: bool,
}

/// One user's assessment inputs, scoped to the session lifetime.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    mode: AssessmentMode,
    inputs: [ParameterInput; 5],
    sliders: SlidersConfig,
}

impl AssessmentSession {
    /// Fresh session with every slider at its configured starting value and
    /// all parameters included.
    pub fn new(sliders: &SlidersConfig) -> Self {
        let inputs = RiskParameter::ALL.map(|parameter| ParameterInput {
            parameter,
            raw_percent: sliders.for_parameter(parameter).initial,
            included: true,
            confidence: ConfidenceTier::default(),
            confidence_derived: false,
        });
        Self {
            mode: AssessmentMode::default(),
            inputs,
            sliders: sliders.clone(),
        }
    }

    pub fn mode(&self) -> AssessmentMode {
        self.mode
    }

    pub fn inputs(&self) -> &[ParameterInput; 5] {
        &self.inputs
    }

    /// Slider bounds in effect for one parameter.
    pub fn slider_bounds(&self, parameter: RiskParameter) -> SliderConfig {
        self.sliders.for_parameter(parameter)
    }

    // inputs is laid out in RiskParameter::ALL order
    fn input_mut(&mut self, parameter: RiskParameter) -> &mut ParameterInput {
        let idx = match parameter {
            RiskParameter::Presence => 0,
            RiskParameter::Permeability => 1,
            RiskParameter::Fluid => 2,
            RiskParameter::Temperature => 3,
            RiskParameter::Connectivity => 4,
        };
        &mut self.inputs[idx]
    }

    /// Set a raw slider value. Out-of-range input is rejected, not clamped,
    /// so a miswired front end fails loudly.
    pub fn set_slider(
        &mut self,
        parameter: RiskParameter,
        raw_percent: u8,
    ) -> Result<(), SessionError> {
        let bounds = self.sliders.for_parameter(parameter);
        if !bounds.accepts(raw_percent) {
            return Err(SessionError::SliderOutOfRange {
                parameter,
                value: raw_percent,
                min: bounds.min,
                max: bounds.max,
            });
        }
        self.input_mut(parameter).raw_percent = raw_percent;
        Ok(())
    }

    /// Include or exclude a parameter from Selective-mode aggregation.
    ///
    /// `included` is already polarity-resolved — checkbox polarity is an API
    /// boundary concern (see `api::handlers`).
    pub fn set_included(&mut self, parameter: RiskParameter, included: bool) {
        self.input_mut(parameter).included = included;
    }

    pub fn set_mode(&mut self, mode: AssessmentMode) {
        self.mode = mode;
    }

    /// Directly select a confidence tier for a parameter.
    pub fn set_confidence(&mut self, parameter: RiskParameter, tier: ConfidenceTier) {
        let input = self.input_mut(parameter);
        input.confidence = tier;
        input.confidence_derived = false;
    }

    /// Derive a parameter's confidence tier from an evidence checklist.
    pub fn apply_checklist(
        &mut self,
        checklist: &EvidenceChecklist,
    ) -> Result<ConfidenceTier, SessionError> {
        let tier = risk_engine::classify_checklist(checklist)?;
        let input = self.input_mut(checklist.parameter);
        input.confidence = tier;
        input.confidence_derived = true;
        Ok(tier)
    }

    /// Restore every slider, flag, and tier to its starting state.
    pub fn reset(&mut self) {
        let sliders = self.sliders.clone();
        *self = Self::new(&sliders);
    }

    /// Normalized estimates for the current inputs (raw percent / 100).
    pub fn snapshot(&self) -> Vec<ParameterEstimate> {
        self.inputs
            .iter()
            .map(|input| ParameterEstimate {
                parameter: input.parameter,
                probability: f64::from(input.raw_percent) / 100.0,
                enabled: input.included,
                confidence: input.confidence,
            })
            .collect()
    }

    /// Recompute the GPOS estimate from the current snapshot.
    pub fn compute(&self) -> GposEstimate {
        risk_engine::assess(&self.snapshot(), self.mode)
    }
}

//! Shared data structures for the GPOS risk model
//!
//! This module defines the core types for the assessment flow:
//! - RiskParameter / ParameterEstimate — the five geologic risk elements
//! - ConfidenceTier — Low / Moderate / High with ordinal encoding
//! - EvidenceChecklist — boolean indicators driving the classifier
//! - GposEstimate — the derived aggregate, recomputed per interaction

mod confidence;
mod estimate;
mod evidence;
mod parameter;

pub use confidence::*;
pub use estimate::*;
pub use evidence::*;
pub use parameter::*;

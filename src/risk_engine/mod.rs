//! Risk Engine Module
//!
//! Deterministic risk-model calculations for GPOS assessment.
//! All math here is pure point-estimate arithmetic — no statistics involved.
//!
//! - `aggregate()` / `assess()` — product of enabled sub-probabilities
//! - `classify()` / `classify_checklist()` — evidence count to confidence tier

pub mod aggregation;
pub mod classifier;

pub use aggregation::{aggregate, assess, AssessmentMode};
pub use classifier::{
    classify, classify_checklist, ClassifyError, HIGH_INDICATOR_COUNT, MODERATE_INDICATOR_COUNT,
};

//! GposEstimate — the derived aggregate result

use serde::{Deserialize, Serialize};

use crate::risk_engine::AssessmentMode;

/// The computed Geologic Probability of Success.
///
/// Derived from the current input snapshot on every interaction and never
/// persisted. `value` is the unrounded product — display rounding is a
/// presentation concern (see `api::handlers::percent_display`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GposEstimate {
    /// Aggregate probability in [0, 1]; 0.0 when nothing is enabled
    pub value: f64,
    /// Mode the aggregate was computed under
    pub mode: AssessmentMode,
    /// How many parameters participated in the product
    pub enabled_count: usize,
}

impl GposEstimate {
    /// Value expressed as an unrounded percentage in [0, 100].
    pub fn percent(&self) -> f64 {
        self.value * 100.0
    }
}

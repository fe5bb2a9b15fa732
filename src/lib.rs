//! GPOS Workbench: Geothermal Prospect Risk Assessment
//!
//! Interactive calculator for the Geologic Probability of Success (GPOS) of
//! a geothermal exploration target.
//!
//! ## Architecture
//!
//! - **Risk Engine**: deterministic aggregation of sub-probabilities and
//!   evidence-count confidence classification
//! - **Session**: the mutable input snapshot behind one user's widgets
//! - **API**: axum presentation boundary serving snapshot, estimate, and
//!   plot data
//! - **Config**: operator-tunable slider bounds, checkbox polarity, and
//!   display rounding from TOML

pub mod api;
pub mod config;
pub mod plot;
pub mod reference;
pub mod risk_engine;
pub mod session;
pub mod types;

// Re-export workbench configuration
pub use config::WorkbenchConfig;

// Re-export commonly used types
pub use types::{
    ConfidenceTier, EvidenceChecklist, EvidenceIndicator, GposEstimate, ParameterEstimate,
    RiskParameter,
};

// Re-export the core model
pub use risk_engine::{aggregate, assess, classify, classify_checklist, AssessmentMode};

// Re-export session state
pub use session::{AssessmentSession, SessionError};

// Re-export API surface
pub use api::WorkbenchState;

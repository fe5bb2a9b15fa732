//! API route handlers
//!
//! Request handling logic for the assessment endpoints. Every mutation
//! triggers a full recomputation of the estimate from the current input
//! snapshot; responses carry the refreshed assessment view so the front end
//! never has to merge partial state.

use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::{DisplayConfig, SliderConfig, TogglesConfig, WorkbenchConfig};
use crate::plot::{confidence_points, ConfidencePoint};
use crate::reference;
use crate::risk_engine::AssessmentMode;
use crate::session::AssessmentSession;
use crate::types::{ConfidenceTier, EvidenceChecklist, RiskParameter};

use super::envelope::{ApiErrorResponse, ApiResponse};

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers: one session plus the presentation knobs
/// captured at startup.
#[derive(Clone)]
pub struct WorkbenchState {
    pub session: Arc<RwLock<AssessmentSession>>,
    pub toggles: TogglesConfig,
    pub display: DisplayConfig,
    pub prospect_name: String,
}

impl WorkbenchState {
    /// Build state from a loaded configuration.
    pub fn from_config(config: &WorkbenchConfig) -> Self {
        Self {
            session: Arc::new(RwLock::new(AssessmentSession::new(&config.sliders))),
            toggles: config.toggles,
            display: config.display,
            prospect_name: config.prospect.name.clone(),
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// One parameter's state as the front end renders it.
#[derive(Debug, Serialize)]
pub struct ParameterView {
    pub parameter: RiskParameter,
    pub label: &'static str,
    pub symbol: &'static str,
    pub raw_percent: u8,
    pub included: bool,
    pub confidence: ConfidenceTier,
    pub confidence_numeric: u8,
    pub confidence_derived: bool,
}

/// The computed estimate plus its display string.
#[derive(Debug, Serialize)]
pub struct GposView {
    /// Unrounded aggregate in [0, 1]
    pub value: f64,
    /// Unrounded percent in [0, 100]
    pub percent: f64,
    /// Rounded percent readout, e.g. "3 % GPOS"
    pub display: String,
    pub enabled_count: usize,
}

/// Full assessment snapshot returned by every endpoint that touches state.
#[derive(Debug, Serialize)]
pub struct AssessmentView {
    pub prospect: String,
    pub mode: AssessmentMode,
    pub formula: &'static str,
    pub parameters: Vec<ParameterView>,
    pub gpos: GposView,
    pub plot: Vec<ConfidencePoint>,
}

/// Render the percent readout from the unrounded core value.
///
/// Rounding lives here, not in the aggregator — the core contract returns
/// the exact float.
fn percent_display(percent: f64, decimals: u8) -> String {
    format!("{percent:.prec$} % GPOS", prec = usize::from(decimals))
}

fn build_view(state: &WorkbenchState, session: &AssessmentSession) -> AssessmentView {
    let estimate = session.compute();
    let snapshot = session.snapshot();
    let mode = session.mode();

    // In fixed-roster modes the plot shows what actually participates, not
    // the Selective-mode checkbox state.
    let plotted: Vec<_> = match mode.fixed_roster() {
        Some(roster) => snapshot
            .iter()
            .map(|e| crate::types::ParameterEstimate {
                enabled: roster.contains(&e.parameter),
                ..*e
            })
            .collect(),
        None => snapshot,
    };

    AssessmentView {
        prospect: state.prospect_name.clone(),
        mode,
        formula: mode.formula(),
        parameters: session
            .inputs()
            .iter()
            .map(|input| ParameterView {
                parameter: input.parameter,
                label: input.parameter.label(),
                symbol: input.parameter.symbol(),
                raw_percent: input.raw_percent,
                included: input.included,
                confidence: input.confidence,
                confidence_numeric: input.confidence.numeric(),
                confidence_derived: input.confidence_derived,
            })
            .collect(),
        gpos: GposView {
            value: estimate.value,
            percent: estimate.percent(),
            display: percent_display(estimate.percent(), state.display.percent_decimals),
            enabled_count: estimate.enabled_count,
        },
        plot: confidence_points(&plotted),
    }
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SliderRequest {
    pub parameter: RiskParameter,
    /// Raw slider integer percent, validated against the configured bounds
    pub value: u8,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub parameter: RiskParameter,
    /// Raw checkbox state; polarity is resolved here per config
    pub checked: bool,
}

#[derive(Debug, Deserialize)]
pub struct ModeRequest {
    pub mode: AssessmentMode,
}

#[derive(Debug, Deserialize)]
pub struct EvidenceRequest {
    pub parameter: RiskParameter,
    pub indicators: Vec<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ConfidenceRequest {
    pub parameter: RiskParameter,
    pub tier: ConfidenceTier,
}

/// Classifier output per the external contract: tier plus ordinal encoding.
#[derive(Debug, Serialize)]
pub struct ClassificationView {
    pub tier: ConfidenceTier,
    pub numeric: u8,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/assessment — current snapshot, estimate, and plot points.
pub async fn get_assessment(State(state): State<WorkbenchState>) -> Response {
    let session = state.session.read().await;
    ApiResponse::ok(build_view(&state, &session))
}

/// POST /api/v1/assessment/slider — set one raw slider value.
pub async fn set_slider(
    State(state): State<WorkbenchState>,
    Json(req): Json<SliderRequest>,
) -> Response {
    let mut session = state.session.write().await;
    match session.set_slider(req.parameter, req.value) {
        Ok(()) => {
            debug!(parameter = %req.parameter, value = req.value, "slider updated");
            ApiResponse::ok(build_view(&state, &session))
        }
        Err(e) => ApiErrorResponse::bad_request(e.to_string()),
    }
}

/// POST /api/v1/assessment/toggle — flip one parameter's checkbox.
pub async fn set_toggle(
    State(state): State<WorkbenchState>,
    Json(req): Json<ToggleRequest>,
) -> Response {
    // Polarity resolution: in the inverted variant a checked box excludes
    // the parameter from the product.
    let included = req.checked == state.toggles.checked_means_included;
    let mut session = state.session.write().await;
    session.set_included(req.parameter, included);
    debug!(parameter = %req.parameter, included, "toggle updated");
    ApiResponse::ok(build_view(&state, &session))
}

/// POST /api/v1/assessment/mode — switch assessment mode.
pub async fn set_mode(
    State(state): State<WorkbenchState>,
    Json(req): Json<ModeRequest>,
) -> Response {
    let mut session = state.session.write().await;
    session.set_mode(req.mode);
    debug!(mode = %req.mode, "mode updated");
    ApiResponse::ok(build_view(&state, &session))
}

/// POST /api/v1/assessment/evidence — derive a tier from a checklist.
pub async fn apply_evidence(
    State(state): State<WorkbenchState>,
    Json(req): Json<EvidenceRequest>,
) -> Response {
    let checklist = EvidenceChecklist {
        parameter: req.parameter,
        indicators: req.indicators,
    };
    let mut session = state.session.write().await;
    match session.apply_checklist(&checklist) {
        Ok(tier) => ApiResponse::ok(ClassificationView {
            tier,
            numeric: tier.numeric(),
        }),
        Err(e) => ApiErrorResponse::bad_request(e.to_string()),
    }
}

/// POST /api/v1/assessment/confidence — directly select a tier.
pub async fn set_confidence(
    State(state): State<WorkbenchState>,
    Json(req): Json<ConfidenceRequest>,
) -> Response {
    let mut session = state.session.write().await;
    session.set_confidence(req.parameter, req.tier);
    ApiResponse::ok(build_view(&state, &session))
}

/// POST /api/v1/assessment/reset — restore the starting state.
pub async fn reset_assessment(State(state): State<WorkbenchState>) -> Response {
    let mut session = state.session.write().await;
    session.reset();
    ApiResponse::ok(build_view(&state, &session))
}

/// Per-parameter widget configuration for the front end.
#[derive(Debug, Serialize)]
pub struct WidgetConfigView {
    pub parameter: RiskParameter,
    pub slider: SliderConfig,
    pub evidence_indicators: Option<Vec<EvidenceIndicatorView>>,
}

#[derive(Debug, Serialize)]
pub struct EvidenceIndicatorView {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ConfigView {
    pub prospect: String,
    pub checked_means_included: bool,
    pub percent_decimals: u8,
    pub widgets: Vec<WidgetConfigView>,
}

/// GET /api/v1/config — widget bounds and polarity for the front end.
pub async fn get_config(State(state): State<WorkbenchState>) -> Response {
    let session = state.session.read().await;
    let widgets = RiskParameter::ALL
        .iter()
        .map(|&parameter| WidgetConfigView {
            parameter,
            slider: session.slider_bounds(parameter),
            evidence_indicators: crate::types::evidence_catalog(parameter).map(|catalog| {
                catalog
                    .iter()
                    .map(|i| EvidenceIndicatorView {
                        id: i.id,
                        label: i.label,
                    })
                    .collect()
            }),
        })
        .collect();

    ApiResponse::ok(ConfigView {
        prospect: state.prospect_name.clone(),
        checked_means_included: state.toggles.checked_means_included,
        percent_decimals: state.display.percent_decimals,
        widgets,
    })
}

/// GET /api/v1/reference — element table and citations.
pub async fn get_reference() -> Response {
    ApiResponse::ok(reference::reference_sheet())
}

#[derive(Debug, Serialize)]
pub struct HealthView {
    pub status: &'static str,
}

/// GET /health — liveness probe.
pub async fn health_check() -> Response {
    ApiResponse::ok(HealthView { status: "ok" })
}

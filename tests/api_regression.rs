//! API Regression Tests
//!
//! Exercises the HTTP surface end to end through `create_app()`: envelope
//! shape, mutation round-trips, polarity handling, and the failure paths
//! that must come back as 400s rather than clamped values.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use gpos_workbench::api::{create_app, WorkbenchState};
use gpos_workbench::config::WorkbenchConfig;

fn test_app() -> Router {
    create_app(WorkbenchState::from_config(&WorkbenchConfig::default()))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_endpoints_respond_at_root_and_v1() {
    let (status, body) = get_json(test_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");

    let (status, _) = get_json(test_app(), "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn assessment_default_is_development_at_three_percent() {
    let (status, body) = get_json(test_app(), "/api/v1/assessment").await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["mode"], "development");
    assert_eq!(data["parameters"].as_array().unwrap().len(), 5);
    assert!((data["gpos"]["value"].as_f64().unwrap() - 0.03125).abs() < 1e-12);
    assert_eq!(data["gpos"]["display"], "3 % GPOS");
    assert_eq!(data["gpos"]["enabled_count"], 5);
    // Meta envelope present
    assert_eq!(body["meta"]["version"], "1");
    assert!(body["meta"]["timestamp"].is_string());
}

#[tokio::test]
async fn slider_mutation_recomputes_the_estimate() {
    let (status, body) = post_json(
        test_app(),
        "/api/v1/assessment/slider",
        json!({"parameter": "presence", "value": 100}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // 1.0 * 0.5^4
    assert!((body["data"]["gpos"]["value"].as_f64().unwrap() - 0.0625).abs() < 1e-12);
}

#[tokio::test]
async fn out_of_range_slider_is_rejected_with_400() {
    let (status, body) = post_json(
        test_app(),
        "/api/v1/assessment/slider",
        json!({"parameter": "presence", "value": 0}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn exploration_mode_multiplies_two_parameters() {
    let (status, body) = post_json(
        test_app(),
        "/api/v1/assessment/mode",
        json!({"mode": "exploration"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["formula"], "GPOS = P_aq × P_perm");
    assert!((data["gpos"]["value"].as_f64().unwrap() - 0.25).abs() < 1e-12);
    assert_eq!(data["gpos"]["display"], "25 % GPOS");
    assert_eq!(data["gpos"]["enabled_count"], 2);
    // Plot shows only the participating parameters
    assert_eq!(data["plot"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn toggle_excludes_a_parameter_in_selective_mode() {
    let app = test_app();

    let (status, _) = post_json(
        app.clone(),
        "/api/v1/assessment/mode",
        json!({"mode": "selective"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Same session behind the cloned router: uncheck everything but presence
    for parameter in ["permeability", "fluid", "temperature", "connectivity"] {
        let (status, _) = post_json(
            app.clone(),
            "/api/v1/assessment/toggle",
            json!({"parameter": parameter, "checked": false}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = post_json(
        app.clone(),
        "/api/v1/assessment/slider",
        json!({"parameter": "presence", "value": 70}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!((body["data"]["gpos"]["value"].as_f64().unwrap() - 0.7).abs() < 1e-12);
    assert_eq!(body["data"]["plot"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unchecking_everything_yields_zero_not_one() {
    let app = test_app();

    post_json(
        app.clone(),
        "/api/v1/assessment/mode",
        json!({"mode": "selective"}),
    )
    .await;
    for parameter in ["presence", "permeability", "fluid", "temperature", "connectivity"] {
        post_json(
            app.clone(),
            "/api/v1/assessment/toggle",
            json!({"parameter": parameter, "checked": false}),
        )
        .await;
    }

    let (_, body) = get_json(app, "/api/v1/assessment").await;
    assert_eq!(body["data"]["gpos"]["value"].as_f64().unwrap(), 0.0);
    assert_eq!(body["data"]["gpos"]["display"], "0 % GPOS");
}

#[tokio::test]
async fn inverted_polarity_flips_the_checkbox_meaning() {
    let mut config = WorkbenchConfig::default();
    config.toggles.checked_means_included = false;
    let app = create_app(WorkbenchState::from_config(&config));

    post_json(
        app.clone(),
        "/api/v1/assessment/mode",
        json!({"mode": "selective"}),
    )
    .await;

    // Checking the box now EXCLUDES the parameter
    let (status, body) = post_json(
        app.clone(),
        "/api/v1/assessment/toggle",
        json!({"parameter": "connectivity", "checked": true}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let connectivity = &body["data"]["parameters"][4];
    assert_eq!(connectivity["parameter"], "connectivity");
    assert_eq!(connectivity["included"], false);
}

#[tokio::test]
async fn evidence_checklist_returns_tier_and_numeric() {
    let (status, body) = post_json(
        test_app(),
        "/api/v1/assessment/evidence",
        json!({"parameter": "presence", "indicators": [true, false, true, false, false]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["tier"], "moderate");
    assert_eq!(body["data"]["numeric"], 2);
}

#[tokio::test]
async fn evidence_for_uncataloged_parameter_is_400() {
    let (status, body) = post_json(
        test_app(),
        "/api/v1/assessment/evidence",
        json!({"parameter": "temperature", "indicators": [true, true, true, true, true]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("no evidence catalog"));
}

#[tokio::test]
async fn evidence_with_wrong_arity_is_400() {
    let (status, _) = post_json(
        test_app(),
        "/api/v1/assessment/evidence",
        json!({"parameter": "presence", "indicators": [true, true]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn direct_confidence_selection_feeds_the_plot() {
    let (status, body) = post_json(
        test_app(),
        "/api/v1/assessment/confidence",
        json!({"parameter": "permeability", "tier": "high"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let point = body["data"]["plot"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["parameter"] == "permeability")
        .unwrap()
        .clone();
    assert_eq!(point["confidence_numeric"], 3);
}

#[tokio::test]
async fn reset_restores_the_starting_assessment() {
    let app = test_app();

    post_json(
        app.clone(),
        "/api/v1/assessment/slider",
        json!({"parameter": "presence", "value": 90}),
    )
    .await;

    let (status, body) = post_json(app.clone(), "/api/v1/assessment/reset", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["parameters"][0]["raw_percent"], 50);
    assert_eq!(body["data"]["mode"], "development");
}

#[tokio::test]
async fn config_endpoint_exposes_widget_bounds_and_catalogs() {
    let (status, body) = get_json(test_app(), "/api/v1/config").await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["checked_means_included"], true);
    assert_eq!(data["percent_decimals"], 0);

    let widgets = data["widgets"].as_array().unwrap();
    assert_eq!(widgets.len(), 5);
    assert_eq!(widgets[0]["slider"]["min"], 1);
    assert_eq!(widgets[0]["slider"]["max"], 100);
    // Only Presence carries an evidence catalog
    assert_eq!(
        widgets[0]["evidence_indicators"].as_array().unwrap().len(),
        5
    );
    assert!(widgets[1]["evidence_indicators"].is_null());
}

#[tokio::test]
async fn reference_endpoint_serves_the_element_table() {
    let (status, body) = get_json(test_app(), "/api/v1/reference").await;
    assert_eq!(status, StatusCode::OK);

    let elements = body["data"]["elements"].as_array().unwrap();
    assert_eq!(elements.len(), 5);
    assert_eq!(elements[0]["symbol"], "P_aq");
    assert_eq!(body["data"]["citations"].as_array().unwrap().len(), 2);
}

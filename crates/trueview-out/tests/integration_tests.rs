//! Integration tests for trueview-out with the real template file.
//!
//! These tests render recorded provider payloads through the workspace
//! `templates/report-templates.yaml` and check what a reader would see.

use trueview_core::{assemble_json, ReportError};
use trueview_out::{quick, render_payload, render_report, RenderError, RenderRequest};

/// Path to the templates file relative to the workspace root
const TEMPLATES_PATH: &str = "templates/report-templates.yaml";

fn workspace_file(relative: &str) -> std::path::PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = std::path::Path::new(&manifest_dir).parent().unwrap().parent().unwrap();
    workspace_root.join(relative)
}

fn templates_path() -> String {
    workspace_file(TEMPLATES_PATH).to_string_lossy().to_string()
}

fn payload(name: &str) -> String {
    std::fs::read_to_string(workspace_file(&format!("testing/fixtures/payloads/{}", name))).unwrap()
}

fn request(template_name: &str) -> RenderRequest {
    RenderRequest {
        template_name: template_name.to_string(),
        templates_path: Some(templates_path()),
    }
}

// =============================================================================
// Report Templates
// =============================================================================

#[test]
fn test_report_summary_template() {
    let result = render_payload(&payload("video_legacy.json"), request("report_summary")).unwrap();

    assert!(result.output.contains("Video analysis: Likely manipulated"), "Output: {}", result.output);
    assert!(result.output.contains("AI Generated: Made by AI (87.3%)"));
    assert!(result.output.contains("Deepfake: Deepfake Detected (93.2%)"));
    assert_eq!(result.template_used, "report_summary");
    assert!(result.fingerprint.starts_with("blake3:"));
}

#[test]
fn test_verdict_cards_template() {
    let result = render_payload(&payload("image_authentic.json"), request("verdict_cards")).unwrap();

    assert!(result.output.contains("[safe] Not Made by AI 4.1%"), "Output: {}", result.output);
    assert!(result.output.contains("[safe] Not a Deepfake 1.2%"));
}

#[test]
fn test_reasoning_list_template() {
    let result = render_payload(&payload("image_authentic.json"), request("reasoning_list")).unwrap();

    assert!(result.output.starts_with("Brief Points for Reasoning"));
    assert!(result.output.contains("• Texture variance sits inside the range expected for camera sensors"));
    assert!(result.output.contains("• No diffusion artifacts were found"));
    assert!(!result.output.contains("**3.**"));
    assert!(!result.output.contains("No reasoning available"));
}

#[test]
fn test_reasoning_list_empty_state() {
    let result = render_payload(r#"{"ai_confidence": 0.3}"#, request("reasoning_list")).unwrap();
    assert!(result.output.contains("No reasoning available."), "Output: {}", result.output);
}

#[test]
fn test_metric_breakdown_template() {
    let result = render_payload(&payload("image_authentic.json"), request("metric_breakdown")).unwrap();

    assert!(result.output.contains("Texture Variance: 412.68 (Within normal range, expected 250-600)"), "Output: {}", result.output);
    assert!(result.output.contains("Edge Density: 0.06 (Within normal range, expected 0.03-0.10)"));
    assert!(result.output.contains("Color Variance: 2240.50 (Suspiciously low, expected 3000-8000)"));
}

#[test]
fn test_metric_breakdown_unknown_and_empty() {
    let result = render_payload(&payload("video_legacy.json"), request("metric_breakdown")).unwrap();
    assert!(result.output.contains("Edge Consistency: 2.50 (Status unavailable, expected 5-30)"), "Output: {}", result.output);

    let result = render_payload("{}", request("metric_breakdown")).unwrap();
    assert!(result.output.contains("No metrics available yet."));
}

#[test]
fn test_report_markdown_template() {
    let result = render_payload(&payload("image_authentic.json"), request("report_markdown")).unwrap();
    let output = &result.output;

    assert!(output.starts_with("# Image Report"), "Output: {}", output);
    assert!(output.contains("**Likely authentic** for `uploads/cow.png`"));
    assert!(output.contains("- **AI Generated**: Not Made by AI (4.1%)"));
    assert!(output.contains("| Color Variance | 2240.50 | Suspiciously low | 3000-8000 |"));
    assert!(output.contains("**Edge Density**: Edges are as sharp as a typical phone photo."));
    assert!(output.contains("consult additional forensic tools"));
}

#[test]
fn test_builtin_matches_file() {
    let report = assemble_json(&payload("video_legacy.json")).unwrap();

    let from_file = render_report(&report, request("report_markdown")).unwrap();
    let builtin = render_report(&report, RenderRequest::builtin("report_markdown")).unwrap();
    assert_eq!(from_file.output, builtin.output);
}

#[test]
fn test_render_is_deterministic() {
    let report = assemble_json(&payload("image_authentic.json")).unwrap();
    let a = render_report(&report, request("report_markdown")).unwrap();
    let b = render_report(&report, request("report_markdown")).unwrap();
    assert_eq!(a.output, b.output);
    assert_eq!(a.fingerprint, b.fingerprint);
}

// =============================================================================
// Failure Paths
// =============================================================================

#[test]
fn test_missing_templates_file() {
    let report = assemble_json("{}").unwrap();
    let err = render_report(
        &report,
        RenderRequest {
            template_name: "report_summary".to_string(),
            templates_path: Some("does/not/exist.yaml".to_string()),
        },
    )
    .unwrap_err();
    assert!(matches!(err, RenderError::Template(_)));
}

#[test]
fn test_no_report_state() {
    let err = render_payload("", request("report_summary")).unwrap_err();
    match err {
        RenderError::NoReport(e) => {
            assert_eq!(e, ReportError::PayloadAbsent);
            let text = quick::no_report(&e);
            assert!(text.contains("has not produced a result"));
        }
        other => panic!("expected NoReport, got {:?}", other),
    }

    let err = render_payload("[1]", request("report_summary")).unwrap_err();
    assert!(matches!(err, RenderError::NoReport(ReportError::PayloadUnparseable(_))));
}

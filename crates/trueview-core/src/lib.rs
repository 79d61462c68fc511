//! TrueView Core: Detection Payload to Report Normalizer
//!
//! This crate turns the raw, partially-optional output of an external media
//! authenticity detector into a stable, typed [`Report`] for rendering.
//!
//! # Example
//!
//! ```
//! use trueview_core::{assemble_json, Axis};
//!
//! let report = assemble_json(r#"{
//!     "ai_confidence": 0.873,
//!     "ai_detected": true,
//!     "brief_overview": "1. Smooth textures\n2. Uniform lighting",
//!     "media_path": "uploads/cat.png"
//! }"#).unwrap();
//!
//! let ai = report.verdict(Axis::AiGenerated).unwrap();
//! assert_eq!(ai.confidence_percent(), 87.3);
//! assert_eq!(ai.label(), "Made by AI");
//! assert_eq!(report.reasoning().len(), 2);
//! ```

pub mod error;
mod lenient;
pub mod metrics;
pub mod narrative;
pub mod payload;
pub mod report;
pub mod verdict;

pub use error::ReportError;
pub use metrics::{classify, classify_all, MetricReading, NormalizedMetric, StatusClass};
pub use narrative::{extract, ReasoningBullet};
pub use payload::{MediaKind, RawDetectionPayload, RawMetric};
pub use report::{assemble, infer_media_kind, Report};
pub use verdict::{resolve, Axis, VerdictRecord};

use serde_json::Value;
use tracing::debug;

/// Crate version, reported by the bindings.
pub const TRUEVIEW_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Assemble from the JSON text of one analysis response.
///
/// Empty input and a bare `null` mean the analysis has not produced anything
/// yet and surface as [`ReportError::PayloadAbsent`].
pub fn assemble_json(input: &str) -> Result<Report, ReportError> {
    if input.trim().is_empty() {
        return Err(ReportError::PayloadAbsent);
    }
    let value: Value = serde_json::from_str(input)
        .map_err(|e| ReportError::PayloadUnparseable(e.to_string()))?;
    assemble_value(Some(&value))
}

/// Assemble from an already-parsed JSON value.
pub fn assemble_value(value: Option<&Value>) -> Result<Report, ReportError> {
    let payload = parse_payload(value)?;
    Ok(assemble(&payload))
}

/// Decode the payload without assembling it.
pub fn parse_payload(value: Option<&Value>) -> Result<RawDetectionPayload, ReportError> {
    match value {
        None | Some(Value::Null) => Err(ReportError::PayloadAbsent),
        Some(Value::Object(fields)) => {
            let payload = RawDetectionPayload::from_fields(fields);
            debug!(metrics = payload.metric_explanations.len(), "decoded detection payload");
            Ok(payload)
        }
        Some(other) => Err(ReportError::PayloadUnparseable(format!(
            "expected a JSON object, found {}",
            lenient::kind_of(other)
        ))),
    }
}

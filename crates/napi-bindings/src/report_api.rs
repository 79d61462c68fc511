//! NAPI bindings for trueview-core

use napi::bindgen_prelude::*;

/// Assemble a report from the raw detection payload JSON.
///
/// Fails with a `NO_REPORT/...` reason when there is no usable payload, so the
/// front end can show "analysis not yet run" instead of an empty report.
#[napi]
pub fn assemble_report(payload_json: String) -> Result<String> {
    let report = trueview_core::assemble_json(&payload_json)
        .map_err(|e| Error::from_reason(e.to_string()))?;
    Ok(report.to_json())
}

/// Fingerprint of the report a payload would produce
#[napi]
pub fn report_fingerprint(payload_json: String) -> Result<String> {
    let report = trueview_core::assemble_json(&payload_json)
        .map_err(|e| Error::from_reason(e.to_string()))?;
    Ok(report.fingerprint())
}

/// Reasoning bullets from a free-text overview
#[napi]
pub fn extract_reasoning(overview: String) -> Vec<String> {
    trueview_core::extract(&overview)
        .into_iter()
        .map(|b| b.into_text())
        .collect()
}

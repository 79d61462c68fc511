//! NAPI bindings for trueview-out

use napi::bindgen_prelude::*;

/// Request to render a detection payload
#[napi(object)]
pub struct RenderRequest {
    pub payload_json: String,
    pub template_name: String,
    pub templates_path: Option<String>,
}

/// Result of rendering
#[napi(object)]
pub struct RenderResult {
    pub output: String,
    pub template_used: String,
    pub fingerprint: String,
    pub report_json: String,
}

/// Assemble and render a payload with a named template
#[napi]
pub fn render_report(req: RenderRequest) -> Result<RenderResult> {
    let report = trueview_core::assemble_json(&req.payload_json)
        .map_err(|e| Error::from_reason(e.to_string()))?;

    let result = trueview_out::render_report(
        &report,
        trueview_out::RenderRequest {
            template_name: req.template_name,
            templates_path: req.templates_path,
        },
    )
    .map_err(|e| Error::from_reason(e.to_string()))?;

    Ok(RenderResult {
        output: result.output,
        template_used: result.template_used,
        fingerprint: result.fingerprint,
        report_json: report.to_json(),
    })
}

/// Display model JSON for components that lay out the cards themselves
#[napi]
pub fn report_view(payload_json: String) -> Result<String> {
    let report = trueview_core::assemble_json(&payload_json)
        .map_err(|e| Error::from_reason(e.to_string()))?;
    serde_json::to_string(&trueview_out::ReportView::from(&report))
        .map_err(|e| Error::from_reason(e.to_string()))
}

/// Render using an inline template string against the report view
#[napi]
pub fn render_template_string(template: String, payload_json: String) -> Result<String> {
    let report = trueview_core::assemble_json(&payload_json)
        .map_err(|e| Error::from_reason(e.to_string()))?;
    let view = trueview_out::ReportView::from(&report).to_value();

    trueview_out::render_string(&template, &view)
        .map_err(|e| Error::from_reason(e.to_string()))
}

/// Text for the "no report available" state, given a payload that failed
#[napi]
pub fn quick_no_report(payload_json: String) -> Option<String> {
    trueview_core::assemble_json(&payload_json)
        .err()
        .map(|e| trueview_out::quick::no_report(&e))
}

#[napi]
pub fn quick_summary(payload_json: String) -> Result<String> {
    let report = trueview_core::assemble_json(&payload_json)
        .map_err(|e| Error::from_reason(e.to_string()))?;
    Ok(trueview_out::quick::summary(&report))
}

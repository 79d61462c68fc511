//! TrueView-OUT: Report to Human-Readable Text Renderer
//!
//! This crate is the presentation boundary for [`trueview_core::Report`]. It
//! derives a display model ([`ReportView`]) from a report and renders it
//! through named Handlebars templates.
//!
//! # Example
//!
//! ```ignore
//! use trueview_core::assemble_json;
//! use trueview_out::{render_report, RenderRequest};
//!
//! let report = assemble_json(r#"{"ai_confidence": 0.91, "ai_detected": true}"#).unwrap();
//! let result = render_report(&report, RenderRequest::builtin("report_summary")).unwrap();
//! println!("{}", result.output);
//! ```

pub mod renderer;
pub mod templates;
pub mod view;

use renderer::TemplateRenderer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};
use trueview_core::{Report, ReportError};

pub use view::{ReportView, Tone};

/// Request to render a report
#[derive(Debug, Clone, Deserialize)]
pub struct RenderRequest {
    /// Name of the template to use
    pub template_name: String,
    /// Path to templates file (optional, uses the built-in set if not provided)
    pub templates_path: Option<String>,
}

impl RenderRequest {
    /// Render with one of the built-in templates
    pub fn builtin(template_name: impl Into<String>) -> Self {
        Self {
            template_name: template_name.into(),
            templates_path: None,
        }
    }
}

/// Result of a render operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered output
    pub output: String,
    /// Template that was used
    pub template_used: String,
    /// Fingerprint of the report that was rendered
    pub fingerprint: String,
}

/// Errors that can occur during rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template load failed: {0}")]
    Template(String),
    #[error("Render failed: {0}")]
    Render(String),
    #[error(transparent)]
    NoReport(#[from] ReportError),
}

/// Render a report with a named template
pub fn render_report(report: &Report, request: RenderRequest) -> Result<RenderResult, RenderError> {
    let templates = templates::TemplatesFile::load_or_builtin(request.templates_path.as_deref())
        .map_err(RenderError::Template)?;
    let renderer = TemplateRenderer::new(&templates);

    let view = ReportView::from(report);
    let output = renderer
        .render(&request.template_name, &view.to_value())
        .map_err(RenderError::Render)?;

    debug!(template = %request.template_name, bytes = output.len(), "rendered report");

    Ok(RenderResult {
        output,
        template_used: request.template_name,
        fingerprint: view.fingerprint,
    })
}

/// Assemble a raw payload and render it in one step.
///
/// A missing payload is returned as [`RenderError::NoReport`]; use
/// [`quick::no_report`] to show it.
pub fn render_payload(payload_json: &str, request: RenderRequest) -> Result<RenderResult, RenderError> {
    let report = trueview_core::assemble_json(payload_json)?;
    render_report(&report, request)
}

/// Render with an inline template string
pub fn render_string(template: &str, data: &Value) -> Result<String, RenderError> {
    let renderer = TemplateRenderer::new(&templates::TemplatesFile {
        version: "1.0".to_string(),
        templates: Default::default(),
    });
    renderer.render_string(template, data).map_err(RenderError::Render)
}

/// Quick render helpers for common screens
pub mod quick {
    use super::*;
    use serde_json::json;

    /// One-line summary, falls back to the plain overall verdict
    pub fn summary(report: &Report) -> String {
        render_report(report, RenderRequest::builtin("report_summary"))
            .map(|r| r.output)
            .unwrap_or_else(|_| ReportView::from(report).overall.to_string())
    }

    /// Full Markdown report
    pub fn markdown(report: &Report) -> Result<String, RenderError> {
        render_report(report, RenderRequest::builtin("report_markdown")).map(|r| r.output)
    }

    /// The "no report available" state
    pub fn no_report(error: &ReportError) -> String {
        let message = match error {
            ReportError::PayloadAbsent => "The analysis has not produced a result.".to_string(),
            ReportError::PayloadUnparseable(reason) => format!("The analysis result could not be read: {}", reason),
        };
        let data = json!({
            "code": error.code(),
            "message": message,
        });

        TemplateRenderer::builtin()
            .and_then(|renderer| renderer.render("no_report", &data))
            .unwrap_or_else(|e| {
                warn!(error = %e, "built-in no_report template unavailable");
                format!("No report available yet ({}). {}", error.code(), message)
            })
    }
}

//! Display model for a report.
//!
//! Templates never see the core types directly. `ReportView` flattens a
//! [`Report`] into the strings and flags a card layout needs, so every
//! presentational decision (tone, status wording, number formatting) lives in
//! one place.

use serde::Serialize;
use trueview_core::{Axis, MediaKind, NormalizedMetric, Report, StatusClass, VerdictRecord};

/// Shown under every full report.
pub const DISCLAIMER: &str = "This analysis uses multiple detection algorithms and should be used as guidance. \
For critical verification, consult additional forensic tools.";

/// Color family for a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Safe,
    Danger,
    Warning,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaView {
    pub kind: MediaKind,
    pub heading: &'static str,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerdictView {
    pub axis: Axis,
    pub heading: &'static str,
    pub label: &'static str,
    pub detected: bool,
    pub confidence_percent: f64,
    /// `"87.3%"`
    pub confidence_display: String,
    pub tone: Tone,
}

impl From<&VerdictRecord> for VerdictView {
    fn from(record: &VerdictRecord) -> Self {
        Self {
            axis: record.axis(),
            heading: axis_heading(record.axis()),
            label: record.label(),
            detected: record.detected(),
            confidence_percent: record.confidence_percent(),
            confidence_display: format!("{:.1}%", record.confidence_percent()),
            tone: if record.detected() { Tone::Danger } else { Tone::Safe },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricView {
    pub label: String,
    pub value: f64,
    /// Always two decimals.
    pub value_display: String,
    pub status: StatusClass,
    pub status_text: &'static str,
    pub suspicious: bool,
    pub tone: Tone,
    pub expected_range: String,
    pub explanation: String,
}

impl From<&NormalizedMetric> for MetricView {
    fn from(metric: &NormalizedMetric) -> Self {
        Self {
            label: metric.label.clone(),
            value: metric.value,
            value_display: format!("{:.2}", metric.value),
            status: metric.status_class,
            status_text: status_text(metric.status_class),
            suspicious: metric.status_class.is_suspicious(),
            tone: metric_tone(metric.status_class),
            expected_range: metric.expected_range.clone(),
            explanation: metric.explanation.clone(),
        }
    }
}

/// Everything a template can reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub media: MediaView,
    pub verdicts: Vec<VerdictView>,
    pub ai: Option<VerdictView>,
    pub deepfake: Option<VerdictView>,
    pub overall: &'static str,
    pub overall_tone: Tone,
    pub reasoning: Vec<String>,
    pub has_reasoning: bool,
    pub metrics: Vec<MetricView>,
    pub has_metrics: bool,
    pub suspicious_metric_count: usize,
    pub disclaimer: &'static str,
    pub fingerprint: String,
}

impl From<&Report> for ReportView {
    fn from(report: &Report) -> Self {
        let verdicts: Vec<VerdictView> = report.verdicts().iter().map(VerdictView::from).collect();
        let reasoning: Vec<String> = report.reasoning().iter().map(|b| b.text().to_string()).collect();
        let metrics: Vec<MetricView> = report.metrics().iter().map(MetricView::from).collect();
        let detected = report.any_detected();

        Self {
            media: MediaView {
                kind: report.media_kind(),
                heading: media_heading(report.media_kind()),
                path: report.media_path().to_string(),
            },
            ai: report.verdict(Axis::AiGenerated).map(VerdictView::from),
            deepfake: report.verdict(Axis::Deepfake).map(VerdictView::from),
            verdicts,
            overall: if detected { "Likely manipulated" } else { "Likely authentic" },
            overall_tone: if detected { Tone::Danger } else { Tone::Safe },
            has_reasoning: !reasoning.is_empty(),
            reasoning,
            has_metrics: !metrics.is_empty(),
            suspicious_metric_count: report.suspicious_metrics().count(),
            metrics,
            disclaimer: DISCLAIMER,
            fingerprint: report.fingerprint(),
        }
    }
}

impl ReportView {
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

pub fn axis_heading(axis: Axis) -> &'static str {
    match axis {
        Axis::AiGenerated => "AI Generated",
        Axis::Deepfake => "Deepfake",
    }
}

pub fn media_heading(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => "Image",
        MediaKind::Video => "Video",
    }
}

pub fn status_text(status: StatusClass) -> &'static str {
    match status {
        StatusClass::Normal => "Within normal range",
        StatusClass::SuspiciousLow => "Suspiciously low",
        StatusClass::SuspiciousHigh => "Suspiciously high",
        StatusClass::Unknown => "Status unavailable",
    }
}

fn metric_tone(status: StatusClass) -> Tone {
    match status {
        StatusClass::Normal => Tone::Safe,
        StatusClass::SuspiciousLow | StatusClass::SuspiciousHigh => Tone::Warning,
        StatusClass::Unknown => Tone::Neutral,
    }
}

//! Report assembly.
//!
//! [`assemble`] is the single entry point from a raw payload to the immutable
//! [`Report`] handed to presentation. It cannot fail: each component has its
//! own defaulting rules and assembly only merges their results.

use serde::Serialize;
use std::path::Path;
use tracing::debug;

use crate::metrics::{classify_all, NormalizedMetric, StatusClass};
use crate::narrative::{extract, ReasoningBullet};
use crate::payload::{MediaKind, RawDetectionPayload};
use crate::verdict::{resolve, Axis, VerdictRecord};

/// Extensions the compatibility shim treats as video.
const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "mov", "mkv"];

/// Normalized result of one analysis.
///
/// Fields are read-only; a report is built once by [`assemble`] and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    media_kind: MediaKind,
    media_path: String,
    verdicts: Vec<VerdictRecord>,
    reasoning: Vec<ReasoningBullet>,
    metrics: Vec<NormalizedMetric>,
}

impl Report {
    pub fn media_kind(&self) -> MediaKind {
        self.media_kind
    }

    pub fn media_path(&self) -> &str {
        &self.media_path
    }

    /// Always two entries, AI-generated first.
    pub fn verdicts(&self) -> &[VerdictRecord] {
        &self.verdicts
    }

    pub fn verdict(&self, axis: Axis) -> Option<&VerdictRecord> {
        self.verdicts.iter().find(|v| v.axis() == axis)
    }

    /// May be empty: no narrative was provided.
    pub fn reasoning(&self) -> &[ReasoningBullet] {
        &self.reasoning
    }

    /// May be empty: no metrics were provided.
    pub fn metrics(&self) -> &[NormalizedMetric] {
        &self.metrics
    }

    /// True when either axis was flagged.
    pub fn any_detected(&self) -> bool {
        self.verdicts.iter().any(VerdictRecord::detected)
    }

    pub fn suspicious_metrics(&self) -> impl Iterator<Item = &NormalizedMetric> {
        self.metrics.iter().filter(|m| m.status_class.is_suspicious())
    }

    pub fn count_status(&self, status: StatusClass) -> usize {
        self.metrics.iter().filter(|m| m.status_class == status).count()
    }

    /// Serialized JSON, field order as declared.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// `blake3:<hex>` over the serialized report. Equal reports have equal
    /// fingerprints.
    pub fn fingerprint(&self) -> String {
        format!("blake3:{}", blake3::hash(self.to_json().as_bytes()))
    }
}

/// Build a report from a payload. Pure; never fails.
pub fn assemble(payload: &RawDetectionPayload) -> Report {
    let media_path = payload.media_path.clone().unwrap_or_default();
    let media_kind = match payload.media_kind {
        Some(kind) => kind,
        None => infer_media_kind(&media_path),
    };

    let verdicts = resolve(payload).to_vec();
    let reasoning = payload
        .brief_overview
        .as_deref()
        .map(extract)
        .unwrap_or_default();
    let metrics = classify_all(&payload.metric_explanations);

    debug!(
        media_kind = %media_kind,
        reasoning = reasoning.len(),
        metrics = metrics.len(),
        "assembled report"
    );

    Report {
        media_kind,
        media_path,
        verdicts,
        reasoning,
        metrics,
    }
}

/// Compatibility shim for payloads that predate the explicit media kind field.
///
/// Looks only at the file extension, case-insensitively. Anything that is not
/// a known video container is an image.
pub fn infer_media_kind(media_path: &str) -> MediaKind {
    let extension = Path::new(media_path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let kind = match extension {
        Some(ext) if VIDEO_EXTENSIONS.contains(&ext.as_str()) => MediaKind::Video,
        _ => MediaKind::Image,
    };
    debug!(media_path, media_kind = %kind, "media kind inferred from path");
    kind
}

//! Raw detector output as delivered by the upstream analysis call.
//!
//! Every field is independently optional. Shape changes across provider
//! revisions are absorbed by reading each field under several spellings,
//! never with a schema version.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::lenient::{self, pick};

const AI_CONFIDENCE: &[&str] = &["ai_confidence", "aiConfidence"];
const AI_DETECTED: &[&str] = &["ai_detected", "aiDetected"];
const DEEPFAKE_CONFIDENCE: &[&str] = &["deepfake_confidence", "deepfakeConfidence"];
// Older detector builds reported this as `deepfake_detected`.
const IS_DEEPFAKE: &[&str] = &["is_deepfake", "isDeepfake", "deepfake_detected", "deepfakeDetected"];
const BRIEF_OVERVIEW: &[&str] = &["brief_overview", "briefOverview"];
const METRIC_EXPLANATIONS: &[&str] = &["metric_explanations", "metricExplanations"];
const MEDIA_KIND: &[&str] = &["media_kind", "mediaKind", "media_type", "mediaType"];
const MEDIA_PATH: &[&str] = &["media_path", "mediaPath"];

const DISPLAY_NAME: &[&str] = &["display_name", "displayName"];
const ACTUAL_VALUE: &[&str] = &["actual_value", "actualValue"];
const EXPECTED_RANGE: &[&str] = &["expected_range", "expectedRange"];
const STATUS: &[&str] = &["status"];
const ANALYSIS: &[&str] = &["analysis"];

/// One analysis response, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawDetectionPayload {
    pub ai_confidence: Option<f64>,
    pub ai_detected: Option<bool>,
    pub deepfake_confidence: Option<f64>,
    pub is_deepfake: Option<bool>,
    /// Free-text narrative from the explanation model.
    pub brief_overview: Option<String>,
    pub metric_explanations: Vec<RawMetric>,
    pub media_kind: Option<MediaKind>,
    pub media_path: Option<String>,
}

impl RawDetectionPayload {
    /// Decode from a JSON object. Never fails: unreadable fields are absent.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            ai_confidence: pick(fields, AI_CONFIDENCE, lenient::as_number),
            ai_detected: pick(fields, AI_DETECTED, lenient::as_flag),
            deepfake_confidence: pick(fields, DEEPFAKE_CONFIDENCE, lenient::as_number),
            is_deepfake: pick(fields, IS_DEEPFAKE, lenient::as_flag),
            brief_overview: pick(fields, BRIEF_OVERVIEW, lenient::as_text),
            metric_explanations: pick(fields, METRIC_EXPLANATIONS, lenient::as_metrics).unwrap_or_default(),
            media_kind: pick(fields, MEDIA_KIND, lenient::as_media_kind),
            media_path: pick(fields, MEDIA_PATH, lenient::as_text),
        }
    }
}

impl<'de> Deserialize<'de> for RawDetectionPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(fields) => Ok(Self::from_fields(&fields)),
            other => Err(D::Error::custom(format!(
                "expected a JSON object, found {}",
                lenient::kind_of(&other)
            ))),
        }
    }
}

/// One named sub-signal with the provider's expected range and status tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawMetric {
    pub display_name: Option<String>,
    /// Unit depends on the metric; treated opaquely.
    pub actual_value: Option<f64>,
    /// Human-readable, never parsed.
    pub expected_range: Option<String>,
    /// `normal`, `suspicious_low`, `suspicious_high`, or anything else.
    pub status: Option<String>,
    pub analysis: Option<String>,
}

impl RawMetric {
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            display_name: pick(fields, DISPLAY_NAME, lenient::as_text),
            actual_value: pick(fields, ACTUAL_VALUE, lenient::as_number),
            expected_range: pick(fields, EXPECTED_RANGE, lenient::as_text),
            status: pick(fields, STATUS, lenient::as_text),
            analysis: pick(fields, ANALYSIS, lenient::as_text),
        }
    }

    pub fn new(display_name: impl Into<String>, actual_value: f64, status: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            actual_value: Some(actual_value),
            status: Some(status.into()),
            ..Self::default()
        }
    }

    pub fn with_expected_range(mut self, range: impl Into<String>) -> Self {
        self.expected_range = Some(range.into());
        self
    }

    pub fn with_analysis(mut self, analysis: impl Into<String>) -> Self {
        self.analysis = Some(analysis.into());
        self
    }
}

/// Kind of the analyzed upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Case-insensitive; `None` for anything that is not `image` or `video`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Metric classification.
//!
//! Maps a provider metric (opaque value + status tag) to a display-ready
//! record. There is no failure path: missing pieces become empty strings or
//! zero, and unrecognized status tags become [`StatusClass::Unknown`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::payload::RawMetric;

/// Normalized metric status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusClass {
    Normal,
    SuspiciousLow,
    SuspiciousHigh,
    /// The provider tag was missing or not one of the known literals.
    Unknown,
}

impl StatusClass {
    /// Exact, case-sensitive match against the provider's tags.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("normal") => Self::Normal,
            Some("suspicious_low") => Self::SuspiciousLow,
            Some("suspicious_high") => Self::SuspiciousHigh,
            _ => Self::Unknown,
        }
    }

    pub fn is_suspicious(&self) -> bool {
        matches!(self, Self::SuspiciousLow | Self::SuspiciousHigh)
    }

    /// The provider tag this class round-trips to, if any.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Self::Normal => Some("normal"),
            Self::SuspiciousLow => Some("suspicious_low"),
            Self::SuspiciousHigh => Some("suspicious_high"),
            Self::Unknown => None,
        }
    }
}

/// Intermediate form that still carries the unrounded value.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricReading {
    pub label: String,
    pub raw_value: f64,
    pub status_class: StatusClass,
    pub expected_range: String,
    pub explanation: String,
}

impl MetricReading {
    pub fn from_raw(raw: &RawMetric) -> Self {
        let status_class = StatusClass::from_tag(raw.status.as_deref());
        if status_class == StatusClass::Unknown {
            if let Some(tag) = raw.status.as_deref() {
                warn!(metric = raw.display_name.as_deref().unwrap_or(""), tag, "unrecognized metric status");
            }
        }

        Self {
            label: raw.display_name.clone().unwrap_or_default(),
            raw_value: raw.actual_value.filter(|v| v.is_finite()).unwrap_or(0.0),
            status_class,
            expected_range: raw.expected_range.clone().unwrap_or_default(),
            explanation: raw.analysis.clone().unwrap_or_default(),
        }
    }

    /// Round for display.
    pub fn normalize(self) -> NormalizedMetric {
        NormalizedMetric {
            label: self.label,
            value: round_to(self.raw_value, 2),
            status_class: self.status_class,
            expected_range: self.expected_range,
            explanation: self.explanation,
        }
    }
}

/// Display-ready metric. `value` is always rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedMetric {
    pub label: String,
    pub value: f64,
    pub status_class: StatusClass,
    pub expected_range: String,
    pub explanation: String,
}

/// Classify one provider metric.
pub fn classify(raw: &RawMetric) -> NormalizedMetric {
    MetricReading::from_raw(raw).normalize()
}

/// Classify a sequence, preserving order. Empty in, empty out.
pub fn classify_all(raw: &[RawMetric]) -> Vec<NormalizedMetric> {
    raw.iter().map(classify).collect()
}

/// Magnitude from which an `f64` has no fractional digits left to round.
const NO_FRACTION: f64 = 1e15;

/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if value.abs() >= NO_FRACTION || !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    // -0.0 would serialize as "-0.0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

//! Verdict resolution for the two detection axes.
//!
//! A [`VerdictRecord`] can only be built from a raw confidence, so the
//! displayed percentage can never disagree with the score it came from.

use serde::Serialize;
use std::fmt;

use crate::metrics::round_to;
use crate::payload::RawDetectionPayload;

/// One independent detection dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Axis {
    #[serde(rename = "AIGenerated")]
    AiGenerated,
    Deepfake,
}

impl Axis {
    /// Fixed presentation order.
    pub const ALL: [Axis; 2] = [Axis::AiGenerated, Axis::Deepfake];

    /// Headline shown for the axis, `detected` picks the wording.
    pub fn label(&self, detected: bool) -> &'static str {
        match (self, detected) {
            (Axis::AiGenerated, true) => "Made by AI",
            (Axis::AiGenerated, false) => "Not Made by AI",
            (Axis::Deepfake, true) => "Deepfake Detected",
            (Axis::Deepfake, false) => "Not a Deepfake",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Axis::AiGenerated => "AIGenerated",
            Axis::Deepfake => "Deepfake",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Boolean + confidence result for one axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictRecord {
    axis: Axis,
    confidence_percent: f64,
    detected: bool,
    label: &'static str,
    #[serde(skip)]
    confidence: f64,
}

impl VerdictRecord {
    /// Build from a raw `[0, 1]` confidence. Missing means 0, out-of-range
    /// values are clamped.
    pub fn from_raw(axis: Axis, confidence: Option<f64>, detected: Option<bool>) -> Self {
        let confidence = clamp_confidence(confidence);
        let detected = detected.unwrap_or(false);
        Self {
            axis,
            confidence_percent: round_to(confidence * 100.0, 1),
            detected,
            label: axis.label(detected),
            confidence,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// `round(confidence * 100, 1)`.
    pub fn confidence_percent(&self) -> f64 {
        self.confidence_percent
    }

    /// The clamped `[0, 1]` score the percentage was derived from.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn detected(&self) -> bool {
        self.detected
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// Resolve both axes, AI-generated first.
pub fn resolve(payload: &RawDetectionPayload) -> [VerdictRecord; 2] {
    [
        VerdictRecord::from_raw(Axis::AiGenerated, payload.ai_confidence, payload.ai_detected),
        VerdictRecord::from_raw(Axis::Deepfake, payload.deepfake_confidence, payload.is_deepfake),
    ]
}

fn clamp_confidence(confidence: Option<f64>) -> f64 {
    match confidence {
        Some(c) if c.is_nan() => 0.0,
        Some(c) => c.clamp(0.0, 1.0),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_one_decimal() {
        let record = VerdictRecord::from_raw(Axis::AiGenerated, Some(0.873), Some(true));
        assert_eq!(record.confidence_percent(), 87.3);

        let record = VerdictRecord::from_raw(Axis::AiGenerated, Some(0.87349), None);
        assert_eq!(record.confidence_percent(), 87.3);

        let record = VerdictRecord::from_raw(Axis::AiGenerated, Some(0.87351), None);
        assert_eq!(record.confidence_percent(), 87.4);

        for (c, expected) in [(0.0, 0.0), (1.0, 100.0), (0.5, 50.0), (0.001, 0.1), (0.9999, 100.0)] {
            let record = VerdictRecord::from_raw(Axis::Deepfake, Some(c), None);
            assert_eq!(record.confidence_percent(), expected, "confidence {}", c);
        }
    }

    #[test]
    fn test_worked_example() {
        let payload = RawDetectionPayload {
            ai_detected: Some(false),
            ai_confidence: Some(0.0),
            is_deepfake: Some(true),
            deepfake_confidence: Some(0.932),
            ..RawDetectionPayload::default()
        };

        let [ai, deepfake] = resolve(&payload);

        assert_eq!(ai.axis(), Axis::AiGenerated);
        assert_eq!(ai.confidence_percent(), 0.0);
        assert!(!ai.detected());
        assert_eq!(ai.label(), "Not Made by AI");

        assert_eq!(deepfake.axis(), Axis::Deepfake);
        assert_eq!(deepfake.confidence_percent(), 93.2);
        assert!(deepfake.detected());
        assert_eq!(deepfake.label(), "Deepfake Detected");
    }

    #[test]
    fn test_defaults_when_absent() {
        let [ai, deepfake] = resolve(&RawDetectionPayload::default());
        for record in [&ai, &deepfake] {
            assert_eq!(record.confidence_percent(), 0.0);
            assert!(!record.detected());
        }
        assert_eq!(ai.label(), "Not Made by AI");
        assert_eq!(deepfake.label(), "Not a Deepfake");
    }

    #[test]
    fn test_label_table_total() {
        for axis in Axis::ALL {
            for detected in [true, false] {
                assert!(!axis.label(detected).is_empty());
            }
        }
        assert_eq!(Axis::AiGenerated.label(true), "Made by AI");
        assert_eq!(Axis::Deepfake.label(false), "Not a Deepfake");
    }

    #[test]
    fn test_out_of_range_clamped() {
        assert_eq!(VerdictRecord::from_raw(Axis::AiGenerated, Some(1.7), None).confidence_percent(), 100.0);
        assert_eq!(VerdictRecord::from_raw(Axis::AiGenerated, Some(-0.2), None).confidence_percent(), 0.0);
        assert_eq!(VerdictRecord::from_raw(Axis::AiGenerated, Some(f64::NAN), None).confidence_percent(), 0.0);
    }

    #[test]
    fn test_serialized_shape() {
        let record = VerdictRecord::from_raw(Axis::AiGenerated, Some(0.873), Some(true));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "axis": "AIGenerated",
                "confidencePercent": 87.3,
                "detected": true,
                "label": "Made by AI"
            })
        );
    }
}

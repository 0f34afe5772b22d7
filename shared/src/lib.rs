use serde::{Deserialize, Serialize};

/// Wire format of the prediction service.
///
/// Two shapes arrive over the same endpoint:
/// `{"success": true, "class": "...", "confidence": 97.46}` and
/// `{"success": false, "error": "..."}` (the error field may be absent),
/// so everything but `success` is optional.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PredictionResponse {
    pub success: bool,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Cosmetic classification of a predicted class name, used only to pick
/// result styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Healthy,
    Diseased,
}

impl Verdict {
    /// A class counts as healthy when its name contains "healthy",
    /// case-insensitively. Everything else is styled as diseased.
    pub fn of(class_name: &str) -> Self {
        if class_name.to_lowercase().contains("healthy") {
            Verdict::Healthy
        } else {
            Verdict::Diseased
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Verdict::Healthy => "result-healthy",
            Verdict::Diseased => "result-diseased",
        }
    }
}

/// Confidence is reported in [0, 100] and displayed with exactly two
/// decimal places.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}", confidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_success_shape() {
        let json = r#"{"success":true,"class":"Healthy Leaf","confidence":97.456}"#;
        let resp: PredictionResponse = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        assert_eq!(resp.class.as_deref(), Some("Healthy Leaf"));
        assert_eq!(resp.confidence, Some(97.456));
        assert!(resp.error.is_none());
    }

    #[test]
    fn deserializes_failure_shape_with_and_without_error() {
        let resp: PredictionResponse =
            serde_json::from_str(r#"{"success":false,"error":"Image too blurry"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("Image too blurry"));

        let resp: PredictionResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.error.is_none());
    }

    #[test]
    fn verdict_matches_healthy_case_insensitively() {
        assert_eq!(Verdict::of("Healthy Leaf"), Verdict::Healthy);
        assert_eq!(Verdict::of("HEALTHY"), Verdict::Healthy);
        assert_eq!(Verdict::of("potato_healthy"), Verdict::Healthy);
        assert_eq!(Verdict::of("Leaf Blight"), Verdict::Diseased);
        assert_eq!(Verdict::of("Early Blight"), Verdict::Diseased);
    }

    #[test]
    fn confidence_is_formatted_to_two_decimals() {
        assert_eq!(format_confidence(97.456), "97.46");
        assert_eq!(format_confidence(82.0), "82.00");
        assert_eq!(format_confidence(100.0), "100.00");
    }
}

use shared::{format_confidence, PredictionResponse, Verdict};

/// Inclusive upper bound on accepted uploads.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// How long an error banner stays up before it hides itself.
pub const ERROR_DISMISS_MS: u32 = 5_000;

pub const MSG_NOT_AN_IMAGE: &str = "Please upload a valid image file";
pub const MSG_TOO_LARGE: &str = "File size should be less than 10MB";
pub const MSG_NO_FILE: &str = "No file selected";
pub const MSG_PREDICTION_FAILED: &str = "Prediction failed";
pub const MSG_SERVER_UNREACHABLE: &str = "Could not reach the prediction server";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Previewing,
    Loading,
    ResultShown,
    ErrorShown,
}

/// Metadata of the currently chosen image. The browser `File` blob itself is
/// held by the component next to this; blob presence mirrors `SelectedFile`
/// presence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    Missing,
    NotAnImage,
    TooLarge,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::Missing => MSG_NO_FILE,
            ValidationError::NotAnImage => MSG_NOT_AN_IMAGE,
            ValidationError::TooLarge => MSG_TOO_LARGE,
        }
    }
}

/// Final outcome of one prediction request, after HTTP status handling and
/// body parsing.
#[derive(Clone, Debug, PartialEq)]
pub enum PredictOutcome {
    /// 2xx with `success: true` and a usable class + confidence.
    Classified { class: String, confidence: f64 },
    /// 2xx with `success: false`; the service message is shown verbatim
    /// when present.
    Rejected { message: Option<String> },
    /// Non-2xx status. The body is ignored.
    Failed,
    /// The endpoint could not be reached, or the body was not valid JSON.
    Unreachable,
}

impl PredictOutcome {
    /// Maps a decoded response body to an outcome. A `success: true` body
    /// missing its class or confidence is treated the same as a malformed
    /// response.
    pub fn from_response(resp: PredictionResponse) -> Self {
        if !resp.success {
            return PredictOutcome::Rejected { message: resp.error };
        }
        match (resp.class, resp.confidence) {
            (Some(class), Some(confidence)) => PredictOutcome::Classified { class, confidence },
            _ => PredictOutcome::Unreachable,
        }
    }
}

/// A classification ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub class: String,
    pub confidence_pct: String,
    pub verdict: Verdict,
}

/// The upload-and-predict state machine, kept free of DOM types so it runs
/// under plain `cargo test`. The Yew component renders whatever this holds
/// and feeds user actions and request completions back in.
#[derive(Debug, Default)]
pub struct Controller {
    state: UiState,
    selected: Option<SelectedFile>,
    result: Option<Prediction>,
    error: Option<String>,
    next_seq: u64,
    in_flight: Option<u64>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn result(&self) -> Option<&Prediction> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The submit control is live only with a file chosen and no request
    /// outstanding.
    pub fn submit_enabled(&self) -> bool {
        self.selected.is_some() && self.in_flight.is_none()
    }

    /// Validates a candidate file and, if it passes, makes it the current
    /// selection and moves to Previewing. A rejected candidate leaves any
    /// prior selection untouched and raises the error banner instead.
    pub fn accept_file(
        &mut self,
        candidate: Option<SelectedFile>,
    ) -> Result<(), ValidationError> {
        let err = match &candidate {
            None => Some(ValidationError::Missing),
            Some(file) if !file.mime.starts_with("image/") => Some(ValidationError::NotAnImage),
            Some(file) if file.size > MAX_UPLOAD_BYTES => Some(ValidationError::TooLarge),
            Some(_) => None,
        };

        if let Some(err) = err {
            self.show_error(err.message().to_string());
            return Err(err);
        }

        self.selected = candidate;
        self.result = None;
        self.error = None;
        self.state = UiState::Previewing;
        Ok(())
    }

    /// Starts a prediction request, returning its sequence number, or `None`
    /// when there is nothing to submit or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<u64> {
        if !self.submit_enabled() {
            return None;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);
        self.result = None;
        self.error = None;
        self.state = UiState::Loading;
        Some(seq)
    }

    /// Applies the outcome of request `seq`. Returns `false` when the
    /// response is stale (superseded by a reset or a newer submit) and was
    /// dropped. On every applied outcome the in-flight marker is cleared and
    /// Loading ends, whatever the outcome was.
    pub fn finish_submit(&mut self, seq: u64, outcome: PredictOutcome) -> bool {
        if self.in_flight != Some(seq) {
            return false;
        }
        self.in_flight = None;

        match outcome {
            PredictOutcome::Classified { class, confidence } => {
                self.result = Some(Prediction {
                    verdict: Verdict::of(&class),
                    confidence_pct: format_confidence(confidence),
                    class,
                });
                self.error = None;
                self.state = UiState::ResultShown;
            }
            PredictOutcome::Rejected { message } => {
                let message =
                    message.unwrap_or_else(|| MSG_PREDICTION_FAILED.to_string());
                self.show_error(message);
            }
            PredictOutcome::Failed => {
                self.show_error(MSG_PREDICTION_FAILED.to_string());
            }
            PredictOutcome::Unreachable => {
                self.show_error(MSG_SERVER_UNREACHABLE.to_string());
            }
        }
        true
    }

    pub fn show_error(&mut self, message: String) {
        self.error = Some(message);
        self.state = UiState::ErrorShown;
    }

    /// Fires when the banner timer elapses. Falls back to whatever the
    /// screen still holds: a result, a preview, or nothing.
    pub fn dismiss_error(&mut self) {
        if self.error.take().is_none() {
            return;
        }
        if self.state != UiState::ErrorShown {
            return;
        }
        self.state = if self.result.is_some() {
            UiState::ResultShown
        } else if self.selected.is_some() {
            UiState::Previewing
        } else {
            UiState::Idle
        };
    }

    /// Back to Idle: selection, result and error are all gone. An in-flight
    /// request is abandoned; its response will arrive stale and be ignored.
    pub fn reset(&mut self) {
        self.selected = None;
        self.result = None;
        self.error = None;
        self.in_flight = None;
        self.state = UiState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(size: u64) -> Option<SelectedFile> {
        Some(SelectedFile {
            name: "leaf.jpg".into(),
            mime: "image/jpeg".into(),
            size,
        })
    }

    fn accepted(ctl: &mut Controller) {
        ctl.accept_file(image(1024)).unwrap();
    }

    #[test]
    fn starts_idle_with_nothing_selected() {
        let ctl = Controller::new();
        assert_eq!(ctl.state(), UiState::Idle);
        assert!(ctl.selected().is_none());
        assert!(!ctl.submit_enabled());
    }

    #[test]
    fn accepts_an_image_and_moves_to_previewing() {
        let mut ctl = Controller::new();
        assert!(ctl.accept_file(image(1024)).is_ok());
        assert_eq!(ctl.state(), UiState::Previewing);
        assert_eq!(ctl.selected().unwrap().name, "leaf.jpg");
        assert!(ctl.submit_enabled());
    }

    #[test]
    fn rejects_missing_file() {
        let mut ctl = Controller::new();
        assert_eq!(ctl.accept_file(None), Err(ValidationError::Missing));
        assert_eq!(ctl.state(), UiState::ErrorShown);
        assert!(ctl.selected().is_none());
    }

    #[test]
    fn rejects_non_image_media_types() {
        let mut ctl = Controller::new();
        for mime in ["application/pdf", "text/plain", "video/mp4", ""] {
            let err = ctl.accept_file(Some(SelectedFile {
                name: "not-a-leaf".into(),
                mime: mime.into(),
                size: 10,
            }));
            assert_eq!(err, Err(ValidationError::NotAnImage));
            assert!(ctl.selected().is_none());
            assert_eq!(ctl.error(), Some(MSG_NOT_AN_IMAGE));
        }
    }

    #[test]
    fn size_limit_is_inclusive() {
        let mut ctl = Controller::new();
        assert!(ctl.accept_file(image(MAX_UPLOAD_BYTES)).is_ok());

        let mut ctl = Controller::new();
        assert_eq!(
            ctl.accept_file(image(MAX_UPLOAD_BYTES + 1)),
            Err(ValidationError::TooLarge)
        );
        assert!(ctl.selected().is_none());
        assert_eq!(ctl.error(), Some(MSG_TOO_LARGE));
    }

    #[test]
    fn rejection_keeps_the_previous_selection() {
        let mut ctl = Controller::new();
        accepted(&mut ctl);
        let _ = ctl.accept_file(image(MAX_UPLOAD_BYTES + 1));
        assert_eq!(ctl.state(), UiState::ErrorShown);
        assert_eq!(ctl.selected().unwrap().size, 1024);
    }

    #[test]
    fn submit_requires_a_selection() {
        let mut ctl = Controller::new();
        assert_eq!(ctl.begin_submit(), None);
    }

    #[test]
    fn only_one_request_in_flight() {
        let mut ctl = Controller::new();
        accepted(&mut ctl);
        let seq = ctl.begin_submit().unwrap();
        assert_eq!(ctl.state(), UiState::Loading);
        assert!(!ctl.submit_enabled());
        assert_eq!(ctl.begin_submit(), None);

        ctl.finish_submit(seq, PredictOutcome::Failed);
        assert!(ctl.submit_enabled());
    }

    #[test]
    fn successful_prediction_is_formatted_for_display() {
        let mut ctl = Controller::new();
        accepted(&mut ctl);
        let seq = ctl.begin_submit().unwrap();
        let applied = ctl.finish_submit(
            seq,
            PredictOutcome::Classified {
                class: "Healthy Leaf".into(),
                confidence: 97.456,
            },
        );
        assert!(applied);
        assert_eq!(ctl.state(), UiState::ResultShown);
        let result = ctl.result().unwrap();
        assert_eq!(result.class, "Healthy Leaf");
        assert_eq!(result.confidence_pct, "97.46");
        assert_eq!(result.verdict, Verdict::Healthy);
    }

    #[test]
    fn class_without_healthy_substring_is_styled_diseased() {
        let mut ctl = Controller::new();
        accepted(&mut ctl);
        let seq = ctl.begin_submit().unwrap();
        ctl.finish_submit(
            seq,
            PredictOutcome::Classified {
                class: "Leaf Blight".into(),
                confidence: 82.0,
            },
        );
        let result = ctl.result().unwrap();
        assert_eq!(result.verdict, Verdict::Diseased);
        assert_eq!(result.confidence_pct, "82.00");
    }

    #[test]
    fn service_error_message_is_shown_verbatim() {
        let mut ctl = Controller::new();
        accepted(&mut ctl);
        let seq = ctl.begin_submit().unwrap();
        ctl.finish_submit(
            seq,
            PredictOutcome::Rejected {
                message: Some("Image too blurry".into()),
            },
        );
        assert_eq!(ctl.state(), UiState::ErrorShown);
        assert_eq!(ctl.error(), Some("Image too blurry"));
    }

    #[test]
    fn service_error_without_message_falls_back_to_generic() {
        let mut ctl = Controller::new();
        accepted(&mut ctl);
        let seq = ctl.begin_submit().unwrap();
        ctl.finish_submit(seq, PredictOutcome::Rejected { message: None });
        assert_eq!(ctl.error(), Some(MSG_PREDICTION_FAILED));
    }

    #[test]
    fn http_error_and_transport_error_reenable_submit() {
        let mut ctl = Controller::new();
        accepted(&mut ctl);

        let seq = ctl.begin_submit().unwrap();
        ctl.finish_submit(seq, PredictOutcome::Failed);
        assert_eq!(ctl.error(), Some(MSG_PREDICTION_FAILED));
        assert!(ctl.submit_enabled());

        let seq = ctl.begin_submit().unwrap();
        ctl.finish_submit(seq, PredictOutcome::Unreachable);
        assert_eq!(ctl.error(), Some(MSG_SERVER_UNREACHABLE));
        assert!(ctl.submit_enabled());
    }

    #[test]
    fn stale_response_is_ignored_after_reset() {
        let mut ctl = Controller::new();
        accepted(&mut ctl);
        let seq = ctl.begin_submit().unwrap();
        ctl.reset();

        let applied = ctl.finish_submit(
            seq,
            PredictOutcome::Classified {
                class: "Healthy Leaf".into(),
                confidence: 90.0,
            },
        );
        assert!(!applied);
        assert_eq!(ctl.state(), UiState::Idle);
        assert!(ctl.result().is_none());
    }

    #[test]
    fn stale_response_is_ignored_after_newer_submit() {
        let mut ctl = Controller::new();
        accepted(&mut ctl);
        let first = ctl.begin_submit().unwrap();
        ctl.finish_submit(first, PredictOutcome::Failed);
        ctl.dismiss_error();
        let second = ctl.begin_submit().unwrap();

        assert!(!ctl.finish_submit(first, PredictOutcome::Failed));
        assert_eq!(ctl.state(), UiState::Loading);
        assert!(ctl.finish_submit(second, PredictOutcome::Failed));
    }

    #[test]
    fn reset_returns_to_idle_and_is_idempotent() {
        let mut ctl = Controller::new();
        accepted(&mut ctl);
        let seq = ctl.begin_submit().unwrap();
        ctl.finish_submit(
            seq,
            PredictOutcome::Classified {
                class: "Late Blight".into(),
                confidence: 55.5,
            },
        );

        ctl.reset();
        assert_eq!(ctl.state(), UiState::Idle);
        assert!(ctl.selected().is_none());
        assert!(ctl.result().is_none());
        assert!(ctl.error().is_none());

        ctl.reset();
        assert_eq!(ctl.state(), UiState::Idle);
        assert!(ctl.selected().is_none());
        assert!(ctl.result().is_none());
        assert!(ctl.error().is_none());
    }

    #[test]
    fn dismiss_error_falls_back_to_what_is_on_screen() {
        let mut ctl = Controller::new();
        let _ = ctl.accept_file(None);
        ctl.dismiss_error();
        assert_eq!(ctl.state(), UiState::Idle);

        accepted(&mut ctl);
        let _ = ctl.accept_file(image(MAX_UPLOAD_BYTES + 1));
        ctl.dismiss_error();
        assert_eq!(ctl.state(), UiState::Previewing);
    }

    #[test]
    fn new_error_replaces_the_previous_one() {
        let mut ctl = Controller::new();
        let _ = ctl.accept_file(None);
        assert_eq!(ctl.error(), Some(MSG_NO_FILE));
        let _ = ctl.accept_file(image(MAX_UPLOAD_BYTES + 1));
        assert_eq!(ctl.error(), Some(MSG_TOO_LARGE));
    }

    #[test]
    fn outcome_from_response_shapes() {
        let ok = PredictionResponse {
            success: true,
            class: Some("Healthy".into()),
            confidence: Some(99.9),
            error: None,
        };
        assert_eq!(
            PredictOutcome::from_response(ok),
            PredictOutcome::Classified {
                class: "Healthy".into(),
                confidence: 99.9
            }
        );

        let rejected = PredictionResponse {
            success: false,
            error: Some("No file provided".into()),
            ..Default::default()
        };
        assert_eq!(
            PredictOutcome::from_response(rejected),
            PredictOutcome::Rejected {
                message: Some("No file provided".into())
            }
        );

        // success:true with the payload fields missing is indistinguishable
        // from a garbled response
        let truncated = PredictionResponse {
            success: true,
            ..Default::default()
        };
        assert_eq!(
            PredictOutcome::from_response(truncated),
            PredictOutcome::Unreachable
        );
    }
}

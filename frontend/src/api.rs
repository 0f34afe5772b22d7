use crate::app::{App, Msg};
use crate::controller::PredictOutcome;
use gloo_console::error;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::PredictionResponse;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Posts the chosen image to the prediction service as a multipart form with
/// the blob under the "file" field, then reports the outcome back to the
/// component tagged with the request's sequence number.
///
/// Failures collapse into two user-facing buckets: a non-2xx status is a
/// generic prediction failure (the body is ignored), while a network error or
/// an unparseable body means the service could not be reached. The underlying
/// causes only go to the console.
pub fn send_prediction_request(ctx: &Context<App>, seq: u64, file: GlooFile, url: String) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let form_data = web_sys::FormData::new().unwrap();
            form_data.append_with_blob("file", file.as_ref()).unwrap();

            let request = match Request::post(&url).body(form_data) {
                Ok(request) => request,
                Err(err) => {
                    error!(format!("Failed to build prediction request: {:?}", err));
                    link.send_message(Msg::PredictionDone(seq, PredictOutcome::Unreachable));
                    return;
                }
            };

            let outcome = match request.send().await {
                Ok(response) if response.ok() => {
                    match response.json::<PredictionResponse>().await {
                        Ok(body) => PredictOutcome::from_response(body),
                        Err(err) => {
                            error!(format!("Malformed prediction response: {:?}", err));
                            PredictOutcome::Unreachable
                        }
                    }
                }
                Ok(response) => {
                    error!(format!(
                        "Prediction service returned HTTP {}",
                        response.status()
                    ));
                    PredictOutcome::Failed
                }
                Err(err) => {
                    error!(format!("Could not reach prediction service: {:?}", err));
                    PredictOutcome::Unreachable
                }
            };

            link.send_message(Msg::PredictionDone(seq, outcome));
        }
    });
}

pub const DEFAULT_PREDICT_URL: &str = "/predict";

/// The prediction endpoint is configured by the host page, not the binary:
/// a `data-predict-url` attribute on `<body>` overrides the default path.
pub fn predict_url() -> String {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .and_then(|body| body.get_attribute("data-predict-url"))
        .unwrap_or_else(|| DEFAULT_PREDICT_URL.to_string())
}

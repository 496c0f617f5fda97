use crate::document::{into_document, Document};
use crate::domain::constants::NGROK_SKIP_HEADER;
use anyhow::Context;
use serde_json::Value;
use std::time::Duration;

/// Single blocking POST to the model server. Non-2xx statuses and malformed
/// JSON bodies abort the run; there is no retry.
pub fn fetch_document(url: &str, timeout_ms: u64) -> anyhow::Result<Document> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()?;
    let resp = client
        .post(url)
        .header(NGROK_SKIP_HEADER, "true")
        .send()
        .with_context(|| format!("request to {url} failed"))?
        .error_for_status()?;
    let value: Value = resp
        .json()
        .with_context(|| format!("response from {url} is not valid JSON"))?;
    into_document(value)
}

/// Default model server endpoint. The deployed server is usually exposed
/// through an ngrok tunnel; override via `--url` or the config file.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/model_info";

pub const DEFAULT_DOCUMENT_FILE: &str = "model_info_response.json";

/// Sent on every fetch so the tunnel returns the JSON body instead of its
/// browser interstitial page.
pub const NGROK_SKIP_HEADER: &str = "ngrok-skip-browser-warning";

pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

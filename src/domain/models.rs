use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Optional `~/.config/minfo/config.toml`. Absent keys fall back to the
/// compiled-in defaults in `constants.rs`.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub endpoint: Option<String>,
    pub timeout_ms: Option<u64>,
}

#[derive(Serialize)]
pub struct FetchReport {
    pub url: String,
    pub path: String,
    pub models: Vec<String>,
}

#[derive(Serialize)]
pub struct TagReport {
    pub model: String,
    pub keys: Vec<String>,
}

#[derive(Serialize)]
pub struct RuleSurvey {
    pub rules: Vec<String>,
    pub example_model: Option<String>,
    pub example: Option<Value>,
}

#[derive(Serialize)]
pub struct ApplyReport {
    pub path: String,
    pub models_updated: usize,
    pub rule_sets_created: usize,
    pub rules: Vec<String>,
}

#[derive(Serialize)]
pub struct VerifyReport {
    pub model: String,
    pub field: String,
    pub value: Option<Value>,
    pub kind: String,
}

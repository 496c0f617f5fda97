use crate::domain::constants::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS};
use crate::domain::models::ConfigFile;
use std::path::PathBuf;

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/minfo/config.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

pub fn resolve_endpoint(cli_url: Option<&str>, config: &ConfigFile) -> String {
    cli_url
        .map(str::to_string)
        .or_else(|| config.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

pub fn resolve_timeout_ms(config: &ConfigFile) -> u64 {
    config.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
}

#[cfg(test)]
mod tests {
    use super::{resolve_endpoint, resolve_timeout_ms};
    use crate::domain::constants::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS};
    use crate::domain::models::ConfigFile;

    #[test]
    fn cli_url_wins_over_config() {
        let config = ConfigFile {
            endpoint: Some("https://config.example/model_info".to_string()),
            timeout_ms: None,
        };
        assert_eq!(
            resolve_endpoint(Some("https://flag.example/model_info"), &config),
            "https://flag.example/model_info"
        );
        assert_eq!(
            resolve_endpoint(None, &config),
            "https://config.example/model_info"
        );
    }

    #[test]
    fn defaults_apply_without_config() {
        let config = ConfigFile::default();
        assert_eq!(resolve_endpoint(None, &config), DEFAULT_ENDPOINT);
        assert_eq!(resolve_timeout_ms(&config), DEFAULT_TIMEOUT_MS);
    }
}

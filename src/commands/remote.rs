use crate::cli::{Cli, Commands};
use crate::domain::models::{ConfigFile, FetchReport, JsonOut};
use crate::services::config::{resolve_endpoint, resolve_timeout_ms};
use crate::services::fetcher::fetch_document;
use crate::services::store::{audit, save_document};

pub fn handle_remote_commands(cli: &Cli, config: &ConfigFile) -> anyhow::Result<bool> {
    let Commands::Fetch { url, out } = &cli.command else {
        return Ok(false);
    };

    let endpoint = resolve_endpoint(url.as_deref(), config);
    let doc = fetch_document(&endpoint, resolve_timeout_ms(config))?;
    let path = out.as_deref().unwrap_or(cli.file.as_path());
    save_document(path, &doc)?;
    audit(
        "fetch",
        serde_json::json!({"url": endpoint, "path": path.display().to_string()}),
    );

    let report = FetchReport {
        url: endpoint,
        path: path.display().to_string(),
        models: doc.keys().cloned().collect(),
    };
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: report
            })?
        );
    } else {
        println!("fetched {} models from {}", report.models.len(), report.url);
        println!("models: {}", report.models.join(", "));
        println!("saved {}", report.path);
    }
    Ok(true)
}

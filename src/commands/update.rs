use crate::cli::{Cli, Commands};
use crate::domain::models::ApplyReport;
use crate::services::merger::apply_rules;
use crate::services::output::print_one;
use crate::services::store::{audit, load_document, save_document};

pub fn handle_update_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Apply { rules } = &cli.command else {
        return Ok(false);
    };

    let mut doc = load_document(&cli.file, cli.encoding)?;
    let stats = apply_rules(&mut doc, rules)?;
    // Output is always normalized to pretty-printed UTF-8, whatever the
    // input encoding was.
    save_document(&cli.file, &doc)?;

    let rule_names: Vec<String> = rules.iter().map(|(name, _)| name.clone()).collect();
    audit(
        "apply",
        serde_json::json!({
            "path": cli.file.display().to_string(),
            "rules": rule_names,
            "models_updated": stats.models_updated
        }),
    );

    let report = ApplyReport {
        path: cli.file.display().to_string(),
        models_updated: stats.models_updated,
        rule_sets_created: stats.rule_sets_created,
        rules: rule_names,
    };
    print_one(cli.json, report, |r| {
        format!(
            "applied {} rules to {} models ({} rule sets created); saved {}",
            r.rules.len(),
            r.models_updated,
            r.rule_sets_created,
            r.path
        )
    })?;
    Ok(true)
}

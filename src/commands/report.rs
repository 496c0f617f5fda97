use crate::cli::{Cli, Commands};
use crate::domain::models::JsonOut;
use crate::services::inspector::{field_probe, rule_survey, tag_keys};
use crate::services::output::print_one;
use crate::services::store::load_document;

pub fn handle_report_commands(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Tags { model } => {
            let doc = load_document(&cli.file, cli.encoding)?;
            let report = tag_keys(&doc, model)?;
            print_one(cli.json, report, |r| {
                format!("tag keys for model {}: {}", r.model, r.keys.join(", "))
            })?;
        }
        Commands::Rules => {
            let doc = load_document(&cli.file, cli.encoding)?;
            let survey = rule_survey(&doc)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: survey
                    })?
                );
            } else {
                println!("found rules: {}", survey.rules.join(", "));
                if let (Some(model), Some(example)) = (&survey.example_model, &survey.example) {
                    println!("example rule object from model {}:", model);
                    println!("{}", serde_json::to_string_pretty(example)?);
                }
            }
        }
        Commands::Verify { model, field } => {
            let doc = load_document(&cli.file, cli.encoding)?;
            let report = field_probe(&doc, model, field)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                let label = capitalize(&report.field);
                let raw = match &report.value {
                    Some(v) => serde_json::to_string(v)?,
                    None => "missing".to_string(),
                };
                println!("{} raw value: {}", label, raw);
                println!("{} type: <{}>", label, report.kind);
            }
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

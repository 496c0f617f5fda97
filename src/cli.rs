use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::constants::DEFAULT_DOCUMENT_FILE;

#[derive(Parser, Debug)]
#[command(name = "minfo", version, about = "Model info document maintenance CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_DOCUMENT_FILE,
        help = "Model info document path"
    )]
    pub file: PathBuf,
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = SourceEncoding::Utf8,
        help = "Text encoding of the document on disk"
    )]
    pub encoding: SourceEncoding,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the document from the model server and save it locally
    Fetch {
        #[arg(long, help = "Endpoint URL (overrides config file)")]
        url: Option<String>,
        #[arg(long, help = "Output path (defaults to --file)")]
        out: Option<PathBuf>,
    },
    /// Report the tag keys of one model entry
    Tags {
        #[arg(long, default_value = "0")]
        model: String,
    },
    /// Survey rule names across every model entry
    Rules,
    /// Merge rule assignments into every model entry and rewrite the file
    Apply {
        #[arg(value_parser = parse_rule_assignment, help = "Rule assignments, NAME=true|false")]
        rules: Vec<(String, bool)>,
    },
    /// Probe one field under a model's tag object
    Verify {
        #[arg(long, default_value = "0")]
        model: String,
        #[arg(long, default_value = "instruments")]
        field: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceEncoding {
    Utf8,
    Utf16,
}

fn parse_rule_assignment(s: &str) -> Result<(String, bool), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=true|false, got: {s}"))?;
    if name.is_empty() {
        return Err(format!("empty rule name in: {s}"));
    }
    let value: bool = value
        .parse()
        .map_err(|_| format!("rule value must be true or false, got: {value}"))?;
    Ok((name.to_string(), value))
}

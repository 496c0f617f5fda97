use crate::cli::SourceEncoding;
use crate::document::{into_document, Document};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Load a document using the caller-specified encoding. The two encodings
/// seen in the wild are UTF-16 (legacy server dumps) and UTF-8 (normalized
/// output); the wrong choice surfaces as a decode error, never as silent
/// mojibake handed to the JSON parser.
pub fn load_document(path: &Path, encoding: SourceEncoding) -> anyhow::Result<Document> {
    let bytes =
        std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    let text = decode_text(&bytes, encoding)
        .with_context(|| format!("cannot decode {}", path.display()))?;
    let value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    into_document(value)
}

/// Overwrite `path` with the document pretty-printed as UTF-8. Non-ASCII
/// characters are written verbatim, not escaped. No atomic-write guarantee.
pub fn save_document(path: &Path, doc: &Document) -> anyhow::Result<()> {
    let pretty = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, pretty).with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}

fn decode_text(bytes: &[u8], encoding: SourceEncoding) -> anyhow::Result<String> {
    let (text, had_errors) = match encoding {
        SourceEncoding::Utf8 => {
            // BOM removal only; no sniffing, so UTF-16 bytes fail loudly.
            let (cow, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
            (cow.into_owned(), had_errors)
        }
        SourceEncoding::Utf16 => {
            // A BOM of either endianness is honored; BOM-less input is
            // assumed little-endian, matching the server dumps.
            let (cow, _, had_errors) = encoding_rs::UTF_16LE.decode(bytes);
            (cow.into_owned(), had_errors)
        }
    };
    if had_errors {
        anyhow::bail!("input is not valid {}", encoding_label(encoding));
    }
    Ok(text)
}

fn encoding_label(encoding: SourceEncoding) -> &'static str {
    match encoding {
        SourceEncoding::Utf8 => "utf-8",
        SourceEncoding::Utf16 => "utf-16",
    }
}

/// Best-effort append to the audit log; failures never abort the run.
pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/minfo/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": unix_now(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

use crate::document::{tag_of, type_name, Document, DocumentError};
use crate::domain::models::{RuleSurvey, TagReport, VerifyReport};
use serde_json::Value;
use std::collections::BTreeSet;

/// Tag keys of one model entry. A missing `tag` object reads as empty.
pub fn tag_keys(doc: &Document, model: &str) -> anyhow::Result<TagReport> {
    let keys = match tag_of(doc, model)? {
        Some(tag) => tag.keys().cloned().collect(),
        None => Vec::new(),
    };
    Ok(TagReport {
        model: model.to_string(),
        keys,
    })
}

/// Distinct rule names across every model entry, plus one representative
/// rule object. Read-only.
pub fn rule_survey(doc: &Document) -> anyhow::Result<RuleSurvey> {
    let mut rules = BTreeSet::new();
    let mut example_model = None;
    let mut example = None;
    for (id, entry) in doc {
        let entry = entry
            .as_object()
            .ok_or_else(|| DocumentError::EntryNotObject(id.clone()))?;
        if let Some(rule) = entry.get("rule") {
            let rule = rule
                .as_object()
                .ok_or_else(|| DocumentError::FieldNotObject(id.clone(), "rule".to_string()))?;
            rules.extend(rule.keys().cloned());
            if example.is_none() {
                example_model = Some(id.clone());
                example = Some(Value::Object(rule.clone()));
            }
        }
    }
    Ok(RuleSurvey {
        rules: rules.into_iter().collect(),
        example_model,
        example,
    })
}

/// Probe one field under a model's `tag` object, reporting the raw value and
/// its runtime type name (`missing` when the field is absent).
pub fn field_probe(doc: &Document, model: &str, field: &str) -> anyhow::Result<VerifyReport> {
    let value = tag_of(doc, model)?.and_then(|tag| tag.get(field)).cloned();
    let kind = value.as_ref().map_or("missing", type_name).to_string();
    Ok(VerifyReport {
        model: model.to_string(),
        field: field.to_string(),
        value,
        kind,
    })
}

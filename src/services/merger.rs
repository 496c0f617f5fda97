use crate::document::{Document, DocumentError};
use serde_json::{Map, Value};

pub struct MergeStats {
    pub models_updated: usize,
    pub rule_sets_created: usize,
}

/// Merge rule assignments into every model entry's rule set, creating the
/// set where absent. New values win on name collision; every other key of
/// the entry and of the rule set is left untouched. Deliberately global:
/// the policy update applies to all models, with no per-entry filtering.
pub fn apply_rules(doc: &mut Document, rules: &[(String, bool)]) -> anyhow::Result<MergeStats> {
    let mut stats = MergeStats {
        models_updated: 0,
        rule_sets_created: 0,
    };
    // An empty assignment list is a pure no-op so that a load/apply/save
    // cycle reproduces the document's content exactly.
    if rules.is_empty() {
        return Ok(stats);
    }
    for (id, entry) in doc.iter_mut() {
        let entry = entry
            .as_object_mut()
            .ok_or_else(|| DocumentError::EntryNotObject(id.clone()))?;
        if !entry.contains_key("rule") {
            entry.insert("rule".to_string(), Value::Object(Map::new()));
            stats.rule_sets_created += 1;
        }
        let rule = entry
            .get_mut("rule")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| DocumentError::FieldNotObject(id.clone(), "rule".to_string()))?;
        for (name, value) in rules {
            rule.insert(name.clone(), Value::Bool(*value));
        }
        stats.models_updated += 1;
    }
    Ok(stats)
}

//! Checks over YAML artifacts (issue forms, workflows, compose files, config).

use serde_yaml_ng::Value;

use super::rule::FieldRequirement;

/// Parses a YAML document, turning a syntax error into a failure reason.
pub fn parse(content: &str) -> Result<Value, String> {
    serde_yaml_ng::from_str(content).map_err(|e| format!("invalid YAML: {}", e))
}

/// Follows a dotted path through mappings; numeric segments index sequences.
pub fn lookup<'a>(value: &'a Value, dotted: &str) -> Option<&'a Value> {
    dotted.split('.').try_fold(value, |current, segment| match current {
        Value::Sequence(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => current.get(segment),
    })
}

/// Renders scalars as text; other values yield `None`.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Entries of a list, or `key=value` pairs of a mapping.
fn entries(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(items) => items.iter().filter_map(scalar_text).collect(),
        Value::Mapping(map) => map
            .iter()
            .filter_map(|(k, v)| {
                let key = scalar_text(k)?;
                Some(match scalar_text(v) {
                    Some(v) => format!("{}={}", key, v),
                    None => key,
                })
            })
            .collect(),
        _ => Vec::new(),
    }
}

pub fn keys(doc: &Value, required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|key| doc.get(key.as_str()).is_none())
        .map(|key| format!("missing top-level key '{}'", key))
        .collect()
}

pub fn equals(doc: &Value, key: &str, expected: &str) -> Vec<String> {
    match lookup(doc, key).and_then(scalar_text) {
        Some(actual) if actual == expected => Vec::new(),
        Some(actual) => vec![format!("'{}' is '{}', expected '{}'", key, actual, expected)],
        None => vec![format!("'{}' not found", key)],
    }
}

pub fn list_contains(doc: &Value, key: &str, needles: &[String]) -> Vec<String> {
    let Some(value) = lookup(doc, key) else {
        return vec![format!("'{}' not found", key)];
    };
    let items = entries(value);
    needles
        .iter()
        .filter(|needle| !items.iter().any(|item| item.contains(needle.as_str())))
        .map(|needle| format!("no entry of '{}' contains '{}'", key, needle))
        .collect()
}

/// Checks the `body` list of a GitHub issue form.
pub fn fields(doc: &Value, required: &[FieldRequirement]) -> Vec<String> {
    let Some(Value::Sequence(body)) = doc.get("body") else {
        return vec!["'body' is not a list".to_string()];
    };
    if body.is_empty() {
        return vec!["'body' has no fields".to_string()];
    }

    let ids: Vec<String> = body
        .iter()
        .filter_map(|field| field.get("id").and_then(scalar_text))
        .collect();
    let labels: Vec<String> = body
        .iter()
        .filter_map(|field| lookup(field, "attributes.label").and_then(scalar_text))
        .map(|label| label.to_lowercase())
        .collect();

    required
        .iter()
        .filter(|req| {
            let by_id = ids.iter().any(|id| *id == req.id);
            let by_label = req.labels.iter().any(|keyword| {
                let keyword = keyword.to_lowercase();
                labels.iter().any(|label| label.contains(&keyword))
            });
            !by_id && !by_label
        })
        .map(|req| format!("no field for '{}'", req.id))
        .collect()
}

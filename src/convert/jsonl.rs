//! JSON Lines conversion.
//!
//! The header comes from the keys of the first object, in insertion order.
//! Every object, the first included, becomes one row; keys missing from an
//! object render as empty cells and keys the first object lacks are dropped.

use super::MalformedLine;
use super::table::to_markdown_table;
use serde_json::Value;

/// Convert JSON Lines content to a markdown table.
///
/// Blank lines are skipped. Fails on the first line that is not valid JSON or
/// not an object.
pub fn convert_jsonl(content: &str) -> Result<String, MalformedLine> {
    let mut objects = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(line)
            .map_err(|e| MalformedLine::new(index + 1, line, e.to_string()))?;

        match value {
            Value::Object(map) => objects.push(map),
            other => {
                return Err(MalformedLine::new(
                    index + 1,
                    line,
                    format!("expected a JSON object, found {}", value_kind(&other)),
                ));
            }
        }
    }

    let Some(first) = objects.first() else {
        return Ok(String::new());
    };
    let headers: Vec<String> = first.keys().cloned().collect();

    let rows: Vec<Vec<String>> = objects
        .iter()
        .map(|object| {
            headers.iter().map(|key| object.get(key).map(cell_text).unwrap_or_default()).collect()
        })
        .collect();

    Ok(to_markdown_table(&headers, &rows))
}

/// Render a JSON value as cell text.
///
/// Strings verbatim, numbers and booleans in JSON notation, null as empty,
/// nested arrays and objects as compact JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! JSON input parsing. The CLI stands in for the excluded data layer, so
//! records arrive as a JSON array of flat objects and header labels as a
//! single JSON object; key order in the file is the column order.

use std::collections::BTreeMap;
use std::path::Path;

use color_eyre::eyre::{bail, Result};
use tahseel_core::{Record, Value};
use tahseel_domain::FieldKind;

pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let raw = std::fs::read_to_string(path)?;
    let parsed: serde_json::Value = serde_json::from_str(&raw)?;
    let Some(items) = parsed.as_array() else {
        bail!("{} must hold a JSON array of objects", path.display());
    };
    let mut records = Vec::with_capacity(items.len());
    for item in items {
        let Some(map) = item.as_object() else {
            bail!("{}: every record must be a JSON object", path.display());
        };
        let mut rec = Record::new();
        for (name, value) in map {
            rec.insert(name.clone(), to_scalar(value));
        }
        records.push(rec);
    }
    Ok(records)
}

pub fn read_labels(path: &Path) -> Result<Vec<(String, String)>> {
    let raw = std::fs::read_to_string(path)?;
    let parsed: serde_json::Value = serde_json::from_str(&raw)?;
    let Some(map) = parsed.as_object() else {
        bail!("{} must hold a JSON object of field -> label", path.display());
    };
    Ok(map
        .iter()
        .map(|(field, label)| {
            let label = label.as_str().map(str::to_string).unwrap_or_else(|| label.to_string());
            (field.clone(), label)
        })
        .collect())
}

pub fn read_kinds(path: &Path) -> Result<BTreeMap<String, FieldKind>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn to_scalar(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Absent,
        serde_json::Value::String(s) => Value::Text(s.clone()),
        serde_json::Value::Number(n) => n
            .as_f64()
            .map(Value::Number)
            .unwrap_or_else(|| Value::Text(n.to_string())),
        // Records are scalar-only; anything structured stays visible as text.
        other => Value::Text(other.to_string()),
    }
}

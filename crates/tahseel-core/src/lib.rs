use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Workspace-wide result alias.
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Scalar cell value as handed over by the data layer.
///
/// Records arrive already fetched; nothing here ever touches storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(f64),
    Absent,
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

/// One report row: field name -> scalar value, in first-seen field order.
///
/// Field order is meaningful (it drives spreadsheet column order), so this
/// is a pair list rather than a map. Records are never mutated after being
/// handed to an export path; transformations build new ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing the value if the name is already present
    /// (the original position is kept).
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut rec = Record::new();
        for (n, v) in iter {
            rec.insert(n, v);
        }
        rec
    }
}

/// Keep a lightweight error type for crates that still import it.
#[derive(Debug, Error)]
pub enum TahseelError {
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_first_seen_order() {
        let mut rec = Record::new();
        rec.insert("name", Value::from("أحمد"));
        rec.insert("amount", Value::from(1500.0));
        rec.insert("name", Value::from("سارة"));
        let names: Vec<_> = rec.names().collect();
        assert_eq!(names, vec!["name", "amount"]);
        assert_eq!(rec.get("name"), Some(&Value::from("سارة")));
    }

    #[test]
    fn value_untagged_json() {
        let v: Value = serde_json::from_str("1500.5").unwrap();
        assert_eq!(v, Value::Number(1500.5));
        let v: Value = serde_json::from_str("\"أحمد\"").unwrap();
        assert_eq!(v, Value::Text("أحمد".into()));
    }
}

use indexmap::IndexMap;
use serde_json::Value;

/// Named values substituted into `:Name` placeholders of a `where` clause.
/// Insertion order is kept so substitution is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Params {
    values: IndexMap<String, Value>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

impl From<IndexMap<String, Value>> for Params {
    fn from(values: IndexMap<String, Value>) -> Self {
        Self { values }
    }
}

/// String form a value takes inside the filter: strings are spliced in
/// as-is, numbers and booleans through their JSON text.
pub fn coerce_str(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

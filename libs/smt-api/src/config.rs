/// Value type of a declared transform parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Bool,
    I64,
    F64,
    Str,
}

/// When a parameter may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamContext {
    /// Fixed once the stage is set up.
    Setup,
    /// May be changed while the stage runs.
    Runtime,
}

/// Declaration of one parameter a transform recognizes.
///
/// Exported through `smt_config_params()` so the runtime can validate a
/// stage's config before creating the transform.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigParam {
    pub name: String,
    pub param_type: ParamType,
    pub context: ParamContext,
    pub required: bool,
    pub default: Option<ParamValue>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    I64(i64),
    F64(f64),
    Str(String),
}

/// Config entries handed to a transform at setup, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigValues {
    entries: Vec<(String, ParamValue)>,
}

impl ConfigValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object. Scalar entries are kept; null, array and
    /// object entries have no `ParamValue` form and are skipped.
    /// Anything other than an object yields empty values.
    pub fn from_json(json: &serde_json::Value) -> Self {
        let mut values = Self::new();
        let Some(map) = json.as_object() else {
            return values;
        };
        for (name, raw) in map {
            let value = match raw {
                serde_json::Value::Bool(b) => ParamValue::Bool(*b),
                serde_json::Value::Number(n) => match n.as_i64() {
                    Some(i) => ParamValue::I64(i),
                    None => match n.as_f64() {
                        Some(f) => ParamValue::F64(f),
                        None => continue,
                    },
                },
                serde_json::Value::String(s) => ParamValue::Str(s.clone()),
                serde_json::Value::Null
                | serde_json::Value::Array(_)
                | serde_json::Value::Object(_) => continue,
            };
            values.set(name.as_str(), value);
        }
        values
    }

    pub fn set(&mut self, name: impl Into<String>, value: ParamValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(ParamValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(ParamValue::I64(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(ParamValue::F64(v)) => Some(*v),
            Some(ParamValue::I64(v)) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(ParamValue::Str(v)) => Some(v),
            _ => None,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_keeps_scalars() {
        let values = ConfigValues::from_json(&json!({
            "enabled": true,
            "retries": 3,
            "ratio": 0.5,
            "name": "raw",
            "nested": {"a": 1},
            "list": [1, 2],
            "missing": null,
        }));

        assert_eq!(values.len(), 4);
        assert_eq!(values.get_bool("enabled"), Some(true));
        assert_eq!(values.get_i64("retries"), Some(3));
        assert_eq!(values.get_f64("ratio"), Some(0.5));
        assert_eq!(values.get_f64("retries"), Some(3.0));
        assert_eq!(values.get_str("name"), Some("raw"));
        assert!(values.get("nested").is_none());
    }

    #[test]
    fn from_json_non_object_is_empty() {
        assert!(ConfigValues::from_json(&json!([1, 2, 3])).is_empty());
        assert!(ConfigValues::from_json(&json!(null)).is_empty());
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut values = ConfigValues::new();
        values.set("a", ParamValue::I64(1));
        values.set("b", ParamValue::Bool(false));
        values.set("a", ParamValue::Str("x".into()));

        assert_eq!(values.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(values.get_str("a"), Some("x"));
        assert_eq!(values.get_i64("a"), None);
    }
}

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use onehealth_core::ParameterSource;

/// Parameter values applied uniformly to every item
#[derive(Debug, Clone, Default)]
pub struct UniformParameters {
    values: HashMap<String, JsonValue>,
}

impl UniformParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: impl Into<String>, value: JsonValue) -> Self {
        self.values.insert(name.into(), value);
        self
    }
}

impl ParameterSource for UniformParameters {
    fn parameter(&self, name: &str, _item_index: usize, default: JsonValue) -> JsonValue {
        self.values.get(name).cloned().unwrap_or(default)
    }
}

/// Distinct parameter values per item; missing entries fall back to defaults
#[derive(Debug, Clone, Default)]
pub struct PerItemParameters {
    items: Vec<HashMap<String, JsonValue>>,
}

impl PerItemParameters {
    pub fn new(items: Vec<HashMap<String, JsonValue>>) -> Self {
        Self { items }
    }

    /// Build from one JSON object per item; non-objects read as empty
    pub fn from_objects(objects: Vec<JsonValue>) -> Self {
        let items = objects
            .into_iter()
            .map(|object| match object {
                JsonValue::Object(map) => map.into_iter().collect(),
                _ => HashMap::new(),
            })
            .collect();
        Self { items }
    }
}

impl ParameterSource for PerItemParameters {
    fn parameter(&self, name: &str, item_index: usize, default: JsonValue) -> JsonValue {
        self.items
            .get(item_index)
            .and_then(|values| values.get(name))
            .cloned()
            .unwrap_or(default)
    }
}

use serde_json::Value as JsonValue;

/// Per-item lookup of declared operation parameters, provided by the host.
///
/// Lookups are infallible: when the host has no value for a parameter, the
/// supplied default is returned instead.
pub trait ParameterSource: Send + Sync {
    fn parameter(&self, name: &str, item_index: usize, default: JsonValue) -> JsonValue;
}

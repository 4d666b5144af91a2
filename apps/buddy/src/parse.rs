use serde_json::{Map, Value};

/// Salvages a JSON object from model output in three tiers: parse the whole
/// text, then the slice between the first `{` and the last `}`, then give up
/// and return `fallback`. Total — never errors, always yields a map.
pub fn extract_object(raw: &str, fallback: Map<String, Value>) -> Map<String, Value> {
    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(raw) {
        return fields;
    }

    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(&raw[start..=end]) {
                return fields;
            }
        }
    }

    fallback
}
